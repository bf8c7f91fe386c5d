//! The fixed portfolio card set.
//!
//! The catalog is static content compiled into the binary; the archive page
//! carries the older entries that no longer get a card.

use folio_core::{Category, Project, ProjectId};

/// Every current portfolio card, in display order.
pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: ProjectId::new("tidepool"),
            title: "Tidepool".to_string(),
            category: Category::Web,
            year: 2025,
            summary: "A small-batch reading club with a shared margin for notes.".to_string(),
            details: "\
Tidepool started as a weekend experiment in shared annotation and grew into \
a reading club of about forty people.

* Server-rendered pages with a sprinkle of progressive enhancement
* Margin notes sync while you read, without an account
* ~14 kB of JavaScript, total

The hardest part was making the margin feel *quiet*: notes fade in only \
when the paragraph they belong to is in view."
                .to_string(),
            link: Some("https://example.com/tidepool".to_string()),
        },
        Project {
            id: ProjectId::new("ledgerline"),
            title: "Ledgerline".to_string(),
            category: Category::Web,
            year: 2024,
            summary: "Budgeting for people who hate budgeting apps.".to_string(),
            details: "\
One page, one table, one rule: every row is a decision you already made.

Built for a friend's studio and then opened up. The interesting bits were \
all in the keyboard model - the whole app is usable without a pointer, and \
the table edits feel like a spreadsheet without pretending to be one."
                .to_string(),
            link: None,
        },
        Project {
            id: ProjectId::new("wayfinding"),
            title: "Wayfinding at Jutland Hall".to_string(),
            category: Category::Design,
            year: 2024,
            summary: "Signage system for a three-building venue that everyone got lost in."
                .to_string(),
            details: "\
A venue with three buildings, five levels and one staircase that secretly \
changes buildings halfway up. The brief was: make people stop asking staff \
for directions.

The system uses color-per-building, floor numbers that stay consistent \
across the secret staircase, and a strict two-typeface palette. Complaints \
about getting lost dropped to roughly zero within a month."
                .to_string(),
            link: None,
        },
        Project {
            id: ProjectId::new("fieldnotes"),
            title: "Field Notes, Printed".to_string(),
            category: Category::Design,
            year: 2023,
            summary: "A risograph zine of one year of walking the same path.".to_string(),
            details: "\
Fifty-two spreads, one per week, same path every time. Two-color risograph, \
hand-bound, an edition of 120.

| Detail | Value |
| --- | --- |
| Format | A5, 108 pages |
| Colors | Teal + fluorescent orange |
| Edition | 120, numbered |"
                .to_string(),
            link: Some("https://example.com/fieldnotes".to_string()),
        },
        Project {
            id: ProjectId::new("attics"),
            title: "Attics".to_string(),
            category: Category::Audio,
            year: 2025,
            summary: "An EP of tape loops recorded in borrowed rooms.".to_string(),
            details: "\
Four tracks, each built from loops recorded in a different attic - the room \
is the instrument as much as the tape is. Mixed on monitors, checked on the \
worst earbuds I own, as is right and proper."
                .to_string(),
            link: Some("https://example.com/attics".to_string()),
        },
        Project {
            id: ProjectId::new("signalbox"),
            title: "Signal Box".to_string(),
            category: Category::Audio,
            year: 2023,
            summary: "Sound design for a 20-minute radio documentary about a decommissioned rail line."
                .to_string(),
            details: "\
Commissioned piece: field recordings from the line's last working signal \
box, cut against interviews with the two people who staffed it. Broadcast \
once, archived forever."
                .to_string(),
            link: None,
        },
    ]
}

/// Older work listed on the archive page, newest first: `(year, title, note)`.
pub fn archive_entries() -> Vec<(u16, &'static str, &'static str)> {
    vec![
        (2022, "Hilltop Bakery", "site design and build, retired when the bakery closed"),
        (2022, "Loopkit", "a browser drum machine, superseded by Attics' tooling"),
        (2021, "Parish newsletter refresh", "masthead and layout templates"),
        (2020, "Demo reel, v1", "the one with the regrettable whoosh sounds"),
        (2019, "First portfolio", "static HTML, table layout, no regrets"),
    ]
}
