//! Property-based tests for the flag derivation, the portfolio catalog and
//! the persisted scroll slot.

use proptest::prelude::*;

use folio_core::{
    Catalog, Category, Effect, Filter, MemorySessionStore, OverlayState, PageKind, Project,
    ProjectId, SessionStore, UiConfig, UiState, VisualFlags, SCROLL_SLOT_KEY,
};

// ============================================================================
// Strategy Generators
// ============================================================================

fn category_strategy() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Web),
        Just(Category::Design),
        Just(Category::Audio),
    ]
}

fn filter_strategy() -> impl Strategy<Value = Filter> {
    prop_oneof![
        Just(Filter::All),
        category_strategy().prop_map(Filter::Category),
    ]
}

/// Operations that can be performed on a catalog.
#[derive(Debug, Clone)]
enum CatalogOp {
    Filter(Filter),
    Expand(usize),
    Collapse(usize),
}

fn catalog_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<CatalogOp>> {
    prop::collection::vec(
        prop_oneof![
            1 => filter_strategy().prop_map(CatalogOp::Filter),
            2 => (0..8usize).prop_map(CatalogOp::Expand),
            1 => (0..8usize).prop_map(CatalogOp::Collapse),
        ],
        0..max_ops,
    )
}

fn fixed_catalog() -> Catalog {
    let projects = (0..8)
        .map(|i| Project {
            id: ProjectId::new(format!("p{i}")),
            title: format!("Project {i}"),
            category: Category::ALL[i % Category::ALL.len()],
            year: 2020 + i as u16,
            summary: String::new(),
            details: String::new(),
            link: None,
        })
        .collect();
    Catalog::new(projects)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The visual flags are a pure, monotone function of the offset: each
    /// flag flips exactly at its own threshold.
    #[test]
    fn prop_flags_follow_thresholds(offset in 0u32..5000) {
        let cfg = UiConfig::default();
        let flags = VisualFlags::derive(offset, OverlayState::Closed, PageKind::Home, &cfg);
        prop_assert_eq!(flags.body_faded, offset > cfg.global_fade_scroll);
        prop_assert_eq!(flags.hero_hidden, offset > cfg.hero_hide_scroll);
        prop_assert_eq!(flags.nav_stuck, offset > cfg.sticky_fallback_offset);
    }

    /// With the overlay open every derived flag is inert, whatever the
    /// offset.
    #[test]
    fn prop_flags_inert_under_overlay(offset in 0u32..5000) {
        let cfg = UiConfig::default();
        let flags = VisualFlags::derive(offset, OverlayState::Open, PageKind::Home, &cfg);
        prop_assert!(!flags.body_faded);
        prop_assert!(!flags.hero_hidden);
        prop_assert!(!flags.nav_stuck);
    }

    /// The live state machine agrees with the pure derivation after any
    /// scroll event.
    #[test]
    fn prop_live_state_matches_derivation(offset in 0u32..5000) {
        let mut ui = UiState::home(UiConfig::default());
        ui.handle_scroll(offset);
        let expected = ui.visual_flags();
        prop_assert_eq!(ui.body_faded(), expected.body_faded);
        prop_assert_eq!(ui.hero_faded(), expected.hero_hidden);
    }

    /// At most one card is ever expanded, and an expanded card is always
    /// visible under the active filter, across arbitrary op sequences.
    #[test]
    fn prop_at_most_one_expanded(ops in catalog_ops_strategy(40)) {
        let mut catalog = fixed_catalog();
        let ids: Vec<ProjectId> = catalog.projects().iter().map(|p| p.id.clone()).collect();

        for op in ops {
            match op {
                CatalogOp::Filter(f) => catalog.apply_filter(f),
                CatalogOp::Expand(i) => { let _ = catalog.expand(&ids[i]); }
                CatalogOp::Collapse(i) => catalog.collapse(&ids[i]),
            }

            let expanded: Vec<_> = catalog
                .projects()
                .iter()
                .filter(|p| catalog.is_expanded(&p.id))
                .collect();
            prop_assert!(expanded.len() <= 1);
            for p in expanded {
                prop_assert!(!catalog.is_hidden(p));
            }
        }
    }

    /// Restore consumes the slot whatever it contains, and only well-formed
    /// non-negative integers produce a scroll restore.
    #[test]
    fn prop_restore_consumes_any_slot(raw in ".{0,32}") {
        let mut store = MemorySessionStore::new();
        store.put(SCROLL_SLOT_KEY, raw.clone());

        let mut ui = UiState::home(UiConfig::default());
        let effects = ui.restore_scroll(&mut store);

        prop_assert_eq!(store.get(SCROLL_SLOT_KEY), None);
        let parsed = raw.trim().parse::<u32>();
        prop_assert_eq!(effects.is_empty(), parsed.is_err());
        if let Ok(offset) = parsed {
            let staged: Vec<Effect> = effects
                .into_iter()
                .flat_map(|e| match e {
                    Effect::NextFrame(f) => f.apply(&mut ui),
                    other => vec![other],
                })
                .collect();
            prop_assert!(staged.contains(&Effect::SetScroll(offset)));
        }
    }
}
