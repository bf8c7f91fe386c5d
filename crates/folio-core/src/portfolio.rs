//! Portfolio catalog: filtering by category and single-card expansion.
//!
//! The card set is fixed at startup. Visibility is derived from the active
//! filter, never stored per card, and at most one card is expanded at a
//! time, enforced structurally by keeping the expansion as an `Option`.

use serde::{Deserialize, Serialize};

use crate::effect::Effect;

/// Unique identifier for a portfolio card.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Category tag carried by every card. Closed set; the filter adds `all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Web,
    Design,
    Audio,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: &'static [Category] = &[Category::Web, Category::Design, Category::Audio];

    /// The `data-category` attribute value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Web => "web",
            Category::Design => "design",
            Category::Audio => "audio",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Web => "Web",
            Category::Design => "Design",
            Category::Audio => "Audio",
        }
    }
}

/// The active filter: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Category(Category),
}

impl Filter {
    /// The `data-filter` attribute value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Category(c) => c.as_str(),
        }
    }

    /// Label for the filter control.
    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Category(c) => c.label(),
        }
    }

    /// Whether a card with this category passes the filter.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(c) => *c == category,
        }
    }
}

/// One portfolio card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub category: Category,
    pub year: u16,
    /// Short teaser shown on the collapsed card.
    pub summary: String,
    /// Long-form Markdown shown when expanded.
    pub details: String,
    pub link: Option<String>,
}

/// The catalog plus its filter/expansion state.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    projects: Vec<Project>,
    filter: Filter,
    expanded: Option<ProjectId>,
}

impl Catalog {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects,
            filter: Filter::All,
            expanded: None,
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// The expanded card, if any.
    pub fn expanded(&self) -> Option<&ProjectId> {
        self.expanded.as_ref()
    }

    /// Select a filter: exactly one filter control active, every
    /// non-matching card hidden, and a hidden card can't stay expanded.
    pub fn apply_filter(&mut self, filter: Filter) {
        self.filter = filter;
        if let Some(id) = &self.expanded {
            let still_visible = self
                .lookup(id)
                .map(|p| filter.matches(p.category))
                .unwrap_or(false);
            if !still_visible {
                self.expanded = None;
            }
        }
    }

    /// Whether the card is hidden under the active filter.
    pub fn is_hidden(&self, project: &Project) -> bool {
        !self.filter.matches(project.category)
    }

    pub fn is_expanded(&self, id: &ProjectId) -> bool {
        self.expanded.as_ref() == Some(id)
    }

    /// Expand a card. Every other card collapses first; the card is asked
    /// to scroll into view at the viewport top on the next animation frame.
    pub fn expand(&mut self, id: &ProjectId) -> Vec<Effect> {
        let Some(project) = self.lookup(id) else {
            return Vec::new();
        };
        if !self.filter.matches(project.category) {
            return Vec::new();
        }
        self.expanded = Some(id.clone());
        vec![Effect::ScrollCardIntoView(id.clone())]
    }

    /// Collapse the card if it is the expanded one. The close control only
    /// ever collapses its own card.
    pub fn collapse(&mut self, id: &ProjectId) {
        if self.expanded.as_ref() == Some(id) {
            self.expanded = None;
        }
    }

    fn lookup(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == id)
    }
}
