//! Social dropdown controller.
//!
//! A plain two-state toggle. The trigger click must stop propagation so the
//! outside-click handler doesn't immediately re-close it; that wiring lives
//! in the shell, the state rule lives here.

use crate::regions::{class, RegionKey};
use crate::state::UiState;

impl UiState {
    /// Toggle the dropdown from its trigger.
    pub fn toggle_social(&mut self) {
        self.set_social(!self.social_open);
    }

    /// Outside-click dismissal: close if open.
    pub fn dismiss_social(&mut self) {
        if self.social_open {
            self.set_social(false);
        }
    }

    fn set_social(&mut self, open: bool) {
        self.social_open = open;
        self.regions
            .set_flag(RegionKey::SocialToggle, class::OPEN, open);
        self.regions
            .set_flag(RegionKey::SocialPanel, class::OPEN, open);
    }
}
