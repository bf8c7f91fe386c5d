//! Hamburger / mobile menu controller.
//!
//! Independent of the overlay state but visually coupled to it: the button
//! shows an X whenever *something* is open, or whenever the current
//! document is not home (where the button means "go back").

use crate::effect::Effect;
use crate::regions::{class, RegionKey};
use crate::state::{MenuState, OverlayState, PageKind, UiState};

/// Glyph the menu button currently shows. A pure display rule, recomputed,
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    /// Hamburger bars.
    Bars,
    /// X: the menu or the overlay is open, or the document is not home.
    Close,
}

impl UiState {
    /// The glyph the menu button shows right now.
    pub fn menu_icon(&self) -> MenuIcon {
        if self.overlay == OverlayState::Open
            || self.page != PageKind::Home
            || self.menu == MenuState::Open
        {
            MenuIcon::Close
        } else {
            MenuIcon::Bars
        }
    }

    /// Handle a click on the menu button.
    ///
    /// Away from home it navigates back; while the overlay is open it
    /// delegates to the overlay toggle (the X closes whatever is open);
    /// otherwise it toggles the slide-out panel.
    pub fn handle_menu_click(&mut self) -> Vec<Effect> {
        if self.page != PageKind::Home {
            return vec![Effect::NavigateBack];
        }
        if self.overlay == OverlayState::Open {
            return self.toggle_contact();
        }
        match self.menu {
            MenuState::Closed => self.open_menu(),
            MenuState::Open => self.close_menu(),
        }
        Vec::new()
    }

    fn open_menu(&mut self) {
        self.menu = MenuState::Open;
        self.regions
            .set_flag(RegionKey::MenuPanel, class::OPEN, true);
        self.regions
            .set_flag(RegionKey::MenuButton, class::OPEN, true);
        // Lock background scroll while the panel is out.
        self.regions
            .set_flag(RegionKey::Root, class::NO_SCROLL, true);
    }

    pub(crate) fn close_menu(&mut self) {
        self.menu = MenuState::Closed;
        self.regions
            .set_flag(RegionKey::MenuPanel, class::OPEN, false);
        self.regions
            .set_flag(RegionKey::MenuButton, class::OPEN, false);
        self.regions
            .set_flag(RegionKey::Root, class::NO_SCROLL, false);
    }

    /// Outside-click dismissal: close the panel if it is open.
    pub fn dismiss_menu(&mut self) {
        if self.menu == MenuState::Open {
            self.close_menu();
        }
    }

    /// Whether the slide-out panel is open.
    pub fn menu_open(&self) -> bool {
        self.menu == MenuState::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiConfig;

    fn home() -> UiState {
        UiState::home(UiConfig::default())
    }

    #[test]
    fn test_click_toggles_panel_and_scroll_lock() {
        let mut ui = home();
        assert!(ui.handle_menu_click().is_empty());
        assert!(ui.menu_open());
        assert!(ui.regions.has_flag(RegionKey::Root, class::NO_SCROLL));
        assert_eq!(ui.menu_icon(), MenuIcon::Close);

        assert!(ui.handle_menu_click().is_empty());
        assert!(!ui.menu_open());
        assert!(!ui.regions.has_flag(RegionKey::Root, class::NO_SCROLL));
        assert_eq!(ui.menu_icon(), MenuIcon::Bars);
    }

    #[test]
    fn test_click_with_overlay_open_closes_overlay() {
        let mut ui = home();
        let _ = ui.toggle_contact();
        assert_eq!(ui.menu_icon(), MenuIcon::Close);

        let effects = ui.handle_menu_click();
        assert!(!ui.contact_open());
        // The overlay close sequence ran, not a menu toggle.
        assert!(effects.iter().any(|e| matches!(e, Effect::SetScroll(_))));
        assert!(!ui.menu_open());
    }

    #[test]
    fn test_away_click_navigates_back() {
        let mut ui = UiState::away(UiConfig::default());
        assert_eq!(ui.handle_menu_click(), vec![Effect::NavigateBack]);
        assert_eq!(ui.menu_icon(), MenuIcon::Close);
    }

    #[test]
    fn test_outside_click_dismisses() {
        let mut ui = home();
        let _ = ui.handle_menu_click();
        ui.dismiss_menu();
        assert!(!ui.menu_open());
        assert!(!ui.regions.has_flag(RegionKey::Root, class::NO_SCROLL));

        // Dismissing a closed menu is a no-op.
        ui.dismiss_menu();
        assert!(!ui.menu_open());
    }

    #[test]
    fn test_icon_reflects_overlay_even_when_panel_closed() {
        let mut ui = home();
        let _ = ui.toggle_contact();
        // Overlay open forces the X without literally opening the panel.
        assert!(!ui.menu_open());
        assert_eq!(ui.menu_icon(), MenuIcon::Close);
    }
}
