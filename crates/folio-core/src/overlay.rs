//! Contact overlay controller.
//!
//! Two states, one transition: the toggle. Opening captures the scroll
//! offset as a restore point, takes over hero/nav visibility and lazily
//! activates the email relay. Closing is the flicker-sensitive direction:
//! transitions are suppressed, the nav/body flags for the captured offset
//! are pre-applied, the container offset is restored, hero visibility is
//! recomputed one frame later, and transitions come back after the fixed
//! delay.

use crate::effect::{Effect, FollowUp};
use crate::regions::{class, RegionKey};
use crate::state::{MenuState, OverlayState, PageKind, UiState};

impl UiState {
    /// Toggle the contact overlay.
    ///
    /// On a secondary document the overlay does not exist; the contact
    /// action navigates home instead.
    pub fn toggle_contact(&mut self) -> Vec<Effect> {
        if self.page != PageKind::Home {
            return vec![Effect::NavigateHome];
        }
        match self.overlay {
            OverlayState::Closed => self.open_contact(),
            OverlayState::Open => self.close_contact(),
        }
    }

    fn open_contact(&mut self) -> Vec<Effect> {
        self.overlay = OverlayState::Open;
        self.home_scroll = self.scroll_offset;

        self.regions
            .set_flag(RegionKey::Main, class::CONTACT_OPEN, true);
        self.regions
            .set_flag(RegionKey::ContactPanel, class::ACTIVE, true);
        self.regions
            .set_flag(RegionKey::ContactButton, class::OPEN, true);

        // Hero goes away immediately, without the slow fade.
        self.regions.set_flag(RegionKey::HeroBg, class::HIDDEN, true);
        self.regions
            .set_flag(RegionKey::HeroBg, class::SLOW_HIDDEN, false);
        self.regions
            .set_flag(RegionKey::Root, class::SCROLLED_HERO, false);

        // Within the hero region the nav returns to its top-of-page look;
        // scrolled past it, the stuck appearance stays underneath the
        // overlay.
        if self.home_scroll <= self.config.hero_hide_scroll {
            self.regions.set_flag(RegionKey::Nav, class::SCROLLED, false);
            self.regions
                .set_flag(RegionKey::PortfolioNav, class::SCROLLED, false);
        }

        if self.menu == MenuState::Open {
            self.close_menu();
        }

        vec![Effect::ActivateRelay]
    }

    fn close_contact(&mut self) -> Vec<Effect> {
        self.overlay = OverlayState::Closed;

        self.regions
            .set_flag(RegionKey::Main, class::CONTACT_OPEN, false);
        self.regions
            .set_flag(RegionKey::ContactPanel, class::ACTIVE, false);
        self.regions
            .set_flag(RegionKey::ContactButton, class::OPEN, false);

        let offset = self.home_scroll;
        let epoch = self.suppress_transitions();
        self.apply_offset_flags(offset);
        self.regions
            .set_flag(RegionKey::HeroBg, class::HIDDEN, false);

        if self.menu == MenuState::Open {
            self.close_menu();
        }

        vec![
            Effect::SetScroll(offset),
            Effect::NextFrame(FollowUp::RecomputeHero { offset }),
            Effect::RestoreTransitionsAfter {
                delay: self.config.transition_restore_delay,
                epoch,
            },
        ]
    }

    /// Whether the overlay is open.
    pub fn contact_open(&self) -> bool {
        self.overlay == OverlayState::Open
    }

    /// Label for the contact control. On secondary documents the control is
    /// a permanent return-home link.
    pub fn contact_label(&self) -> &'static str {
        match (self.page, self.overlay) {
            (PageKind::Away, _) => "Home",
            (PageKind::Home, OverlayState::Open) => "Close",
            (PageKind::Home, OverlayState::Closed) => "Contact",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiConfig;

    fn home() -> UiState {
        UiState::home(UiConfig::default())
    }

    fn drain(ui: &mut UiState, effects: Vec<Effect>) -> Vec<Effect> {
        let mut staged = Vec::new();
        for effect in effects {
            match effect {
                Effect::NextFrame(follow_up) => staged.extend(follow_up.apply(ui)),
                other => staged.push(other),
            }
        }
        staged
    }

    #[test]
    fn test_open_captures_restore_point() {
        let mut ui = home();
        ui.handle_scroll(340);
        let effects = ui.toggle_contact();
        assert!(ui.contact_open());
        assert_eq!(ui.captured_scroll(), 340);
        assert!(effects.contains(&Effect::ActivateRelay));
    }

    #[test]
    fn test_open_hides_hero_immediately() {
        let mut ui = home();
        ui.handle_scroll(50);
        let _ = ui.toggle_contact();
        assert!(ui.regions.has_flag(RegionKey::HeroBg, class::HIDDEN));
        assert!(!ui.regions.has_flag(RegionKey::HeroBg, class::SLOW_HIDDEN));
        assert!(!ui.body_faded());
    }

    #[test]
    fn test_open_within_hero_clears_nav_stuck() {
        let mut ui = home();
        ui.handle_scroll(80);
        ui.handle_sentinel(false);
        assert!(ui.nav_stuck());

        let _ = ui.toggle_contact();
        assert!(!ui.nav_stuck());
    }

    #[test]
    fn test_open_past_hero_keeps_nav_stuck() {
        let mut ui = home();
        ui.handle_scroll(400);
        ui.handle_sentinel(false);
        assert!(ui.nav_stuck());

        let _ = ui.toggle_contact();
        // Scrolled past the hero: the stuck appearance stays under the
        // overlay.
        assert!(ui.nav_stuck());
    }

    #[test]
    fn test_close_restores_captured_offset() {
        let mut ui = home();
        ui.handle_scroll(340);
        let _ = ui.toggle_contact();

        // Whatever happens while open, close returns to the captured value.
        let effects = ui.toggle_contact();
        assert!(effects.contains(&Effect::SetScroll(340)));
        assert!(!ui.contact_open());
    }

    #[test]
    fn test_close_recomputes_hero_one_frame_later() {
        let mut ui = home();
        ui.handle_scroll(340);
        let _ = ui.toggle_contact();

        let effects = ui.toggle_contact();
        // Synchronously the hero is un-hidden but not yet re-faded.
        assert!(!ui.regions.has_flag(RegionKey::HeroBg, class::HIDDEN));
        assert!(!ui.hero_faded());

        drain(&mut ui, effects);
        // The frame-gated follow-up re-fades it for the restored offset.
        assert!(ui.hero_faded());
        assert!(!ui.regions.is_visible(RegionKey::HeroProfile));
    }

    #[test]
    fn test_close_preapplies_offset_flags() {
        let mut ui = home();
        ui.handle_scroll(340);
        let _ = ui.toggle_contact();
        let _ = ui.toggle_contact();

        assert!(ui.transitions_suppressed());
        assert!(ui.nav_stuck());
        assert!(ui.body_faded());
    }

    #[test]
    fn test_toggle_closes_menu_both_ways() {
        let mut ui = home();
        let _ = ui.handle_menu_click();
        assert_eq!(ui.menu, MenuState::Open);

        let _ = ui.toggle_contact();
        assert_eq!(ui.menu, MenuState::Closed);
    }

    #[test]
    fn test_away_contact_navigates_home() {
        let mut ui = UiState::away(UiConfig::default());
        assert_eq!(ui.toggle_contact(), vec![Effect::NavigateHome]);
        assert!(!ui.contact_open());
        assert_eq!(ui.contact_label(), "Home");
    }

    #[test]
    fn test_labels_follow_state() {
        let mut ui = home();
        assert_eq!(ui.contact_label(), "Contact");
        let _ = ui.toggle_contact();
        assert_eq!(ui.contact_label(), "Close");
    }
}
