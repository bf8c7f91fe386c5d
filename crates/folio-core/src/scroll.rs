//! Scroll state controller.
//!
//! The synchronization core: consumes live scroll events on the main
//! container plus the sentinel intersection signal, and keeps the hero, nav
//! and body flags consistent with the single source of truth, the scroll
//! offset.
//!
//! Three independent thresholds are in play ([`crate::UiConfig`]):
//! `top_reset_scroll` ("top of page wins"), `global_fade_scroll` (body
//! fade) and `hero_hide_scroll` (hero fade). The sticky-nav signal comes
//! from the sentinel observer when one exists and from a direct
//! bounding-box comparison otherwise.

use crate::regions::{class, RegionKey};
use crate::state::{OverlayState, PageKind, UiState};

impl UiState {
    /// Handle a scroll event on the main container.
    pub fn handle_scroll(&mut self, offset: u32) {
        self.scroll_offset = offset;
        self.has_scrolled = offset > 0;

        // Top of page wins: forced un-stuck regardless of the sentinel.
        if offset <= self.config.top_reset_scroll {
            self.regions
                .set_flag(RegionKey::Nav, class::SCROLLED, false);
            self.regions
                .set_flag(RegionKey::PortfolioNav, class::SCROLLED, false);
        }

        // Hero and body effects: only on the home document while the overlay
        // is closed and the hero is not force-hidden by the overlay.
        if self.page == PageKind::Home
            && self.overlay == OverlayState::Closed
            && !self.regions.has_flag(RegionKey::HeroBg, class::HIDDEN)
        {
            self.apply_hero_visibility(offset);
            self.regions.set_flag(
                RegionKey::Root,
                class::SCROLLED_HERO,
                offset > self.config.global_fade_scroll,
            );
        }
    }

    /// Handle the sentinel observer firing with its intersection state.
    ///
    /// Not intersecting means the layout anchor has crossed the observer's
    /// root margin, i.e. the secondary nav has visually stuck. Ignored
    /// until the user has scrolled at all (the observer fires once at setup
    /// time), at top of page, and while the overlay owns the visuals.
    pub fn handle_sentinel(&mut self, intersecting: bool) {
        if !self.sentinel_updates_allowed() {
            return;
        }
        self.set_nav_stuck(!intersecting);
    }

    /// Fallback for documents where no intersection observer is available:
    /// compare the sentinel's live bounding-box top against the configured
    /// fixed offset.
    pub fn handle_sentinel_position(&mut self, top: f64) {
        if !self.sentinel_updates_allowed() {
            return;
        }
        self.set_nav_stuck(top <= self.config.sticky_fallback_offset as f64);
    }

    fn sentinel_updates_allowed(&self) -> bool {
        self.regions.contains(RegionKey::Sentinel)
            && self.has_scrolled
            && self.scroll_offset > self.config.top_reset_scroll
            && self.overlay == OverlayState::Closed
    }

    fn set_nav_stuck(&mut self, stuck: bool) {
        self.regions.set_flag(RegionKey::Nav, class::SCROLLED, stuck);
        self.regions
            .set_flag(RegionKey::PortfolioNav, class::SCROLLED, stuck);
    }

    /// Whether the nav currently shows its stuck appearance.
    pub fn nav_stuck(&self) -> bool {
        self.regions.has_flag(RegionKey::Nav, class::SCROLLED)
    }

    /// Whether the page background carries the faded flag.
    pub fn body_faded(&self) -> bool {
        self.regions.has_flag(RegionKey::Root, class::SCROLLED_HERO)
    }

    /// Whether the hero background is in its slow-faded state.
    pub fn hero_faded(&self) -> bool {
        self.regions
            .has_flag(RegionKey::HeroBg, class::SLOW_HIDDEN)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::UiConfig;
    use crate::regions::{class, RegionKey};
    use crate::state::UiState;

    fn home() -> UiState {
        UiState::home(UiConfig::default())
    }

    #[test]
    fn test_top_of_page_wins() {
        let mut ui = home();
        ui.handle_scroll(300);
        ui.handle_sentinel(false);
        assert!(ui.nav_stuck());

        // Back at the top the sentinel state is overridden.
        ui.handle_scroll(2);
        assert!(!ui.nav_stuck());

        // And the sentinel cannot re-stick it there.
        ui.handle_sentinel(false);
        assert!(!ui.nav_stuck());
    }

    #[test]
    fn test_sentinel_gated_until_first_scroll() {
        let mut ui = home();
        // Observer setup fires once before any scroll.
        ui.handle_sentinel(false);
        assert!(!ui.nav_stuck());
    }

    #[test]
    fn test_sentinel_drives_stuck_state() {
        let mut ui = home();
        ui.handle_scroll(120);
        ui.handle_sentinel(false);
        assert!(ui.nav_stuck());

        ui.handle_sentinel(true);
        assert!(!ui.nav_stuck());
    }

    #[test]
    fn test_sentinel_position_fallback() {
        let mut ui = home();
        ui.handle_scroll(120);

        ui.handle_sentinel_position(200.0);
        assert!(!ui.nav_stuck());

        ui.handle_sentinel_position(80.0);
        assert!(ui.nav_stuck());
    }

    #[test]
    fn test_hero_fade_threshold() {
        let mut ui = home();
        ui.handle_scroll(101);
        assert!(ui.hero_faded());
        assert!(!ui.regions.is_visible(RegionKey::HeroProfile));
        assert!(!ui.regions.is_visible(RegionKey::HeroIntro));

        ui.handle_scroll(100);
        assert!(!ui.hero_faded());
        assert!(ui.regions.is_visible(RegionKey::HeroProfile));
        assert!(ui.regions.is_visible(RegionKey::HeroIntro));
    }

    #[test]
    fn test_body_fade_threshold() {
        let mut ui = home();
        ui.handle_scroll(3);
        assert!(ui.body_faded());

        ui.handle_scroll(2);
        assert!(!ui.body_faded());
    }

    #[test]
    fn test_hero_inert_while_overlay_open() {
        let mut ui = home();
        let _ = ui.toggle_contact();
        ui.handle_scroll(500);
        // Overlay controller owns the visuals; the scroll handler must not
        // re-fade the hero underneath it.
        assert!(!ui.hero_faded());
        assert!(!ui.body_faded());
    }

    #[test]
    fn test_away_document_only_tracks_nav() {
        let mut ui = UiState::away(UiConfig::default());
        ui.handle_scroll(250);
        // No hero or portfolio nav regions exist; nothing to observe there.
        assert!(!ui.regions.has_flag(RegionKey::HeroBg, class::SLOW_HIDDEN));
        assert!(!ui.body_faded());
    }
}
