//! The shared UI state context.
//!
//! One [`UiState`] is constructed per document load and passed to every
//! controller; there is no ambient global state. The controllers live in
//! their own modules (`scroll`, `overlay`, `menu`, `social`, `persist`) as
//! `impl UiState` blocks over this context.

use crate::config::UiConfig;
use crate::regions::{class, RegionKey, Registry};

/// Which document the state machine is driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// The home document: hero, portfolio, contact overlay.
    Home,
    /// Any secondary document (the archive page). The contact control is a
    /// plain return-home link there and the menu button navigates back.
    Away,
}

/// Contact overlay state. Transitions only via the explicit toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    Closed,
    Open,
}

/// Slide-out mobile menu state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Closed,
    Open,
}

/// The three derived visual flags.
///
/// A pure function of `(scroll offset, overlay state, page kind)`; never
/// independently mutated. The live registry flags follow these through the
/// controllers, and the restore paths pre-apply them synchronously.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualFlags {
    /// Hero background faded out, hero elements hidden.
    pub hero_hidden: bool,
    /// Nav bars in their condensed, stuck appearance.
    pub nav_stuck: bool,
    /// Page background in its "not at the very top" state.
    pub body_faded: bool,
}

impl VisualFlags {
    /// Derive the flags for an offset.
    ///
    /// While the overlay is open the overlay controller owns the visuals, so
    /// every flag reads false; likewise away from the home document. The
    /// nav-stuck component uses the fallback offset; the sentinel signal
    /// refines it live when an observer is present.
    pub fn derive(offset: u32, overlay: OverlayState, page: PageKind, config: &UiConfig) -> Self {
        let live = page == PageKind::Home && overlay == OverlayState::Closed;
        Self {
            hero_hidden: live && offset > config.hero_hide_scroll,
            nav_stuck: live && offset > config.sticky_fallback_offset,
            body_faded: live && offset > config.global_fade_scroll,
        }
    }
}

/// The explicit context object every controller operates on.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub config: UiConfig,
    pub regions: Registry,
    pub page: PageKind,
    /// Current offset of the main scrolling container.
    pub scroll_offset: u32,
    /// Whether any scroll has happened since load. Gates sentinel-driven
    /// updates so the initial observer callback cannot mark the nav stuck.
    pub has_scrolled: bool,
    pub overlay: OverlayState,
    pub menu: MenuState,
    pub social_open: bool,
    /// Scroll offset captured when the overlay opened; the close transition
    /// restores the container to exactly this value.
    pub(crate) home_scroll: u32,
    /// Bumped on every suppression; a re-enable only applies while its
    /// captured epoch is still current.
    transition_epoch: u64,
    transitions_suppressed: bool,
}

impl UiState {
    /// State machine for the home document.
    pub fn home(config: UiConfig) -> Self {
        Self::new(config, Registry::home(), PageKind::Home)
    }

    /// State machine for a secondary document.
    pub fn away(config: UiConfig) -> Self {
        Self::new(config, Registry::away(), PageKind::Away)
    }

    fn new(config: UiConfig, regions: Registry, page: PageKind) -> Self {
        Self {
            config,
            regions,
            page,
            scroll_offset: 0,
            has_scrolled: false,
            overlay: OverlayState::Closed,
            menu: MenuState::Closed,
            social_open: false,
            home_scroll: 0,
            transition_epoch: 0,
            transitions_suppressed: false,
        }
    }

    /// The derived flags for the current state.
    pub fn visual_flags(&self) -> VisualFlags {
        VisualFlags::derive(self.scroll_offset, self.overlay, self.page, &self.config)
    }

    /// The restore point captured at overlay open.
    pub fn captured_scroll(&self) -> u32 {
        self.home_scroll
    }

    /// Whether document-wide transitions are currently suppressed.
    pub fn transitions_suppressed(&self) -> bool {
        self.transitions_suppressed
    }

    /// Suppress transitions document-wide and return the epoch a matching
    /// re-enable must carry.
    pub(crate) fn suppress_transitions(&mut self) -> u64 {
        self.regions
            .set_flag(RegionKey::Root, class::NO_TRANSITIONS, true);
        self.transitions_suppressed = true;
        self.transition_epoch += 1;
        self.transition_epoch
    }

    /// Re-enable transitions if `epoch` is still the current suppression.
    ///
    /// Stale epochs are ignored, which makes racing re-enable timers from
    /// rapid overlay toggles order-independent.
    pub fn restore_transitions(&mut self, epoch: u64) {
        if epoch == self.transition_epoch && self.transitions_suppressed {
            self.regions
                .set_flag(RegionKey::Root, class::NO_TRANSITIONS, false);
            self.transitions_suppressed = false;
        }
    }

    /// Pre-apply the nav/body flags corresponding to an offset.
    ///
    /// Shared by the overlay close and the scroll restore so the two
    /// "offset -> visual flags" owners cannot drift.
    pub(crate) fn apply_offset_flags(&mut self, offset: u32) {
        let flags = VisualFlags::derive(offset, OverlayState::Closed, self.page, &self.config);
        self.regions
            .set_flag(RegionKey::Root, class::SCROLLED_HERO, flags.body_faded);
        self.regions
            .set_flag(RegionKey::Nav, class::SCROLLED, flags.nav_stuck);
        self.regions
            .set_flag(RegionKey::PortfolioNav, class::SCROLLED, flags.nav_stuck);
    }

    /// Recompute hero-element visibility for an offset: the background's
    /// slow fade plus the profile/intro visibility (kept in layout flow).
    pub(crate) fn apply_hero_visibility(&mut self, offset: u32) {
        let hide = offset > self.config.hero_hide_scroll;
        self.regions
            .set_flag(RegionKey::HeroBg, class::SLOW_HIDDEN, hide);
        self.regions.set_visible(RegionKey::HeroProfile, !hide);
        self.regions.set_visible(RegionKey::HeroIntro, !hide);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home() -> UiState {
        UiState::home(UiConfig::default())
    }

    #[test]
    fn test_flags_at_top() {
        let cfg = UiConfig::default();
        for offset in [0, 1, 2] {
            let flags = VisualFlags::derive(offset, OverlayState::Closed, PageKind::Home, &cfg);
            assert!(!flags.hero_hidden);
            assert!(!flags.nav_stuck);
            assert!(!flags.body_faded);
        }
    }

    #[test]
    fn test_flags_past_fade_threshold() {
        let cfg = UiConfig::default();
        let flags = VisualFlags::derive(3, OverlayState::Closed, PageKind::Home, &cfg);
        assert!(flags.body_faded);
        assert!(!flags.hero_hidden);
    }

    #[test]
    fn test_flags_past_hero_threshold() {
        let cfg = UiConfig::default();
        let flags = VisualFlags::derive(101, OverlayState::Closed, PageKind::Home, &cfg);
        assert!(flags.hero_hidden);
        assert!(flags.nav_stuck);
        assert!(flags.body_faded);
    }

    #[test]
    fn test_flags_inert_while_overlay_open() {
        let cfg = UiConfig::default();
        let flags = VisualFlags::derive(500, OverlayState::Open, PageKind::Home, &cfg);
        assert_eq!(
            flags,
            VisualFlags {
                hero_hidden: false,
                nav_stuck: false,
                body_faded: false
            }
        );
    }

    #[test]
    fn test_restore_transitions_requires_current_epoch() {
        let mut ui = home();
        let first = ui.suppress_transitions();
        let second = ui.suppress_transitions();
        assert!(ui.transitions_suppressed());

        // A stale timer firing late must not re-enable early.
        ui.restore_transitions(first);
        assert!(ui.transitions_suppressed());

        ui.restore_transitions(second);
        assert!(!ui.transitions_suppressed());

        // Re-running the same re-enable is a no-op.
        ui.restore_transitions(second);
        assert!(!ui.transitions_suppressed());
    }
}
