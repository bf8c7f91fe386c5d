//! UI thresholds and delays.
//!
//! All scroll thresholds are independent constants. A product change to any
//! one of them must not perturb the others, so they are carried as named
//! fields rather than derived from each other.

use std::time::Duration;

/// Tunable thresholds and delays for the scroll/overlay state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    /// Offset at or below which the page counts as "top of page".
    ///
    /// Top of page wins: the nav is forced un-stuck here regardless of the
    /// sentinel. Absorbs sub-pixel and elastic-scroll jitter.
    pub top_reset_scroll: u32,

    /// Offset above which the body carries the global faded flag.
    pub global_fade_scroll: u32,

    /// Offset above which the hero background fades out and the hero
    /// profile/intro elements are hidden.
    pub hero_hide_scroll: u32,

    /// Pixel offset from the viewport top at which the sentinel observer
    /// reports the secondary nav as stuck (observer root margin).
    pub sticky_observe_offset: u32,

    /// Pixel offset used when no intersection observer is available and the
    /// sentinel's bounding-box top is compared directly.
    pub sticky_fallback_offset: u32,

    /// How long transitions stay suppressed after a restore or overlay
    /// close before being re-enabled.
    pub transition_restore_delay: Duration,

    /// Minimum time the startup splash stays visible.
    pub splash_minimum: Duration,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            top_reset_scroll: 2,
            global_fade_scroll: 2,
            hero_hide_scroll: 100,
            sticky_observe_offset: 90,
            sticky_fallback_offset: 80,
            transition_restore_delay: Duration::from_millis(100),
            splash_minimum: Duration::from_millis(800),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = UiConfig::default();
        assert_eq!(cfg.top_reset_scroll, 2);
        assert_eq!(cfg.global_fade_scroll, 2);
        assert_eq!(cfg.hero_hide_scroll, 100);
        assert_eq!(cfg.sticky_observe_offset, 90);
        assert_eq!(cfg.sticky_fallback_offset, 80);
        assert_eq!(cfg.transition_restore_delay, Duration::from_millis(100));
        assert_eq!(cfg.splash_minimum, Duration::from_millis(800));
    }
}
