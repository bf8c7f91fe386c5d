//! Scroll persistence across home-page loads.
//!
//! One named slot in session-scoped storage carries the main container's
//! offset from "leaving the home page" to "next home page load". The
//! restore is the flicker-sensitive sequence: flags are pre-applied
//! synchronously with transitions suppressed, the offset itself lands on
//! the next animation frame, and transitions come back after a short fixed
//! delay. Setting the offset and toggling the classes in the same tick
//! produces a visible jump with transition animations active.

use std::collections::HashMap;

use crate::effect::{Effect, FollowUp};
use crate::regions::RegionKey;
use crate::state::{PageKind, UiState};

/// The single storage slot the scroll offset lives in.
pub const SCROLL_SLOT_KEY: &str = "homeScrollPosition";

/// Session-scoped string storage.
///
/// The shell owns one instance for the lifetime of the window, which is the
/// desktop equivalent of per-tab storage.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

/// In-memory [`SessionStore`].
#[derive(Debug, Default, Clone)]
pub struct MemorySessionStore {
    slots: HashMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: String) {
        self.slots.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.slots.remove(key);
    }
}

impl UiState {
    /// Save the current scroll offset into the session slot.
    ///
    /// Called once when the home document is left, not on every scroll.
    /// No-op away from home or when the main container is absent.
    pub fn save_scroll(&self, store: &mut dyn SessionStore) {
        if self.page != PageKind::Home || !self.regions.contains(RegionKey::Main) {
            return;
        }
        store.put(SCROLL_SLOT_KEY, self.scroll_offset.to_string());
    }

    /// Consume the session slot and stage the two-phase scroll restore.
    ///
    /// The slot is deleted before parsing so a malformed value can never be
    /// re-consumed; anything non-numeric counts as "no saved position".
    /// Phase one (here, synchronous): suppress transitions and pre-apply the
    /// nav/body flags for the saved offset. Phase two (the returned
    /// [`FollowUp`]): apply the container offset and recompute hero
    /// visibility. A transition re-enable timer is staged alongside.
    pub fn restore_scroll(&mut self, store: &mut dyn SessionStore) -> Vec<Effect> {
        if self.page != PageKind::Home {
            return Vec::new();
        }
        let Some(raw) = store.get(SCROLL_SLOT_KEY) else {
            // Normal fresh load.
            return Vec::new();
        };
        store.remove(SCROLL_SLOT_KEY);

        let offset = match raw.trim().parse::<u32>() {
            Ok(offset) => offset,
            Err(_) => {
                tracing::debug!(value = %raw, "discarding malformed saved scroll position");
                return Vec::new();
            }
        };

        let epoch = self.suppress_transitions();
        self.apply_offset_flags(offset);

        vec![
            Effect::NextFrame(FollowUp::ApplyRestoredScroll { offset }),
            Effect::RestoreTransitionsAfter {
                delay: self.config.transition_restore_delay,
                epoch,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiConfig;

    fn home() -> UiState {
        UiState::home(UiConfig::default())
    }

    fn run_restore(ui: &mut UiState, store: &mut MemorySessionStore) -> Vec<Effect> {
        let mut staged = Vec::new();
        for effect in ui.restore_scroll(store) {
            match effect {
                Effect::NextFrame(follow_up) => staged.extend(follow_up.apply(ui)),
                other => staged.push(other),
            }
        }
        staged
    }

    #[test]
    fn test_save_then_restore_round_trip() {
        let mut store = MemorySessionStore::new();
        let mut ui = home();
        ui.handle_scroll(450);
        ui.save_scroll(&mut store);
        assert_eq!(store.get(SCROLL_SLOT_KEY).as_deref(), Some("450"));

        // Next home-page load.
        let mut ui = home();
        let effects = run_restore(&mut ui, &mut store);
        assert!(effects.contains(&Effect::SetScroll(450)));
        assert_eq!(ui.scroll_offset, 450);
        // The slot is consumed.
        assert_eq!(store.get(SCROLL_SLOT_KEY), None);
    }

    #[test]
    fn test_restore_preapplies_flags_synchronously() {
        let mut store = MemorySessionStore::new();
        store.put(SCROLL_SLOT_KEY, "450".to_string());

        let mut ui = home();
        let effects = ui.restore_scroll(&mut store);

        // Phase one already happened: transitions off, nav/body flags set.
        assert!(ui.transitions_suppressed());
        assert!(ui.nav_stuck());
        assert!(ui.body_faded());
        // Phase two has not: the offset is still untouched.
        assert_eq!(ui.scroll_offset, 0);
        assert!(matches!(effects[0], Effect::NextFrame(_)));
    }

    #[test]
    fn test_restore_missing_slot_is_fresh_load() {
        let mut store = MemorySessionStore::new();
        let mut ui = home();
        assert!(ui.restore_scroll(&mut store).is_empty());
        assert!(!ui.transitions_suppressed());
    }

    #[test]
    fn test_restore_malformed_value_fails_safe() {
        let mut store = MemorySessionStore::new();
        for bad in ["abc", "-12", "1e3", ""] {
            store.put(SCROLL_SLOT_KEY, bad.to_string());
            let mut ui = home();
            assert!(ui.restore_scroll(&mut store).is_empty(), "value {bad:?}");
            assert!(!ui.transitions_suppressed());
            // Even a bad value is consumed.
            assert_eq!(store.get(SCROLL_SLOT_KEY), None);
        }
    }

    #[test]
    fn test_restore_hero_visibility_follows_offset() {
        let mut store = MemorySessionStore::new();
        store.put(SCROLL_SLOT_KEY, "450".to_string());
        let mut ui = home();
        run_restore(&mut ui, &mut store);
        assert!(ui.hero_faded());

        store.put(SCROLL_SLOT_KEY, "50".to_string());
        let mut ui = home();
        run_restore(&mut ui, &mut store);
        assert!(!ui.hero_faded());
    }

    #[test]
    fn test_save_skipped_away_from_home() {
        let mut store = MemorySessionStore::new();
        let ui = UiState::away(UiConfig::default());
        ui.save_scroll(&mut store);
        assert_eq!(store.get(SCROLL_SLOT_KEY), None);
    }

    #[test]
    fn test_restore_skipped_away_from_home() {
        let mut store = MemorySessionStore::new();
        store.put(SCROLL_SLOT_KEY, "450".to_string());
        let mut ui = UiState::away(UiConfig::default());
        assert!(ui.restore_scroll(&mut store).is_empty());
        // The slot survives for the next home load.
        assert_eq!(store.get(SCROLL_SLOT_KEY).as_deref(), Some("450"));
    }
}
