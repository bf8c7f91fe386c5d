//! Named UI regions and their CSS state flags.
//!
//! The registry is the state machine's view of the document: a fixed set of
//! region keys, each either present (with an ordered flag set and a
//! visibility bit) or absent. Every operation is total over
//! present-or-absent; mutating a missing region is a silent no-op, so
//! controllers never have to check for presence.

use std::collections::{BTreeSet, HashMap};

/// CSS class-flag vocabulary shared with the stylesheet.
///
/// These strings are the contract with the markup; they must be preserved
/// exactly if the markup or stylesheet is regenerated.
pub mod class {
    /// Hero background hidden immediately (no fade).
    pub const HIDDEN: &str = "hidden";
    /// Hero background hidden with the slow fade transition.
    pub const SLOW_HIDDEN: &str = "slow-hidden";
    /// Nav bar / portfolio nav in its condensed, stuck appearance.
    pub const SCROLLED: &str = "scrolled";
    /// Page-level "not at the very top" background styling.
    pub const SCROLLED_HERO: &str = "scrolled-hero";
    /// Main container showing the contact overlay.
    pub const CONTACT_OPEN: &str = "contact-open";
    /// Contact panel / filter control active flag.
    pub const ACTIVE: &str = "active";
    /// Open state for the contact button, menu and social dropdown.
    pub const OPEN: &str = "open";
    /// Portfolio card expanded.
    pub const EXPANDED: &str = "expanded";
    /// Background scroll lock while the mobile menu panel is open.
    pub const NO_SCROLL: &str = "no-scroll";
    /// Document-wide transition suppression during scroll restores.
    pub const NO_TRANSITIONS: &str = "no-transitions";
}

/// Logical names for the UI regions the controllers touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKey {
    /// The main scrolling container.
    Main,
    /// The page root (body-level styling and scroll lock).
    Root,
    /// Hero background image layer.
    HeroBg,
    /// Hero profile photo.
    HeroProfile,
    /// Hero intro text block.
    HeroIntro,
    /// Top navigation bar.
    Nav,
    /// Secondary portfolio navigation bar.
    PortfolioNav,
    /// Invisible layout anchor for the sticky-nav observer.
    Sentinel,
    /// Full-panel contact overlay.
    ContactPanel,
    /// Contact toggle button in the top nav.
    ContactButton,
    /// Hamburger menu button.
    MenuButton,
    /// Slide-out mobile menu panel.
    MenuPanel,
    /// Social dropdown trigger.
    SocialToggle,
    /// Social dropdown panel.
    SocialPanel,
}

impl RegionKey {
    /// Every region the home document carries.
    pub const HOME: &'static [RegionKey] = &[
        RegionKey::Main,
        RegionKey::Root,
        RegionKey::HeroBg,
        RegionKey::HeroProfile,
        RegionKey::HeroIntro,
        RegionKey::Nav,
        RegionKey::PortfolioNav,
        RegionKey::Sentinel,
        RegionKey::ContactPanel,
        RegionKey::ContactButton,
        RegionKey::MenuButton,
        RegionKey::MenuPanel,
        RegionKey::SocialToggle,
        RegionKey::SocialPanel,
    ];

    /// The reduced set a secondary document carries: no hero, no portfolio
    /// nav, no contact overlay.
    pub const AWAY: &'static [RegionKey] = &[
        RegionKey::Main,
        RegionKey::Root,
        RegionKey::Nav,
        RegionKey::ContactButton,
        RegionKey::MenuButton,
        RegionKey::MenuPanel,
    ];
}

/// One resolved region: its current class flags and visibility.
///
/// Visibility maps to `visibility: hidden`, not removal, so hiding a region
/// preserves its layout space.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    flags: BTreeSet<&'static str>,
    hidden: bool,
}

/// The fixed region map resolved once per document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    regions: HashMap<RegionKey, Region>,
}

impl Registry {
    /// Build a registry containing exactly the given keys.
    pub fn with_keys(keys: &[RegionKey]) -> Self {
        Self {
            regions: keys.iter().map(|k| (*k, Region::default())).collect(),
        }
    }

    /// Registry for the home document (full region set).
    pub fn home() -> Self {
        Self::with_keys(RegionKey::HOME)
    }

    /// Registry for a secondary document (reduced region set).
    pub fn away() -> Self {
        Self::with_keys(RegionKey::AWAY)
    }

    /// Whether the region exists in this document.
    pub fn contains(&self, key: RegionKey) -> bool {
        self.regions.contains_key(&key)
    }

    /// Add or remove a class flag. No-op when the region is absent.
    pub fn set_flag(&mut self, key: RegionKey, flag: &'static str, on: bool) {
        if let Some(region) = self.regions.get_mut(&key) {
            if on {
                region.flags.insert(flag);
            } else {
                region.flags.remove(flag);
            }
        }
    }

    /// Whether the region is present and carries the flag.
    pub fn has_flag(&self, key: RegionKey, flag: &str) -> bool {
        self.regions
            .get(&key)
            .map(|r| r.flags.contains(flag))
            .unwrap_or(false)
    }

    /// Hide or show the region without altering layout flow.
    /// No-op when the region is absent.
    pub fn set_visible(&mut self, key: RegionKey, visible: bool) {
        if let Some(region) = self.regions.get_mut(&key) {
            region.hidden = !visible;
        }
    }

    /// Whether the region is present and visible. Absent regions report
    /// not-visible.
    pub fn is_visible(&self, key: RegionKey) -> bool {
        self.regions.get(&key).map(|r| !r.hidden).unwrap_or(false)
    }

    /// The region's current flags joined into a class attribute fragment,
    /// in stable order. Empty for absent regions.
    pub fn class_string(&self, key: RegionKey) -> String {
        self.regions
            .get(&key)
            .map(|r| r.flags.iter().copied().collect::<Vec<_>>().join(" "))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_region_is_noop() {
        let mut registry = Registry::away();
        assert!(!registry.contains(RegionKey::HeroBg));

        // Mutations on absent regions must not panic and must not observe.
        registry.set_flag(RegionKey::HeroBg, class::HIDDEN, true);
        registry.set_visible(RegionKey::HeroBg, false);
        assert!(!registry.has_flag(RegionKey::HeroBg, class::HIDDEN));
        assert!(!registry.is_visible(RegionKey::HeroBg));
        assert_eq!(registry.class_string(RegionKey::HeroBg), "");
    }

    #[test]
    fn test_flag_toggle() {
        let mut registry = Registry::home();
        registry.set_flag(RegionKey::Nav, class::SCROLLED, true);
        assert!(registry.has_flag(RegionKey::Nav, class::SCROLLED));

        registry.set_flag(RegionKey::Nav, class::SCROLLED, false);
        assert!(!registry.has_flag(RegionKey::Nav, class::SCROLLED));
    }

    #[test]
    fn test_class_string_is_stable() {
        let mut registry = Registry::home();
        registry.set_flag(RegionKey::HeroBg, class::SLOW_HIDDEN, true);
        registry.set_flag(RegionKey::HeroBg, class::HIDDEN, true);
        // BTreeSet ordering: alphabetical, independent of insertion order.
        assert_eq!(
            registry.class_string(RegionKey::HeroBg),
            "hidden slow-hidden"
        );
    }

    #[test]
    fn test_visibility_defaults_on() {
        let registry = Registry::home();
        assert!(registry.is_visible(RegionKey::HeroProfile));
    }
}
