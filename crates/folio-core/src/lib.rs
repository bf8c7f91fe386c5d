//! Folio core: the scroll/overlay/menu state-synchronization machine.
//!
//! Everything visually dependent on the main container's scroll offset
//! (hero background, top nav, secondary portfolio nav, mobile menu,
//! contact overlay) is kept consistent by one state machine over an explicit
//! context object, [`UiState`]. The crate is pure: controllers mutate state
//! and region class flags synchronously and return [`Effect`] values for
//! anything that must touch the platform (container scrolling,
//! animation-frame follow-ups, timers, navigation, the external email and
//! CAPTCHA widgets). The shell executes those in order.
//!
//! ## Quick start
//!
//! ```
//! use folio_core::{UiConfig, UiState};
//!
//! let mut ui = UiState::home(UiConfig::default());
//! ui.handle_scroll(340);
//! assert!(ui.body_faded());
//!
//! let effects = ui.toggle_contact();  // open the overlay
//! assert!(ui.contact_open());
//! assert!(!effects.is_empty());
//! ```
//!
//! Flicker-sensitive sequences (overlay close, scroll restore) are
//! two-phase: the synchronous phase applies flags with transitions
//! suppressed, and the frame-gated phase is returned as a [`FollowUp`]
//! value the shell runs after the next animation frame, or a test runs
//! directly.

pub mod config;
pub mod contact;
pub mod effect;
pub mod error;
pub mod menu;
pub mod overlay;
pub mod persist;
pub mod portfolio;
pub mod regions;
pub mod scroll;
pub mod social;
pub mod state;

// Re-exports
pub use config::UiConfig;
pub use contact::{ContactFields, ContactForm, EmailPayload, Notice, RelayCredentials, SubmitPhase};
pub use effect::{Effect, FollowUp};
pub use error::{RelayError, RelayResult};
pub use menu::MenuIcon;
pub use persist::{MemorySessionStore, SessionStore, SCROLL_SLOT_KEY};
pub use portfolio::{Catalog, Category, Filter, Project, ProjectId};
pub use regions::{class, Region, RegionKey, Registry};
pub use state::{MenuState, OverlayState, PageKind, UiState, VisualFlags};
