//! Shared context for the Folio shell.
//!
//! The root App provides the long-lived signals (contact form, catalog,
//! session store, relay); each page provides its own `Signal<UiState>` for
//! the document it represents, so a page teardown can still read its own
//! state. Components grab everything through [`use_app`].

use std::sync::Arc;

use dioxus::prelude::*;
use folio_core::{Catalog, ContactForm, MemorySessionStore, UiState};

use crate::relay::EmailRelay;

/// Every handle an interactive component needs to read state and drive the
/// controllers. Cheap to copy into event handlers.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The current document's state machine (provided per page).
    pub ui: Signal<UiState>,
    /// Contact form bridge (survives page switches).
    pub form: Signal<ContactForm>,
    /// Portfolio catalog (survives page switches).
    pub catalog: Signal<Catalog>,
    /// Session-scoped storage for the scroll slot.
    pub store: Signal<MemorySessionStore>,
    /// Email relay client.
    pub relay: Signal<Arc<EmailRelay>>,
    /// Router handle for the navigation effects.
    pub navigator: Navigator,
}

/// Hook bundling the app context from the surrounding providers.
pub fn use_app() -> AppContext {
    AppContext {
        ui: use_context::<Signal<UiState>>(),
        form: use_context::<Signal<ContactForm>>(),
        catalog: use_context::<Signal<Catalog>>(),
        store: use_context::<Signal<MemorySessionStore>>(),
        relay: use_context::<Signal<Arc<EmailRelay>>>(),
        navigator: use_navigator(),
    }
}
