//! Root application component.
//!
//! Provides global styles, the long-lived signals (catalog, contact form,
//! session store, relay) and routing. The per-document `UiState` and the
//! `#folio-root` wrapper carrying the body-level class flags are provided
//! by each page, the way each document would carry its own body.

use std::sync::Arc;

use dioxus::prelude::*;
use folio_core::{Catalog, ContactForm, MemorySessionStore, UiConfig};

use crate::components::Splash;
use crate::pages::{Archive, Home};
use crate::relay::EmailRelay;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - home document: hero, portfolio, contact overlay
/// - `/archive` - secondary document with the older work
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/archive")]
    Archive {},
}

#[component]
pub fn App() -> Element {
    // Long-lived state, shared across page switches.
    let _catalog = use_context_provider(|| Signal::new(Catalog::new(crate::data::projects())));
    let _form = use_context_provider(|| Signal::new(ContactForm::new()));
    let _store = use_context_provider(|| Signal::new(MemorySessionStore::new()));
    let _relay = use_context_provider(|| {
        Signal::new(Arc::new(EmailRelay::new(crate::relay_credentials())))
    });

    // Splash stays up for the configured minimum, then the content shows.
    let mut booting = use_signal(|| true);
    use_hook(move || {
        spawn(async move {
            tokio::time::sleep(UiConfig::default().splash_minimum).await;
            booting.set(false);
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        if booting() {
            Splash {}
        }
        Router::<Route> {}
    }
}
