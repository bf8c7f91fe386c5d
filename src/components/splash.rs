//! Startup splash screen.

use dioxus::prelude::*;

/// Covers the window until the shell reveals the content; the app root
/// keeps it up for at least the configured minimum so a fast start doesn't
/// flash it.
#[component]
pub fn Splash() -> Element {
    rsx! {
        div { class: "splash",
            span { class: "splash-mark", "Folio" }
            span { class: "splash-hint", "selected works" }
        }
    }
}
