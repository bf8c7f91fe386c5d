//! Full-panel contact overlay.
//!
//! Swaps over the home content while open; the overlay controller owns the
//! hero and nav visuals for the duration. Only exists on the home document.

use dioxus::prelude::*;
use folio_core::RegionKey;

use crate::components::ContactFormView;
use crate::context::use_app;

#[component]
pub fn ContactOverlay() -> Element {
    let app = use_app();
    let panel_class = app.ui.read().regions.class_string(RegionKey::ContactPanel);

    rsx! {
        section { id: "main_contact", class: "contact-panel {panel_class}",
            div { class: "contact-inner",
                h2 { class: "contact-title", "Say hello" }
                p { class: "contact-lead",
                    "Project inquiries, collaborations, or just a note. \
                     Replies usually within a couple of days."
                }
                ContactFormView {}
            }
        }
    }
}
