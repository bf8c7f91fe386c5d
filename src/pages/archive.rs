//! The archive page: the concrete secondary document.
//!
//! Carries the reduced region set. The nav's contact control renders as a
//! permanent return-home link here and the menu button navigates back; both
//! rules live in the core, this page just provides the `Away` state.

use dioxus::document;
use dioxus::prelude::*;
use folio_core::{RegionKey, UiConfig, UiState};

use crate::components::{MobileMenu, NavHeader};
use crate::context::use_app;
use crate::data;

#[component]
pub fn Archive() -> Element {
    let ui = use_context_provider(|| Signal::new(UiState::away(UiConfig::default())));
    let app = use_app();

    let root_class = ui.read().regions.class_string(RegionKey::Root);

    rsx! {
        div { id: "folio-root", class: "{root_class}",
            NavHeader {}

            main {
                id: "main",
                class: "site-main",
                onscroll: move |_| {
                    spawn(async move {
                        let mut eval = document::eval(
                            "const m = document.getElementById('main'); dioxus.send(m ? m.scrollTop : 0);",
                        );
                        if let Ok(raw) = eval.recv::<f64>().await {
                            let mut ui = app.ui;
                            ui.write().handle_scroll(raw.max(0.0) as u32);
                        }
                    });
                },

                section { class: "archive-list",
                    h1 { class: "archive-title", "Archive" }
                    p { class: "archive-lead",
                        "Older work that no longer gets a card on the front page."
                    }

                    ul { class: "archive-entries",
                        for (year, title, note) in data::archive_entries() {
                            li { key: "{title}", class: "archive-entry",
                                span { class: "archive-year", "{year}" }
                                div {
                                    strong { "{title}" }
                                    p { class: "archive-note", "{note}" }
                                }
                            }
                        }
                    }
                }
            }

            MobileMenu {}
        }
    }
}
