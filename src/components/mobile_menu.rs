//! Slide-out mobile menu panel.
//!
//! The panel is rendered permanently so the slide transition can run; its
//! `open` flag comes from the registry. The backdrop exists only while the
//! panel is out and dismisses it on any outside click.

use dioxus::prelude::*;
use folio_core::RegionKey;

use crate::app::Route;
use crate::context::use_app;
use crate::driver::drive;

#[component]
pub fn MobileMenu() -> Element {
    let app = use_app();
    let ui = app.ui;

    let panel_class = ui.read().regions.class_string(RegionKey::MenuPanel);
    let open = ui.read().menu_open();

    rsx! {
        if open {
            div {
                class: "menu-backdrop",
                onclick: move |_| {
                    let mut ui = app.ui;
                    ui.write().dismiss_menu();
                },
            }
        }

        aside { class: "menu-panel {panel_class}",
            nav { class: "menu-links",
                Link {
                    to: Route::Home {},
                    class: "menu-link",
                    onclick: move |_| {
                        let mut ui = app.ui;
                        ui.write().dismiss_menu();
                    },
                    "Home"
                }
                Link {
                    to: Route::Archive {},
                    class: "menu-link",
                    onclick: move |_| {
                        let mut ui = app.ui;
                        ui.write().dismiss_menu();
                    },
                    "Archive"
                }
                button {
                    r#type: "button",
                    class: "menu-link",
                    onclick: move |_| {
                        // The overlay transition closes the panel itself.
                        let mut ui = app.ui;
                        let effects = ui.write().toggle_contact();
                        spawn(drive(app, effects));
                    },
                    "Contact"
                }
            }
        }
    }
}
