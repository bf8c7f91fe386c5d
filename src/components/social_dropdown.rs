//! Social links dropdown.
//!
//! The trigger click stops propagation so the dismissal backdrop behind the
//! panel can't swallow the same click and immediately re-close it.

use dioxus::prelude::*;
use folio_core::RegionKey;

use crate::context::use_app;

#[component]
pub fn SocialDropdown() -> Element {
    let app = use_app();
    let ui = app.ui;

    let open = ui.read().social_open;
    let toggle_class = ui.read().regions.class_string(RegionKey::SocialToggle);
    let panel_class = ui.read().regions.class_string(RegionKey::SocialPanel);

    rsx! {
        div { class: "social-dropdown",
            button {
                r#type: "button",
                class: "social-toggle {toggle_class}",
                "aria-expanded": "{open}",
                onclick: move |evt| {
                    evt.stop_propagation();
                    let mut ui = app.ui;
                    ui.write().toggle_social();
                },
                "Elsewhere"
                svg {
                    class: "chevron",
                    xmlns: "http://www.w3.org/2000/svg",
                    width: "14",
                    height: "14",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    path { d: "m6 9 6 6 6-6" }
                }
            }

            if open {
                div {
                    class: "social-backdrop",
                    onclick: move |_| {
                        let mut ui = app.ui;
                        ui.write().dismiss_social();
                    },
                }
            }

            ul { class: "social-panel {panel_class}",
                li { a { href: "https://github.com/folio", target: "_blank", "GitHub" } }
                li { a { href: "https://folio.bandcamp.com", target: "_blank", "Bandcamp" } }
                li { a { href: "https://www.are.na/folio", target: "_blank", "Are.na" } }
            }
        }
    }
}
