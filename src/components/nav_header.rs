//! Top navigation bar.
//!
//! Carries the contact toggle and the hamburger button. Both render purely
//! from the state machine: the contact control's label and class follow the
//! overlay state, the hamburger glyph follows [`UiState::menu_icon`], and
//! away from the home document the contact control becomes a plain
//! return-home link.

use dioxus::prelude::*;
use folio_core::{MenuIcon, PageKind, RegionKey};

use crate::app::Route;
use crate::context::use_app;
use crate::driver::drive;

#[component]
pub fn NavHeader() -> Element {
    let app = use_app();
    let ui = app.ui;

    let nav_class = ui.read().regions.class_string(RegionKey::Nav);
    let contact_class = ui.read().regions.class_string(RegionKey::ContactButton);
    let menu_btn_class = ui.read().regions.class_string(RegionKey::MenuButton);
    let page = ui.read().page;
    let overlay_open = ui.read().contact_open();
    let contact_label = ui.read().contact_label();
    let icon = ui.read().menu_icon();

    rsx! {
        header { class: "site-nav {nav_class}",
            div { class: "nav-inner",
                Link { to: Route::Home {}, class: "nav-logo", "Folio" }

                nav { class: "nav-links",
                    a { href: "#portfolio", class: "nav-link", "Work" }
                    Link { to: Route::Archive {}, class: "nav-link", "Archive" }
                }

                if page == PageKind::Home {
                    button {
                        r#type: "button",
                        class: "contact-btn {contact_class}",
                        "aria-expanded": "{overlay_open}",
                        onclick: move |_| {
                            let mut ui = app.ui;
                            let effects = ui.write().toggle_contact();
                            spawn(drive(app, effects));
                        },
                        span { "{contact_label}" }
                        {contact_glyph(overlay_open)}
                    }
                } else {
                    Link { to: Route::Home {}, class: "contact-btn",
                        span { "{contact_label}" }
                        {home_glyph()}
                    }
                }

                button {
                    r#type: "button",
                    class: "menu-btn {menu_btn_class}",
                    "aria-label": "Menu",
                    onclick: move |_| {
                        let mut ui = app.ui;
                        let effects = ui.write().handle_menu_click();
                        spawn(drive(app, effects));
                    },
                    {menu_glyph(icon)}
                }
            }
        }
    }
}

/// Smile while closed, X while the overlay is open.
fn contact_glyph(open: bool) -> Element {
    if open {
        close_glyph()
    } else {
        rsx! {
            // Lucide smile icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "18",
                height: "18",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                circle { cx: "12", cy: "12", r: "10" }
                path { d: "M8 14s1.5 2 4 2 4-2 4-2" }
                line { x1: "9", x2: "9.01", y1: "9", y2: "9" }
                line { x1: "15", x2: "15.01", y1: "9", y2: "9" }
            }
        }
    }
}

fn home_glyph() -> Element {
    rsx! {
        // Lucide house icon
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "18",
            height: "18",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M3 10a2 2 0 0 1 .709-1.528l7-5.999a2 2 0 0 1 2.582 0l7 5.999A2 2 0 0 1 21 10v9a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" }
            path { d: "M15 21v-8a1 1 0 0 0-1-1h-4a1 1 0 0 0-1 1v8" }
        }
    }
}

fn close_glyph() -> Element {
    rsx! {
        // Lucide x icon
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "20",
            height: "20",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        }
    }
}

/// Bars or X, per the pure display rule.
fn menu_glyph(icon: MenuIcon) -> Element {
    match icon {
        MenuIcon::Close => close_glyph(),
        MenuIcon::Bars => rsx! {
            // Lucide menu icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "20",
                height: "20",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                line { x1: "4", x2: "20", y1: "6", y2: "6" }
                line { x1: "4", x2: "20", y1: "12", y2: "12" }
                line { x1: "4", x2: "20", y1: "18", y2: "18" }
            }
        },
    }
}
