//! Hero banner: background layer, portrait and intro text.
//!
//! The background layer has two distinct hidden states: `hidden` (instant,
//! used while the overlay owns the stage) and `slow-hidden` (the
//! scroll-driven fade). Portrait and intro hide via visibility so their
//! layout space is preserved and nothing reflows.

use dioxus::prelude::*;
use folio_core::RegionKey;

use crate::components::SocialDropdown;
use crate::context::use_app;

#[component]
pub fn Hero() -> Element {
    let app = use_app();
    let ui = app.ui;

    let bg_class = ui.read().regions.class_string(RegionKey::HeroBg);
    let profile_hidden = !ui.read().regions.is_visible(RegionKey::HeroProfile);
    let intro_hidden = !ui.read().regions.is_visible(RegionKey::HeroIntro);

    rsx! {
        section { class: "hero",
            div { id: "hero_bg", class: "hero-bg {bg_class}" }

            div {
                class: "hero-profile",
                style: if profile_hidden { "visibility: hidden;" } else { "" },
                div { class: "hero-portrait", "F" }
            }

            div {
                class: "hero-intro",
                style: if intro_hidden { "visibility: hidden;" } else { "" },
                h1 { class: "hero-title", "Selected works" }
                p { class: "hero-tagline",
                    "Design, code and sound. A working archive of things made, \
                     kept small on purpose."
                }
                SocialDropdown {}
            }
        }
    }
}
