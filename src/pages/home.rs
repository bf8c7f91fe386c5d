//! The home document: hero, portfolio, contact overlay.
//!
//! Owns the home `UiState` and the scroll wiring for the main container.
//! On mount it consumes any saved scroll position from a previous visit;
//! on teardown it saves the departure offset for the next one.

use dioxus::document;
use dioxus::prelude::*;
use folio_core::{RegionKey, UiConfig, UiState};

use crate::components::portfolio::{PortfolioNav, ProjectGrid};
use crate::components::{ContactOverlay, Hero, MobileMenu, NavHeader};
use crate::context::use_app;
use crate::driver::drive;

#[component]
pub fn Home() -> Element {
    let ui = use_context_provider(|| Signal::new(UiState::home(UiConfig::default())));
    let app = use_app();
    let observer_ok = use_signal(|| true);

    // One-shot: restore the saved scroll position, if any.
    use_hook(move || {
        spawn(async move {
            let mut store = app.store;
            let mut ui = app.ui;
            let effects = store.with_mut(|store| ui.write().restore_scroll(store));
            drive(app, effects).await;
        });
    });

    // Save the departure offset for the next visit.
    use_drop(move || {
        let mut store = app.store;
        store.with_mut(|store| ui.peek().save_scroll(store));
    });

    let root_class = ui.read().regions.class_string(RegionKey::Root);
    let main_class = ui.read().regions.class_string(RegionKey::Main);

    rsx! {
        div { id: "folio-root", class: "{root_class}",
            NavHeader {}

            main {
                id: "main",
                class: "site-main {main_class}",
                onscroll: move |_| {
                    spawn(async move {
                        let Some(offset) = read_scroll_offset().await else {
                            return;
                        };
                        let mut ui = app.ui;
                        ui.write().handle_scroll(offset);

                        // Observer missing: derive the sticky signal from
                        // the sentinel's bounding box instead.
                        if !observer_ok() {
                            if let Some(top) = read_sentinel_top().await {
                                ui.write().handle_sentinel_position(top);
                            }
                        }
                    });
                },

                Hero {}
                PortfolioNav { observer_ok }
                ProjectGrid {}
                ContactOverlay {}
            }

            MobileMenu {}
        }
    }
}

async fn read_scroll_offset() -> Option<u32> {
    let mut eval = document::eval(
        "const m = document.getElementById('main'); dioxus.send(m ? m.scrollTop : 0);",
    );
    let raw = eval.recv::<f64>().await.ok()?;
    Some(raw.max(0.0) as u32)
}

async fn read_sentinel_top() -> Option<f64> {
    let mut eval = document::eval(
        r#"
        const sentinel = document.querySelector('.portfolio-nav-sentinel');
        dioxus.send(sentinel ? sentinel.getBoundingClientRect().top : null);
        "#,
    );
    eval.recv::<Option<f64>>().await.ok().flatten()
}
