//! Secondary portfolio nav and its sticky-detection sentinel.
//!
//! The sentinel is a 1px anchor just above the nav. An intersection
//! observer with the configured root margin reports when it crosses the
//! offset from the viewport top, which is a cheap "the nav has stuck"
//! signal with no per-frame position polling. When the observer can't be
//! set up, `observer_ok` flips off and the scroll handler falls back to
//! comparing the sentinel's bounding-box top directly.

use dioxus::document;
use dioxus::prelude::*;
use folio_core::RegionKey;

use crate::components::portfolio::FilterBar;
use crate::context::use_app;

#[component]
pub fn PortfolioNav(observer_ok: Signal<bool>) -> Element {
    let app = use_app();
    let nav_class = app.ui.read().regions.class_string(RegionKey::PortfolioNav);

    // Wire the sentinel observer once, on mount.
    use_hook(move || {
        let margin = app.ui.peek().config.sticky_observe_offset;
        let mut observer_ok = observer_ok;
        spawn(async move {
            let js = format!(
                r#"
                const sentinel = document.querySelector('.portfolio-nav-sentinel');
                if (!sentinel || typeof IntersectionObserver === 'undefined') {{
                    dioxus.send(null);
                }} else {{
                    const observer = new IntersectionObserver(
                        ([entry]) => dioxus.send(entry.isIntersecting),
                        {{ root: null, threshold: 0, rootMargin: '-{margin}px 0px 0px 0px' }}
                    );
                    observer.observe(sentinel);
                }}
                "#
            );
            let mut ui = app.ui;
            let mut eval = document::eval(&js);
            loop {
                match eval.recv::<Option<bool>>().await {
                    Ok(Some(intersecting)) => {
                        // Stop once the page owning the state is gone.
                        let Ok(mut state) = ui.try_write() else { break };
                        state.handle_sentinel(intersecting);
                    }
                    Ok(None) => {
                        tracing::debug!("sticky observer unavailable, using position fallback");
                        observer_ok.set(false);
                        break;
                    }
                    Err(_) => break,
                }
            }
        });
    });

    rsx! {
        div { class: "portfolio-nav-sentinel" }
        nav { class: "portfolio_nav {nav_class}",
            FilterBar {}
        }
    }
}
