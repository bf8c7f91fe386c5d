//! Category filter controls.

use dioxus::prelude::*;
use folio_core::{Category, Filter};

use crate::context::use_app;

/// One button per filter; exactly one carries `active`. The `data-filter`
/// attribute is part of the markup contract.
#[component]
pub fn FilterBar() -> Element {
    let app = use_app();
    let active = app.catalog.read().filter();

    let filters: Vec<Filter> = std::iter::once(Filter::All)
        .chain(Category::ALL.iter().map(|c| Filter::Category(*c)))
        .collect();

    rsx! {
        div { class: "filter-bar",
            for filter in filters {
                button {
                    key: "{filter.as_str()}",
                    r#type: "button",
                    class: if filter == active { "filter-btn active" } else { "filter-btn" },
                    "data-filter": filter.as_str(),
                    onclick: move |_| {
                        let mut catalog = app.catalog;
                        catalog.write().apply_filter(filter);
                    },
                    "{filter.label()}"
                }
            }
        }
    }
}
