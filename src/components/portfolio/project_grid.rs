//! The portfolio card grid.

use dioxus::prelude::*;

use crate::components::portfolio::ProjectCard;
use crate::context::use_app;

#[component]
pub fn ProjectGrid() -> Element {
    let app = use_app();
    let projects = app.catalog.read().projects().to_vec();

    rsx! {
        section { id: "portfolio", class: "portfolio-grid",
            for project in projects {
                ProjectCard { key: "{project.id}", project: project.clone() }
            }
        }
    }
}
