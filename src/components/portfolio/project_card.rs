//! One portfolio card.

use dioxus::prelude::*;
use folio_core::Project;
use pulldown_cmark::{html, Options, Parser};

use crate::context::use_app;
use crate::driver::drive;

/// Card with collapsed summary and expanded Markdown details. The
/// `data-category` and `data-project` attributes are part of the markup
/// contract (filtering and scroll-into-view target them).
#[component]
pub fn ProjectCard(project: Project) -> Element {
    let app = use_app();
    let catalog = app.catalog;

    let hidden = catalog.read().is_hidden(&project);
    let expanded = catalog.read().is_expanded(&project.id);

    let mut classes = String::from("portfolio-item");
    if hidden {
        classes.push_str(" hidden");
    }
    if expanded {
        classes.push_str(" expanded");
    }

    let details_html = render_markdown(&project.details);
    let expand_id = project.id.clone();
    let close_id = project.id.clone();

    rsx! {
        article {
            class: "{classes}",
            "data-category": project.category.as_str(),
            "data-project": "{project.id}",

            header { class: "portfolio-item-header",
                h3 { class: "portfolio-item-title", "{project.title}" }
                span { class: "portfolio-item-meta",
                    "{project.category.label()} / {project.year}"
                }
            }

            p { class: "portfolio-item-summary", "{project.summary}" }

            if expanded {
                div {
                    class: "portfolio-item-details",
                    dangerous_inner_html: "{details_html}",
                }
                if let Some(link) = &project.link {
                    a {
                        class: "portfolio-item-link",
                        href: "{link}",
                        target: "_blank",
                        "Visit"
                    }
                }
                button {
                    r#type: "button",
                    class: "close-btn",
                    onclick: move |_| {
                        let mut catalog = app.catalog;
                        catalog.write().collapse(&close_id);
                    },
                    "Close"
                }
            } else {
                button {
                    r#type: "button",
                    class: "expand-btn",
                    onclick: move |_| {
                        let mut catalog = app.catalog;
                        let effects = catalog.write().expand(&expand_id);
                        spawn(drive(app, effects));
                    },
                    "View"
                }
            }
        }
    }
}

/// Markdown to HTML with the extensions the details actually use.
fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(source, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}
