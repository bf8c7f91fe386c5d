//! Contact form view.
//!
//! Pure rendering over the [`ContactForm`] bridge: submission is
//! intercepted and handed to the state machine, which routes it through the
//! CAPTCHA and the relay. Field values live in the bridge so a failed send
//! never loses typed input.

use dioxus::prelude::*;
use folio_core::Notice;

use crate::context::use_app;
use crate::driver::drive;

#[component]
pub fn ContactFormView() -> Element {
    let app = use_app();
    let form = app.form;

    let fields = form.read().fields.clone();
    let disabled = form.read().submit_disabled();
    let submit_label = form.read().submit_label();
    let notice = match form.read().notice.clone() {
        Some(Notice::Sent) => Some(("form-notice sent", "Message sent. Thank you!".to_string())),
        Some(Notice::Failed(reason)) => {
            Some(("form-notice failed", format!("Could not send: {reason}")))
        }
        None => None,
    };

    rsx! {
        form {
            class: "contact-form",
            onsubmit: move |evt| {
                evt.prevent_default();
                let mut form = app.form;
                let effects = form.write().submit();
                spawn(drive(app, effects));
            },

            label { class: "form-label", "Name"
                input {
                    class: "form-field",
                    r#type: "text",
                    name: "name",
                    value: "{fields.name}",
                    required: true,
                    oninput: move |evt| {
                        let mut form = app.form;
                        form.write().fields.name = evt.value();
                    },
                }
            }

            label { class: "form-label", "Email"
                input {
                    class: "form-field",
                    r#type: "email",
                    name: "email",
                    value: "{fields.email}",
                    required: true,
                    oninput: move |evt| {
                        let mut form = app.form;
                        form.write().fields.email = evt.value();
                    },
                }
            }

            label { class: "form-label", "Message"
                textarea {
                    class: "form-field",
                    name: "message",
                    value: "{fields.message}",
                    required: true,
                    oninput: move |evt| {
                        let mut form = app.form;
                        form.write().fields.message = evt.value();
                    },
                }
            }

            if let Some((notice_class, notice_text)) = notice {
                p { class: "{notice_class}", "{notice_text}" }
            }

            button {
                r#type: "submit",
                class: "form-submit",
                disabled: disabled,
                "{submit_label}"
            }
        }
    }
}
