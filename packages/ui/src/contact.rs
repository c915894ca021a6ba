use dioxus::prelude::*;
use site::forms::ContactField;
use site::view::display;
use site::{dispatch, render, t, Interaction, Submitter};

use crate::browser::{self, EvalCaptcha};
use crate::page::SignalHost;
use crate::services::SERVICES;
use crate::{use_page, use_site_config, Localized};

const FORMS_CSS: Asset = asset!("/assets/styling/forms.css");
const RECAPTCHA_JS: &str = "https://www.google.com/recaptcha/api.js";

/// Contact section: the form posts name, email, service and message together
/// with the reCAPTCHA token.
#[component]
pub fn ContactSection() -> Element {
    let page = use_page();
    let config = use_site_config();

    let state = page.read();
    let lang = state.lang;
    let fields = state.contact.fields.clone();
    let buttons = render(&state).contact_buttons;
    drop(state);

    let edit = move |field: ContactField, value: String| {
        let mut page = page;
        page.with_mut(|state| {
            dispatch(state, Interaction::EditContact(field, value));
        });
    };

    let site_key = config.recaptcha_site_key.clone();
    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let config = config.clone();
        spawn(async move {
            let Some(transport) = browser::transport(&config) else {
                return;
            };
            let (lang, fields) = {
                let state = page.read();
                (state.lang, state.contact.fields.clone())
            };
            let host = SignalHost::new(page);
            let outcome = Submitter::new(transport.as_ref(), &config)
                .contact(&host, &EvalCaptcha, lang, &fields)
                .await;
            tracing::debug!("contact: {outcome:?}");
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: FORMS_CSS }
        document::Script { src: RECAPTCHA_JS.to_string(), defer: true }

        section { id: "contact", class: "panel",
            h2 { Localized { msg: "contact.title" } }

            div { class: "contact-form",
                form { onsubmit,
                    label { r#for: "name", Localized { msg: "contact.name" } }
                    input {
                        id: "name",
                        name: "name",
                        r#type: "text",
                        required: true,
                        value: "{fields.name}",
                        oninput: move |e| edit(ContactField::Name, e.value()),
                    }

                    label { r#for: "email", Localized { msg: "contact.email" } }
                    input {
                        id: "email",
                        name: "email",
                        r#type: "email",
                        required: true,
                        value: "{fields.email}",
                        oninput: move |e| edit(ContactField::Email, e.value()),
                    }

                    label { r#for: "service", Localized { msg: "contact.service" } }
                    select {
                        id: "service",
                        name: "service",
                        required: true,
                        value: "{fields.service}",
                        onchange: move |e| edit(ContactField::Service, e.value()),
                        option { value: "", {t(lang, "contact.service.choose")} }
                        for service in SERVICES {
                            option { key: "{service}", value: service, {t(lang, &format!("services.{service}"))} }
                        }
                        option { value: "other", {t(lang, "contact.service.other")} }
                    }

                    label { r#for: "message", Localized { msg: "contact.message" } }
                    textarea {
                        id: "message",
                        name: "message",
                        rows: "6",
                        required: true,
                        value: "{fields.message}",
                        oninput: move |e| edit(ContactField::Message, e.value()),
                    }

                    div { class: "g-recaptcha", "data-sitekey": site_key }

                    for button in buttons {
                        button {
                            key: "{button.lang}",
                            r#type: "submit",
                            class: format!("btn primary {}", button.lang.class()),
                            style: display(lang, button.lang),
                            disabled: button.disabled,
                            {button.label}
                        }
                    }
                }
            }
        }
    }
}
