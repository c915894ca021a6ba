use dioxus::prelude::*;
use site::view::display;
use site::{dispatch, render, t, Interaction, Lang, Submitter};

use crate::browser;
use crate::page::SignalHost;
use crate::{use_page, use_site_config, Localized};

/// Newsletter sign-up. Each language has its own email input; only the
/// visible one is required.
#[component]
pub fn NewsletterSection() -> Element {
    let page = use_page();
    let config = use_site_config();

    let state = page.read();
    let lang = state.lang;
    let fields = state.newsletter.fields.clone();
    let buttons = render(&state).newsletter_buttons;
    drop(state);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let config = config.clone();
        spawn(async move {
            let Some(transport) = browser::transport(&config) else {
                return;
            };
            let (lang, fields) = {
                let state = page.read();
                (state.lang, state.newsletter.fields.clone())
            };
            let host = SignalHost::new(page);
            let outcome = Submitter::new(transport.as_ref(), &config)
                .newsletter(&host, lang, &fields)
                .await;
            tracing::debug!("newsletter: {outcome:?}");
        });
    };

    rsx! {
        section { id: "newsletter", class: "panel",
            h2 { Localized { msg: "newsletter.title" } }
            p { Localized { msg: "newsletter.body" } }

            form { class: "newsletter-form", onsubmit,
                for variant in Lang::ALL {
                    input {
                        key: "{variant}",
                        class: format!("newsletter-email {}", variant.class()),
                        r#type: "email",
                        name: "email",
                        placeholder: t(variant, "newsletter.placeholder"),
                        style: display(lang, variant),
                        required: variant == lang,
                        value: fields.email(variant).to_string(),
                        oninput: move |e: FormEvent| {
                            let mut page = page;
                            page.with_mut(|state| {
                                dispatch(state, Interaction::EditNewsletter(variant, e.value()));
                            });
                        },
                    }
                }

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
