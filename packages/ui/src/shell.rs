use dioxus::prelude::*;
use futures::StreamExt;
use site::{apply, dispatch, load_shell, render, Dom, Interaction, Lang};

use crate::browser::{self, BrowserDom};
use crate::{use_page, use_site_config};

/// Page frame: header and footer placeholders filled from the shared HTML
/// fragments, with the page content in between.
///
/// Once both fragments are in, the document's `lang` attribute (French when
/// absent) selects the initial language, clicks start being dispatched and
/// every state change is written back to the DOM.
#[component]
pub fn SiteShell(children: Element) -> Element {
    let mut page = use_page();
    let config = use_site_config();
    let mut ready = use_signal(|| false);

    let clicks = use_coroutine(move |mut rx: UnboundedReceiver<Interaction>| async move {
        while let Some(interaction) = rx.next().await {
            page.with_mut(|state| {
                dispatch(state, interaction);
            });
        }
    });

    use_effect(move || {
        let config = config.clone();
        spawn(async move {
            if let Some(transport) = browser::transport(&config) {
                let (header, footer) = load_shell(transport.as_ref(), &BrowserDom, &config).await;
                tracing::debug!("shell: fragments loaded header={header} footer={footer}");
            }

            let lang = BrowserDom
                .document_lang()
                .as_deref()
                .and_then(Lang::from_code)
                .unwrap_or_default();
            page.with_mut(|state| {
                dispatch(state, Interaction::SelectLanguage(lang));
            });

            browser::listen_for_clicks(clicks.tx(), config.header_offset);
            ready.set(true);
        });
    });

    use_effect(move || {
        let view = render(&page.read());
        if ready() {
            apply(&view, &BrowserDom);
        }
    });

    rsx! {
        header { class: "site_header" }
        main { class: "site_main", {children} }
        footer { class: "site_footer" }
    }
}
