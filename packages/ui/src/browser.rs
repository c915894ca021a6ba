//! Glue between the page controller and the browser: the real DOM, blocking
//! alerts, the reCAPTCHA global and the document-wide click listener.
//!
//! Outside wasm (server-side rendering) every call is a no-op.

use async_trait::async_trait;
use dioxus::prelude::*;
use futures::channel::mpsc::UnboundedSender;
use site::forms::Captcha;
use site::{Dom, Interaction, SiteConfig, Transport};

/// `site::Dom` over `web_sys::Document`.
pub(crate) struct BrowserDom;

/// Transport for the configured mode, resolving relative paths against the
/// current page.
pub(crate) fn transport(config: &SiteConfig) -> Option<Box<dyn Transport>> {
    let base = page_url().unwrap_or_else(|| config.base_url.clone());
    match site::transport::for_config(config, &base) {
        Ok(transport) => Some(transport),
        Err(err) => {
            tracing::error!("browser.transport: {err}");
            None
        }
    }
}

/// The `grecaptcha` global loaded by the reCAPTCHA script. A page without it
/// answers with an empty token.
pub(crate) struct EvalCaptcha;

#[async_trait(?Send)]
impl Captcha for EvalCaptcha {
    async fn response(&self) -> String {
        let js = r#"
        (function(){
          try {
            if (typeof grecaptcha !== "undefined") return grecaptcha.getResponse() || "";
          } catch(e) {}
          return "";
        })()
        "#;
        match document::eval(js).await {
            Ok(v) => v.as_str().unwrap_or_default().to_string(),
            Err(err) => {
                tracing::warn!("browser.captcha: eval failed: {err:?}");
                String::new()
            }
        }
    }

    async fn reset(&self) {
        let _ = document::eval(
            r#"(function(){ try { if (typeof grecaptcha !== "undefined") grecaptcha.reset(); } catch(e) {} return ""; })()"#,
        )
        .await;
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use site::dom::{LANG_BUTTON, MENU_BUTTON};
    use site::state::ClickTarget;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, HtmlElement};

    pub(super) fn document() -> Option<Document> {
        web_sys::window()?.document()
    }

    pub(super) fn first(selector: &str) -> Option<HtmlElement> {
        document()?
            .query_selector(selector)
            .ok()
            .flatten()?
            .dyn_into::<HtmlElement>()
            .ok()
    }

    pub(super) fn each(selector: &str, mut f: impl FnMut(&HtmlElement)) {
        let Some(list) = document().and_then(|doc| doc.query_selector_all(selector).ok()) else {
            return;
        };
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|node| node.dyn_into::<HtmlElement>().ok()) {
                f(&el);
            }
        }
    }

    pub(super) fn click_target(el: &Element) -> ClickTarget {
        let closest = |selector: &str| el.closest(selector).ok().flatten();
        ClickTarget {
            lang_button: closest(LANG_BUTTON).and_then(|b| b.get_attribute("data-lang")),
            menu_button: closest(MENU_BUTTON).is_some(),
            anchor_href: closest("a[href^='#']").and_then(|a| a.get_attribute("href")),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Dom for BrowserDom {
    fn exists(&self, selector: &str) -> bool {
        web::document()
            .and_then(|doc| doc.query_selector(selector).ok().flatten())
            .is_some()
    }

    fn document_lang(&self) -> Option<String> {
        web::document()?
            .document_element()?
            .get_attribute("lang")
            .filter(|lang| !lang.trim().is_empty())
    }

    fn set_document_lang(&self, code: &str) {
        if let Some(root) = web::document().and_then(|doc| doc.document_element()) {
            let _ = root.set_attribute("lang", code);
        }
    }

    fn set_inner_html(&self, selector: &str, html: &str) {
        web::each(selector, |el| el.set_inner_html(html));
    }

    fn set_text(&self, selector: &str, text: &str) {
        web::each(selector, |el| el.set_text_content(Some(text)));
    }

    fn set_attribute(&self, selector: &str, name: &str, value: &str) {
        web::each(selector, |el| {
            let _ = el.set_attribute(name, value);
        });
    }

    fn toggle_class(&self, selector: &str, class: &str, on: bool) {
        web::each(selector, |el| {
            let _ = el.class_list().toggle_with_force(class, on);
        });
    }

    fn set_visible(&self, selector: &str, visible: bool) {
        web::each(selector, |el| {
            let style = el.style();
            let _ = if visible {
                style.remove_property("display").map(|_| ())
            } else {
                style.set_property("display", "none")
            };
        });
    }

    fn set_required(&self, selector: &str, required: bool) {
        use wasm_bindgen::JsCast;
        web::each(selector, |el| {
            if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
                input.set_required(required);
            }
        });
    }

    fn offset_top(&self, selector: &str) -> Option<f64> {
        web::first(selector).map(|el| f64::from(el.offset_top()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Dom for BrowserDom {
    fn exists(&self, _selector: &str) -> bool {
        false
    }

    fn document_lang(&self) -> Option<String> {
        None
    }

    fn set_document_lang(&self, _code: &str) {}

    fn set_inner_html(&self, _selector: &str, _html: &str) {}

    fn set_text(&self, _selector: &str, _text: &str) {}

    fn set_attribute(&self, _selector: &str, _name: &str, _value: &str) {}

    fn toggle_class(&self, _selector: &str, _class: &str, _on: bool) {}

    fn set_visible(&self, _selector: &str, _visible: bool) {}

    fn set_required(&self, _selector: &str, _required: bool) {}

    fn offset_top(&self, _selector: &str) -> Option<f64> {
        None
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn page_url() -> Option<String> {
    web_sys::window()?.location().href().ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn page_url() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            let _ = window.alert_with_message(message);
        }
        None => tracing::warn!("alert: {message}"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn alert(message: &str) {
    tracing::warn!("alert: {message}");
}

/// Listen to every click on the document. In-page anchors are scrolled here,
/// synchronously, so the default jump can be cancelled; every other
/// interaction is forwarded to `tx` and applied inside the Dioxus runtime.
#[cfg(target_arch = "wasm32")]
pub(crate) fn listen_for_clicks(tx: UnboundedSender<Interaction>, header_offset: f64) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let Some(doc) = web::document() else {
        return;
    };

    let handler = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |event: web_sys::MouseEvent| {
        let Some(target) = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        let Some(interaction) = site::classify(&web::click_target(&target)) else {
            return;
        };

        if let Interaction::FollowAnchor(href) = &interaction {
            if let Some(top) = site::scroll::scroll_top(&BrowserDom, href, header_offset) {
                event.prevent_default();
                scroll_to(top);
            }
            return;
        }

        if tx.unbounded_send(interaction).is_err() {
            tracing::warn!("browser.clicks: page is gone, dropping click");
        }
    });

    match doc.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref()) {
        // The listener lives as long as the page.
        Ok(()) => handler.forget(),
        Err(err) => tracing::error!("browser.clicks: cannot listen: {err:?}"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn listen_for_clicks(_tx: UnboundedSender<Interaction>, _header_offset: f64) {}

#[cfg(target_arch = "wasm32")]
fn scroll_to(top: f64) {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
