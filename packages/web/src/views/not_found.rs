use dioxus::prelude::*;
use ui::Localized;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!("route: no page at /{}", segments.join("/"));

    rsx! {
        div { class: "panel",
            h2 { Localized { msg: "notfound.title" } }
            a { class: "btn primary", href: "/", Localized { msg: "notfound.back" } }
        }
    }
}
