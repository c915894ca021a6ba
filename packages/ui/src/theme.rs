use dioxus::prelude::*;

const SITE_CSS: Asset = asset!("/assets/styling/site.css");

#[component]
pub fn SiteTheme() -> Element {
    rsx! { document::Link { rel: "stylesheet", href: SITE_CSS } }
}
