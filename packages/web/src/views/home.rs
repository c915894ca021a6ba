use dioxus::prelude::*;
use ui::{ContactSection, Hero, NewsletterSection, Services};

#[component]
pub fn Home() -> Element {
    rsx! {
        Hero {}
        Services {}
        ContactSection {}
        NewsletterSection {}
    }
}
