use dioxus::prelude::*;

use crate::Localized;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

#[component]
pub fn Hero() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        section {
            id: "hero",
            div { id: "links",
                h1 { Localized { msg: "hero.title" } }
                p { Localized { msg: "hero.subtitle" } }

                div { class: "cta_row",
                    a { class: "btn primary", href: "#contact", Localized { msg: "hero.cta" } }
                    a { class: "btn", href: "#services", Localized { msg: "hero.cta.services" } }
                }
            }
        }
    }
}
