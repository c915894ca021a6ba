use dioxus::prelude::*;
use site::view::display;
use site::{t, Lang};

/// Both translations of `msg` as `.lang-fr` / `.lang-en` twins; only the
/// active language's twin is displayed.
#[component]
pub fn Localized(msg: String) -> Element {
    let lang = crate::use_page().read().lang;
    rsx! {
        for variant in Lang::ALL {
            span {
                key: "{variant}",
                class: variant.class(),
                style: display(lang, variant),
                {t(variant, &msg)}
            }
        }
    }
}
