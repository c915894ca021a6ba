use dioxus::prelude::*;

use crate::Localized;

/// Service keys, also used as the values of the contact form's service list.
pub(crate) const SERVICES: [&str; 3] = ["consulting", "sourcing", "logistics"];

#[component]
pub fn Services() -> Element {
    rsx! {
        section { id: "services", class: "panel",
            h2 { Localized { msg: "services.title" } }
            div { class: "service_grid",
                for service in SERVICES {
                    article { key: "{service}", class: "service_card",
                        h3 { Localized { msg: "services.{service}" } }
                        p { Localized { msg: "services.{service}.body" } }
                    }
                }
            }
        }
    }
}
