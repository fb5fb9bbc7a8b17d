use dioxus::prelude::*;

use crate::i18n;
use crate::t;

/// Placeholder until the forecast page exists.
#[component]
pub fn Weather() -> Element {
    i18n::use_language();
    rsx! {
        section { class: "page page-weather",
            h1 { {t!("weather-page-title")} }
            p { {t!("weather-coming-soon")} }
        }
    }
}
