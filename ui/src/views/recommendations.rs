use dioxus::prelude::*;

use crate::i18n;
use crate::prediction::CropPredictor;
use crate::t;

#[component]
pub fn Recommendations() -> Element {
    i18n::use_language();
    rsx! {
        section { class: "page page-recommendations",
            h1 { class: "page__title", {t!("predict-title")} }
            p { class: "page__subtitle", {t!("predict-subtitle")} }
            CropPredictor {}
        }
    }
}
