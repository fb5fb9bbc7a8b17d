use dioxus::prelude::*;

use crate::components::app_navbar::{nav_link, NavTarget};
use crate::i18n;
use crate::market::{MarketPriceBoard, VegetablePriceStrip};
use crate::t;
use crate::widgets::{LiveWeather, QuoteRotator, TypingText};

fn features() -> [(&'static str, String); 3] {
    [
        ("📊", t!("feature-market")),
        ("🌾", t!("feature-crop")),
        ("🌤️", t!("feature-weather")),
    ]
}

#[component]
pub fn Home() -> Element {
    i18n::use_language();
    let quote = t!("hero-quote");

    rsx! {
        section { class: "page page-home",
            section { class: "hero",
                div { class: "hero__left",
                    TypingText { key: "{quote}", text: quote.clone() }
                    p { class: "hero__subtitle", {t!("hero-subtitle")} }
                    div { class: "hero__buttons",
                        {nav_link(NavTarget::Signup, &t!("hero-get-started"), "button button--primary")}
                        {nav_link(NavTarget::Marketplace, &t!("hero-learn-more"), "button button--ghost")}
                    }
                }
                div { class: "hero__right",
                    LiveWeather {}
                }
            }

            section { class: "features",
                for (icon, title) in features() {
                    div { key: "{icon}", class: "feature-card",
                        span { class: "feature-card__icon", "{icon}" }
                        h3 { "{title}" }
                        p { {t!("feature-smart-service")} }
                        span { class: "feature-card__cta", {t!("feature-explore")} }
                    }
                }
            }

            QuoteRotator {}
            VegetablePriceStrip {}
            MarketPriceBoard {}
        }
    }
}
