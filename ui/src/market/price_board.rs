use dioxus::prelude::*;

use crate::t;

use super::{search_prices, MARKET_PRICES, VEGETABLE_PRICES};

/// Searchable crop price list; clicking a row highlights it.
#[component]
pub fn MarketPriceBoard() -> Element {
    crate::i18n::use_language();
    let mut term = use_signal(String::new);
    let mut selected = use_signal(|| Option::<&'static str>::None);

    let current_term = term();
    let rows = search_prices(&MARKET_PRICES, &current_term);

    rsx! {
        section { class: "price-board",
            h2 { class: "section-title", {t!("prices-title")} }
            input {
                r#type: "text",
                class: "price-board__search",
                placeholder: t!("prices-search-placeholder"),
                value: "{current_term}",
                oninput: move |evt| term.set(evt.value()),
            }

            ul { class: "price-board__rows",
                for row in rows.iter().copied() {
                    li {
                        key: "{row.crop}",
                        class: if selected() == Some(row.crop) { "price-board__row price-board__row--selected" } else { "price-board__row" },
                        onclick: move |_| selected.set(Some(row.crop)),
                        div {
                            h4 { class: "price-board__crop", "{row.crop}" }
                            p { class: "price-board__market", "{row.market}" }
                        }
                        div { class: "price-board__quote",
                            p { class: "price-board__price", "{row.price}" }
                            span {
                                class: if row.is_rising() { "price-board__change price-board__change--up" } else { "price-board__change price-board__change--down" },
                                "{row.change}"
                            }
                        }
                    }
                }
            }

            if rows.is_empty() {
                p { class: "price-board__empty",
                    {t!("prices-empty", term = current_term.clone())}
                }
            }
        }
    }
}

#[component]
pub fn VegetablePriceStrip() -> Element {
    crate::i18n::use_language();
    let cards = VEGETABLE_PRICES
        .iter()
        .enumerate()
        .map(|(idx, veg)| (veg, format!("animation-delay: {:.1}s;", idx as f32 * 0.1)));

    rsx! {
        section { class: "veg-prices",
            h2 { class: "section-title", {t!("veg-prices-title")} }
            div { class: "veg-prices__grid",
                for (veg, delay) in cards {
                    div {
                        key: "{veg.name}",
                        class: "veg-prices__card",
                        style: delay,
                        span { class: "veg-prices__icon", "{veg.icon}" }
                        h4 { "{veg.name}" }
                        p { class: "veg-prices__price", "{veg.price}" }
                    }
                }
            }
        }
    }
}
