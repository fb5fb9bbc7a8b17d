use dioxus::prelude::*;

use crate::core::{format, timing};
use crate::t;

use super::{Category, SellerRecord};

/// Delay between consecutive card reveals.
const REVEAL_STAGGER_MS: u64 = 100;

#[component]
pub fn SellerCard(seller: SellerRecord, index: usize) -> Element {
    crate::i18n::use_language();
    let mut visible = use_signal(|| false);
    timing::use_timeout(index as u64 * REVEAL_STAGGER_MS, move || visible.set(true));

    let class = if visible() {
        "seller-card seller-card--visible"
    } else {
        "seller-card"
    };
    let rating = format::format_rating(seller.rating);

    rsx! {
        article { class: "{class}",
            div { class: "seller-card__media",
                img { src: seller.image, alt: seller.name }
                div { class: "seller-card__overlay",
                    span { {t!("market-view-profile")} }
                }
                if seller.verified {
                    div { class: "seller-card__verified", {t!("market-verified")} }
                }
            }

            div { class: "seller-card__body",
                div { class: "seller-card__header",
                    h3 { class: "seller-card__name", "{seller.name}" }
                    span { class: "seller-card__rating", "⭐ {rating}" }
                }
                div { class: "seller-card__location", "📍 {seller.location}" }
                div { class: "seller-card__response",
                    {t!("market-responds-in", time = seller.response_time)}
                }

                div { class: "seller-card__products",
                    span { class: "seller-card__products-label", {t!("market-products")} }
                    div { class: "seller-card__tags",
                        for product in seller.products.iter() {
                            span { key: "{product}", class: "seller-card__tag", "{product}" }
                        }
                    }
                }

                div { class: "seller-card__actions",
                    button { r#type: "button", class: "button button--primary",
                        {t!("market-contact")}
                    }
                    button { r#type: "button", class: "button button--ghost",
                        {t!("market-view-products")}
                    }
                }
            }
        }
    }
}

#[component]
pub fn CategoryFilter(active: Signal<Category>) -> Element {
    crate::i18n::use_language();
    let mut active = active;
    let current = active();

    rsx! {
        div { class: "category-filter",
            button {
                r#type: "button",
                class: category_class(current == Category::All),
                onclick: move |_| active.set(Category::All),
                {category_label(Category::All)}
            }
            for category in Category::FILTERS {
                button {
                    key: "{category:?}",
                    r#type: "button",
                    class: category_class(current == category),
                    onclick: move |_| active.set(category),
                    {category_label(category)}
                }
            }
        }
    }
}

#[component]
pub fn SellerSearchBar(search: Signal<String>) -> Element {
    crate::i18n::use_language();
    let mut search = search;
    rsx! {
        div { class: "market-search",
            input {
                r#type: "text",
                class: "market-search__input",
                placeholder: t!("market-search-placeholder"),
                value: "{search}",
                oninput: move |evt| search.set(evt.value()),
            }
        }
    }
}

fn category_class(active: bool) -> &'static str {
    if active {
        "category-filter__button category-filter__button--active"
    } else {
        "category-filter__button"
    }
}

fn category_label(category: Category) -> String {
    match category {
        Category::All => t!("market-category-all"),
        Category::Vegetables => t!("market-category-vegetables"),
        Category::Fruits => t!("market-category-fruits"),
        Category::Grains => t!("market-category-grains"),
        Category::Spices => t!("market-category-spices"),
        Category::Organic => t!("market-category-organic"),
    }
}
