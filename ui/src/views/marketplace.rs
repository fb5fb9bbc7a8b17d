use dioxus::prelude::*;

use crate::i18n;
use crate::market::{
    visible_sellers, Category, CategoryFilter, SellerCard, SellerQuery, SellerSearchBar, SortKey,
    SELLERS,
};
use crate::t;

fn stats() -> [(&'static str, String); 3] {
    [
        ("500+", t!("market-stat-sellers")),
        ("50+", t!("market-stat-categories")),
        ("10K+", t!("market-stat-products")),
    ]
}

#[component]
pub fn Marketplace() -> Element {
    i18n::use_language();
    let search = use_signal(String::new);
    let category = use_signal(Category::default);
    let mut sort = use_signal(SortKey::default);

    let query = SellerQuery {
        search: search(),
        category: category(),
        sort: sort(),
    };
    let sellers = visible_sellers(&SELLERS, &query);
    let count = sellers.len();
    let current_sort = sort();

    rsx! {
        section { class: "page page-market",
            div { class: "market-hero",
                h1 { class: "market-hero__title", {t!("market-title")} }
                p { class: "market-hero__subtitle", {t!("market-subtitle")} }
                SellerSearchBar { search }
                div { class: "market-hero__stats",
                    for (number, label) in stats() {
                        div { key: "{number}", class: "market-stat",
                            span { class: "market-stat__number", "{number}" }
                            span { class: "market-stat__label", "{label}" }
                        }
                    }
                }
            }

            div { class: "market-controls",
                CategoryFilter { active: category }
                div { class: "market-sort",
                    label { r#for: "market-sort", {t!("market-sort-label")} }
                    select {
                        id: "market-sort",
                        onchange: move |evt| {
                            if let Ok(next) = evt.value().parse::<SortKey>() {
                                sort.set(next);
                            }
                        },
                        option {
                            value: SortKey::Rating.as_str(),
                            selected: current_sort == SortKey::Rating,
                            {t!("market-sort-rating")}
                        }
                        option {
                            value: SortKey::Name.as_str(),
                            selected: current_sort == SortKey::Name,
                            {t!("market-sort-name")}
                        }
                    }
                }
            }

            p { class: "market-count", {t!("market-found", count = count)} }

            if sellers.is_empty() {
                div { class: "market-empty",
                    span { class: "market-empty__icon", "🔍" }
                    h3 { {t!("market-empty-title")} }
                    p { {t!("market-empty-hint")} }
                }
            } else {
                div { class: "seller-grid",
                    for (index, seller) in sellers.into_iter().enumerate() {
                        SellerCard { key: "{seller.id}", seller, index }
                    }
                }
            }
        }
    }
}
