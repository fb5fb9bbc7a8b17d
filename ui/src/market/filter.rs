//! Search, category and sort over the seller directory.
//!
//! Everything here is a pure function of the current UI state; the view
//! recomputes the visible list on every render.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::sellers::SellerRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    All,
    Vegetables,
    Fruits,
    Grains,
    Spices,
    Organic,
}

impl Category {
    /// Selectable categories, in button order (`All` is rendered separately).
    pub const FILTERS: [Category; 5] = [
        Category::Vegetables,
        Category::Fruits,
        Category::Grains,
        Category::Spices,
        Category::Organic,
    ];

    /// Product-name fragments that place a seller in this category.
    /// Matching is a case-sensitive substring test against each product.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::Vegetables => &[
                "Tomatoes",
                "Green Chilies",
                "Spinach",
                "Potatoes",
                "Onions",
                "Garlic",
            ],
            Category::Fruits => &["Mangoes", "Bananas", "Papaya", "Coconut"],
            Category::Grains => &["Wheat", "Rice", "Moong", "Chickpeas"],
            Category::Spices => &["Turmeric", "Pepper", "Cardamom", "Mustard"],
            Category::All | Category::Organic => &[],
        }
    }

    pub fn matches(self, seller: &SellerRecord) -> bool {
        match self {
            Category::All => true,
            // Organic is a property of the seller, not of what they sell.
            Category::Organic => seller.name.to_lowercase().contains("organic"),
            _ => seller
                .products
                .iter()
                .any(|product| self.keywords().iter().any(|kw| product.contains(kw))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Vegetables => "vegetables",
            Category::Fruits => "fruits",
            Category::Grains => "grains",
            Category::Spices => "spices",
            Category::Organic => "organic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Rating,
    Name,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Rating => "rating",
            SortKey::Name => "name",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rating" => Ok(SortKey::Rating),
            "name" => Ok(SortKey::Name),
            other => Err(format!("unknown sort key `{other}`")),
        }
    }
}

/// Current marketplace UI state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SellerQuery {
    pub search: String,
    pub category: Category,
    pub sort: SortKey,
}

/// Case-insensitive substring match on name, location or any product.
/// An empty search matches everyone.
pub fn matches_search(seller: &SellerRecord, search: &str) -> bool {
    let needle = search.to_lowercase();
    seller.name.to_lowercase().contains(&needle)
        || seller.location.to_lowercase().contains(&needle)
        || seller
            .products
            .iter()
            .any(|product| product.to_lowercase().contains(&needle))
}

/// Alphabetical, ignoring case first so "agro" and "Agro" sort together.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Filter then stable-sort.
pub fn visible_sellers(sellers: &[SellerRecord], query: &SellerQuery) -> Vec<SellerRecord> {
    let mut visible: Vec<SellerRecord> = sellers
        .iter()
        .filter(|seller| matches_search(seller, &query.search) && query.category.matches(seller))
        .copied()
        .collect();

    match query.sort {
        SortKey::Rating => visible.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Name => visible.sort_by(|a, b| compare_names(a.name, b.name)),
    }

    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::SELLERS;

    fn names_in(category: Category) -> Vec<&'static str> {
        SELLERS
            .iter()
            .filter(|s| category.matches(s))
            .map(|s| s.name)
            .collect()
    }

    #[test]
    fn grains_pick_up_rice_and_pulses() {
        assert_eq!(
            names_in(Category::Grains),
            vec![
                "Sunrise Agri Solutions",
                "Desi Farms Organic",
                "Coastal Growers Assoc."
            ]
        );
    }

    #[test]
    fn organic_looks_at_seller_name_only() {
        // Green Valley sells "Organic Tomatoes" but isn't an organic seller.
        assert_eq!(
            names_in(Category::Organic),
            vec!["Organic Harvest Co.", "Desi Farms Organic"]
        );
    }

    #[test]
    fn vegetable_keywords_are_case_sensitive_fragments() {
        assert_eq!(
            names_in(Category::Vegetables),
            vec!["Green Valley Farms", "Kisan Connect"]
        );
        assert_eq!(
            names_in(Category::Spices),
            vec![
                "Sunrise Agri Solutions",
                "Organic Harvest Co.",
                "Coastal Growers Assoc."
            ]
        );
        assert_eq!(names_in(Category::All).len(), SELLERS.len());
    }

    #[test]
    fn rating_sort_is_stable_for_ties() {
        let ids: Vec<u32> = visible_sellers(&SELLERS, &SellerQuery::default())
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec![3, 1, 7, 4, 2, 8, 5, 6]);
    }

    #[test]
    fn search_covers_location_and_is_case_insensitive() {
        let query = SellerQuery {
            search: "PUNJAB".into(),
            ..Default::default()
        };
        let found = visible_sellers(&SELLERS, &query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Sunrise Agri Solutions");
    }

    #[test]
    fn search_and_category_combine() {
        let query = SellerQuery {
            search: "pepper".into(),
            category: Category::Organic,
            sort: SortKey::Name,
        };
        let names: Vec<_> = visible_sellers(&SELLERS, &query)
            .iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Organic Harvest Co."]);
    }

    #[test]
    fn sort_key_round_trips_through_select_values() {
        assert_eq!("name".parse::<SortKey>(), Ok(SortKey::Name));
        assert_eq!(SortKey::Rating.to_string(), "rating");
        let unknown = "price".parse::<SortKey>();
        assert!(unknown.is_err());
    }
}
