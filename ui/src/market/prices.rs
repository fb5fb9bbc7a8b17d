//! Mock price boards shown on the home page.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketPrice {
    pub crop: &'static str,
    pub market: &'static str,
    pub price: &'static str,
    pub change: &'static str,
}

impl MarketPrice {
    pub fn is_rising(&self) -> bool {
        self.change.starts_with('+')
    }
}

pub static MARKET_PRICES: [MarketPrice; 6] = [
    MarketPrice { crop: "Paddy", market: "Madhya Pradesh", price: "₹2,200/quintal", change: "+3.2%" },
    MarketPrice { crop: "Wheat", market: "Punjab", price: "₹2,150/quintal", change: "+1.8%" },
    MarketPrice { crop: "Cotton", market: "Gujarat", price: "₹6,500/quintal", change: "-2.1%" },
    MarketPrice { crop: "Soybean", market: "Maharashtra", price: "₹4,800/quintal", change: "+5.4%" },
    MarketPrice { crop: "Maize", market: "Karnataka", price: "₹1,900/quintal", change: "+0.5%" },
    MarketPrice { crop: "Groundnut", market: "Telangana", price: "₹5,200/quintal", change: "+2.3%" },
];

/// Crop-name search, case-insensitive.
pub fn search_prices<'a>(prices: &'a [MarketPrice], term: &str) -> Vec<&'a MarketPrice> {
    let needle = term.to_lowercase();
    prices
        .iter()
        .filter(|row| row.crop.to_lowercase().contains(&needle))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VegetablePrice {
    pub name: &'static str,
    pub icon: &'static str,
    pub price: &'static str,
}

pub static VEGETABLE_PRICES: [VegetablePrice; 5] = [
    VegetablePrice { name: "Tomato", icon: "🍅", price: "₹25/kg" },
    VegetablePrice { name: "Onion", icon: "🧅", price: "₹30/kg" },
    VegetablePrice { name: "Potato", icon: "🥔", price: "₹22/kg" },
    VegetablePrice { name: "Chilli", icon: "🌶️", price: "₹60/kg" },
    VegetablePrice { name: "Carrot", icon: "🥕", price: "₹45/kg" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_search_matches_crop_fragment() {
        let hits = search_prices(&MARKET_PRICES, "nut");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].crop, "Groundnut");
        assert_eq!(search_prices(&MARKET_PRICES, "").len(), MARKET_PRICES.len());
        assert!(search_prices(&MARKET_PRICES, "saffron").is_empty());
    }

    #[test]
    fn falling_prices_are_flagged() {
        let cotton = MARKET_PRICES.iter().find(|r| r.crop == "Cotton").unwrap();
        assert!(!cotton.is_rising());
        assert!(MARKET_PRICES[0].is_rising());
    }
}
