//! Seller directory and mock price boards.

mod filter;
pub use filter::{
    compare_names, matches_search, visible_sellers, Category, SellerQuery, SortKey,
};

mod prices;
pub use prices::{search_prices, MarketPrice, VegetablePrice, MARKET_PRICES, VEGETABLE_PRICES};

mod sellers;
pub use sellers::{SellerRecord, SELLERS};

mod view;
pub use view::{CategoryFilter, SellerCard, SellerSearchBar};

mod price_board;
pub use price_board::{MarketPriceBoard, VegetablePriceStrip};
