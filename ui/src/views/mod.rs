//! Routed pages.

mod auth;
mod home;
mod marketplace;
mod recommendations;
mod weather;

pub use auth::{Login, Signup, UserRole, SIMULATED_SUBMIT_MS};
pub use home::Home;
pub use marketplace::Marketplace;
pub use recommendations::Recommendations;
pub use weather::Weather;

