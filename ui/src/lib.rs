//! Shared UI crate for AgriGraud. Pages, widgets and client-side logic used
//! by both the web and desktop launchers live here.

use dioxus::prelude::*;

pub mod core;
pub mod i18n;
pub mod market;
pub mod prediction;
pub mod views;
pub mod widgets;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::{nav_link, register_nav, AppNavbar, NavBuilder, NavTarget};
}

/// Shared theme; desktop builds inline the same file with `include_str!`.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
