//! Platform-agnostic building blocks shared by every page.

pub mod format;
pub mod geo;
pub mod platform;
pub mod timing;
