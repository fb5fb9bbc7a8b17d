//! Coordinates and map defaults.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair identifying the selected farm location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// `"17.3850, 78.4867"`
    pub fn label(&self) -> String {
        format!("{:.4}, {:.4}", self.lat, self.lng)
    }
}

/// Initial map view before geolocation answers (centre of India).
pub const DEFAULT_CENTER: Coordinate = Coordinate::new(20.5937, 78.9629);

pub const DEFAULT_ZOOM: u8 = 13;

/// Where the home weather card reads conditions for.
pub const HYDERABAD: Coordinate = Coordinate::new(17.3850, 78.4867);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_uses_four_decimals() {
        assert_eq!(HYDERABAD.label(), "17.3850, 78.4867");
        assert_eq!(Coordinate::new(-3.5, 0.0).label(), "-3.5000, 0.0000");
    }
}
