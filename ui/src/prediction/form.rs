//! Soil form input and its conversion into a prediction request.
//!
//! The form keeps raw strings exactly as typed. Conversion is
//! lenient: numbers go through `parse_float` (browser `parseFloat` rules, so
//! `"12abc"` is 12 and `"abc"` is NaN) and nothing else is validated here.

use std::fmt;
use std::str::FromStr;

use api::PredictionRequest;

use crate::core::geo::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SoilType {
    #[default]
    Loamy,
    Alluvial,
    Black,
    Red,
    Sandy,
    Clay,
    Laterite,
}

impl SoilType {
    pub const ALL: [SoilType; 7] = [
        SoilType::Loamy,
        SoilType::Alluvial,
        SoilType::Black,
        SoilType::Red,
        SoilType::Sandy,
        SoilType::Clay,
        SoilType::Laterite,
    ];

    /// Label the predictor's encoder was trained on.
    pub fn as_str(self) -> &'static str {
        match self {
            SoilType::Loamy => "Loamy soil",
            SoilType::Alluvial => "Alluvial soil",
            SoilType::Black => "Black Soil",
            SoilType::Red => "Red soil",
            SoilType::Sandy => "Sandy soil",
            SoilType::Clay => "Clay soil",
            SoilType::Laterite => "Laterite soil",
        }
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SoilType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SoilType::ALL
            .into_iter()
            .find(|soil| soil.as_str() == s)
            .ok_or_else(|| format!("unknown soil type `{s}`"))
    }
}

/// Free-text fields of the soil form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoilField {
    Nitrogen,
    Phosphorus,
    Potassium,
    Ph,
    WaterSources,
}

impl SoilField {
    pub const NUMERIC: [SoilField; 4] = [
        SoilField::Nitrogen,
        SoilField::Phosphorus,
        SoilField::Potassium,
        SoilField::Ph,
    ];

    /// DOM id; matches the backend field name.
    pub fn id(self) -> &'static str {
        match self {
            SoilField::Nitrogen => "n",
            SoilField::Phosphorus => "p",
            SoilField::Potassium => "k",
            SoilField::Ph => "ph",
            SoilField::WaterSources => "water_sources",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            SoilField::Nitrogen => "e.g., 45.5",
            SoilField::Phosphorus => "e.g., 60.0",
            SoilField::Potassium => "e.g., 30.25",
            SoilField::Ph => "0-14",
            SoilField::WaterSources => "borewell, rainfall",
        }
    }
}

/// Raw form state, one string per input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SoilForm {
    pub n: String,
    pub p: String,
    pub k: String,
    pub ph: String,
    pub soil_type: SoilType,
    pub water_sources: String,
}

impl SoilForm {
    pub fn field(&self, field: SoilField) -> &str {
        match field {
            SoilField::Nitrogen => &self.n,
            SoilField::Phosphorus => &self.p,
            SoilField::Potassium => &self.k,
            SoilField::Ph => &self.ph,
            SoilField::WaterSources => &self.water_sources,
        }
    }

    pub fn field_mut(&mut self, field: SoilField) -> &mut String {
        match field {
            SoilField::Nitrogen => &mut self.n,
            SoilField::Phosphorus => &mut self.p,
            SoilField::Potassium => &mut self.k,
            SoilField::Ph => &mut self.ph,
            SoilField::WaterSources => &mut self.water_sources,
        }
    }

    pub fn sample(&self) -> SoilSample {
        SoilSample {
            n: parse_float(&self.n),
            p: parse_float(&self.p),
            k: parse_float(&self.k),
            ph: parse_float(&self.ph),
            soil_type: self.soil_type,
            water_sources: split_water_sources(&self.water_sources),
        }
    }
}

/// NPK (mg/kg), pH, soil type and water sources after parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct SoilSample {
    pub n: f64,
    pub p: f64,
    pub k: f64,
    pub ph: f64,
    pub soil_type: SoilType,
    pub water_sources: Vec<String>,
}

impl SoilSample {
    pub fn into_request(self, at: Coordinate) -> PredictionRequest {
        PredictionRequest {
            n: self.n,
            p: self.p,
            k: self.k,
            ph: self.ph,
            soil_type: self.soil_type.as_str().to_string(),
            water_sources: self.water_sources,
            lat: at.lat,
            lng: at.lng,
        }
    }
}

/// Comma-split and trim. Empty input yields a single empty entry.
pub fn split_water_sources(input: &str) -> Vec<String> {
    input.split(',').map(|s| s.trim().to_string()).collect()
}

/// `parseFloat`: skip leading whitespace, read the longest numeric prefix,
/// NaN if there is none.
pub fn parse_float(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut i = 0;

    let negative = bytes.first() == Some(&b'-');
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i = 1;
    }

    if s[i..].starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = i;
    while i < len && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if i < len && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < len && bytes[i].is_ascii_digit() {
            i += 1;
        }
        mantissa_digits += i - frac_start;
    }

    if mantissa_digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when at least one digit follows.
    if i < len && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < len && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    s[..i].parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_float_reads_numeric_prefix() {
        assert_eq!(parse_float("45.5"), 45.5);
        assert_eq!(parse_float("  6.5  "), 6.5);
        assert_eq!(parse_float("12abc"), 12.0);
        assert_eq!(parse_float("-.5"), -0.5);
        assert_eq!(parse_float("7."), 7.0);
        assert_eq!(parse_float("1e3kg"), 1000.0);
        assert_eq!(parse_float("2e"), 2.0);
        assert_eq!(parse_float("0x10"), 0.0);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn parse_float_without_digits_is_nan() {
        for raw in ["", "abc", ".", "-", "e5", "   "] {
            assert!(parse_float(raw).is_nan(), "{raw:?} should be NaN");
        }
    }

    #[test]
    fn water_sources_are_split_and_trimmed() {
        assert_eq!(
            split_water_sources(" borewell ,canal,  rainfall"),
            vec!["borewell", "canal", "rainfall"]
        );
        assert_eq!(split_water_sources(""), vec![""]);
        assert_eq!(split_water_sources("a,,b"), vec!["a", "", "b"]);
    }

    #[test]
    fn soil_types_round_trip_through_labels() {
        for soil in SoilType::ALL {
            assert_eq!(soil.as_str().parse::<SoilType>(), Ok(soil));
        }
        assert_eq!(SoilType::default().as_str(), "Loamy soil");
        assert!("Peat".parse::<SoilType>().is_err());
    }

    #[test]
    fn sample_carries_location_into_request() {
        let form = SoilForm {
            n: "40".into(),
            p: "55.5".into(),
            k: "n/a".into(),
            ph: "6.8".into(),
            soil_type: SoilType::Black,
            water_sources: "canal".into(),
        };
        let request = form.sample().into_request(Coordinate::new(17.0, 78.0));
        assert_eq!(request.n, 40.0);
        assert_eq!(request.p, 55.5);
        assert!(request.k.is_nan());
        assert_eq!(request.soil_type, "Black Soil");
        assert_eq!(request.water_sources, vec!["canal"]);
        assert_eq!((request.lat, request.lng), (17.0, 78.0));
    }

    #[test]
    fn field_accessors_cover_every_input() {
        let mut form = SoilForm::default();
        *form.field_mut(SoilField::Ph) = "7".into();
        *form.field_mut(SoilField::WaterSources) = "rain".into();
        assert_eq!(form.field(SoilField::Ph), "7");
        assert_eq!(form.water_sources, "rain");
        assert_eq!(SoilField::Potassium.id(), "k");
    }
}
