//! Formatting helpers for presenting numbers.

/// `88.0` -> `"88%"`, `72.5` -> `"72.5%"` (shortest round-trip form, no padding).
pub fn format_percent(value: f64) -> String {
    format!("{value}%")
}

pub fn format_rating(value: f32) -> String {
    format!("{value:.1}")
}

pub fn format_temperature(celsius: f64) -> String {
    format!("{celsius}°C")
}

pub fn format_wind(kmh: f64) -> String {
    format!("{kmh} km/h")
}

/// Width style for a 0–100 bar, clamped so bad confidences don't overflow the track.
pub fn bar_width(percent: f64) -> String {
    let clamped = if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    };
    format!("width: {clamped}%;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_drops_trailing_zero() {
        assert_eq!(format_percent(88.0), "88%");
        assert_eq!(format_percent(72.45), "72.45%");
    }

    #[test]
    fn bar_width_is_clamped() {
        assert_eq!(bar_width(140.0), "width: 100%;");
        assert_eq!(bar_width(-3.0), "width: 0%;");
        assert_eq!(bar_width(f64::NAN), "width: 0%;");
        assert_eq!(bar_width(61.5), "width: 61.5%;");
    }

    #[test]
    fn weather_units() {
        assert_eq!(format_temperature(28.0), "28°C");
        assert_eq!(format_wind(12.5), "12.5 km/h");
        assert_eq!(format_rating(4.8), "4.8");
    }
}
