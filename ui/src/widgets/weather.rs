//! Home page weather card.
//!
//! Shows a fixed snapshot immediately and overlays live temperature and wind
//! from Open-Meteo once they arrive. A failed fetch keeps the snapshot and
//! adds a short notice.

use api::{ApiError, CurrentWeather, HttpWeatherClient, WeatherClient};
use dioxus::prelude::*;
use tracing::{info, warn};

use crate::core::format;
use crate::core::geo::{Coordinate, HYDERABAD};
use crate::t;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherSnapshot {
    pub icon: &'static str,
    pub temperature: f64,
    pub condition: &'static str,
    pub humidity: u8,
    pub wind: f64,
    pub rainfall_mm: f64,
    pub uv_index: u8,
}

pub const STATIC_SNAPSHOT: WeatherSnapshot = WeatherSnapshot {
    icon: "⛅",
    temperature: 28.0,
    condition: "Partly Cloudy",
    humidity: 65,
    wind: 10.0,
    rainfall_mm: 2.0,
    uv_index: 5,
};

impl WeatherSnapshot {
    pub fn with_live(self, live: CurrentWeather) -> Self {
        Self {
            temperature: live.temperature,
            wind: live.windspeed,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeatherStatus {
    Loading,
    Live(CurrentWeather),
    Unavailable,
}

impl WeatherStatus {
    pub fn snapshot(self) -> WeatherSnapshot {
        match self {
            WeatherStatus::Live(live) => STATIC_SNAPSHOT.with_live(live),
            WeatherStatus::Loading | WeatherStatus::Unavailable => STATIC_SNAPSHOT,
        }
    }
}

pub async fn fetch_current<C: WeatherClient>(
    client: &C,
    at: Coordinate,
) -> Result<CurrentWeather, ApiError> {
    let outcome = client.current(at.lat, at.lng).await;
    match &outcome {
        Ok(live) => info!(temperature = live.temperature, "weather updated"),
        Err(err) => warn!("weather unavailable: {err}"),
    }
    outcome
}

async fn refresh(client: HttpWeatherClient, mut status: Signal<WeatherStatus>) {
    status.set(WeatherStatus::Loading);
    let next = match fetch_current(&client, HYDERABAD).await {
        Ok(live) => WeatherStatus::Live(live),
        Err(_) => WeatherStatus::Unavailable,
    };
    status.set(next);
}

#[component]
pub fn LiveWeather() -> Element {
    crate::i18n::use_language();
    let status = use_signal(|| WeatherStatus::Loading);
    let client = use_hook(HttpWeatherClient::default);

    let initial = client.clone();
    use_hook(move || spawn(refresh(initial, status)));

    let current = status();
    let shown = current.snapshot();
    let refreshing = current == WeatherStatus::Loading;
    let temperature = format::format_temperature(shown.temperature);
    let wind = format::format_wind(shown.wind);

    rsx! {
        div { class: "weather-card",
            h3 { class: "weather-card__title", {t!("weather-live-title")} }
            div { class: "weather-card__main",
                span { class: "weather-card__icon", "{shown.icon}" }
                span { class: "weather-card__temp", "{temperature}" }
            }
            p { class: "weather-card__condition", "{shown.condition}" }

            div { class: "weather-card__details",
                div { class: "weather-card__detail",
                    "💧 "
                    span { "{shown.humidity}%" }
                    " "
                    {t!("weather-humidity")}
                }
                div { class: "weather-card__detail",
                    "💨 "
                    span { "{wind}" }
                    " "
                    {t!("weather-wind")}
                }
                div { class: "weather-card__detail",
                    "🌧 "
                    span { "{shown.rainfall_mm} mm" }
                    " "
                    {t!("weather-rain")}
                }
                div { class: "weather-card__detail",
                    "☀️ "
                    span { "{shown.uv_index}" }
                    " "
                    {t!("weather-uv")}
                }
            }

            if current == WeatherStatus::Unavailable {
                p { class: "weather-card__notice", {t!("weather-unavailable")} }
            }

            button {
                r#type: "button",
                class: "weather-card__refresh",
                disabled: refreshing,
                onclick: move |_| {
                    spawn(refresh(client.clone(), status));
                },
                if refreshing { {t!("weather-refreshing")} } else { {t!("weather-refresh")} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    struct FixedWeather(Result<CurrentWeather, ApiError>);

    impl WeatherClient for FixedWeather {
        async fn current(&self, _lat: f64, _lng: f64) -> Result<CurrentWeather, ApiError> {
            self.0.clone()
        }
    }

    #[test]
    fn live_values_overlay_temperature_and_wind_only() {
        let live = CurrentWeather {
            temperature: 31.4,
            windspeed: 7.2,
        };
        let shown = WeatherStatus::Live(live).snapshot();
        assert_eq!(shown.temperature, 31.4);
        assert_eq!(shown.wind, 7.2);
        assert_eq!(shown.humidity, 65);
        assert_eq!(shown.condition, "Partly Cloudy");
    }

    #[test]
    fn unavailable_keeps_static_values() {
        assert_eq!(WeatherStatus::Unavailable.snapshot(), STATIC_SNAPSHOT);
    }

    #[test]
    fn fetch_passes_errors_through() {
        let client = FixedWeather(Err(ApiError::Status { status: 503 }));
        let err = block_on(fetch_current(&client, HYDERABAD)).unwrap_err();
        assert_eq!(err, ApiError::Status { status: 503 });
    }
}
