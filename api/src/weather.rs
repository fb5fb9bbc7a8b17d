//! Current conditions from Open-Meteo.
//!
//! `GET {WEATHER_ENDPOINT}?latitude=..&longitude=..&current_weather=true`
//! and read `current_weather.{temperature, windspeed}`. No caching, no retry.

use std::future::Future;

use serde::Deserialize;
use tracing::debug;

use crate::{ApiError, WEATHER_ENDPOINT};

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct CurrentWeather {
    /// Degrees Celsius.
    pub temperature: f64,
    /// km/h.
    pub windspeed: f64,
}

#[derive(Deserialize)]
struct ForecastResponse {
    current_weather: CurrentWeather,
}

pub trait WeatherClient {
    fn current(
        &self,
        lat: f64,
        lng: f64,
    ) -> impl Future<Output = Result<CurrentWeather, ApiError>>;
}

#[derive(Debug, Clone)]
pub struct HttpWeatherClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpWeatherClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl Default for HttpWeatherClient {
    fn default() -> Self {
        Self::new(WEATHER_ENDPOINT)
    }
}

impl WeatherClient for HttpWeatherClient {
    async fn current(&self, lat: f64, lng: f64) -> Result<CurrentWeather, ApiError> {
        debug!(lat, lng, "fetching current weather");
        let response = self
            .http
            .get(&self.endpoint)
            .query(&query_params(lat, lng))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        decode_current(&body)
    }
}

fn query_params(lat: f64, lng: f64) -> [(&'static str, String); 3] {
    [
        ("latitude", lat.to_string()),
        ("longitude", lng.to_string()),
        ("current_weather", "true".to_string()),
    ]
}

/// Extract `current_weather` from a forecast body.
pub fn decode_current(body: &str) -> Result<CurrentWeather, ApiError> {
    let parsed: ForecastResponse = serde_json::from_str(body)?;
    Ok(parsed.current_weather)
}
