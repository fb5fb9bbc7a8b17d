//! HTTP clients and wire types for the services AgriGraud talks to.
//!
//! - `predict`: the crop predictor (`POST /predict` on a local backend).
//! - `weather`: current conditions from the public Open-Meteo forecast API.
//!
//! Both clients share `ApiError`; the UI turns its `Display` text into alerts.

mod error;
pub mod predict;
pub mod weather;

pub use error::ApiError;
pub use predict::{
    HttpPredictionClient, PredictionClient, PredictionRequest, PredictionResponse, RankedCrop,
};
pub use weather::{CurrentWeather, HttpWeatherClient, WeatherClient};

/// Crop predictor endpoint on the local backend.
pub const PREDICT_ENDPOINT: &str = "http://127.0.0.1:8000/predict";

/// Open-Meteo forecast endpoint (current conditions are requested via query).
pub const WEATHER_ENDPOINT: &str = "https://api.open-meteo.com/v1/forecast";
