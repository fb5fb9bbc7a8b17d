//! Crop predictor client.
//!
//! Wire format (JSON both ways):
//! ```text
//! POST /predict
//! { "n": 45.5, "p": 60.0, "k": 30.25, "ph": 6.5,
//!   "soil_type": "Loamy soil", "water_sources": ["borewell", "rainfall"],
//!   "lat": 17.38, "lng": 78.48 }
//!
//! 200 OK
//! { "top_crops": [ { "crop": "Rice", "confidence": 88.0 }, ... ],
//!   "retrieved_weather": { ... } }   // ignored
//! ```
//! Non-finite numbers (failed form parses) serialise as `null`, which is what
//! the browser's `JSON.stringify` produced for the same input.

use std::future::Future;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{ApiError, PREDICT_ENDPOINT};

/// Body of a prediction request.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PredictionRequest {
    pub n: f64,
    pub p: f64,
    pub k: f64,
    pub ph: f64,
    pub soil_type: String,
    pub water_sources: Vec<String>,
    pub lat: f64,
    pub lng: f64,
}

/// One ranked entry. Older predictor builds send bare crop names, so the
/// confidence is optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(from = "RankedCropWire")]
pub struct RankedCrop {
    pub crop: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl RankedCrop {
    pub fn new(crop: impl Into<String>, confidence: f64) -> Self {
        Self {
            crop: crop.into(),
            confidence: Some(confidence),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RankedCropWire {
    Scored {
        crop: String,
        #[serde(default)]
        confidence: Option<f64>,
    },
    Bare(String),
}

impl From<RankedCropWire> for RankedCrop {
    fn from(wire: RankedCropWire) -> Self {
        match wire {
            RankedCropWire::Scored { crop, confidence } => Self { crop, confidence },
            RankedCropWire::Bare(crop) => Self {
                crop,
                confidence: None,
            },
        }
    }
}

/// Predictor response. A missing `top_crops` key means "no recommendations".
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct PredictionResponse {
    #[serde(default)]
    pub top_crops: Vec<RankedCrop>,
}

/// Anything that can answer a prediction request.
///
/// The UI holds a `HttpPredictionClient`; tests substitute recording mocks.
pub trait PredictionClient {
    fn predict(
        &self,
        request: &PredictionRequest,
    ) -> impl Future<Output = Result<PredictionResponse, ApiError>>;
}

#[derive(Debug, Clone)]
pub struct HttpPredictionClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpPredictionClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpPredictionClient {
    fn default() -> Self {
        Self::new(PREDICT_ENDPOINT)
    }
}

impl PredictionClient for HttpPredictionClient {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse, ApiError> {
        debug!(endpoint = %self.endpoint, soil = %request.soil_type, "posting prediction request");

        let response = self.http.post(&self.endpoint).json(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "predictor rejected request");
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        decode_response(&body)
    }
}

/// Parse a predictor response body.
pub fn decode_response(body: &str) -> Result<PredictionResponse, ApiError> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_request() -> PredictionRequest {
        PredictionRequest {
            n: 45.5,
            p: 60.0,
            k: 30.25,
            ph: 6.5,
            soil_type: "Loamy soil".into(),
            water_sources: vec!["borewell".into(), "rainfall".into()],
            lat: 17.385,
            lng: 78.4867,
        }
    }

    #[test]
    fn request_uses_backend_field_names() {
        let value = serde_json::to_value(sample_request()).unwrap();
        assert_eq!(
            value,
            json!({
                "n": 45.5,
                "p": 60.0,
                "k": 30.25,
                "ph": 6.5,
                "soil_type": "Loamy soil",
                "water_sources": ["borewell", "rainfall"],
                "lat": 17.385,
                "lng": 78.4867,
            })
        );
    }

    #[test]
    fn nan_fields_serialise_as_null() {
        let mut req = sample_request();
        req.k = f64::NAN;
        let value = serde_json::to_value(req).unwrap();
        assert!(value["k"].is_null());
        assert_eq!(value["n"], json!(45.5));
    }

    #[test]
    fn decodes_scored_and_bare_entries() {
        let parsed = decode_response(
            r#"{"top_crops":[{"crop":"Rice","confidence":88},"Maize"],"retrieved_weather":{"hum":61.2}}"#,
        )
        .unwrap();
        assert_eq!(
            parsed.top_crops,
            vec![
                RankedCrop::new("Rice", 88.0),
                RankedCrop {
                    crop: "Maize".into(),
                    confidence: None
                },
            ]
        );
    }

    #[test]
    fn missing_top_crops_is_empty() {
        let parsed = decode_response(r#"{"detail":"ok"}"#).unwrap();
        assert!(parsed.top_crops.is_empty());
    }

    #[test]
    fn garbage_body_is_a_decode_error() {
        let err = decode_response("<html>502</html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn default_client_targets_local_backend() {
        assert_eq!(HttpPredictionClient::default().endpoint(), PREDICT_ENDPOINT);
    }
}
