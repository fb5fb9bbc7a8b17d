//! Submission flow for the crop predictor.
//!
//! `build_request` is the synchronous gate (no location, no request);
//! `request_prediction` performs the single POST; `PredictionState` holds the
//! loading flag and the current result list.

use api::{ApiError, PredictionClient, PredictionRequest, RankedCrop};
use thiserror::Error;
use tracing::{info, warn};

use crate::core::geo::Coordinate;

use super::form::SoilForm;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PredictionError {
    #[error("no farm location selected")]
    MissingLocation,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Turn the form and the picked location into a request body.
pub fn build_request(
    form: &SoilForm,
    location: Option<Coordinate>,
) -> Result<PredictionRequest, PredictionError> {
    let at = location.ok_or(PredictionError::MissingLocation)?;
    Ok(form.sample().into_request(at))
}

/// One request, no retry. The ranked list comes back in server order.
pub async fn request_prediction<C: PredictionClient>(
    client: &C,
    request: &PredictionRequest,
) -> Result<Vec<RankedCrop>, PredictionError> {
    info!(lat = request.lat, lng = request.lng, "requesting crop prediction");
    let response = client.predict(request).await.map_err(|err| {
        warn!("prediction failed: {err}");
        PredictionError::from(err)
    })?;
    info!(count = response.top_crops.len(), "prediction received");
    Ok(response.top_crops)
}

/// Validate, then request.
pub async fn submit<C: PredictionClient>(
    client: &C,
    form: &SoilForm,
    location: Option<Coordinate>,
) -> Result<Vec<RankedCrop>, PredictionError> {
    let request = build_request(form, location)?;
    request_prediction(client, &request).await
}

/// Loading flag plus the rendered results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionState {
    pub results: Vec<RankedCrop>,
    pub loading: bool,
}

impl PredictionState {
    /// Enter the loading state and clear previous results.
    /// Returns `false` if a request is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.results.clear();
        true
    }

    /// Leave the loading state. Success replaces the results; failure leaves
    /// them empty and hands the error back for the alert.
    pub fn finish(
        &mut self,
        outcome: Result<Vec<RankedCrop>, PredictionError>,
    ) -> Result<(), PredictionError> {
        self.loading = false;
        match outcome {
            Ok(results) => {
                self.results = results;
                Ok(())
            }
            Err(err) => {
                self.results.clear();
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_blocks_a_second_request() {
        let mut state = PredictionState {
            results: vec![RankedCrop::new("Wheat", 40.0)],
            loading: false,
        };
        assert!(state.begin());
        assert!(state.results.is_empty());
        assert!(!state.begin());
        assert!(state.loading);
    }

    #[test]
    fn success_replaces_results() {
        let mut state = PredictionState::default();
        state.begin();
        state
            .finish(Ok(vec![RankedCrop::new("Rice", 88.0)]))
            .unwrap();
        assert!(!state.loading);
        assert_eq!(state.results, vec![RankedCrop::new("Rice", 88.0)]);

        state.begin();
        state
            .finish(Ok(vec![RankedCrop::new("Maize", 51.0)]))
            .unwrap();
        assert_eq!(state.results, vec![RankedCrop::new("Maize", 51.0)]);
    }

    #[test]
    fn failure_leaves_results_empty() {
        let mut state = PredictionState::default();
        state.begin();
        let err = state
            .finish(Err(ApiError::Status { status: 500 }.into()))
            .unwrap_err();
        assert!(!state.loading);
        assert!(state.results.is_empty());
        assert_eq!(err.to_string(), "server responded with status 500");
    }

    #[test]
    fn missing_location_is_rejected_before_any_request() {
        let err = build_request(&SoilForm::default(), None).unwrap_err();
        assert_eq!(err, PredictionError::MissingLocation);
    }
}
