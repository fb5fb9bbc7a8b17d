//! Crop prediction: soil form, farm location picker, request flow and results.

mod flow;
mod form;
mod geolocation;
mod map;
mod results;
mod view;

pub use flow::{build_request, request_prediction, submit, PredictionError, PredictionState};
pub use form::{parse_float, split_water_sources, SoilField, SoilForm, SoilSample, SoilType};
pub use geolocation::{current_position, GeolocationError};
pub use map::{
    marker_script, mount_script, recenter_script, unmount_script, LocationPicker, MapEvent,
    MAP_ELEMENT_ID, RELAYOUT_DELAY_MS,
};
pub use results::{result_rows, PredictionResults, RankTier, ResultRow};
pub use view::{alert_text, CropPredictor};
