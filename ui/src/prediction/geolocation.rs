//! Browser geolocation through the webview.

use dioxus::prelude::*;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::geo::Coordinate;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GeolocationError {
    #[error("geolocation is not available")]
    Unavailable,
    #[error("location request denied: {0}")]
    Denied(String),
}

/// What the position script sends back.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub(crate) enum GeolocationReply {
    Ok { latitude: f64, longitude: f64 },
    Unavailable,
    Denied { message: String },
}

impl GeolocationReply {
    pub(crate) fn into_result(self) -> Result<Coordinate, GeolocationError> {
        match self {
            GeolocationReply::Ok {
                latitude,
                longitude,
            } => Ok(Coordinate::new(latitude, longitude)),
            GeolocationReply::Unavailable => Err(GeolocationError::Unavailable),
            GeolocationReply::Denied { message } => Err(GeolocationError::Denied(message)),
        }
    }
}

const POSITION_SCRIPT: &str = r#"
if (!("geolocation" in navigator)) {
    dioxus.send({ status: "unavailable" });
} else {
    const reply = await new Promise((resolve) => {
        navigator.geolocation.getCurrentPosition(
            (pos) => resolve({
                status: "ok",
                latitude: pos.coords.latitude,
                longitude: pos.coords.longitude,
            }),
            (err) => resolve({ status: "denied", message: err.message || "" }),
            { enableHighAccuracy: true },
        );
    });
    dioxus.send(reply);
}
"#;

/// One high-accuracy position fix.
pub async fn current_position() -> Result<Coordinate, GeolocationError> {
    let mut eval = document::eval(POSITION_SCRIPT);
    let reply = match eval.recv::<GeolocationReply>().await {
        Ok(reply) => reply,
        Err(err) => {
            warn!("geolocation bridge failed: {err:?}");
            return Err(GeolocationError::Unavailable);
        }
    };
    debug!(?reply, "geolocation reply");
    reply.into_result()
}
