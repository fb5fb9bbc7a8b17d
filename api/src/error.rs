use thiserror::Error;

/// Failure talking to an external service.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// Connection refused, DNS failure, CORS rejection and friends.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered, but not with a 2xx.
    #[error("server responded with status {status}")]
    Status { status: u16 },
    /// The body was not the JSON we expected.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Self::Decode(err.to_string());
        }
        match err.status() {
            Some(status) => Self::Status {
                status: status.as_u16(),
            },
            None => Self::Transport(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
