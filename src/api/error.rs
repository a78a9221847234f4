//! Error type for the habit service client.

use thiserror::Error;

/// Errors returned by [`HabitClient`](super::HabitClient) operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {source}")]
    Build {
        #[source]
        source: reqwest::Error,
    },

    /// The request could not complete (DNS, connect, timeout, reset, or a
    /// payload that failed to serialize).
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response body was not the JSON we expected.
    #[error("Failed to decode response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    /// A successful response carried no body where a habit was expected.
    #[error("Response body was empty")]
    EmptyBody,
}

impl ApiError {
    /// Build a status error from the raw response body text.
    ///
    /// Uses the body as the message when present, otherwise a synthesized one.
    pub fn from_status(status: u16, body: &str) -> Self {
        let body = body.trim();
        let message = if body.is_empty() {
            format!("Request failed with status {}", status)
        } else {
            body.to_string()
        };
        ApiError::Status { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
