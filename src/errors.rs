use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TwitterError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to send HTTP request: {0}")]
    Transport(String),

    #[error("Twitter API returned {status}: {detail}")]
    Remote { status: StatusCode, detail: String },

    #[error("Failed to decode Twitter response: {0}")]
    Decode(String),

    #[error("No tweets found")]
    NotFound,
}

impl TwitterError {
    /// Remote status code, if the platform answered at all.
    #[must_use]
    pub fn remote_status(&self) -> Option<StatusCode> {
        match self {
            TwitterError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TwitterError {
    fn from(error: reqwest::Error) -> Self {
        TwitterError::Transport(error.to_string())
    }
}

impl From<serde_json::Error> for TwitterError {
    fn from(error: serde_json::Error) -> Self {
        TwitterError::Decode(error.to_string())
    }
}
