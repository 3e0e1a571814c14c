//! Maps adapter failures onto the JSON error envelope.

use reqwest::StatusCode;

use crate::core::models::ErrorResponse;
use crate::errors::TwitterError;

pub const NO_TWEETS_MESSAGE: &str = "No tweets to delete";

/// Translates a [`TwitterError`] into the status code and message returned to
/// the caller. Failures without a remote response surface as 500.
#[must_use]
pub fn map_twitter_error(error: &TwitterError) -> ErrorResponse {
    match error {
        TwitterError::Transport(cause) | TwitterError::Decode(cause) | TwitterError::Config(cause) => {
            ErrorResponse::new(500, format!("Error: {cause}"))
        }
        TwitterError::NotFound => ErrorResponse::new(404, NO_TWEETS_MESSAGE),
        TwitterError::Remote { status, .. } => map_remote_status(*status),
    }
}

/// Fixed table for status codes reported by the remote platform.
#[must_use]
pub fn map_remote_status(status: StatusCode) -> ErrorResponse {
    let code = status.as_u16();
    match code {
        400 => ErrorResponse::new(code, "Bad request: Invalid parameters"),
        401 => ErrorResponse::new(code, "Unauthorized: Check your API keys and tokens"),
        403 => ErrorResponse::new(
            code,
            "Forbidden: You may not have permission to perform this action",
        ),
        404 => ErrorResponse::new(code, "Not found: Tweet not found"),
        429 => ErrorResponse::new(code, "Rate limit exceeded: Try again later"),
        500 => ErrorResponse::new(code, "Twitter internal server error: Try again later"),
        _ => ErrorResponse::new(code, format!("Unexpected error: {}", status_text(status))),
    }
}

/// `"<code> <reason>"`, or just the code when no reason phrase is known.
#[must_use]
pub fn status_text(status: StatusCode) -> String {
    let code = status.as_u16();
    match status.canonical_reason().or_else(|| twitter_reason(code)) {
        Some(reason) => format!("{code} {reason}"),
        None => code.to_string(),
    }
}

// Codes Twitter has used that have no IANA reason phrase.
fn twitter_reason(code: u16) -> Option<&'static str> {
    match code {
        420 => Some("Enhance Your Calm"),
        _ => None,
    }
}
