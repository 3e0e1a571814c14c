//! Response builders shared by the HTTP handlers.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::core::models::{ErrorResponse, Message};

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Returns a 200 OK response carrying the message as JSON.
#[must_use]
pub fn ok_message(message: Message) -> Response {
    (StatusCode::OK, Json(message)).into_response()
}

/// Returns an error envelope with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Response {
    ErrorResponse::new(status_code, message).into_response()
}
