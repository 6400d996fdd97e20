//! Error types for registry operations.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Errors surfaced to API callers.
///
/// Every variant maps to a fixed status code and detail message.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student already signed up")]
    AlreadySignedUp,

    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::ActivityNotFound => StatusCode::NOT_FOUND,
            Error::AlreadySignedUp => StatusCode::BAD_REQUEST,
            Error::NotSignedUp => StatusCode::NOT_FOUND,
        };

        let body = Json(json!({ "detail": self.to_string() }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
