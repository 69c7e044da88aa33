//! Error type for HTTP handlers and its mapping onto the wire.
//!
//! Every failure leaves the API as a single-key `{ "error": "..." }` body.
//! Client mistakes carry their message verbatim; anything coming from the
//! store is logged server-side and replaced with a fixed message, so
//! driver internals never reach a response body.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fauna_core::error::CoreError;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Domain error raised below the HTTP layer.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Failure reported by the MongoDB driver.
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Client mistake detected at the HTTP layer itself.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Server-side failure that is not a store error.
    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// JSON body extractor whose rejection speaks the API's error shape.
///
/// The stock `axum::Json` answers unreadable bodies with plain text;
/// funneling the rejection through [`AppError`] keeps the single-key JSON
/// contract on that path too.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(_: JsonRejection) -> Self {
        AppError::BadRequest("Invalid request body".to_string())
    }
}

impl AppError {
    /// The status and body message for this error.
    fn wire_form(&self) -> (StatusCode, String) {
        match self {
            AppError::Core(CoreError::NotFound { entity }) => {
                (StatusCode::NOT_FOUND, format!("{entity} not found"))
            }
            AppError::Core(CoreError::InvalidId) => {
                (StatusCode::BAD_REQUEST, "Invalid ID".to_string())
            }
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),

            AppError::Database(err) => {
                tracing::error!(error = %err, "Store operation failed");
                internal()
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        }
    }
}

fn internal() -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "An internal error occurred".to_string(),
    )
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.wire_form();
        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}
