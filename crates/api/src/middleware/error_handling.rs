//! # Error Handling Middleware
//!
//! Maps pipeline failures onto the webhook's wire contract. Internally every
//! failure keeps its [`BookingError`] variant, which is logged; externally the
//! caller always sees the same generic 500 with a plain-text body.

use agenda_core::errors::BookingError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

/// Body returned with every failed webhook call.
pub const FAILURE_MESSAGE: &str = "Error processing message.";

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use agenda_api::middleware::error_handling::AppError;
/// use agenda_core::errors::BookingError;
///
/// fn handler() -> Result<&'static str, AppError> {
///     Err(BookingError::Validation("missing field `phone`".to_string()).into())
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub BookingError);

impl AppError {
    /// Every variant maps to 500: callers only ever learn that processing failed.
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            BookingError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BookingError::Completion(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BookingError::Gateway(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BookingError::Validation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BookingError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(kind = self.0.kind(), error = %self.0, "Webhook processing failed");

        (self.status_code(), FAILURE_MESSAGE).into_response()
    }
}

/// Automatic conversion from BookingError to AppError
///
/// Allows `?` on `BookingResult<T>` inside handlers returning `Result<T, AppError>`.
impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}
