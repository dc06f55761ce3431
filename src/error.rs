//! Waitlist error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WaitlistError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Signup already exists")]
    DuplicateSignup,

    #[error("Invalid or expired confirmation link")]
    InvalidConfirmation,

    #[error("Too many signup attempts")]
    RateLimited,

    #[error("Store error: {0}")]
    Store(String),

    #[error("Email delivery failed: {0}")]
    EmailDelivery(String),
}

impl IntoResponse for WaitlistError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            WaitlistError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            WaitlistError::DuplicateSignup => (StatusCode::CONFLICT, "Signup already exists"),
            WaitlistError::InvalidConfirmation => {
                (StatusCode::BAD_REQUEST, "Invalid or expired confirmation link")
            }
            WaitlistError::RateLimited => {
                (StatusCode::TOO_MANY_REQUESTS, "Too many signup attempts, try again later")
            }
            WaitlistError::Store(msg) => {
                tracing::error!("Store error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            WaitlistError::EmailDelivery(msg) => {
                tracing::error!("Email delivery failed: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}
