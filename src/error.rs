//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// This enum represents all possible errors that can occur while handling a
/// delivery request. Each variant maps to a specific HTTP status code and
/// JSON error body.
///
/// # Error Categories
///
/// - **Validation Errors**: required request fields absent or empty
/// - **Configuration Errors**: provider credentials missing (SMS only)
/// - **Provider Errors**: the outbound delivery call was rejected
/// - **Unexpected Errors**: transport failures or malformed provider responses
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// One or more required request fields are absent or empty.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Missing required fields")]
    MissingFields,

    /// Twilio credentials are not fully configured.
    ///
    /// Returns HTTP 500 Internal Server Error. The SMS handler has no
    /// degraded fallback, so an unconfigured provider is a server fault.
    #[error("Twilio configuration missing")]
    TwilioConfigMissing,

    /// The email provider rejected the send (non-2xx response).
    ///
    /// Returns HTTP 500 with the provider's status and response body in
    /// `details`. A failed email send is fatal to the request.
    #[error("Resend API error: {status} - {body}")]
    EmailProvider { status: u16, body: String },

    /// The SMS provider rejected the send (non-2xx response).
    ///
    /// Returns HTTP 400 with the provider's raw JSON response in `details`.
    /// Twilio rejections are usually caused by the submitted number, so they
    /// surface as a client error rather than a server fault.
    #[error("Twilio SMS failed")]
    SmsProvider { details: serde_json::Value },

    /// The outbound HTTP call itself failed (connect, timeout, body read).
    ///
    /// Returns HTTP 500 with the transport error message in `details`.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Any other failure, such as a provider response missing expected fields.
    ///
    /// Returns HTTP 500 with the message in `details`.
    #[error("{0}")]
    Unexpected(String),
}

/// Convert AppError into an HTTP response.
///
/// This implementation allows Axum handlers to return `Result<T, AppError>`
/// and have errors automatically converted to proper HTTP responses.
///
/// # Response Format
///
/// All errors return a flat JSON body:
/// ```json
/// { "error": "...", "details": "..." }
/// ```
/// where `details` is only present for provider and unexpected errors. For
/// SMS provider rejections `details` is the provider's JSON response,
/// passed through verbatim.
///
/// # Status Code Mapping
///
/// - `MissingFields` → 400 Bad Request
/// - `TwilioConfigMissing` → 500 Internal Server Error
/// - `EmailProvider` → 500 Internal Server Error (detail attached)
/// - `SmsProvider` → 400 Bad Request (provider body attached)
/// - `Http` / `Unexpected` → 500 Internal Server Error
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map each error variant to (HTTP status, JSON body)
        let (status, body) = match self {
            AppError::MissingFields => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Missing required fields" }),
            ),
            AppError::TwilioConfigMissing => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Twilio configuration missing" }),
            ),
            AppError::EmailProvider { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Internal server error", "details": self.to_string() }),
            ),
            AppError::SmsProvider { details } => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Twilio SMS failed", "details": details }),
            ),
            AppError::Http(ref err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Internal server error", "details": err.to_string() }),
            ),
            AppError::Unexpected(ref message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Internal server error", "details": message }),
            ),
        };

        // Return the response with status code and JSON body
        (status, Json(body)).into_response()
    }
}
