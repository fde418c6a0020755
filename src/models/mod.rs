//! Data models for delivery requests, responses, and log entries.
//!
//! Each channel has a raw request type (deserialized straight from the HTTP
//! body, every field optional) and a validated form produced by `validate()`.
//! Log entries mirror the rows appended to the external log store.

/// Email delivery request, response, and log-entry models
pub mod email;
/// SMS delivery request, response, and log-entry models
pub mod sms;

use serde::Serialize;

use crate::error::AppError;

/// Whether a delivery attempt reached the provider or was only recorded.
///
/// `Sent` means a real provider call was made; `Logged` means the call was
/// skipped because no provider credential is configured (email only). The
/// value appears both in the HTTP response and in the log-store row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Sent,
    Logged,
}

/// Extract a required request field.
///
/// Absent and empty values are both rejected, matching the falsy check the
/// callers of this API already rely on.
pub(crate) fn required(field: Option<String>) -> Result<String, AppError> {
    match field {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(AppError::MissingFields),
    }
}
