//! Email delivery models.
//!
//! Types for the `POST /send-email` endpoint: the raw and validated request
//! forms, the delivery outcome, the JSON response, and the `email_logs` row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::{DeliveryStatus, required};

/// Raw body of `POST /send-email`.
///
/// # Example
///
/// ```json
/// {
///   "email": "user@example.com",
///   "subject": "Verify your email",
///   "message": "Your verification code",
///   "otp": "123456"
/// }
/// ```
///
/// All four fields are required; validation rejects absent and empty values
/// with a 400 response.
#[derive(Debug, Deserialize)]
pub struct EmailSendRequest {
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub otp: Option<String>,
}

/// A validated email delivery request.
#[derive(Debug, Clone)]
pub struct EmailRequest {
    pub email: String,
    pub subject: String,
    pub message: String,
    pub otp: String,
}

impl EmailSendRequest {
    /// Check that every required field is present and non-empty.
    pub fn validate(self) -> Result<EmailRequest, AppError> {
        Ok(EmailRequest {
            email: required(self.email)?,
            subject: required(self.subject)?,
            message: required(self.message)?,
            otp: required(self.otp)?,
        })
    }
}

/// Outcome of an email delivery attempt.
///
/// `message_id` is the provider's identifier for a real send, or a
/// synthesized `fallback_<uuid>` token when delivery was only logged.
#[derive(Debug, Clone)]
pub struct EmailDispatch {
    pub message_id: String,
    pub status: DeliveryStatus,
}

/// Response body for a successful `POST /send-email`.
///
/// # Example
///
/// ```json
/// {
///   "success": true,
///   "message_id": "49a3999c-0ce1-4ea6-ab21-afecf5e5a1fe",
///   "status": "sent",
///   "message": "Email sent successfully"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct EmailSendResponse {
    pub success: bool,
    pub message_id: String,
    pub status: DeliveryStatus,
    pub message: String,
}

impl From<EmailDispatch> for EmailSendResponse {
    fn from(dispatch: EmailDispatch) -> Self {
        // The degraded mode must never read like a real send
        let message = match dispatch.status {
            DeliveryStatus::Sent => "Email sent successfully",
            DeliveryStatus::Logged => "Email logged (configure RESEND_API_KEY for actual sending)",
        };

        Self {
            success: true,
            message_id: dispatch.message_id,
            status: dispatch.status,
            message: message.to_string(),
        }
    }
}

/// Row appended to the `email_logs` collection after a delivery attempt.
///
/// Append-only: created once per attempt, never updated or deleted.
#[derive(Debug, Serialize)]
pub struct EmailLogEntry {
    pub email: String,
    pub subject: String,
    pub message: String,
    pub otp: String,
    pub status: DeliveryStatus,
    pub message_id: String,
    pub created_at: DateTime<Utc>,
}

impl EmailLogEntry {
    /// Build the log row for a completed delivery attempt.
    pub fn new(request: &EmailRequest, dispatch: &EmailDispatch) -> Self {
        Self {
            email: request.email.clone(),
            subject: request.subject.clone(),
            message: request.message.clone(),
            otp: request.otp.clone(),
            status: dispatch.status,
            message_id: dispatch.message_id.clone(),
            created_at: Utc::now(),
        }
    }
}
