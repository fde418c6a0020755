//! SMS delivery models.
//!
//! Types for the `POST /send-sms` endpoint: the raw and validated request
//! forms, the JSON response, and the `sms_logs` row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::{DeliveryStatus, required};

/// Raw body of `POST /send-sms`.
///
/// # Example
///
/// ```json
/// {
///   "phone_number": "+15551234567",
///   "message": "Your code is 123456",
///   "otp": "123456"
/// }
/// ```
///
/// All three fields are required; validation rejects absent and empty values
/// with a 400 response.
#[derive(Debug, Deserialize)]
pub struct SmsSendRequest {
    pub phone_number: Option<String>,
    pub message: Option<String>,
    pub otp: Option<String>,
}

/// A validated SMS delivery request.
#[derive(Debug, Clone)]
pub struct SmsRequest {
    pub phone_number: String,
    pub message: String,
    pub otp: String,
}

impl SmsSendRequest {
    /// Check that every required field is present and non-empty.
    pub fn validate(self) -> Result<SmsRequest, AppError> {
        Ok(SmsRequest {
            phone_number: required(self.phone_number)?,
            message: required(self.message)?,
            otp: required(self.otp)?,
        })
    }
}

/// Response body for a successful `POST /send-sms`.
///
/// # Example
///
/// ```json
/// {
///   "success": true,
///   "message_sid": "SM1f0e8ae6ade43cb3c0ce4525424e404f",
///   "status": "sent",
///   "message": "SMS sent successfully"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct SmsSendResponse {
    pub success: bool,
    pub message_sid: String,
    pub status: DeliveryStatus,
    pub message: String,
}

impl SmsSendResponse {
    /// Build the success response around the provider's message identifier.
    ///
    /// There is no degraded mode for SMS, so the status is always `sent`.
    pub fn sent(message_sid: String) -> Self {
        Self {
            success: true,
            message_sid,
            status: DeliveryStatus::Sent,
            message: "SMS sent successfully".to_string(),
        }
    }
}

/// Row appended to the `sms_logs` collection after a successful delivery.
///
/// Append-only: created once per attempt, never updated or deleted. Unlike
/// email, rejected SMS sends are not recorded.
#[derive(Debug, Serialize)]
pub struct SmsLogEntry {
    pub phone_number: String,
    pub message: String,
    pub otp: String,
    pub message_sid: String,
    pub status: DeliveryStatus,
    pub created_at: DateTime<Utc>,
}

impl SmsLogEntry {
    /// Build the log row for a delivered message.
    pub fn sent(request: &SmsRequest, message_sid: &str) -> Self {
        Self {
            phone_number: request.phone_number.clone(),
            message: request.message.clone(),
            otp: request.otp.clone(),
            message_sid: message_sid.to_string(),
            status: DeliveryStatus::Sent,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_missing_phone_number() {
        let request = SmsSendRequest {
            phone_number: None,
            message: Some("Your code is 123456".to_string()),
            otp: Some("123456".to_string()),
        };
        assert!(matches!(request.validate(), Err(AppError::MissingFields)));
    }

    #[test]
    fn sent_response_carries_provider_sid() {
        let response = SmsSendResponse::sent("SM123".to_string());
        assert!(response.success);
        assert_eq!(response.message_sid, "SM123");
        assert_eq!(response.status, DeliveryStatus::Sent);
    }
}
