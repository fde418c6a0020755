//! SMS delivery HTTP handler.
//!
//! Implements `POST /send-sms`: validate the payload, require a configured
//! Twilio client, deliver, append a best-effort log entry, respond.

use axum::{Json, extract::State};

use crate::error::AppError;
use crate::models::sms::{SmsLogEntry, SmsSendRequest, SmsSendResponse};
use crate::state::AppState;

/// Send a verification SMS through Twilio.
///
/// # Request Body
///
/// ```json
/// {
///   "phone_number": "+15551234567",
///   "message": "Your code is 123456",
///   "otp": "123456"
/// }
/// ```
///
/// # Response (200)
///
/// ```json
/// {
///   "success": true,
///   "message_sid": "SM1f0e8ae6ade43cb3c0ce4525424e404f",
///   "status": "sent",
///   "message": "SMS sent successfully"
/// }
/// ```
///
/// # Errors
///
/// - 400 if any required field is absent or empty
/// - 400 if the provider rejects the send, with its raw response in `details`
/// - 500 if the Twilio credentials are not fully configured
pub async fn send_sms(
    State(state): State<AppState>,
    Json(request): Json<SmsSendRequest>,
) -> Result<Json<SmsSendResponse>, AppError> {
    // Validate all three fields before touching the provider
    let request = request.validate()?;

    // SMS has no degraded fallback; an unconfigured provider is a server fault
    let twilio = state.twilio.as_ref().ok_or(AppError::TwilioConfigMissing)?;

    let message_sid = twilio
        .send_message(&request.phone_number, &request.message)
        .await?;

    // Only delivered messages are recorded; provider rejections return above
    let entry = SmsLogEntry::sent(&request, &message_sid);
    state.log_store.record_sms(&entry).await;

    Ok(Json(SmsSendResponse::sent(message_sid)))
}
