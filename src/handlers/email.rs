//! Email delivery HTTP handler.
//!
//! Implements `POST /send-email`: validate the payload, deliver through the
//! configured strategy, append a best-effort log entry, respond.

use axum::{Json, extract::State};

use crate::error::AppError;
use crate::models::email::{EmailLogEntry, EmailSendRequest, EmailSendResponse};
use crate::state::AppState;

/// Send a verification email, or record it when no provider is configured.
///
/// # Request Body
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
/// # Response (200)
///
/// ```json
/// {
///   "success": true,
///   "message_id": "49a3999c-0ce1-4ea6-ab21-afecf5e5a1fe",
///   "status": "sent",
///   "message": "Email sent successfully"
/// }
/// ```
///
/// In degraded mode `status` is `"logged"` and `message` says which
/// credential to configure.
///
/// # Errors
///
/// - 400 if any required field is absent or empty
/// - 500 if the provider rejects the send, with the provider detail attached
pub async fn send_email(
    State(state): State<AppState>,
    Json(request): Json<EmailSendRequest>,
) -> Result<Json<EmailSendResponse>, AppError> {
    // Validate all four fields before touching the provider
    let request = request.validate()?;

    // Deliver through the configured strategy (Resend or log-only)
    let dispatch = state.email.send(&request).await?;

    // Best-effort audit trail; failures never affect the response
    let entry = EmailLogEntry::new(&request, &dispatch);
    state.log_store.record_email(&entry).await;

    Ok(Json(dispatch.into()))
}
