//! Email delivery via the Resend transactional API.
//!
//! Delivery is a two-variant strategy selected once at startup: a real
//! Resend client when `RESEND_API_KEY` is configured, or a log-only stub
//! that synthesizes an identifier without making any outbound call. The
//! stub exists so the verification flow stays exercisable in environments
//! without credentials, and its responses are explicitly marked as logged.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::Config;
use crate::error::AppError;
use crate::models::DeliveryStatus;
use crate::models::email::{EmailDispatch, EmailRequest};

/// Default Resend API origin.
pub const RESEND_API_BASE: &str = "https://api.resend.com";

/// Email delivery strategy.
///
/// The variant is fixed at construction time; the request path never
/// re-checks configuration.
#[derive(Debug, Clone)]
pub enum EmailDelivery {
    /// Real delivery through Resend's transactional-send endpoint.
    Resend {
        api_key: String,
        from_email: String,
        /// API origin, injectable so tests can point at a local mock server.
        api_base: String,
    },
    /// Degraded mode: no outbound call, the attempt is only recorded.
    LogOnly,
}

/// JSON body for Resend's `POST /emails`.
#[derive(Debug, Serialize)]
struct ResendSendRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: String,
}

/// Subset of Resend's send response.
#[derive(Debug, Deserialize)]
struct ResendSendResponse {
    id: String,
}

impl EmailDelivery {
    /// Select the delivery strategy from configuration.
    pub fn from_config(config: &Config) -> Self {
        match &config.resend_api_key {
            Some(api_key) => EmailDelivery::Resend {
                api_key: api_key.clone(),
                from_email: config.from_email.clone(),
                api_base: RESEND_API_BASE.to_string(),
            },
            None => EmailDelivery::LogOnly,
        }
    }

    /// Deliver a verification email.
    ///
    /// # Process (Resend)
    ///
    /// 1. Render the HTML document embedding the OTP
    /// 2. POST to `{api_base}/emails` with bearer auth
    /// 3. 2xx yields the provider's message id; any other status is fatal
    ///    to the request and carries the provider's error text
    ///
    /// # Process (LogOnly)
    ///
    /// Synthesize a unique `fallback_<uuid>` identifier and report the
    /// attempt as `logged`.
    pub async fn send(&self, request: &EmailRequest) -> Result<EmailDispatch, AppError> {
        match self {
            EmailDelivery::Resend {
                api_key,
                from_email,
                api_base,
            } => {
                let html = verification_email_html(&request.otp);

                // Fresh client per request, matching the one-shot invocation model
                let client = reqwest::Client::builder()
                    .timeout(Duration::from_secs(10))
                    .build()?;

                let response = client
                    .post(format!("{}/emails", api_base))
                    .bearer_auth(api_key)
                    .json(&ResendSendRequest {
                        from: from_email,
                        to: [request.email.as_str()],
                        subject: &request.subject,
                        html,
                    })
                    .send()
                    .await?;

                if !response.status().is_success() {
                    let status = response.status().as_u16();
                    let body = response.text().await.unwrap_or_default();
                    tracing::error!(
                        "Resend rejected send to {}: {} - {}",
                        request.email,
                        status,
                        body
                    );
                    return Err(AppError::EmailProvider { status, body });
                }

                let sent: ResendSendResponse = response.json().await?;
                tracing::info!("Email sent via Resend: {}", sent.id);

                Ok(EmailDispatch {
                    message_id: sent.id,
                    status: DeliveryStatus::Sent,
                })
            }
            EmailDelivery::LogOnly => {
                let message_id = format!("fallback_{}", Uuid::new_v4());
                tracing::info!(
                    "RESEND_API_KEY not configured - email to {} recorded as {}",
                    request.email,
                    message_id
                );

                Ok(EmailDispatch {
                    message_id,
                    status: DeliveryStatus::Logged,
                })
            }
        }
    }
}

/// Render the verification email body.
///
/// The code is displayed prominently with a 5-minute expiry notice and an
/// ignore-if-unrequested footer. The markup uses inline styles only, so it
/// survives the strict CSS handling of webmail clients.
fn verification_email_html(otp: &str) -> String {
    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
  <div style="background: #4a5568; padding: 30px; border-radius: 10px; text-align: center; margin-bottom: 20px;">
    <h1 style="color: white; margin: 0; font-size: 28px;">Email Verification</h1>
  </div>

  <div style="background: #f8f9fa; padding: 30px; border-radius: 10px; text-align: center;">
    <h2 style="color: #333; margin-bottom: 20px;">Your Verification Code</h2>
    <div style="background: white; padding: 20px; border-radius: 8px; border: 2px dashed #4a5568; margin: 20px 0;">
      <span style="font-size: 32px; font-weight: bold; color: #4a5568; letter-spacing: 8px;">{otp}</span>
    </div>
    <p style="color: #666; margin: 20px 0;">Enter this code in the app to verify your email address.</p>
    <p style="color: #999; font-size: 14px;">This code will expire in 5 minutes.</p>
  </div>

  <div style="text-align: center; margin-top: 20px; padding: 20px; color: #999; font-size: 12px;">
    <p>If you didn't request this code, please ignore this email.</p>
  </div>
</div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> EmailRequest {
        EmailRequest {
            email: "user@example.com".to_string(),
            subject: "Verify your email".to_string(),
            message: "Your verification code".to_string(),
            otp: "123456".to_string(),
        }
    }

    #[test]
    fn html_embeds_code_and_expiry_notice() {
        let html = verification_email_html("987654");
        assert!(html.contains("987654"));
        assert!(html.contains("expire in 5 minutes"));
    }

    #[tokio::test]
    async fn log_only_reports_logged_status() {
        let dispatch = EmailDelivery::LogOnly.send(&request()).await.unwrap();
        assert_eq!(dispatch.status, DeliveryStatus::Logged);
        assert!(dispatch.message_id.starts_with("fallback_"));
    }

    #[tokio::test]
    async fn log_only_identifiers_are_unique_per_call() {
        let delivery = EmailDelivery::LogOnly;
        let first = delivery.send(&request()).await.unwrap();
        let second = delivery.send(&request()).await.unwrap();
        assert_ne!(first.message_id, second.message_id);
    }
}
