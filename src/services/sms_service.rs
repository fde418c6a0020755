//! SMS delivery via the Twilio REST API.
//!
//! Unlike email there is no degraded fallback: without a fully configured
//! Twilio account the handler reports a configuration error instead.

use std::time::Duration;

use serde_json::Value;

use crate::config::Config;
use crate::error::AppError;

/// Default Twilio API origin.
pub const TWILIO_API_BASE: &str = "https://api.twilio.com";

/// Twilio messaging client.
///
/// Constructed only when the account SID, auth token, and sending number are
/// all present in configuration; an absent client is surfaced per-request as
/// `AppError::TwilioConfigMissing`.
#[derive(Debug, Clone)]
pub struct TwilioClient {
    pub account_sid: String,
    pub auth_token: String,
    pub from_number: String,
    /// API origin, injectable so tests can point at a local mock server.
    pub api_base: String,
}

impl TwilioClient {
    /// Build the client if all three Twilio credentials are configured.
    pub fn from_config(config: &Config) -> Option<Self> {
        match (
            &config.twilio_account_sid,
            &config.twilio_auth_token,
            &config.twilio_from_number,
        ) {
            (Some(account_sid), Some(auth_token), Some(from_number)) => Some(Self {
                account_sid: account_sid.clone(),
                auth_token: auth_token.clone(),
                from_number: from_number.clone(),
                api_base: TWILIO_API_BASE.to_string(),
            }),
            _ => None,
        }
    }

    /// Send one SMS through the account-scoped Messages endpoint.
    ///
    /// # Process
    ///
    /// 1. POST form-encoded `From`/`To`/`Body` with basic auth
    /// 2. 2xx: return the provider's message `sid`
    /// 3. Non-2xx: error carrying the provider's raw JSON response, which
    ///    the handler passes through to the caller
    ///
    /// Twilio answers with JSON on both success and failure; a body that
    /// cannot be parsed at all is treated as an unexpected transport fault.
    pub async fn send_message(&self, to: &str, body: &str) -> Result<String, AppError> {
        let url = format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.api_base, self.account_sid
        );

        // Fresh client per request, matching the one-shot invocation model
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        let response = client
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[
                ("From", self.from_number.as_str()),
                ("To", to),
                ("Body", body),
            ])
            .send()
            .await?;

        let status = response.status();
        let payload: Value = response.json().await?;

        if !status.is_success() {
            tracing::error!("Twilio rejected send to {}: {} - {}", to, status, payload);
            return Err(AppError::SmsProvider { details: payload });
        }

        let sid = payload
            .get("sid")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                AppError::Unexpected("Twilio response missing message sid".to_string())
            })?
            .to_string();

        tracing::info!("SMS sent via Twilio: {}", sid);
        Ok(sid)
    }
}
