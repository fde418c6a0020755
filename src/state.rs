//! Shared application state injected into handlers.
//!
//! All provider selection happens here, once, at startup. Handlers receive
//! the result via axum's `State` extractor and never re-read the process
//! environment.

use crate::config::Config;
use crate::services::email_service::EmailDelivery;
use crate::services::log_service::LogStore;
use crate::services::sms_service::TwilioClient;

/// Shared application state.
///
/// Built once from `Config` and cloned into each handler. Holds the selected
/// email delivery strategy, the Twilio client (when fully configured), and
/// the delivery log store.
#[derive(Clone)]
pub struct AppState {
    pub email: EmailDelivery,
    pub twilio: Option<TwilioClient>,
    pub log_store: LogStore,
}

impl AppState {
    /// Assemble the state from configuration, logging the selected modes.
    pub fn from_config(config: &Config) -> Self {
        let email = EmailDelivery::from_config(config);
        match &email {
            EmailDelivery::Resend { from_email, .. } => {
                tracing::info!("Email delivery: Resend (from {})", from_email);
            }
            EmailDelivery::LogOnly => {
                tracing::warn!("RESEND_API_KEY not set, emails will be logged only");
            }
        }

        let twilio = TwilioClient::from_config(config);
        if twilio.is_none() {
            tracing::warn!(
                "Twilio not fully configured, /send-sms will report a configuration error"
            );
        }

        let log_store = LogStore::from_config(config);
        if matches!(log_store, LogStore::Disabled) {
            tracing::warn!("Delivery log store disabled, attempts will not be recorded");
        }

        Self {
            email,
            twilio,
            log_store,
        }
    }
}
