//! Best-effort delivery logging to the Supabase log store.
//!
//! Every delivery attempt is appended to an external collection
//! (`email_logs` / `sms_logs`) over Supabase's REST interface. Writes are
//! best-effort by contract: a failed insert (unreachable store, missing
//! table, bad credentials) is reported through a WARN diagnostic and never
//! propagates to the request path.

use std::time::Duration;

use serde::Serialize;

use crate::config::Config;
use crate::models::email::EmailLogEntry;
use crate::models::sms::SmsLogEntry;

/// Append-only log store for delivery attempts.
#[derive(Debug, Clone)]
pub enum LogStore {
    /// Rows are appended through Supabase's REST interface.
    Supabase { url: String, anon_key: String },
    /// No store configured: attempts are dropped after a diagnostic.
    Disabled,
}

impl LogStore {
    /// Build the store from configuration.
    ///
    /// Requires both SUPABASE_URL and SUPABASE_ANON_KEY; a partial or
    /// unparseable configuration degrades to `Disabled` with a warning.
    pub fn from_config(config: &Config) -> Self {
        match (&config.supabase_url, &config.supabase_anon_key) {
            (Some(url), Some(anon_key)) => match url::Url::parse(url) {
                Ok(_) => LogStore::Supabase {
                    url: url.trim_end_matches('/').to_string(),
                    anon_key: anon_key.clone(),
                },
                Err(e) => {
                    tracing::warn!(
                        "SUPABASE_URL is not a valid URL ({}), delivery logging disabled",
                        e
                    );
                    LogStore::Disabled
                }
            },
            (None, None) => LogStore::Disabled,
            _ => {
                tracing::warn!("Supabase configuration incomplete, delivery logging disabled");
                LogStore::Disabled
            }
        }
    }

    /// Record an email delivery attempt in `email_logs`.
    ///
    /// Failures are swallowed after a diagnostic; the email logs table may
    /// not exist yet and the request must not fail because of it.
    pub async fn record_email(&self, entry: &EmailLogEntry) {
        if let Err(e) = self.insert("email_logs", entry).await {
            tracing::warn!("Failed to store email log: {}", e);
        }
    }

    /// Record a delivered SMS in `sms_logs`. Failures are swallowed after a
    /// diagnostic.
    pub async fn record_sms(&self, entry: &SmsLogEntry) {
        if let Err(e) = self.insert("sms_logs", entry).await {
            tracing::warn!("Failed to store SMS log: {}", e);
        }
    }

    /// Append one row to a log collection.
    async fn insert<T: Serialize>(&self, table: &str, row: &T) -> Result<(), reqwest::Error> {
        let (url, anon_key) = match self {
            LogStore::Supabase { url, anon_key } => (url, anon_key),
            LogStore::Disabled => {
                tracing::debug!("Log store disabled, skipping {} insert", table);
                return Ok(());
            }
        };

        // Fresh client per attempt, same as the provider calls
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()?;

        client
            .post(format!("{}/rest/v1/{}", url, table))
            .header("apikey", anon_key.as_str())
            .bearer_auth(anon_key)
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: Option<&str>, key: Option<&str>) -> Config {
        Config {
            resend_api_key: None,
            from_email: "noreply@example.com".to_string(),
            supabase_url: url.map(str::to_string),
            supabase_anon_key: key.map(str::to_string),
            twilio_account_sid: None,
            twilio_auth_token: None,
            twilio_from_number: None,
            server_port: 3000,
        }
    }

    #[test]
    fn from_config_disables_on_partial_configuration() {
        assert!(matches!(
            LogStore::from_config(&config(Some("https://project.supabase.co"), None)),
            LogStore::Disabled
        ));
        assert!(matches!(
            LogStore::from_config(&config(None, None)),
            LogStore::Disabled
        ));
    }

    #[test]
    fn from_config_rejects_invalid_url() {
        assert!(matches!(
            LogStore::from_config(&config(Some("not a url"), Some("anon"))),
            LogStore::Disabled
        ));
    }

    #[test]
    fn from_config_trims_trailing_slash() {
        let store = LogStore::from_config(&config(Some("https://project.supabase.co/"), Some("anon")));
        match store {
            LogStore::Supabase { url, .. } => assert_eq!(url, "https://project.supabase.co"),
            LogStore::Disabled => panic!("expected configured store"),
        }
    }
}
