//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.
//!
//! Provider credentials are deliberately optional at startup: the email
//! handler degrades to log-only delivery without `RESEND_API_KEY`, and the
//! SMS handler reports missing Twilio credentials per-request rather than
//! refusing to boot.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `RESEND_API_KEY` (optional): enables real email delivery via Resend
/// - `FROM_EMAIL` (optional): sender address, defaults to `noreply@example.com`
/// - `SUPABASE_URL` (optional): log store endpoint
/// - `SUPABASE_ANON_KEY` (optional): log store credential
/// - `TWILIO_ACCOUNT_SID` / `TWILIO_AUTH_TOKEN` / `TWILIO_FROM_NUMBER`
///   (optional at startup, all three required to serve `/send-sms`)
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub resend_api_key: Option<String>,

    #[serde(default = "default_from_email")]
    pub from_email: String,

    pub supabase_url: Option<String>,
    pub supabase_anon_key: Option<String>,

    pub twilio_account_sid: Option<String>,
    pub twilio_auth_token: Option<String>,
    pub twilio_from_number: Option<String>,

    #[serde(default = "default_port")]
    pub server_port: u16,
}

/// Default sender address if FROM_EMAIL is not set.
fn default_from_email() -> String {
    "noreply@example.com".to_string()
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values cannot be parsed into
    /// expected types (e.g., a non-numeric SERVER_PORT).
    pub fn from_env() -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Parse environment variables into Config struct
        // Field names are automatically converted: resend_api_key -> RESEND_API_KEY
        envy::from_env::<Config>()
    }
}
