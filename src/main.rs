//! OTP Delivery Service - Main Application Entry Point
//!
//! This is a REST API server that forwards one-time verification codes to
//! third-party delivery providers: email via Resend, SMS via Twilio. Every
//! delivery attempt is appended to a Supabase log store on a best-effort
//! basis.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Providers**: Resend and Twilio REST APIs via reqwest
//! - **Log store**: Supabase REST interface, best-effort appends
//! - **Format**: JSON requests/responses with permissive CORS
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Select the email delivery strategy and build provider clients
//! 3. Build HTTP router with routes and middleware
//! 4. Start server on configured port

use otp_delivery_service::{app, config::Config, state::AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Build provider clients and the log store once; handlers get clones
    let state = AppState::from_config(&config);

    // Build HTTP router
    let app = app(state);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Start serving HTTP requests
    // This blocks forever, handling requests concurrently with tokio
    axum::serve(listener, app).await?;

    Ok(())
}
