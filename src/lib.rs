//! OTP delivery service.
//!
//! Two HTTP endpoints that forward one-time verification codes to
//! third-party delivery providers (email via Resend, SMS via Twilio), with
//! a best-effort audit log in Supabase. The router is exposed here so the
//! binary and the integration tests share one HTTP surface.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;

pub use error::AppError;

use axum::{
    Router,
    http::{HeaderName, Method, header},
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::state::AppState;

/// Build the HTTP router.
///
/// # Routes
///
/// - `POST /send-email` (+ OPTIONS preflight)
/// - `POST /send-sms` (+ OPTIONS preflight)
/// - `GET /health`
///
/// Every response, success or failure, carries permissive CORS headers so
/// browser-based callers can read it.
pub fn app(state: AppState) -> Router {
    // Allowed header list matches what browser clients send with these calls
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ]);

    Router::new()
        .route(
            "/send-email",
            post(handlers::email::send_email).options(handlers::preflight),
        )
        .route(
            "/send-sms",
            post(handlers::sms::send_sms).options(handlers::preflight),
        )
        .route("/health", get(handlers::health::health_check))
        // Add distributed tracing middleware for observability
        .layer(TraceLayer::new_for_http())
        // CORS outermost so even error responses carry the headers
        .layer(cors)
        // Share provider clients with all handlers via State extraction
        .with_state(state)
}
