//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body)
//! 2. Performs business logic (validation, provider call, log write)
//! 3. Returns HTTP response (JSON, status code)

/// Email delivery endpoint
pub mod email;
/// Service health endpoint
pub mod health;
/// SMS delivery endpoint
pub mod sms;

/// Explicit CORS preflight response.
///
/// Browser preflights are answered by the CORS layer before routing; this
/// handler additionally serves plain OPTIONS requests with the body callers
/// of these endpoints expect.
pub async fn preflight() -> &'static str {
    "ok"
}
