//! Common test utilities for driving the router against mock providers.
#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use otp_delivery_service::{
    app,
    services::{email_service::EmailDelivery, log_service::LogStore, sms_service::TwilioClient},
    state::AppState,
};
use serde_json::Value;
use tower::ServiceExt;

/// Account SID used by the Twilio test client.
pub const TEST_ACCOUNT_SID: &str = "ACtest";

/// Router with every provider disabled: degraded email, no Twilio, no log store.
pub fn unconfigured_app() -> Router {
    app_with(EmailDelivery::LogOnly, None, LogStore::Disabled)
}

/// Router wired to the given providers.
pub fn app_with(
    email: EmailDelivery,
    twilio: Option<TwilioClient>,
    log_store: LogStore,
) -> Router {
    app(AppState {
        email,
        twilio,
        log_store,
    })
}

/// Email delivery pointed at a mock Resend server.
pub fn resend_delivery(api_base: &str) -> EmailDelivery {
    EmailDelivery::Resend {
        api_key: "re_test_key".to_string(),
        from_email: "noreply@example.com".to_string(),
        api_base: api_base.to_string(),
    }
}

/// Twilio client pointed at a mock server.
pub fn twilio_client(api_base: &str) -> TwilioClient {
    TwilioClient {
        account_sid: TEST_ACCOUNT_SID.to_string(),
        auth_token: "test_token".to_string(),
        from_number: "+15550001111".to_string(),
        api_base: api_base.to_string(),
    }
}

/// Log store pointed at a mock Supabase server.
pub fn supabase_store(url: &str) -> LogStore {
    LogStore::Supabase {
        url: url.trim_end_matches('/').to_string(),
        anon_key: "anon_test_key".to_string(),
    }
}

/// POST a JSON body and return the status plus the parsed JSON response.
pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
