//! Integration tests for `POST /send-email`.
//!
//! Drives the real router with `oneshot` requests against wiremock doubles
//! for the Resend API and the Supabase log store.

#[path = "common/mod.rs"]
mod common;

use axum::http::StatusCode;
use common::*;
use otp_delivery_service::services::{email_service::EmailDelivery, log_service::LogStore};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn email_body() -> serde_json::Value {
    json!({
        "email": "a@b.com",
        "subject": "Verify",
        "message": "code",
        "otp": "123456"
    })
}

#[tokio::test]
async fn missing_field_returns_400_without_outbound_call() {
    let resend = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&resend)
        .await;

    let mut body = email_body();
    body.as_object_mut().unwrap().remove("otp");

    let app = app_with(resend_delivery(&resend.uri()), None, LogStore::Disabled);
    let (status, response) = post_json(app, "/send-email", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "Missing required fields");
}

#[tokio::test]
async fn empty_field_is_rejected_like_a_missing_one() {
    let mut body = email_body();
    body["email"] = json!("");

    let (status, response) = post_json(unconfigured_app(), "/send-email", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "Missing required fields");
}

#[tokio::test]
async fn unconfigured_provider_logs_instead_of_sending() {
    let (status, response) = post_json(unconfigured_app(), "/send-email", email_body()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["success"], true);
    assert_eq!(response["status"], "logged");
    // The degraded mode must name the credential that is missing
    assert!(
        response["message"]
            .as_str()
            .unwrap()
            .contains("RESEND_API_KEY")
    );
    assert!(
        response["message_id"]
            .as_str()
            .unwrap()
            .starts_with("fallback_")
    );
}

#[tokio::test]
async fn fallback_identifiers_differ_between_calls() {
    let (_, first) = post_json(unconfigured_app(), "/send-email", email_body()).await;
    let (_, second) = post_json(unconfigured_app(), "/send-email", email_body()).await;

    assert_ne!(first["message_id"], second["message_id"]);
}

#[tokio::test]
async fn provider_success_returns_message_id() {
    let resend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/emails"))
        .and(header("authorization", "Bearer re_test_key"))
        .and(body_partial_json(json!({
            "from": "noreply@example.com",
            "to": ["a@b.com"],
            "subject": "Verify"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "re_123" })))
        .expect(1)
        .mount(&resend)
        .await;

    let app = app_with(resend_delivery(&resend.uri()), None, LogStore::Disabled);
    let (status, response) = post_json(app, "/send-email", email_body()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["success"], true);
    assert_eq!(response["message_id"], "re_123");
    assert_eq!(response["status"], "sent");
    assert_eq!(response["message"], "Email sent successfully");
}

#[tokio::test]
async fn provider_rejection_is_fatal_with_detail() {
    let resend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(ResponseTemplate::new(422).set_body_string("invalid sender"))
        .expect(1)
        .mount(&resend)
        .await;

    let app = app_with(resend_delivery(&resend.uri()), None, LogStore::Disabled);
    let (status, response) = post_json(app, "/send-email", email_body()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response["error"], "Internal server error");
    let details = response["details"].as_str().unwrap();
    assert!(details.contains("Resend API error: 422"));
    assert!(details.contains("invalid sender"));
}

#[tokio::test]
async fn successful_send_is_recorded_in_the_log_store() {
    let resend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "re_123" })))
        .mount(&resend)
        .await;

    let supabase = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/email_logs"))
        .and(header("apikey", "anon_test_key"))
        .and(body_partial_json(json!({
            "email": "a@b.com",
            "otp": "123456",
            "status": "sent",
            "message_id": "re_123"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&supabase)
        .await;

    let app = app_with(
        resend_delivery(&resend.uri()),
        None,
        supabase_store(&supabase.uri()),
    );
    let (status, _) = post_json(app, "/send-email", email_body()).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn log_store_failure_never_fails_the_request() {
    let supabase = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/email_logs"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&supabase)
        .await;

    let app = app_with(EmailDelivery::LogOnly, None, supabase_store(&supabase.uri()));
    let (status, response) = post_json(app, "/send-email", email_body()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["success"], true);
    assert_eq!(response["status"], "logged");
}
