//! Gateway contract tests against a wiremock stand-in for the remote service.

use bankbook::Gateway;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn verify_account_returns_resolved_holder_name() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/verify-account/"))
        .and(body_json(json!({
            "account_number": "0123456789",
            "bank_code": "044"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "account_name": "Jane Doe"
        })))
        .mount(&server)
        .await;

    let gateway = Gateway::new(&server.uri());
    let name = gateway.verify_account("0123456789", "044").await.unwrap();
    assert_eq!(name, "Jane Doe");
}

#[tokio::test]
async fn missing_account_name_field_resolves_to_empty_string() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/verify-account/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let gateway = Gateway::new(&server.uri());
    let name = gateway.verify_account("0123456789", "044").await.unwrap();
    assert_eq!(name, "");
}

#[tokio::test]
async fn server_error_message_is_surfaced_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/verify-account/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "account not found"
        })))
        .mount(&server)
        .await;

    let gateway = Gateway::new(&server.uri());
    let err = gateway
        .verify_account("0123456789", "044")
        .await
        .unwrap_err();
    assert_eq!(err, "account not found");
}

#[tokio::test]
async fn error_without_payload_uses_fallback_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/verify-account/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let gateway = Gateway::new(&server.uri());
    let err = gateway
        .verify_account("0123456789", "044")
        .await
        .unwrap_err();
    assert_eq!(err, "Failed to verify account");
}

#[tokio::test]
async fn transport_failure_yields_generic_message() {
    // Nothing listens here; the request never reaches a server.
    let gateway = Gateway::new("http://127.0.0.1:1");
    let err = gateway
        .verify_account("0123456789", "044")
        .await
        .unwrap_err();
    assert_eq!(err, "An error occurred while verifying the account");
}

#[tokio::test]
async fn login_returns_token_fields_as_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/api/login/"))
        .and(body_json(json!({
            "email": "jane@example.com",
            "password": "secret123"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "email": "jane@example.com",
            "access_token": "access-abc",
            "refresh_token": "refresh-def"
        })))
        .mount(&server)
        .await;

    let gateway = Gateway::new(&server.uri());
    let tokens = gateway.login("jane@example.com", "secret123").await.unwrap();
    assert_eq!(tokens.email.as_deref(), Some("jane@example.com"));
    assert_eq!(tokens.access_token.as_deref(), Some("access-abc"));
    assert_eq!(tokens.refresh_token.as_deref(), Some("refresh-def"));
    assert!(tokens.token.is_none());
}

#[tokio::test]
async fn failed_login_surfaces_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/api/login/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "Invalid email or password"
        })))
        .mount(&server)
        .await;

    let gateway = Gateway::new(&server.uri());
    let err = gateway
        .login("jane@example.com", "wrong")
        .await
        .unwrap_err();
    assert_eq!(err, "Invalid email or password");
}

#[tokio::test]
async fn signup_posts_confirmation_and_returns_tokens() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/api/signup/"))
        .and(body_json(json!({
            "email": "jane@example.com",
            "password": "secret123",
            "confirm_password": "secret123"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "email": "jane@example.com",
            "access_token": "access-abc",
            "refresh_token": "refresh-def"
        })))
        .mount(&server)
        .await;

    let gateway = Gateway::new(&server.uri());
    let tokens = gateway
        .signup("jane@example.com", "secret123", "secret123")
        .await
        .unwrap();
    assert_eq!(tokens.access_token.as_deref(), Some("access-abc"));
}

#[tokio::test]
async fn logout_posts_refresh_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/api/logout/"))
        .and(body_json(json!({ "refresh_token": "refresh-def" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "detail": "Successfully logged out."
        })))
        .mount(&server)
        .await;

    let gateway = Gateway::new(&server.uri());
    gateway.logout("refresh-def").await.unwrap();
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_tolerated() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/verify-account/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "account_name": "Jane Doe"
        })))
        .mount(&server)
        .await;

    let gateway = Gateway::new(&format!("{}/", server.uri()));
    let name = gateway.verify_account("0123456789", "044").await.unwrap();
    assert_eq!(name, "Jane Doe");
}
