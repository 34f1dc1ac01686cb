//! Authentication API integration tests
//!
//! Tests for the registration and login endpoints.

use axum::http::StatusCode;
use chatline::backend::auth::sessions::verify_token;
use pretty_assertions::assert_eq;

use crate::common::{create_test_user, register, spawn_app, TEST_JWT_SECRET, TEST_PASSWORD};

#[tokio::test]
async fn test_register_success() {
    let app = spawn_app().await;

    let response = app
        .server
        .post("/api/register")
        .json(&serde_json::json!({
            "fullName": "Test User",
            "email": "test@example.com",
            "password": "password123"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "User registered successfully");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = spawn_app().await;

    assert_eq!(
        register(&app.server, "First", "test@example.com", TEST_PASSWORD).await,
        StatusCode::OK
    );

    let response = app
        .server
        .post("/api/register")
        .json(&serde_json::json!({
            "fullName": "Second",
            "email": "test@example.com",
            "password": "password123"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "User already exists");
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn test_register_missing_fields() {
    let app = spawn_app().await;

    let response = app
        .server
        .post("/api/register")
        .json(&serde_json::json!({ "email": "test@example.com" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Please fill all required fields");
}

#[tokio::test]
async fn test_login_success() {
    let app = spawn_app().await;

    let login = create_test_user(&app.server, "Test User", "test@example.com").await;

    assert_eq!(login.user.email, "test@example.com");
    assert_eq!(login.user.full_name, "Test User");

    let claims = verify_token(TEST_JWT_SECRET, &login.token).unwrap();
    assert_eq!(claims.user_id, login.user.id);
    assert_eq!(claims.email, "test@example.com");
}

#[tokio::test]
async fn test_login_response_shape() {
    let app = spawn_app().await;
    register(&app.server, "Test User", "test@example.com", TEST_PASSWORD).await;

    let response = app
        .server
        .post("/api/login")
        .json(&serde_json::json!({
            "email": "test@example.com",
            "password": TEST_PASSWORD
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert!(body["token"].is_string());
    assert!(body["user"]["id"].is_string());
    assert_eq!(body["user"]["fullName"], "Test User");
    assert!(body["user"].get("passwordHash").is_none());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = spawn_app().await;
    register(&app.server, "Test User", "test@example.com", TEST_PASSWORD).await;

    let response = app
        .server
        .post("/api/login")
        .json(&serde_json::json!({
            "email": "test@example.com",
            "password": "wrongpassword"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "User email or password is incorrect");
}

#[tokio::test]
async fn test_login_unknown_email() {
    let app = spawn_app().await;

    let response = app
        .server
        .post("/api/login")
        .json(&serde_json::json!({
            "email": "nonexistent@example.com",
            "password": "wrongpassword"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "User email or password is incorrect");
}
