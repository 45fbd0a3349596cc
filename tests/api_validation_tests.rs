// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API input validation tests.
//!
//! All of these requests must be rejected before any database access,
//! so they run against the lazy (unconnected) test pool.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;

mod common;

fn json_request(method: &str, uri: &str, token: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

#[tokio::test]
async fn test_register_rejects_invalid_email() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/auth/register",
            None,
            json!({
                "username": "alice",
                "email": "not-an-email",
                "phone": "010-1234-5678",
                "password": "password123",
                "password_confirm": "password123"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_rejects_password_mismatch() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/auth/register",
            None,
            json!({
                "username": "alice",
                "email": "alice@example.com",
                "phone": "010-1234-5678",
                "password": "password123",
                "password_confirm": "different456"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_rejects_short_password() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/auth/register",
            None,
            json!({
                "username": "alice",
                "email": "alice@example.com",
                "phone": "010-1234-5678",
                "password": "short",
                "password_confirm": "short"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_org_create_rejects_empty_name() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt(1, "alice", &state.config.jwt_signing_key);

    let response = app
        .oneshot(json_request(
            "POST",
            "/organizations",
            Some(&token),
            json!({ "name": "" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_schedule_create_rejects_backwards_time_range() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt(1, "alice", &state.config.jwt_signing_key);

    let response = app
        .oneshot(json_request(
            "POST",
            "/organizations/1/schedules",
            Some(&token),
            json!({
                "title": "Weekly sync",
                "start_time": "2026-08-06T11:00:00Z",
                "end_time": "2026-08-06T10:00:00Z"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_receipt_create_rejects_blank_category() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt(1, "alice", &state.config.jwt_signing_key);

    let response = app
        .oneshot(json_request(
            "POST",
            "/organizations/1/receipts",
            Some(&token),
            json!({
                "type": "card",
                "amount": 12000,
                "category": "",
                "date": "2026-08-06"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_receipt_create_rejects_long_type() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt(1, "alice", &state.config.jwt_signing_key);

    let response = app
        .oneshot(json_request(
            "POST",
            "/organizations/1/receipts",
            Some(&token),
            json!({
                "type": "a-type-name-way-beyond-ten-chars",
                "amount": 12000,
                "category": "meals",
                "date": "2026-08-06"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_document_create_rejects_negative_size() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt(1, "alice", &state.config.jwt_signing_key);

    let response = app
        .oneshot(json_request(
            "POST",
            "/organizations/1/docs",
            Some(&token),
            json!({
                "title": "Minutes",
                "name": "minutes.pdf",
                "type": "pdf",
                "size": -5
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_join_request_rejects_blank_org_code() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt(1, "alice", &state.config.jwt_signing_key);

    let response = app
        .oneshot(json_request(
            "POST",
            "/join-requests?org_code=%20",
            Some(&token),
            json!({ "message": "hi" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
