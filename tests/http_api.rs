//! HTTP-level integration tests (full router, middleware included).

use axum::body::Body;
use axum::Router;
use http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::util::ServiceExt;

use skylight_server::{build_app_with_state, Config, ServerState};

async fn test_app() -> (TempDir, Router) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = Config::with_overrides(dir.path().to_string_lossy().to_string(), 0);
    let state = ServerState::initialize(&config)
        .await
        .expect("Failed to initialize state");
    (dir, build_app_with_state(state))
}

async fn body_json(response: http::Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Response body is not JSON")
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let (_dir, app) = test_app().await;

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_movie_create_and_envelope() {
    let (_dir, app) = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/movies",
            json!({
                "name": "Inception",
                "rate": 8.5,
                "status": "showing",
                "image": null,
                "description": "Dreams within dreams"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["code"], "E0000");
    assert_eq!(body["message"], "Movie created successfully");
    assert_eq!(body["data"]["display_id"], "M001");

    // Validation failure comes back as E0002 / 400
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/movies",
            json!({
                "name": "Bad",
                "rate": 42.0,
                "status": "showing",
                "image": null,
                "description": null
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "E0002");
}

#[tokio::test]
async fn test_missing_record_returns_404_envelope() {
    let (_dir, app) = test_app().await;

    let response = app
        .oneshot(
            Request::get("/api/movies/movie:doesnotexist")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["code"], "E0003");
}

#[tokio::test]
async fn test_me_requires_token() {
    let (_dir, app) = test_app().await;

    let response = app
        .oneshot(Request::get("/api/auth/me").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["code"], "E3001");
}

#[tokio::test]
async fn test_register_login_me_flow() {
    let (_dir, app) = test_app().await;

    // Register
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/users/register",
            json!({
                "name": "Jane",
                "email": "jane@example.com",
                "password": "secret-pass-123"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["role"], "customer");
    // Password hash never leaves the server
    assert!(body["data"].get("hash_pass").is_none());

    // Login with wrong password: unified message, 400
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({"email": "jane@example.com", "password": "wrong"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Invalid email or password");

    // Login with correct password
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({"email": "jane@example.com", "password": "secret-pass-123"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let token = body["data"]["token"].as_str().unwrap().to_string();

    // Token grants access to /api/auth/me
    let response = app
        .oneshot(
            Request::get("/api/auth/me")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["email"], "jane@example.com");
}

#[tokio::test]
async fn test_salary_calculate_does_not_persist() {
    let (_dir, app) = test_app().await;

    // Create the employee first
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/employees",
            json!({
                "name": "Kasun Perera",
                "email": "kasun@skylight.lk",
                "position": "Cashier",
                "phone": "0771234567",
                "address": "12 Galle Road, Colombo",
                "basic_salary": "60000"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let emp_id = body["data"]["id"].as_str().unwrap().to_string();

    // Preview the breakdown
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/salaries/calculate",
            json!({
                "employee": emp_id,
                "month": "2026-08",
                "workdays": 22,
                "ot_rate": "500",
                "ot_hours": "10",
                "leave_days": 2,
                "daily_rate": "2000"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["total"], "56200.00");
    assert_eq!(body["data"]["epf_company"], "7200.00");

    // Nothing was stored
    let response = app
        .oneshot(Request::get("/api/salaries").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}
