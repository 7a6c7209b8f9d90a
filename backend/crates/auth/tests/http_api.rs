//! HTTP-level tests for the user router against the in-memory repository.

use std::sync::Arc;

use auth::{AuthConfig, InMemoryUserRepository, user_router_generic};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

fn test_app() -> (Router, InMemoryUserRepository) {
    let repo = InMemoryUserRepository::new();
    let config = Arc::new(AuthConfig::new(b"test-secret".to_vec()));
    (user_router_generic(repo.clone(), config), repo)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn register_body(email: &str) -> Value {
    json!({
        "name": "Ada Lovelace",
        "username": "ada",
        "email": email,
        "password": "hunter2hunter2",
    })
}

async fn register(app: &Router, email: &str) {
    let response = app
        .clone()
        .oneshot(post_json("/register", register_body(email)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}

async fn login(app: &Router, email: &str, password: &str) -> axum::response::Response {
    app.clone()
        .oneshot(post_json(
            "/login",
            json!({ "name": "Ada Lovelace", "email": email, "password": password }),
        ))
        .await
        .unwrap()
}

#[tokio::test]
async fn register_persists_user_and_reports_created() {
    let (app, repo) = test_app();

    let response = app
        .clone()
        .oneshot(post_json("/register", register_body("ada@example.com")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response).await["message"],
        "User registered successfully"
    );
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn duplicate_registration_is_rejected_with_400() {
    let (app, repo) = test_app();
    register(&app, "ada@example.com").await;

    let response = app
        .clone()
        .oneshot(post_json("/register", register_body("ada@example.com")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "User already registered");
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn register_with_missing_field_is_rejected() {
    let (app, repo) = test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/register",
            json!({ "name": "Ada", "username": "ada", "email": "ada@example.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "All fields are required");
    assert!(repo.is_empty());
}

#[tokio::test]
async fn login_sets_session_cookie_with_expected_attributes() {
    let (app, _repo) = test_app();
    register(&app, "ada@example.com").await;

    let response = login(&app, "ada@example.com", "hunter2hunter2").await;
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login must set a cookie")
        .to_str()
        .unwrap()
        .to_string();

    assert!(cookie.starts_with("secret="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Secure"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Path=/"));
    assert!(cookie.contains("Max-Age=259200"));

    assert_eq!(
        body_json(response).await["message"],
        "User logged in successfully"
    );
}

#[tokio::test]
async fn login_with_wrong_password_is_401_and_sets_no_cookie() {
    let (app, _repo) = test_app();
    register(&app, "ada@example.com").await;

    let response = login(&app, "ada@example.com", "wrong-password").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    assert_eq!(body_json(response).await["message"], "Invalid credentials");
}

#[tokio::test]
async fn login_with_unknown_email_is_404() {
    let (app, _repo) = test_app();

    let response = login(&app, "nobody@example.com", "whatever").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn session_returns_user_projection_without_password() {
    let (app, _repo) = test_app();
    register(&app, "ada@example.com").await;

    let login_response = login(&app, "ada@example.com", "hunter2hunter2").await;
    let cookie = login_response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/session")
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["email"], "ada@example.com");
    assert_eq!(body["username"], "ada");
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn session_without_cookie_is_401() {
    let (app, _repo) = test_app();

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/session").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["message"], "Unauthorized");
}

#[tokio::test]
async fn logout_deletes_the_session_cookie() {
    let (app, _repo) = test_app();

    let response = app
        .clone()
        .oneshot(post_json("/logout", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(cookie.starts_with("secret="));
    assert!(cookie.contains("Max-Age=0"));
}
