//! HTTP-level tests for the post router against the in-memory repository.
//!
//! Session tokens are issued directly with the codec; no user store is
//! involved because the gate verifies tokens purely cryptographically.

use std::sync::Arc;

use auth::presentation::middleware::AuthGateState;
use auth::{AuthConfig, TokenCodec};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use kernel::id::UserId;
use posts::domain::repository::PostRepository;
use posts::{InMemoryPostRepository, post_router_generic};
use serde_json::{Value, json};
use tower::ServiceExt;

const SECRET: &[u8] = b"test-secret";

fn test_app() -> (Router, InMemoryPostRepository) {
    let repo = InMemoryPostRepository::new();
    let config = Arc::new(AuthConfig::new(SECRET.to_vec()));
    let gate = AuthGateState::new(config);
    (post_router_generic(repo.clone(), gate), repo)
}

fn session_cookie() -> String {
    let codec = TokenCodec::new(SECRET.to_vec());
    let token = codec
        .issue(&UserId::new(), std::time::Duration::from_secs(3600))
        .unwrap();
    format!("secret={token}")
}

fn request(method: &str, uri: &str, cookie: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_body() -> Value {
    json!({ "title": "First post", "content": "Hello" })
}

#[tokio::test]
async fn create_without_session_is_401_and_persists_nothing() {
    let (app, repo) = test_app();

    let response = app
        .clone()
        .oneshot(request("POST", "/create", None, Some(post_body())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["message"], "Unauthorized");
    assert!(repo.is_empty());
}

#[tokio::test]
async fn create_with_session_persists_the_post() {
    let (app, repo) = test_app();
    let cookie = session_cookie();

    let response = app
        .clone()
        .oneshot(request("POST", "/create", Some(&cookie), Some(post_body())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Post created successfully");
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn create_with_missing_title_is_400() {
    let (app, repo) = test_app();
    let cookie = session_cookie();

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/create",
            Some(&cookie),
            Some(json!({ "content": "no title" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "All fields are required");
    assert!(repo.is_empty());
}

#[tokio::test]
async fn get_unknown_id_is_404() {
    let (app, _repo) = test_app();

    let uri = format!("/{}", uuid::Uuid::new_v4());
    let response = app
        .clone()
        .oneshot(request("GET", &uri, None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["message"],
        "Cannot find post with this id"
    );
}

#[tokio::test]
async fn get_unparseable_id_is_404_not_400() {
    let (app, _repo) = test_app();

    let response = app
        .clone()
        .oneshot(request("GET", "/not-a-uuid", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_projects_posts_with_camel_case_keys() {
    let (app, _repo) = test_app();
    let cookie = session_cookie();

    app.clone()
        .oneshot(request("POST", "/create", Some(&cookie), Some(post_body())))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(request("GET", "/", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let posts = body_json(response).await;
    let posts = posts.as_array().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["title"], "First post");
    assert!(posts[0].get("createdAt").is_some());
    assert!(posts[0].get("userId").is_some());
}

#[tokio::test]
async fn update_with_missing_content_is_404() {
    let (app, repo) = test_app();
    let cookie = session_cookie();

    app.clone()
        .oneshot(request("POST", "/create", Some(&cookie), Some(post_body())))
        .await
        .unwrap();
    let id = repo.list().await.unwrap()[0].post_id;

    let response = app
        .clone()
        .oneshot(request(
            "PUT",
            &format!("/update/{id}"),
            Some(&cookie),
            Some(json!({ "title": "only title" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "All fields are required");
}

#[tokio::test]
async fn update_success_responds_201() {
    let (app, repo) = test_app();
    let cookie = session_cookie();

    app.clone()
        .oneshot(request("POST", "/create", Some(&cookie), Some(post_body())))
        .await
        .unwrap();
    let id = repo.list().await.unwrap()[0].post_id;

    let response = app
        .clone()
        .oneshot(request(
            "PUT",
            &format!("/update/{id}"),
            Some(&cookie),
            Some(json!({ "title": "new title", "content": "new content" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["message"], "Post updated successfully");

    let updated = repo.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(updated.title, "new title");
}

#[tokio::test]
async fn update_unknown_id_is_404() {
    let (app, _repo) = test_app();
    let cookie = session_cookie();

    let uri = format!("/update/{}", uuid::Uuid::new_v4());
    let response = app
        .clone()
        .oneshot(request(
            "PUT",
            &uri,
            Some(&cookie),
            Some(json!({ "title": "t", "content": "c" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_removes_the_post_then_404s() {
    let (app, repo) = test_app();
    let cookie = session_cookie();

    app.clone()
        .oneshot(request("POST", "/create", Some(&cookie), Some(post_body())))
        .await
        .unwrap();
    let id = repo.list().await.unwrap()[0].post_id;

    let response = app
        .clone()
        .oneshot(request("DELETE", &format!("/delete/{id}"), Some(&cookie), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Post deleted successfully");
    assert!(repo.is_empty());

    let response = app
        .clone()
        .oneshot(request("DELETE", &format!("/delete/{id}"), Some(&cookie), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn expired_token_is_rejected_by_the_gate() {
    let (app, repo) = test_app();

    let codec = TokenCodec::new(SECRET.to_vec());
    let token = codec
        .issue(&UserId::new(), std::time::Duration::from_secs(0))
        .unwrap();
    let cookie = format!("secret={token}");

    let response = app
        .clone()
        .oneshot(request("POST", "/create", Some(&cookie), Some(post_body())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(repo.is_empty());
}
