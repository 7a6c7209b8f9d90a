//! API Application
//!
//! Assembles the user and post routers into the full HTTP application.
//! Kept as a library so tests can build the app against in-memory
//! repositories without a running server or database.

use std::sync::Arc;

use auth::domain::repository::UserRepository;
use auth::presentation::middleware::AuthGateState;
use auth::{AuthConfig, user_router_generic};
use axum::{Router, http::StatusCode, routing::get};
use posts::domain::repository::PostRepository;
use posts::post_router_generic;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the application router.
///
/// User routes live under `/api/v1/users`, post routes under
/// `/api/v1/posts`. Both share one [`AuthConfig`] so the gate on post
/// mutations accepts the tokens the login handler issues.
pub fn app<U, P>(user_repo: U, post_repo: P, config: Arc<AuthConfig>) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
    P: PostRepository + Clone + Send + Sync + 'static,
{
    let gate = AuthGateState::new(config.clone());

    Router::new()
        .route("/", get(|| async { "Hello from the blog API" }))
        .nest("/api/v1/users", user_router_generic(user_repo, config))
        .nest("/api/v1/posts", post_router_generic(post_repo, gate))
        .fallback(|| async { (StatusCode::NOT_FOUND, "Custom 404 Message") })
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
