//! Post Router

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use auth::presentation::middleware::{AuthGateState, require_session};

use crate::domain::repository::PostRepository;
use crate::infra::postgres::PgPostRepository;
use crate::presentation::handlers::{self, PostAppState};

/// Create the post router with the PostgreSQL repository
pub fn post_router(repo: PgPostRepository, gate: AuthGateState) -> Router {
    post_router_generic(repo, gate)
}

/// Create a generic post router for any repository implementation.
///
/// Reads are public; create/update/delete sit behind the auth gate.
pub fn post_router_generic<R>(repo: R, gate: AuthGateState) -> Router
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let state = PostAppState {
        repo: Arc::new(repo),
    };

    let protected = Router::new()
        .route("/create", post(handlers::create::<R>))
        .route("/update/{id}", put(handlers::update::<R>))
        .route("/delete/{id}", delete(handlers::remove::<R>))
        .route_layer(middleware::from_fn_with_state(gate, require_session))
        .with_state(state.clone());

    let public = Router::new()
        .route("/", get(handlers::list::<R>))
        .route("/{id}", get(handlers::get_one::<R>))
        .with_state(state);

    public.merge(protected)
}
