//! User Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthGateState, require_session};

/// Create the user router with the PostgreSQL repository
pub fn user_router(repo: PgUserRepository, config: Arc<AuthConfig>) -> Router {
    user_router_generic(repo, config)
}

/// Create a generic user router for any repository implementation
pub fn user_router_generic<R>(repo: R, config: Arc<AuthConfig>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: config.clone(),
    };
    let gate = AuthGateState::new(config);

    let protected = Router::new()
        .route("/session", get(handlers::session::<R>))
        .route_layer(middleware::from_fn_with_state(gate, require_session))
        .with_state(state.clone());

    let public = Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .route("/logout", post(handlers::logout::<R>))
        .with_state(state);

    public.merge(protected)
}
