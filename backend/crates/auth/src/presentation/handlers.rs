//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    LoginInput, LoginUseCase, RegisterInput, RegisterUseCase, SessionUseCase,
};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{
    LoginRequest, MessageResponse, RegisterRequest, UserResponse, required,
};
use crate::presentation::middleware::AuthUser;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/v1/users/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let input = RegisterInput {
        name: required(&req.name)?.to_string(),
        username: required(&req.username)?.to_string(),
        email: required(&req.email)?.to_string(),
        password: required(&req.password)?.to_string(),
    };

    let use_case = RegisterUseCase::new(state.repo.clone());
    use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/v1/users/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    // `name` is validated for presence but otherwise unused
    required(&req.name)?;

    let input = LoginInput {
        email: required(&req.email)?.to_string(),
        password: required(&req.password)?.to_string(),
    };

    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case.execute(input).await?;

    let cookie = state.config.cookie.build_set_cookie(&output.token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(MessageResponse::new("User logged in successfully")),
    ))
}

// ============================================================================
// Session
// ============================================================================

/// GET /api/v1/users/session
///
/// Runs behind the auth gate; responds with the user projection, or
/// JSON `null` when the token's user no longer exists.
pub async fn session<R>(
    State(state): State<AuthAppState<R>>,
    Extension(auth_user): Extension<AuthUser>,
) -> AuthResult<Json<Option<UserResponse>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SessionUseCase::new(state.repo.clone());
    let info = use_case.execute(&auth_user.user_id).await?;

    Ok(Json(info.map(|i| UserResponse {
        id: i.user_id.to_string(),
        name: i.name,
        username: i.username,
        email: i.email,
    })))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/v1/users/logout
///
/// Tokens are stateless, so logout is purely cookie deletion.
pub async fn logout<R>(
    State(state): State<AuthAppState<R>>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let cookie = state.config.cookie.build_delete_cookie();

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(MessageResponse::new("User logged out successfully")),
    ))
}
