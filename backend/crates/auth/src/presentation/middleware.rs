//! Auth Gate Middleware
//!
//! Middleware for requiring a valid session token on protected routes.
//! Verification is purely cryptographic; no persistence round-trip.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::id::UserId;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenCodec;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthGateState {
    pub config: Arc<AuthConfig>,
}

impl AuthGateState {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }
}

/// Authenticated identity stored in request extensions
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: UserId,
}

/// Middleware that requires a valid session token.
///
/// Reads the session cookie, verifies the token, and attaches
/// [`AuthUser`] to the request before invoking the downstream handler.
/// Missing or invalid tokens short-circuit with 401.
pub async fn require_session(
    State(state): State<AuthGateState>,
    mut req: Request,
    next: Next,
) -> Response {
    let token = platform::cookie::extract_cookie(req.headers(), &state.config.cookie.name);

    let Some(token) = token else {
        return AuthError::InvalidToken.into_response();
    };

    let codec = TokenCodec::new(state.config.token_secret.clone());
    match codec.verify(&token) {
        Ok(claims) => {
            req.extensions_mut().insert(AuthUser {
                user_id: claims.user_id(),
            });
            next.run(req).await
        }
        Err(err) => err.into_response(),
    }
}
