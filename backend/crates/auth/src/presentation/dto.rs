//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::error::{AuthError, AuthResult};

// ============================================================================
// Requests
// ============================================================================

/// Register request
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login request.
/// `name` is required by the contract even though login only uses
/// email + password.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

// ============================================================================
// Responses
// ============================================================================

/// Plain success/failure message body
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// User projection (no password record)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
}

// ============================================================================
// Field validation
// ============================================================================

/// Required-field check: absent and empty both count as missing.
/// Whitespace-only values count as present (truthiness contract).
pub(crate) fn required(field: &Option<String>) -> AuthResult<&str> {
    match field.as_deref() {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(AuthError::MissingFields),
    }
}
