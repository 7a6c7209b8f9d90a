//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::post::Post;
use crate::error::{PostError, PostResult};

// ============================================================================
// Requests
// ============================================================================

/// Create/update post request
#[derive(Debug, Clone, Deserialize)]
pub struct PostBodyRequest {
    pub title: Option<String>,
    pub content: Option<String>,
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

/// Post projection
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub user_id: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.post_id.to_string(),
            title: post.title,
            content: post.content,
            created_at: post.created_at,
            user_id: post.user_id.to_string(),
        }
    }
}

// ============================================================================
// Field validation
// ============================================================================

/// Required-field check: absent and empty both count as missing.
/// Whitespace-only values count as present (truthiness contract).
pub(crate) fn required(field: &Option<String>) -> PostResult<&str> {
    match field.as_deref() {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(PostError::MissingFields),
    }
}
