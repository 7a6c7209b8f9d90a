//! Post Entity

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};

/// Post entity
#[derive(Debug, Clone)]
pub struct Post {
    /// Internal UUID identifier
    pub post_id: PostId,
    /// Title
    pub title: String,
    /// Body content
    pub content: String,
    /// Owning user (plain reference; mutation is not ownership-checked)
    pub user_id: UserId,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post owned by `user_id`
    pub fn new(title: String, content: String, user_id: UserId) -> Self {
        Self {
            post_id: PostId::new(),
            title,
            content,
            user_id,
            created_at: Utc::now(),
        }
    }
}
