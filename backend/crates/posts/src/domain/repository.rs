//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//!
//! Update and delete are single conditional statements reporting the
//! affected-row count, so there is no separate existence check and no
//! check-then-act window.

use kernel::id::PostId;

use crate::domain::post::Post;
use crate::error::PostResult;

/// Post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Create a new post
    async fn create(&self, post: &Post) -> PostResult<()>;

    /// All posts, newest first
    async fn list(&self) -> PostResult<Vec<Post>>;

    /// Find post by ID
    async fn find_by_id(&self, post_id: &PostId) -> PostResult<Option<Post>>;

    /// Conditionally update title/content; returns affected-row count
    async fn update(&self, post_id: &PostId, title: &str, content: &str) -> PostResult<u64>;

    /// Conditionally delete; returns affected-row count
    async fn delete(&self, post_id: &PostId) -> PostResult<u64>;
}
