//! In-Memory Repository Implementation
//!
//! Backs integration tests and local development without a database.

use std::sync::{Arc, RwLock};

use kernel::id::PostId;

use crate::domain::post::Post;
use crate::domain::repository::PostRepository;
use crate::error::PostResult;

/// In-memory post repository
#[derive(Clone, Default)]
pub struct InMemoryPostRepository {
    posts: Arc<RwLock<Vec<Post>>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored posts (test assertions)
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Post>> {
        self.posts.read().unwrap_or_else(|e| e.into_inner())
    }
}

impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: &Post) -> PostResult<()> {
        self.posts
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(post.clone());
        Ok(())
    }

    async fn list(&self) -> PostResult<Vec<Post>> {
        let mut posts: Vec<Post> = self.read().clone();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn find_by_id(&self, post_id: &PostId) -> PostResult<Option<Post>> {
        Ok(self.read().iter().find(|p| p.post_id == *post_id).cloned())
    }

    async fn update(&self, post_id: &PostId, title: &str, content: &str) -> PostResult<u64> {
        let mut posts = self.posts.write().unwrap_or_else(|e| e.into_inner());
        match posts.iter_mut().find(|p| p.post_id == *post_id) {
            Some(post) => {
                post.title = title.to_string();
                post.content = content.to_string();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, post_id: &PostId) -> PostResult<u64> {
        let mut posts = self.posts.write().unwrap_or_else(|e| e.into_inner());
        let before = posts.len();
        posts.retain(|p| p.post_id != *post_id);
        Ok((before - posts.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::id::UserId;

    #[tokio::test]
    async fn test_crud_roundtrip() {
        let repo = InMemoryPostRepository::new();
        let post = Post::new("title".into(), "content".into(), UserId::new());

        repo.create(&post).await.unwrap();
        assert_eq!(repo.len(), 1);

        assert_eq!(repo.update(&post.post_id, "new", "body").await.unwrap(), 1);
        let updated = repo.find_by_id(&post.post_id).await.unwrap().unwrap();
        assert_eq!(updated.title, "new");

        assert_eq!(repo.delete(&post.post_id).await.unwrap(), 1);
        assert_eq!(repo.delete(&post.post_id).await.unwrap(), 0);
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let repo = InMemoryPostRepository::new();
        let user = UserId::new();

        let mut older = Post::new("old".into(), "c".into(), user);
        older.created_at -= chrono::Duration::seconds(60);
        let newer = Post::new("new".into(), "c".into(), user);

        repo.create(&older).await.unwrap();
        repo.create(&newer).await.unwrap();

        let posts = repo.list().await.unwrap();
        assert_eq!(posts[0].title, "new");
        assert_eq!(posts[1].title, "old");
    }
}
