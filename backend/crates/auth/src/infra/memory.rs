//! In-Memory Repository Implementation
//!
//! Backs integration tests and local development without a database.

use std::sync::{Arc, RwLock};

use kernel::id::UserId;

use crate::domain::repository::UserRepository;
use crate::domain::user::User;
use crate::error::{AuthError, AuthResult};

/// In-memory user repository
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users (test assertions)
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<User>> {
        self.users.read().unwrap_or_else(|e| e.into_inner())
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.write().unwrap_or_else(|e| e.into_inner());
        if users.iter().any(|u| u.email == user.email) {
            return Err(AuthError::Internal("unique violation: email".to_string()));
        }
        users.push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self.read().iter().find(|u| u.user_id == *user_id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AuthResult<Option<User>> {
        Ok(self.read().iter().find(|u| u.email == email).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> AuthResult<bool> {
        Ok(self.read().iter().any(|u| u.email == email))
    }
}
