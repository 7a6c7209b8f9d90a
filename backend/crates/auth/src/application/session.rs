//! Session Use Case
//!
//! Loads the profile projection for an authenticated user.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::repository::UserRepository;
use crate::error::AuthResult;

/// User projection returned to authenticated clients.
/// Never includes the password record.
pub struct SessionInfo {
    pub user_id: UserId,
    pub name: String,
    pub username: String,
    pub email: String,
}

/// Session use case
pub struct SessionUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> SessionUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Returns `None` when the identity from the token no longer has a
    /// user row; the handler renders that as JSON `null`.
    pub async fn execute(&self, user_id: &UserId) -> AuthResult<Option<SessionInfo>> {
        let user = self.repo.find_by_id(user_id).await?;

        Ok(user.map(|u| SessionInfo {
            user_id: u.user_id,
            name: u.name,
            username: u.username,
            email: u.email,
        }))
    }
}
