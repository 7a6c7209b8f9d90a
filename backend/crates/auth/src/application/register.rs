//! Register Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use crate::domain::repository::UserRepository;
use crate::domain::user::User;
use crate::error::{AuthError, AuthResult};

/// Register input (already validated as present by the handler)
pub struct RegisterInput {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<()> {
        if self.repo.exists_by_email(&input.email).await? {
            return Err(AuthError::EmailTaken);
        }

        let record = platform::password::hash_password(&input.password)?;

        let user = User::new(input.name, input.username, input.email, record.encode());

        self.repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            email = %user.email,
            "User registered"
        );

        Ok(())
    }
}
