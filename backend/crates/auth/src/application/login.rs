//! Login Use Case
//!
//! Authenticates a user and issues a signed session token.

use std::sync::Arc;

use platform::password::{HashRecord, verify_password};

use crate::application::config::AuthConfig;
use crate::application::token::TokenCodec;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    /// Signed session token for the cookie
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let user = self
            .repo
            .find_by_email(&input.email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let record = HashRecord::parse(&user.password)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let matched = verify_password(&input.password, record.salt(), record.hash())?;
        if !matched {
            return Err(AuthError::InvalidCredentials);
        }

        let codec = TokenCodec::new(self.config.token_secret.clone());
        let token = codec
            .issue(&user.user_id, self.config.token_ttl)
            .map_err(|_| AuthError::TokenIssue)?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(LoginOutput { token })
    }
}
