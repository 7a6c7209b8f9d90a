//! User Entity

use chrono::{DateTime, Utc};
use kernel::id::UserId;

/// User entity
///
/// The `password` field holds the encoded credential record
/// (`hash.salt`, see `platform::password`), never a plaintext password.
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Display name
    pub name: String,
    /// User name
    pub username: String,
    /// Email (unique, used for login)
    pub email: String,
    /// Encoded password hash record (`hash.salt`)
    pub password: String,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user from registration data and a hashed credential
    pub fn new(name: String, username: String, email: String, password_record: String) -> Self {
        Self {
            user_id: UserId::new(),
            name,
            username,
            email,
            password: password_record,
            created_at: Utc::now(),
        }
    }
}
