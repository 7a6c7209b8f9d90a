//! Application Configuration
//!
//! Configuration for the Auth application layer. Constructed once at
//! startup and passed to routers explicitly; there is no module-level
//! global.

use std::time::Duration;

use platform::cookie::{CookieConfig, SameSite};

/// Session cookie name
pub const SESSION_COOKIE_NAME: &str = "secret";

/// Session token lifetime (3 days)
pub const SESSION_TTL: Duration = Duration::from_secs(3 * 24 * 3600);

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Secret key for HMAC token signing
    pub token_secret: Vec<u8>,
    /// Token lifetime; also the cookie Max-Age
    pub token_ttl: Duration,
    /// Session cookie attributes
    pub cookie: CookieConfig,
}

impl AuthConfig {
    /// Create config with the given signing secret
    pub fn new(token_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            token_secret: token_secret.into(),
            token_ttl: SESSION_TTL,
            cookie: CookieConfig {
                name: SESSION_COOKIE_NAME.to_string(),
                secure: true,
                http_only: true,
                same_site: SameSite::Lax,
                path: "/".to_string(),
                max_age_secs: Some(SESSION_TTL.as_secs() as i64),
            },
        }
    }

    /// Create config with a random signing secret (for development)
    pub fn with_random_secret() -> Self {
        Self::new(platform::crypto::random_bytes(32))
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        let mut config = Self::with_random_secret();
        config.cookie.secure = false;
        config
    }
}
