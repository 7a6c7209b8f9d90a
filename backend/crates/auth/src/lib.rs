//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities and repository traits
//! - `application/` - Use cases, token codec, configuration
//! - `infra/` - Repository implementations (Postgres, in-memory)
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - User registration and login with email + password
//! - Stateless signed session tokens delivered via cookie
//! - Request middleware gating protected routes on a valid token
//!
//! ## Security Model
//! - Passwords hashed with salted scrypt (never stored in plaintext)
//! - Tokens signed with HMAC-SHA256 over a process-wide secret
//! - Expired or tampered tokens always fail verification

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::{Claims, TokenCodec};
pub use error::{AuthError, AuthResult};
pub use infra::memory::InMemoryUserRepository;
pub use infra::postgres::PgUserRepository;
pub use presentation::middleware::{AuthGateState, AuthUser, require_session};
pub use presentation::router::{user_router, user_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
