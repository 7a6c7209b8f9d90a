//! Domain Layer
//!
//! Contains the user entity and repository trait.

pub mod repository;
pub mod user;

// Re-exports
pub use repository::UserRepository;
pub use user::User;
