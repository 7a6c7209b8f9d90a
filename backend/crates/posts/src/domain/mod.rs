//! Domain Layer
//!
//! Contains the post entity and repository trait.

pub mod post;
pub mod repository;

// Re-exports
pub use post::Post;
pub use repository::PostRepository;
