//! Posts Backend Module
//!
//! CRUD over blog posts owned by users. Mutating routes sit behind the
//! auth gate from the `auth` crate; reads are public.
//!
//! Structure mirrors the auth crate:
//! - `domain/` - Post entity and repository trait
//! - `infra/` - Repository implementations (Postgres, in-memory)
//! - `presentation/` - HTTP handlers, DTOs, router

pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{PostError, PostResult};
pub use infra::memory::InMemoryPostRepository;
pub use infra::postgres::PgPostRepository;
pub use presentation::router::{post_router, post_router_generic};
