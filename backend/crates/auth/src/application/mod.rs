//! Application Layer
//!
//! Use cases, session token codec, and configuration.

pub mod config;
pub mod login;
pub mod register;
pub mod session;
pub mod token;

// Re-exports
pub use config::AuthConfig;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use register::{RegisterInput, RegisterUseCase};
pub use session::{SessionInfo, SessionUseCase};
pub use token::{Claims, TokenCodec};
