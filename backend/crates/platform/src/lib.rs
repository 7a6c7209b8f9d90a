//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (random bytes, constant-time comparison)
//! - Password hashing (scrypt, salted hash records)
//! - Cookie management

pub mod cookie;
pub mod crypto;
pub mod password;
