//! Password Hashing and Verification
//!
//! Salted password hashing built on scrypt (memory-hard KDF):
//! - Fresh random salt per password (10 raw bytes, hex-encoded)
//! - 64-byte derived key, hex-encoded
//! - Hash and salt stored together as a single `hash.salt` record
//! - Constant-time comparison on verification
//!
//! The salt is fed to the KDF as the bytes of its hex encoding, so the
//! stored record alone is enough to re-derive and verify.

use thiserror::Error;

use crate::crypto::{constant_time_eq, random_bytes};

/// Raw salt length in bytes (hex-encodes to 20 characters)
pub const SALT_LEN: usize = 10;

/// Derived key length in bytes (hex-encodes to 128 characters)
pub const HASH_LEN: usize = 64;

// scrypt cost parameters: N = 2^14, r = 8, p = 1
const SCRYPT_LOG_N: u8 = 14;
const SCRYPT_R: u32 = 8;
const SCRYPT_P: u32 = 1;

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Key derivation failed
    #[error("Password hashing failed: {0}")]
    DerivationFailed(String),

    /// Stored record is not `hash.salt`
    #[error("Invalid password hash record")]
    InvalidRecord,
}

/// A derived password hash together with its salt, both hex-encoded.
///
/// Stored as a single dot-delimited string: `<hash>.<salt>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashRecord {
    hash: String,
    salt: String,
}

impl HashRecord {
    /// Hex-encoded derived hash
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Hex-encoded salt
    pub fn salt(&self) -> &str {
        &self.salt
    }

    /// Encode as the stored `hash.salt` form
    pub fn encode(&self) -> String {
        format!("{}.{}", self.hash, self.salt)
    }

    /// Parse a stored `hash.salt` record
    pub fn parse(record: &str) -> Result<Self, PasswordHashError> {
        let (hash, salt) = record
            .split_once('.')
            .ok_or(PasswordHashError::InvalidRecord)?;

        if hash.is_empty() || salt.is_empty() {
            return Err(PasswordHashError::InvalidRecord);
        }

        Ok(Self {
            hash: hash.to_string(),
            salt: salt.to_string(),
        })
    }
}

/// Hash a password with a fresh random salt.
///
/// Returns the hash and salt as a [`HashRecord`]; callers persist
/// `record.encode()`.
pub fn hash_password(password: &str) -> Result<HashRecord, PasswordHashError> {
    let salt = hex::encode(random_bytes(SALT_LEN));
    let hash = derive(password, &salt)?;

    Ok(HashRecord { hash, salt })
}

/// Re-derive the hash with the stored salt and compare.
///
/// Comparison is constant-time over the hex encodings. Any derivation
/// error propagates; this never silently reports a match.
pub fn verify_password(
    password: &str,
    salt: &str,
    expected_hash: &str,
) -> Result<bool, PasswordHashError> {
    let derived = derive(password, salt)?;
    Ok(constant_time_eq(
        derived.as_bytes(),
        expected_hash.as_bytes(),
    ))
}

/// scrypt key derivation over (password, salt-hex bytes)
fn derive(password: &str, salt: &str) -> Result<String, PasswordHashError> {
    let params = scrypt::Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, HASH_LEN)
        .map_err(|e| PasswordHashError::DerivationFailed(e.to_string()))?;

    let mut output = [0u8; HASH_LEN];
    scrypt::scrypt(password.as_bytes(), salt.as_bytes(), &params, &mut output)
        .map_err(|e| PasswordHashError::DerivationFailed(e.to_string()))?;

    Ok(hex::encode(output))
}
