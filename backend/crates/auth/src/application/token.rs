//! Session Token Codec
//!
//! Issues and verifies stateless signed session tokens. A token is
//! `payload.signature` where payload is the base64url-encoded JSON
//! claims `{id, exp}` and signature is the base64url-encoded
//! HMAC-SHA256 of the encoded payload.
//!
//! Tokens are self-contained: nothing is persisted server-side, so
//! verification needs only the signing secret.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use hmac::{Hmac, Mac};
use kernel::id::UserId;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::time::Duration;
use uuid::Uuid;

use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

/// Token claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Authenticated user ID
    pub id: Uuid,
    /// Expiry instant (Unix seconds)
    pub exp: i64,
}

impl Claims {
    /// User ID as the typed domain identifier
    pub fn user_id(&self) -> UserId {
        UserId::from_uuid(self.id)
    }
}

/// Issues and verifies signed session tokens
#[derive(Clone)]
pub struct TokenCodec {
    secret: Vec<u8>,
}

impl TokenCodec {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Issue a token for `user_id` expiring `ttl` from now
    pub fn issue(&self, user_id: &UserId, ttl: Duration) -> AuthResult<String> {
        let exp = Utc::now().timestamp() + ttl.as_secs() as i64;
        self.issue_with_expiry(user_id, exp)
    }

    fn issue_with_expiry(&self, user_id: &UserId, exp: i64) -> AuthResult<String> {
        let claims = Claims {
            id: user_id.into_uuid(),
            exp,
        };

        let payload = serde_json::to_vec(&claims).map_err(|_| AuthError::TokenIssue)?;
        let payload_b64 = URL_SAFE_NO_PAD.encode(payload);

        let signature = self.sign(payload_b64.as_bytes());
        let signature_b64 = URL_SAFE_NO_PAD.encode(signature);

        Ok(format!("{}.{}", payload_b64, signature_b64))
    }

    /// Verify a token's signature and expiry, returning its claims.
    ///
    /// Malformed structure, bad signature, or an expiry at or before
    /// now all fail with [`AuthError::InvalidToken`]. No grace period.
    pub fn verify(&self, token: &str) -> AuthResult<Claims> {
        let (payload_b64, signature_b64) =
            token.split_once('.').ok_or(AuthError::InvalidToken)?;

        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| AuthError::InvalidToken)?;

        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(payload_b64.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| AuthError::InvalidToken)?;

        let payload = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| AuthError::InvalidToken)?;
        let claims: Claims =
            serde_json::from_slice(&payload).map_err(|_| AuthError::InvalidToken)?;

        if claims.exp <= Utc::now().timestamp() {
            return Err(AuthError::InvalidToken);
        }

        Ok(claims)
    }

    fn sign(&self, data: &[u8]) -> Vec<u8> {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(data);
        mac.finalize().into_bytes().to_vec()
    }
}
