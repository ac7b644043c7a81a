//! Authentication configuration

use hmac::{Hmac, Mac};
use sha2::Sha256;

pub(crate) type HmacSha256 = Hmac<Sha256>;

/// Errors building a token secret
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SecretError {
    #[error("token secret must not be empty")]
    Empty,
    #[error("token secret is not a usable HMAC key")]
    InvalidKey,
}

/// Server-side signing secret, keyed once at startup.
///
/// The raw secret is never printed.
#[derive(Clone)]
pub struct TokenSecret {
    mac: HmacSha256,
}

impl TokenSecret {
    pub fn new(secret: &str) -> Result<Self, SecretError> {
        if secret.is_empty() {
            return Err(SecretError::Empty);
        }

        let mac =
            HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| SecretError::InvalidKey)?;

        Ok(Self { mac })
    }

    /// A fresh MAC instance keyed with this secret
    pub(crate) fn mac(&self) -> HmacSha256 {
        self.mac.clone()
    }
}

impl std::fmt::Debug for TokenSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("TokenSecret(<redacted>)")
    }
}

/// Authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub secret: TokenSecret,
}

impl AuthConfig {
    pub fn new(jwt_secret: &str) -> Result<Self, SecretError> {
        Ok(Self {
            secret: TokenSecret::new(jwt_secret)?,
        })
    }
}
