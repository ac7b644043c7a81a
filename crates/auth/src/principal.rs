//! Authenticated identity resolved from a verified token

use crate::claims::TokenClaims;

/// The authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: i64,
    pub email: String,
    /// Token expiry (seconds since epoch)
    pub expires_at: i64,
}

impl Principal {
    /// Whether this principal owns a row whose owner column is `owner_id`
    pub fn owns(&self, owner_id: i64) -> bool {
        self.user_id == owner_id
    }
}

impl From<TokenClaims> for Principal {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.user_id,
            email: claims.email,
            expires_at: claims.exp,
        }
    }
}
