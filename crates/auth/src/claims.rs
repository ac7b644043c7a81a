//! Token claims types

use serde::{Deserialize, Serialize};

/// Claims carried in a token payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (users.id)
    pub user_id: i64,
    /// Email
    pub email: String,
    /// Expires at (seconds since epoch)
    pub exp: i64,
}
