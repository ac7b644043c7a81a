//! Authentication backend
//!
//! Binds the token service to the process-wide `AuthConfig` and the wall clock.
//! Holds no database handle: a verified token is sufficient to identify a caller.

use chrono::Utc;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::principal::Principal;
use crate::token::{issue_token, verify_token, Verification};

/// Authentication backend shared by every domain state.
///
/// Domain states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for AuthBackend {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthBackend {
    config: AuthConfig,
}

impl AuthBackend {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Issue a token for a user, valid for seven days from now
    pub fn issue(&self, user_id: i64, email: &str) -> String {
        let token = issue_token(user_id, email, &self.config.secret, Utc::now());
        tracing::debug!(user_id = %user_id, "Issued auth token");
        token
    }

    /// Verify a token against the current time
    pub fn authenticate(&self, token: &str) -> Result<Principal, AuthError> {
        match verify_token(token, &self.config.secret, Utc::now()) {
            Verification::Valid(principal) => Ok(principal),
            Verification::Invalid => {
                tracing::debug!("Token verification failed");
                Err(AuthError::InvalidToken)
            }
        }
    }
}
