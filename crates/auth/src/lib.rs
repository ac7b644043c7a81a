//! Authentication for Recipebox
//!
//! Issues and verifies compact HMAC-SHA256 signed tokens and provides axum
//! extractors that work with any domain state implementing `FromRef<S>` for
//! `AuthBackend`.

mod backend;
mod claims;
mod config;
mod error;
mod extractors;
mod principal;
pub mod token;

pub use backend::AuthBackend;
pub use claims::TokenClaims;
pub use config::{AuthConfig, SecretError, TokenSecret};
pub use error::AuthError;
pub use extractors::{AuthUser, MaybeAuthUser, AUTH_TOKEN_HEADER};
pub use principal::Principal;
pub use token::{issue_token, verify_token, Verification, TOKEN_TTL_SECS};
