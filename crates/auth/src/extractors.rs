//! Axum extractors for authentication
//!
//! Generic over any state `S` where `AuthBackend: FromRef<S>`.
//! The token travels in `X-Auth-Token`; `Authorization: Bearer <token>` is
//! accepted when that header is absent or blank.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};

use crate::backend::AuthBackend;
use crate::error::AuthError;
use crate::principal::Principal;

/// Header carrying the auth token
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Pull the raw token out of the request headers.
///
/// `Ok(None)` when no token was sent at all. A blank `X-Auth-Token` counts as
/// absent, so `Authorization` is still consulted.
fn extract_token(headers: &HeaderMap) -> Result<Option<String>, AuthError> {
    if let Some(value) = headers.get(AUTH_TOKEN_HEADER) {
        let token = value
            .to_str()
            .map_err(|_| AuthError::InvalidToken)?
            .trim();
        if !token.is_empty() {
            return Ok(Some(token.to_string()));
        }
    }

    match headers.get(AUTHORIZATION) {
        Some(value) => {
            let header_str = value.to_str().map_err(|_| AuthError::InvalidToken)?;
            bearer_token(header_str)
                .map(|token| Some(token.to_string()))
                .ok_or(AuthError::InvalidToken)
        }
        None => Ok(None),
    }
}

/// Token of a `Bearer` credential; the scheme name is case-insensitive
fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    scheme
        .eq_ignore_ascii_case("bearer")
        .then(|| token.trim())
        .filter(|token| !token.is_empty())
}

/// Authenticated caller extractor; rejects with 401 when no valid token is present
#[derive(Debug)]
pub struct AuthUser(pub Principal);

impl<S> FromRequestParts<S> for AuthUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let backend = AuthBackend::from_ref(state);

        let token = extract_token(&parts.headers)?.ok_or(AuthError::MissingToken)?;
        let principal = backend.authenticate(&token)?;

        Ok(AuthUser(principal))
    }
}

/// Optional caller extractor for public endpoints.
///
/// Never rejects: a missing or unverifiable token yields `None`.
#[derive(Debug)]
pub struct MaybeAuthUser(pub Option<Principal>);

impl<S> FromRequestParts<S> for MaybeAuthUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let backend = AuthBackend::from_ref(state);

        let principal = match extract_token(&parts.headers) {
            Ok(Some(token)) => backend.authenticate(&token).ok(),
            _ => None,
        };

        Ok(MaybeAuthUser(principal))
    }
}
