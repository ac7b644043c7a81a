//! Token issuance and verification
//!
//! Wire format: `b64url(header) "." b64url(payload) "." b64url(hmac_sha256)`,
//! every segment without `=` padding. The header is fixed to
//! `{"alg":"HS256","typ":"JWT"}` so issued tokens are ordinary HS256 JWTs.
//!
//! Both operations are pure: the secret and the current time are passed in.

use base64::{
    alphabet,
    engine::{general_purpose::URL_SAFE_NO_PAD, DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine as _,
};
use chrono::{DateTime, Utc};
use hmac::Mac;
use recipebox_common::constant_time_eq;

use crate::claims::TokenClaims;
use crate::config::TokenSecret;
use crate::principal::Principal;

/// Token lifetime: 7 days
pub const TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

const HEADER_JSON: &str = r#"{"alg":"HS256","typ":"JWT"}"#;

/// URL-safe decoder that accepts segments with or without padding
const LENIENT_URL_SAFE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Outcome of verifying a token.
///
/// Failure reasons are deliberately collapsed into a single `Invalid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    Valid(Principal),
    Invalid,
}

impl Verification {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verification::Valid(_))
    }

    pub fn into_principal(self) -> Option<Principal> {
        match self {
            Verification::Valid(principal) => Some(principal),
            Verification::Invalid => None,
        }
    }
}

/// Issue a token for `user_id` / `email`, expiring `TOKEN_TTL_SECS` after `now`.
pub fn issue_token(user_id: i64, email: &str, secret: &TokenSecret, now: DateTime<Utc>) -> String {
    let exp = now.timestamp() + TOKEN_TTL_SECS;

    // Display on a JSON string value yields the quoted, escaped literal
    let email_json = serde_json::Value::String(email.to_string());
    let payload_json = format!(
        r#"{{"user_id":{},"email":{},"exp":{}}}"#,
        user_id, email_json, exp
    );

    let header = URL_SAFE_NO_PAD.encode(HEADER_JSON);
    let payload = URL_SAFE_NO_PAD.encode(payload_json);
    let signature = sign(secret, &header, &payload);

    format!("{header}.{payload}.{signature}")
}

/// Verify `token` against `secret` at time `now`.
///
/// Never panics; every malformed, forged, or expired token is `Invalid`.
pub fn verify_token(token: &str, secret: &TokenSecret, now: DateTime<Utc>) -> Verification {
    let mut segments = token.split('.');
    let (Some(header), Some(payload), Some(signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Verification::Invalid;
    };

    let expected = sign(secret, header, payload);
    if !constant_time_eq(expected.as_bytes(), signature.as_bytes()) {
        return Verification::Invalid;
    }

    let Some(claims) = decode_claims(payload) else {
        return Verification::Invalid;
    };

    if claims.exp <= now.timestamp() {
        return Verification::Invalid;
    }

    Verification::Valid(claims.into())
}

/// HMAC-SHA256 over `header.payload`, base64url without padding
fn sign(secret: &TokenSecret, header: &str, payload: &str) -> String {
    let mut mac = secret.mac();
    mac.update(header.as_bytes());
    mac.update(b".");
    mac.update(payload.as_bytes());
    URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
}

fn decode_claims(payload: &str) -> Option<TokenClaims> {
    let bytes = LENIENT_URL_SAFE.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}
