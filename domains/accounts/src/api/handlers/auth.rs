//! Authentication API handlers
//!
//! A single endpoint dispatches on the `action` field of the request body:
//! `register`, `login`, or `verify`.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use recipebox_common::{hash_password, verify_password, Error, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::api::middleware::AccountsState;
use crate::domain::entities::UserProfile;

/// Request for registering a new account
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email, length(max = 254))]
    pub email: String,

    #[validate(length(min = 1, max = 1024))]
    pub password: String,

    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

/// Request for logging in
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Request for checking a previously issued token
#[derive(Debug, Deserialize, Validate)]
pub struct VerifyRequest {
    #[validate(length(min = 1))]
    pub token: String,
}

/// Body of `POST /v1/auth`, tagged by `action`
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum AuthRequest {
    Register(RegisterRequest),
    Login(LoginRequest),
    Verify(VerifyRequest),
}

impl Validate for AuthRequest {
    fn validate(&self) -> std::result::Result<(), ValidationErrors> {
        match self {
            AuthRequest::Register(req) => req.validate(),
            AuthRequest::Login(req) => req.validate(),
            AuthRequest::Verify(req) => req.validate(),
        }
    }
}

/// Token plus profile, returned by register and login
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub user: UserProfile,
}

/// Profile returned by verify
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub user: UserProfile,
}

/// Register, log in, or verify a token
///
/// **POST /v1/auth**
pub async fn handle_auth(
    State(state): State<AccountsState>,
    ValidatedJson(request): ValidatedJson<AuthRequest>,
) -> Result<Response> {
    let response = match request {
        AuthRequest::Register(req) => register(&state, req).await?.into_response(),
        AuthRequest::Login(req) => login(&state, req).await?.into_response(),
        AuthRequest::Verify(req) => verify(&state, req).await?.into_response(),
    };

    Ok(response)
}

/// Create the account and sign the user in.
///
/// **Business Rules:**
/// - Email must not already be registered (409)
async fn register(
    state: &AccountsState,
    request: RegisterRequest,
) -> Result<(StatusCode, Json<SessionResponse>)> {
    if state
        .repos
        .users
        .find_by_email(&request.email)
        .await?
        .is_some()
    {
        return Err(Error::Conflict("User already exists".to_string()));
    }

    let password_hash = hash_password(&request.password);
    let user = state
        .repos
        .users
        .create(&request.email, &password_hash, &request.name)
        .await?;

    tracing::info!(user_id = %user.id, "User registered");

    let token = state.auth.issue(user.id, &user.email);

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            token,
            user: user.into(),
        }),
    ))
}

async fn login(state: &AccountsState, request: LoginRequest) -> Result<Json<SessionResponse>> {
    let invalid = || Error::Authentication("Invalid credentials".to_string());

    let user = state
        .repos
        .users
        .find_by_email(&request.email)
        .await?
        .ok_or_else(invalid)?;

    if !verify_password(&request.password, &user.password_hash) {
        tracing::debug!(user_id = %user.id, "Login rejected: wrong password");
        return Err(invalid());
    }

    let token = state.auth.issue(user.id, &user.email);

    Ok(Json(SessionResponse {
        token,
        user: user.into(),
    }))
}

/// Check a token and return the profile of the user it names
async fn verify(state: &AccountsState, request: VerifyRequest) -> Result<Json<VerifyResponse>> {
    let principal = state
        .auth
        .authenticate(&request.token)
        .map_err(|_| Error::Authentication("Invalid token".to_string()))?;

    let user = state
        .repos
        .users
        .get_by_id(principal.user_id)
        .await?
        .ok_or_else(|| Error::Authentication("User not found".to_string()))?;

    Ok(Json(VerifyResponse { user: user.into() }))
}
