//! Recipebox application composition root
//!
//! Composes all domain routers into a single application.

use std::time::Duration;

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderName, HeaderValue, Method,
    },
    Router,
};
use recipebox_accounts::{AccountsRepositories, AccountsState};
use recipebox_auth::{AuthBackend, AuthConfig, AUTH_TOKEN_HEADER};
use recipebox_common::Config;
use recipebox_planner::{PlannerRepositories, PlannerState};
use recipebox_recipes::{RecipesRepositories, RecipesState};
use sqlx::PgPool;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

/// Largest accepted request body
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// How long browsers may cache a preflight response
const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(86_400);

/// Create the main application router with all domain routes
pub fn create_app(config: &Config, pool: PgPool) -> Result<Router, anyhow::Error> {
    let auth_config = AuthConfig::new(&config.jwt_secret)
        .map_err(|e| anyhow::anyhow!("Invalid JWT_SECRET: {}", e))?;
    let auth = AuthBackend::new(auth_config);

    let accounts_state = AccountsState {
        repos: AccountsRepositories::new(pool.clone()),
        auth: auth.clone(),
    };
    let recipes_state = RecipesState {
        repos: RecipesRepositories::new(pool.clone()),
        auth: auth.clone(),
    };
    let planner_state = PlannerState {
        repos: PlannerRepositories::new(pool),
        auth,
    };

    let app = Router::new()
        .route("/health", axum::routing::get(health_check))
        .merge(recipebox_accounts::routes().with_state(accounts_state))
        .merge(recipebox_recipes::routes().with_state(recipes_state))
        .merge(recipebox_planner::routes().with_state(planner_state));

    Ok(app)
}

/// Wrap the router with tracing, CORS and the body size limit
pub fn with_middleware(app: Router, cors_origins: &str) -> Router {
    app.layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(cors_origins))
        .layer(body_limit_layer())
}

/// CORS for the browser client.
///
/// `*` allows any origin; otherwise `origins` is a comma-separated list and
/// unparsable entries are skipped.
pub fn build_cors_layer(origins: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            CONTENT_TYPE,
            AUTHORIZATION,
            HeaderName::from_static(AUTH_TOKEN_HEADER),
        ])
        .max_age(PREFLIGHT_MAX_AGE);

    if origins.trim() == "*" {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin, "Ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(origins)
}

pub fn body_limit_layer() -> RequestBodyLimitLayer {
    RequestBodyLimitLayer::new(MAX_BODY_BYTES)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
