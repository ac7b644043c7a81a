//! Planner domain state and auth backend integration

use crate::PlannerRepositories;
use axum::extract::FromRef;
use recipebox_auth::AuthBackend;

/// Application state for the Meal planner domain
#[derive(Clone)]
pub struct PlannerState {
    pub repos: PlannerRepositories,
    pub auth: AuthBackend,
}

impl FromRef<PlannerState> for AuthBackend {
    fn from_ref(state: &PlannerState) -> Self {
        state.auth.clone()
    }
}
