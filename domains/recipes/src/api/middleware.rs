//! Recipes domain state and auth backend integration

use crate::RecipesRepositories;
use axum::extract::FromRef;
use recipebox_auth::AuthBackend;

/// Application state for the Recipes domain
#[derive(Clone)]
pub struct RecipesState {
    pub repos: RecipesRepositories,
    pub auth: AuthBackend,
}

impl FromRef<RecipesState> for AuthBackend {
    fn from_ref(state: &RecipesState) -> Self {
        state.auth.clone()
    }
}
