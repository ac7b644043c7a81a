//! Route definitions for Recipes domain API

use axum::{
    routing::{delete, get},
    Router,
};

use super::handlers::{ingredients, recipes};
use super::middleware::RecipesState;

/// Create recipe routes
fn recipe_routes() -> Router<RecipesState> {
    Router::new()
        .route(
            "/v1/recipes",
            get(recipes::list_recipes).post(recipes::create_recipe),
        )
        .route(
            "/v1/recipes/{id}",
            get(recipes::get_recipe)
                .put(recipes::update_recipe)
                .delete(recipes::delete_recipe),
        )
}

/// Create ingredient catalogue routes
fn ingredient_routes() -> Router<RecipesState> {
    Router::new()
        .route(
            "/v1/ingredients",
            get(ingredients::list_ingredients).post(ingredients::create_ingredient),
        )
        .route(
            "/v1/ingredients/{id}",
            delete(ingredients::delete_ingredient),
        )
}

/// Create all Recipes domain API routes
pub fn routes() -> Router<RecipesState> {
    Router::new()
        .merge(recipe_routes())
        .merge(ingredient_routes())
}
