//! Recipe API handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use recipebox_auth::{AuthUser, MaybeAuthUser, Principal};
use recipebox_common::{Error, Result, ValidatedJson};
use serde::Deserialize;
use validator::Validate;

use crate::api::middleware::RecipesState;
use crate::domain::entities::{
    IngredientLine, Recipe, RecipeDetail, RecipeDraft, RecipeFilter, RecipeListing,
};
use crate::repository::{
    create_recipe_tx, delete_recipe_tx, replace_recipe_ingredients_tx, update_recipe_tx,
    upsert_recipe_ingredients_tx,
};

/// Body of `POST /v1/recipes` and `PUT /v1/recipes/{id}`
#[derive(Debug, Deserialize, Validate)]
pub struct RecipeRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    #[validate(length(max = 2048))]
    pub image_url: String,

    /// Minutes
    #[validate(range(min = 0))]
    pub cooking_time: i32,

    #[validate(range(min = 1))]
    pub servings: i32,

    #[validate(length(min = 1, max = 50))]
    pub difficulty: String,

    pub category_id: Option<i32>,

    #[validate(length(min = 1))]
    pub instructions: String,

    /// On update, `None` leaves the existing lines untouched
    #[validate(nested)]
    pub ingredients: Option<Vec<IngredientLine>>,
}

impl RecipeRequest {
    /// Split into the recipe fields and the ingredient lines
    fn into_parts(self) -> (RecipeDraft, Option<Vec<IngredientLine>>) {
        let draft = RecipeDraft {
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            cooking_time: self.cooking_time,
            servings: self.servings,
            difficulty: self.difficulty,
            category_id: self.category_id,
            instructions: self.instructions,
        };
        (draft, self.ingredients)
    }
}

fn recipe_not_found() -> Error {
    Error::NotFound("Recipe not found".to_string())
}

/// Load a recipe and require that `principal` owns it
async fn owned_recipe(state: &RecipesState, id: i64, principal: &Principal) -> Result<Recipe> {
    let recipe = state
        .repos
        .recipes
        .get_by_id(id)
        .await?
        .ok_or_else(recipe_not_found)?;

    if !principal.owns(recipe.user_id) {
        tracing::debug!(
            recipe_id = id,
            user_id = principal.user_id,
            "Recipe write denied: not owner"
        );
        return Err(Error::Authorization("Access denied".to_string()));
    }

    Ok(recipe)
}

/// List recipes, newest first
///
/// **GET /v1/recipes?category=&search=&mine=**
///
/// Public, except `mine=true` which needs a valid token (401).
pub async fn list_recipes(
    MaybeAuthUser(principal): MaybeAuthUser,
    State(state): State<RecipesState>,
    Query(filter): Query<RecipeFilter>,
) -> Result<Json<Vec<RecipeListing>>> {
    let author_id = if filter.mine {
        let principal = principal.ok_or_else(|| {
            Error::Authentication("Authentication required".to_string())
        })?;
        Some(principal.user_id)
    } else {
        None
    };

    let recipes = state.repos.recipes.list(&filter, author_id).await?;
    Ok(Json(recipes))
}

/// Get a recipe with its author and ingredient lines
///
/// **GET /v1/recipes/{id}**
pub async fn get_recipe(
    State(state): State<RecipesState>,
    Path(id): Path<i64>,
) -> Result<Json<RecipeDetail>> {
    let listing = state
        .repos
        .recipes
        .get_listing(id)
        .await?
        .ok_or_else(recipe_not_found)?;

    let ingredients = state.repos.recipes.ingredients_of(id).await?;

    Ok(Json(RecipeDetail {
        listing,
        ingredients,
    }))
}

/// Create a recipe owned by the caller
///
/// **POST /v1/recipes**
///
/// Ingredient lines repeating an `ingredient_id` keep the last amount and unit.
pub async fn create_recipe(
    AuthUser(principal): AuthUser,
    State(state): State<RecipesState>,
    ValidatedJson(req): ValidatedJson<RecipeRequest>,
) -> Result<(StatusCode, Json<Recipe>)> {
    let (draft, lines) = req.into_parts();

    let mut tx = state.repos.begin().await?;
    let recipe = create_recipe_tx(&mut tx, principal.user_id, &draft).await?;
    if let Some(lines) = lines {
        upsert_recipe_ingredients_tx(&mut tx, recipe.id, &lines).await?;
    }
    tx.commit().await?;

    tracing::info!(recipe_id = recipe.id, user_id = principal.user_id, "Recipe created");

    Ok((StatusCode::CREATED, Json(recipe)))
}

/// Replace a recipe's fields, and its ingredient lines when sent
///
/// **PUT /v1/recipes/{id}**
///
/// **Business Rules:**
/// - Recipe must exist (404)
/// - Caller must own it (403)
pub async fn update_recipe(
    AuthUser(principal): AuthUser,
    State(state): State<RecipesState>,
    Path(id): Path<i64>,
    ValidatedJson(req): ValidatedJson<RecipeRequest>,
) -> Result<Json<Recipe>> {
    owned_recipe(&state, id, &principal).await?;

    let (draft, lines) = req.into_parts();

    let mut tx = state.repos.begin().await?;
    let recipe = update_recipe_tx(&mut tx, id, &draft).await?;
    if let Some(lines) = lines {
        replace_recipe_ingredients_tx(&mut tx, id, &lines).await?;
    }
    tx.commit().await?;

    Ok(Json(recipe))
}

/// Delete a recipe with its ingredient lines and meal plans
///
/// **DELETE /v1/recipes/{id}**
pub async fn delete_recipe(
    AuthUser(principal): AuthUser,
    State(state): State<RecipesState>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    owned_recipe(&state, id, &principal).await?;

    let mut tx = state.repos.begin().await?;
    if delete_recipe_tx(&mut tx, id).await? == 0 {
        return Err(recipe_not_found());
    }
    tx.commit().await?;

    tracing::info!(recipe_id = id, user_id = principal.user_id, "Recipe deleted");

    Ok(StatusCode::NO_CONTENT)
}
