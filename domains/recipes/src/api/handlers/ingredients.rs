//! Ingredient catalogue API handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use recipebox_auth::AuthUser;
use recipebox_common::{Error, Result, ValidatedJson};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::api::middleware::RecipesState;
use crate::domain::entities::{contains_pattern, Ingredient, DEFAULT_INGREDIENT_UNIT};
use crate::repository::delete_ingredient_tx;

fn default_unit() -> String {
    DEFAULT_INGREDIENT_UNIT.to_string()
}

/// Largest value the `NUMERIC(8, 2)` column stores
const MAX_CALORIES: Decimal = Decimal::from_parts(99_999_999, 0, 0, false, 2);

fn validate_calories(value: &Decimal) -> std::result::Result<(), ValidationError> {
    if value.is_sign_negative() {
        return Err(ValidationError::new("negative_calories"));
    }
    // PostgreSQL rounds half away from zero before the precision check
    if value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero) > MAX_CALORIES {
        return Err(ValidationError::new("calories_out_of_range"));
    }
    Ok(())
}

/// Query parameters for `GET /v1/ingredients`
#[derive(Debug, Default, Deserialize)]
pub struct IngredientQuery {
    pub search: Option<String>,
}

/// Body of `POST /v1/ingredients`
#[derive(Debug, Deserialize, Validate)]
pub struct CreateIngredientRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[serde(default = "default_unit")]
    #[validate(length(min = 1, max = 50))]
    pub unit: String,

    #[validate(custom(function = "validate_calories"))]
    pub calories_per_100g: Option<Decimal>,
}

/// List catalogue ingredients by name
///
/// **GET /v1/ingredients?search=**
pub async fn list_ingredients(
    State(state): State<RecipesState>,
    Query(query): Query<IngredientQuery>,
) -> Result<Json<Vec<Ingredient>>> {
    let pattern = contains_pattern(query.search.as_deref());
    let ingredients = state.repos.ingredients.list(pattern.as_deref()).await?;
    Ok(Json(ingredients))
}

/// Add an ingredient to the catalogue
///
/// **POST /v1/ingredients**
///
/// **Business Rules:**
/// - Names are unique (409)
pub async fn create_ingredient(
    AuthUser(principal): AuthUser,
    State(state): State<RecipesState>,
    ValidatedJson(req): ValidatedJson<CreateIngredientRequest>,
) -> Result<(StatusCode, Json<Ingredient>)> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(Error::Validation("Ingredient name is required".to_string()));
    }

    let ingredient = state
        .repos
        .ingredients
        .create(name, &req.unit, req.calories_per_100g)
        .await
        .map_err(|e| match e {
            Error::Conflict(_) => Error::Conflict("Ingredient already exists".to_string()),
            other => other,
        })?;

    tracing::info!(
        ingredient_id = ingredient.id,
        user_id = principal.user_id,
        "Ingredient created"
    );

    Ok((StatusCode::CREATED, Json(ingredient)))
}

/// Remove an ingredient and every recipe line that uses it
///
/// **DELETE /v1/ingredients/{id}**
pub async fn delete_ingredient(
    AuthUser(principal): AuthUser,
    State(state): State<RecipesState>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    let not_found = || Error::NotFound("Ingredient not found".to_string());

    state
        .repos
        .ingredients
        .get_by_id(id)
        .await?
        .ok_or_else(not_found)?;

    let mut tx = state.repos.begin().await?;
    if delete_ingredient_tx(&mut tx, id).await? == 0 {
        return Err(not_found());
    }
    tx.commit().await?;

    tracing::info!(ingredient_id = id, user_id = principal.user_id, "Ingredient deleted");

    Ok(StatusCode::NO_CONTENT)
}
