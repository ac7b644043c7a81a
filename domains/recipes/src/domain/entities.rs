//! Domain entities for the Recipes domain
//!
//! Row types map 1:1 to the `recipes`, `ingredients` and
//! `recipe_ingredients` tables. Request payloads live next to the handlers;
//! `RecipeDraft` is the validated shape the repositories write.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Default unit for catalogue ingredients (grams)
pub const DEFAULT_INGREDIENT_UNIT: &str = "г";

/// A stored recipe
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Recipe {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub cooking_time: i32,
    pub servings: i32,
    pub difficulty: String,
    pub category_id: Option<i32>,
    pub instructions: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Recipe joined with its author's display name
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct RecipeListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub recipe: Recipe,
    /// `None` when the author row is gone
    pub author_name: Option<String>,
}

/// One ingredient line of a recipe, joined with the catalogue name
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct RecipeIngredient {
    pub ingredient_id: i64,
    pub name: String,
    pub amount: String,
    pub unit: String,
}

/// Full recipe view returned by `GET /v1/recipes/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeDetail {
    #[serde(flatten)]
    pub listing: RecipeListing,
    pub ingredients: Vec<RecipeIngredient>,
}

/// A catalogue ingredient
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    pub unit: String,
    pub calories_per_100g: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

/// Ingredient line as sent by clients when writing a recipe
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct IngredientLine {
    #[validate(range(min = 1))]
    pub ingredient_id: i64,

    #[serde(default)]
    #[validate(length(max = 100))]
    pub amount: String,

    #[serde(default)]
    #[validate(length(max = 50))]
    pub unit: String,
}

/// Recipe fields written on create and update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub cooking_time: i32,
    pub servings: i32,
    pub difficulty: String,
    pub category_id: Option<i32>,
    pub instructions: String,
}

/// Filters for listing recipes
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RecipeFilter {
    pub category: Option<i32>,
    pub search: Option<String>,
    /// Only the caller's own recipes; needs a valid token
    #[serde(default)]
    pub mine: bool,
}

impl RecipeFilter {
    /// `ILIKE` pattern for the search term; blank terms are ignored
    pub fn search_pattern(&self) -> Option<String> {
        contains_pattern(self.search.as_deref())
    }
}

/// Substring `ILIKE` pattern for a user-supplied term.
///
/// `None` for absent or blank terms. `%`, `_` and `\` in the term match
/// literally under PostgreSQL's default `\` escape.
pub fn contains_pattern(term: Option<&str>) -> Option<String> {
    let term = term.map(str::trim).filter(|term| !term.is_empty())?;

    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    Some(pattern)
}
