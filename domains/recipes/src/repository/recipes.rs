//! Recipe read repository

use crate::domain::entities::{Recipe, RecipeFilter, RecipeIngredient, RecipeListing};
use recipebox_common::Result;
use sqlx::PgPool;

/// All columns in the recipes table, used for SELECT and RETURNING clauses.
pub(crate) const RECIPE_COLUMNS: &str = "id, user_id, title, description, image_url, \
     cooking_time, servings, difficulty, category_id, instructions, created_at, updated_at";

/// Recipe columns qualified by the `r` alias plus the author join
const LISTING_COLUMNS: &str = "r.id, r.user_id, r.title, r.description, r.image_url, \
     r.cooking_time, r.servings, r.difficulty, r.category_id, r.instructions, \
     r.created_at, r.updated_at, u.name AS author_name";

#[derive(Clone)]
pub struct RecipeRepository {
    pool: PgPool,
}

impl RecipeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get recipe by ID
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Recipe>> {
        let query = format!("SELECT {RECIPE_COLUMNS} FROM recipes WHERE id = $1");
        let recipe = sqlx::query_as::<_, Recipe>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(recipe)
    }

    /// Get recipe with author name
    pub async fn get_listing(&self, id: i64) -> Result<Option<RecipeListing>> {
        let query = format!(
            "SELECT {LISTING_COLUMNS} FROM recipes r \
             LEFT JOIN users u ON r.user_id = u.id \
             WHERE r.id = $1"
        );
        let listing = sqlx::query_as::<_, RecipeListing>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(listing)
    }

    /// List recipes, newest first. Absent filters match everything.
    ///
    /// `author_id` restricts the listing to one user's recipes.
    pub async fn list(
        &self,
        filter: &RecipeFilter,
        author_id: Option<i64>,
    ) -> Result<Vec<RecipeListing>> {
        let query = format!(
            "SELECT {LISTING_COLUMNS} FROM recipes r \
             LEFT JOIN users u ON r.user_id = u.id \
             WHERE ($1::int IS NULL OR r.category_id = $1) \
               AND ($2::text IS NULL OR r.title ILIKE $2 OR r.description ILIKE $2) \
               AND ($3::bigint IS NULL OR r.user_id = $3) \
             ORDER BY r.created_at DESC, r.id DESC"
        );
        let recipes = sqlx::query_as::<_, RecipeListing>(&query)
            .bind(filter.category)
            .bind(filter.search_pattern())
            .bind(author_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(recipes)
    }

    /// Ingredient lines of a recipe, ordered by ingredient name
    pub async fn ingredients_of(&self, recipe_id: i64) -> Result<Vec<RecipeIngredient>> {
        let lines = sqlx::query_as::<_, RecipeIngredient>(
            r#"
            SELECT ri.ingredient_id, i.name, ri.amount, ri.unit
            FROM recipe_ingredients ri
            JOIN ingredients i ON i.id = ri.ingredient_id
            WHERE ri.recipe_id = $1
            ORDER BY i.name ASC
            "#,
        )
        .bind(recipe_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(lines)
    }
}
