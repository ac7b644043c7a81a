//! Ingredient catalogue repository

use crate::domain::entities::Ingredient;
use recipebox_common::{RepositoryError, Result};
use rust_decimal::Decimal;
use sqlx::PgPool;

const INGREDIENT_COLUMNS: &str = "id, name, unit, calories_per_100g, created_at";

#[derive(Clone)]
pub struct IngredientRepository {
    pool: PgPool,
}

impl IngredientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Ingredient>> {
        let query = format!("SELECT {INGREDIENT_COLUMNS} FROM ingredients WHERE id = $1");
        let ingredient = sqlx::query_as::<_, Ingredient>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(ingredient)
    }

    /// List ingredients by name, optionally filtered by an `ILIKE` pattern
    pub async fn list(&self, pattern: Option<&str>) -> Result<Vec<Ingredient>> {
        let query = format!(
            "SELECT {INGREDIENT_COLUMNS} FROM ingredients \
             WHERE ($1::text IS NULL OR name ILIKE $1) \
             ORDER BY name ASC"
        );
        let ingredients = sqlx::query_as::<_, Ingredient>(&query)
            .bind(pattern)
            .fetch_all(&self.pool)
            .await?;

        Ok(ingredients)
    }

    /// Insert a catalogue ingredient. A duplicate name surfaces as a conflict.
    pub async fn create(
        &self,
        name: &str,
        unit: &str,
        calories_per_100g: Option<Decimal>,
    ) -> Result<Ingredient> {
        let query = format!(
            "INSERT INTO ingredients (name, unit, calories_per_100g) VALUES ($1, $2, $3) \
             RETURNING {INGREDIENT_COLUMNS}"
        );
        let ingredient = sqlx::query_as::<_, Ingredient>(&query)
            .bind(name)
            .bind(unit)
            .bind(calories_per_100g)
            .fetch_one(&self.pool)
            .await
            .map_err(RepositoryError::from_insert)?;

        Ok(ingredient)
    }
}
