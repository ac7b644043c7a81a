//! Transaction helpers for multi-statement recipe writes
//!
//! Each helper runs inside a caller-owned transaction so a recipe and its
//! ingredient lines commit or roll back together.

use crate::domain::entities::{IngredientLine, Recipe, RecipeDraft};
use crate::repository::recipes::RECIPE_COLUMNS;
use recipebox_common::{RepositoryError, Result};
use sqlx::{Postgres, Transaction};

/// Insert a recipe owned by `user_id`.
pub async fn create_recipe_tx(
    tx: &mut Transaction<'_, Postgres>,
    user_id: i64,
    draft: &RecipeDraft,
) -> Result<Recipe> {
    let query = format!(
        "INSERT INTO recipes (user_id, title, description, image_url, cooking_time, \
             servings, difficulty, category_id, instructions) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
         RETURNING {RECIPE_COLUMNS}"
    );
    let recipe = sqlx::query_as::<_, Recipe>(&query)
        .bind(user_id)
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.image_url)
        .bind(draft.cooking_time)
        .bind(draft.servings)
        .bind(&draft.difficulty)
        .bind(draft.category_id)
        .bind(&draft.instructions)
        .fetch_one(&mut **tx)
        .await
        .map_err(RepositoryError::from_insert)?;

    Ok(recipe)
}

/// Overwrite every editable field of a recipe and bump `updated_at`.
pub async fn update_recipe_tx(
    tx: &mut Transaction<'_, Postgres>,
    id: i64,
    draft: &RecipeDraft,
) -> Result<Recipe> {
    let query = format!(
        "UPDATE recipes SET title = $2, description = $3, image_url = $4, \
             cooking_time = $5, servings = $6, difficulty = $7, category_id = $8, \
             instructions = $9, updated_at = NOW() \
         WHERE id = $1 \
         RETURNING {RECIPE_COLUMNS}"
    );
    let recipe = sqlx::query_as::<_, Recipe>(&query)
        .bind(id)
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.image_url)
        .bind(draft.cooking_time)
        .bind(draft.servings)
        .bind(&draft.difficulty)
        .bind(draft.category_id)
        .bind(&draft.instructions)
        .fetch_optional(&mut **tx)
        .await
        .map_err(RepositoryError::from_insert)?
        .ok_or(RepositoryError::NotFound)?;

    Ok(recipe)
}

/// Insert ingredient lines, overwriting amount and unit of lines that already exist.
pub async fn upsert_recipe_ingredients_tx(
    tx: &mut Transaction<'_, Postgres>,
    recipe_id: i64,
    lines: &[IngredientLine],
) -> Result<()> {
    for line in lines {
        sqlx::query(
            r#"
            INSERT INTO recipe_ingredients (recipe_id, ingredient_id, amount, unit)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (recipe_id, ingredient_id)
            DO UPDATE SET amount = EXCLUDED.amount, unit = EXCLUDED.unit
            "#,
        )
        .bind(recipe_id)
        .bind(line.ingredient_id)
        .bind(&line.amount)
        .bind(&line.unit)
        .execute(&mut **tx)
        .await
        .map_err(RepositoryError::from_insert)?;
    }

    Ok(())
}

/// Replace the full set of ingredient lines of a recipe.
pub async fn replace_recipe_ingredients_tx(
    tx: &mut Transaction<'_, Postgres>,
    recipe_id: i64,
    lines: &[IngredientLine],
) -> Result<()> {
    sqlx::query("DELETE FROM recipe_ingredients WHERE recipe_id = $1")
        .bind(recipe_id)
        .execute(&mut **tx)
        .await?;

    upsert_recipe_ingredients_tx(tx, recipe_id, lines).await
}

/// Delete a recipe together with its ingredient lines and any meal plans using it.
///
/// Returns the number of recipe rows removed (0 or 1).
pub async fn delete_recipe_tx(tx: &mut Transaction<'_, Postgres>, id: i64) -> Result<u64> {
    sqlx::query("DELETE FROM recipe_ingredients WHERE recipe_id = $1")
        .bind(id)
        .execute(&mut **tx)
        .await?;

    sqlx::query("DELETE FROM meal_plans WHERE recipe_id = $1")
        .bind(id)
        .execute(&mut **tx)
        .await?;

    let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
        .bind(id)
        .execute(&mut **tx)
        .await?;

    Ok(result.rows_affected())
}

/// Delete a catalogue ingredient and every recipe line referencing it.
///
/// Returns the number of ingredient rows removed (0 or 1).
pub async fn delete_ingredient_tx(tx: &mut Transaction<'_, Postgres>, id: i64) -> Result<u64> {
    sqlx::query("DELETE FROM recipe_ingredients WHERE ingredient_id = $1")
        .bind(id)
        .execute(&mut **tx)
        .await?;

    let result = sqlx::query("DELETE FROM ingredients WHERE id = $1")
        .bind(id)
        .execute(&mut **tx)
        .await?;

    Ok(result.rows_affected())
}
