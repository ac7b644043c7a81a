//! Meal plan repository

use crate::domain::entities::{DateRange, MealPlan, MealPlanListing, MealSlot};
use recipebox_common::{RepositoryError, Result};
use sqlx::PgPool;

const MEAL_PLAN_COLUMNS: &str = "id, user_id, recipe_id, meal_date, meal_type, created_at";

#[derive(Clone)]
pub struct MealPlanRepository {
    pool: PgPool,
}

impl MealPlanRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<MealPlan>> {
        let query = format!("SELECT {MEAL_PLAN_COLUMNS} FROM meal_plans WHERE id = $1");
        let plan = sqlx::query_as::<_, MealPlan>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(plan)
    }

    /// A user's plans within `range`, ordered by date then meal type
    pub async fn list_for_user(
        &self,
        user_id: i64,
        range: DateRange,
    ) -> Result<Vec<MealPlanListing>> {
        let plans = sqlx::query_as::<_, MealPlanListing>(
            r#"
            SELECT mp.id, mp.user_id, mp.recipe_id, mp.meal_date, mp.meal_type, mp.created_at,
                   r.title AS recipe_title, r.image_url AS recipe_image,
                   r.cooking_time, r.servings
            FROM meal_plans mp
            LEFT JOIN recipes r ON mp.recipe_id = r.id
            WHERE mp.user_id = $1
              AND ($2::date IS NULL OR mp.meal_date >= $2)
              AND ($3::date IS NULL OR mp.meal_date <= $3)
            ORDER BY mp.meal_date ASC, mp.meal_type ASC
            "#,
        )
        .bind(user_id)
        .bind(range.start_date)
        .bind(range.end_date)
        .fetch_all(&self.pool)
        .await?;

        Ok(plans)
    }

    pub async fn recipe_exists(&self, recipe_id: i64) -> Result<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM recipes WHERE id = $1)")
                .bind(recipe_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    /// Place `recipe_id` in the user's slot, replacing whatever occupied it
    pub async fn upsert(
        &self,
        user_id: i64,
        recipe_id: i64,
        slot: &MealSlot,
    ) -> Result<MealPlan> {
        let query = format!(
            "INSERT INTO meal_plans (user_id, recipe_id, meal_date, meal_type) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (user_id, meal_date, meal_type) \
             DO UPDATE SET recipe_id = EXCLUDED.recipe_id \
             RETURNING {MEAL_PLAN_COLUMNS}"
        );
        let plan = sqlx::query_as::<_, MealPlan>(&query)
            .bind(user_id)
            .bind(recipe_id)
            .bind(slot.meal_date)
            .bind(&slot.meal_type)
            .fetch_one(&self.pool)
            .await
            .map_err(RepositoryError::from_insert)?;

        Ok(plan)
    }

    /// Returns the number of rows removed
    pub async fn delete(&self, id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM meal_plans WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Clear a user's slot. Returns the number of rows removed.
    pub async fn delete_slot(&self, user_id: i64, slot: &MealSlot) -> Result<u64> {
        let result = sqlx::query(
            "DELETE FROM meal_plans WHERE user_id = $1 AND meal_date = $2 AND meal_type = $3",
        )
        .bind(user_id)
        .bind(slot.meal_date)
        .bind(&slot.meal_type)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
