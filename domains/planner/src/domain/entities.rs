//! Domain entities for the Meal planner domain

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One planned meal: a recipe placed in a (date, meal type) slot of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct MealPlan {
    pub id: i64,
    pub user_id: i64,
    pub recipe_id: i64,
    pub meal_date: NaiveDate,
    pub meal_type: String,
    pub created_at: DateTime<Utc>,
}

/// Meal plan joined with a summary of its recipe.
///
/// Recipe fields are `None` when the recipe row no longer exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct MealPlanListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub plan: MealPlan,
    pub recipe_title: Option<String>,
    pub recipe_image: Option<String>,
    pub cooking_time: Option<i32>,
    pub servings: Option<i32>,
}

/// A user's slot for one meal on one day. At most one plan occupies a slot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MealSlot {
    pub meal_date: NaiveDate,
    pub meal_type: String,
}

/// Inclusive date bounds; an absent bound is open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct DateRange {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl DateRange {
    /// A range is empty only when both bounds are set and start is after end
    pub fn is_empty(&self) -> bool {
        matches!((self.start_date, self.end_date), (Some(start), Some(end)) if start > end)
    }
}
