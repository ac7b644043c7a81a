//! Meal plan API handlers
//!
//! Every route is scoped to the authenticated caller.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use recipebox_auth::AuthUser;
use recipebox_common::{Error, Result, ValidatedJson};
use serde::Deserialize;
use validator::Validate;

use crate::api::middleware::PlannerState;
use crate::domain::entities::{DateRange, MealPlan, MealPlanListing, MealSlot};

/// Body of `POST /v1/meal-plans`
#[derive(Debug, Deserialize, Validate)]
pub struct UpsertMealPlanRequest {
    #[validate(range(min = 1))]
    pub recipe_id: i64,

    /// `YYYY-MM-DD`
    pub meal_date: NaiveDate,

    #[validate(length(min = 1, max = 50))]
    pub meal_type: String,
}

/// Query of `DELETE /v1/meal-plans`; both fields are required
#[derive(Debug, Default, Deserialize)]
pub struct SlotQuery {
    pub meal_date: Option<NaiveDate>,
    pub meal_type: Option<String>,
}

impl SlotQuery {
    fn into_slot(self) -> Option<MealSlot> {
        match (self.meal_date, self.meal_type) {
            (Some(meal_date), Some(meal_type)) if !meal_type.trim().is_empty() => {
                Some(MealSlot {
                    meal_date,
                    meal_type,
                })
            }
            _ => None,
        }
    }
}

/// List the caller's meal plans
///
/// **GET /v1/meal-plans?start_date=&end_date=**
pub async fn list_meal_plans(
    AuthUser(principal): AuthUser,
    State(state): State<PlannerState>,
    Query(range): Query<DateRange>,
) -> Result<Json<Vec<MealPlanListing>>> {
    if range.is_empty() {
        return Err(Error::Validation(
            "start_date must not be after end_date".to_string(),
        ));
    }

    let plans = state
        .repos
        .meal_plans
        .list_for_user(principal.user_id, range)
        .await?;

    Ok(Json(plans))
}

/// Put a recipe into one of the caller's meal slots
///
/// **POST /v1/meal-plans**
///
/// **Business Rules:**
/// - Recipe must exist (404)
/// - An occupied slot is overwritten
pub async fn upsert_meal_plan(
    AuthUser(principal): AuthUser,
    State(state): State<PlannerState>,
    ValidatedJson(req): ValidatedJson<UpsertMealPlanRequest>,
) -> Result<(StatusCode, Json<MealPlan>)> {
    if !state.repos.meal_plans.recipe_exists(req.recipe_id).await? {
        return Err(Error::NotFound("Recipe not found".to_string()));
    }

    let slot = MealSlot {
        meal_date: req.meal_date,
        meal_type: req.meal_type,
    };
    let plan = state
        .repos
        .meal_plans
        .upsert(principal.user_id, req.recipe_id, &slot)
        .await?;

    tracing::info!(
        meal_plan_id = plan.id,
        user_id = principal.user_id,
        meal_date = %plan.meal_date,
        "Meal plan saved"
    );

    Ok((StatusCode::CREATED, Json(plan)))
}

/// Delete a meal plan by ID
///
/// **DELETE /v1/meal-plans/{id}**
pub async fn delete_meal_plan(
    AuthUser(principal): AuthUser,
    State(state): State<PlannerState>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    let not_found = || Error::NotFound("Meal plan not found".to_string());

    let plan = state
        .repos
        .meal_plans
        .get_by_id(id)
        .await?
        .ok_or_else(not_found)?;

    if !principal.owns(plan.user_id) {
        return Err(Error::Authorization("Access denied".to_string()));
    }

    if state.repos.meal_plans.delete(id).await? == 0 {
        return Err(not_found());
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Clear one of the caller's slots. Clearing an empty slot succeeds.
///
/// **DELETE /v1/meal-plans?meal_date=&meal_type=**
pub async fn delete_meal_slot(
    AuthUser(principal): AuthUser,
    State(state): State<PlannerState>,
    Query(query): Query<SlotQuery>,
) -> Result<StatusCode> {
    let slot = query.into_slot().ok_or_else(|| {
        Error::Validation("Either meal plan ID or meal_date and meal_type are required".to_string())
    })?;

    let removed = state
        .repos
        .meal_plans
        .delete_slot(principal.user_id, &slot)
        .await?;

    tracing::debug!(user_id = principal.user_id, removed, "Meal slot cleared");

    Ok(StatusCode::NO_CONTENT)
}
