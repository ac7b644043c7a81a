//! Route definitions for Meal planner domain API

use axum::{
    routing::{delete, get},
    Router,
};

use super::handlers::meal_plans;
use super::middleware::PlannerState;

/// Create all Meal planner domain API routes
pub fn routes() -> Router<PlannerState> {
    Router::new()
        .route(
            "/v1/meal-plans",
            get(meal_plans::list_meal_plans)
                .post(meal_plans::upsert_meal_plan)
                .delete(meal_plans::delete_meal_slot),
        )
        .route("/v1/meal-plans/{id}", delete(meal_plans::delete_meal_plan))
}
