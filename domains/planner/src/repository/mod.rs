//! Repository implementations for Meal planner domain

pub mod meal_plans;

use sqlx::PgPool;

pub use meal_plans::MealPlanRepository;

/// Combined repository access for the Meal planner domain
#[derive(Clone)]
pub struct PlannerRepositories {
    pub meal_plans: MealPlanRepository,
}

impl PlannerRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            meal_plans: MealPlanRepository::new(pool),
        }
    }
}
