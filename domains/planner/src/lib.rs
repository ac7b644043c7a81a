//! Meal planner domain: per-user meal slots by date and meal type

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{DateRange, MealPlan, MealPlanListing, MealSlot};

// Re-export repository types
pub use repository::{MealPlanRepository, PlannerRepositories};

// Re-export API types
pub use api::routes;
pub use api::PlannerState;
