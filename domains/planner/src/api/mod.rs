//! API layer for the Meal planner domain

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::PlannerState;
pub use routes::routes;
