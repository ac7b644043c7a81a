//! API layer for the Recipes domain
//!
//! Contains HTTP handlers, routes, and domain state definition.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::RecipesState;
pub use routes::routes;
