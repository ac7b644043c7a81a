//! HTTP handlers for the Meal planner domain

pub mod meal_plans;
