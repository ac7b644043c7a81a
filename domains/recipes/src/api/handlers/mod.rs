//! HTTP handlers for the Recipes domain

pub mod ingredients;
pub mod recipes;
