//! Recipes domain layer: entities and ownership rules

pub mod entities;
