//! API endpoint integration tests
//!
//! `routing` runs without a database. The other modules need
//! `TEST_DATABASE_URL` and are `#[ignore]`d; run them with
//! `cargo test -p recipebox-integration-tests -- --ignored`.

#![allow(dead_code)]

mod auth;
mod common;
mod ingredients;
mod meal_plans;
mod recipes;
mod routing;
