//! Smoke tests for the integration test harness itself

mod common;

use common::TestConfig;

#[test]
fn test_config_loading() {
    let config = TestConfig::from_env();
    assert!(!config.database_url.is_empty());
    assert!(!config.jwt_secret.is_empty());
}

#[test]
fn test_schema_file_declares_every_table() {
    for table in [
        "users",
        "categories",
        "recipes",
        "ingredients",
        "recipe_ingredients",
        "meal_plans",
    ] {
        let ddl = format!("CREATE TABLE IF NOT EXISTS {} (", table);
        assert!(common::SCHEMA_SQL.contains(&ddl), "missing table {}", table);
    }
}
