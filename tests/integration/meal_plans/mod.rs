//! Meal planner against a real database

use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::common::TestApp;

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_slot_upsert_replaces_recipe() {
    let app = TestApp::new().await.unwrap();
    let (token, _, _) = app.register_user("lea").await;
    let soup = app.create_recipe(&token, "Суп", json!([])).await;
    let salad = app.create_recipe(&token, "Салат", json!([])).await;

    let slot = |recipe_id: i64| {
        json!({"recipe_id": recipe_id, "meal_date": "2031-05-04", "meal_type": "lunch"})
    };

    let first = app
        .request(Method::POST, "/v1/meal-plans", Some(token.as_str()), Some(slot(soup)))
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app
        .request(Method::POST, "/v1/meal-plans", Some(token.as_str()), Some(slot(salad)))
        .await;
    assert_eq!(second.status, StatusCode::CREATED);
    assert_eq!(second.body["id"], first.body["id"]);
    assert_eq!(second.body["recipe_id"], salad);

    let listed = app
        .request(
            Method::GET,
            "/v1/meal-plans?start_date=2031-05-04&end_date=2031-05-04",
            Some(token.as_str()),
            None,
        )
        .await;
    assert_eq!(listed.status, StatusCode::OK);
    let plans = listed.body.as_array().unwrap();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0]["recipe_title"], "Салат");
    assert_eq!(plans[0]["meal_date"], "2031-05-04");
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_unknown_recipe_is_not_found() {
    let app = TestApp::new().await.unwrap();
    let (token, _, _) = app.register_user("max").await;

    let response = app
        .request(
            Method::POST,
            "/v1/meal-plans",
            Some(token.as_str()),
            Some(json!({"recipe_id": 999999999, "meal_date": "2031-05-04", "meal_type": "dinner"})),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_plans_are_private_and_ordered() {
    let app = TestApp::new().await.unwrap();
    let (owner, _, _) = app.register_user("ned").await;
    let (other, _, _) = app.register_user("oli").await;
    let recipe = app.create_recipe(&owner, "Каша", json!([])).await;

    for (date, meal_type) in [
        ("2031-06-02", "breakfast"),
        ("2031-06-01", "dinner"),
        ("2031-06-01", "breakfast"),
        ("2031-06-09", "lunch"),
    ] {
        let response = app
            .request(
                Method::POST,
                "/v1/meal-plans",
                Some(owner.as_str()),
                Some(json!({"recipe_id": recipe, "meal_date": date, "meal_type": meal_type})),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let listed = app
        .request(
            Method::GET,
            "/v1/meal-plans?start_date=2031-06-01&end_date=2031-06-07",
            Some(owner.as_str()),
            None,
        )
        .await;
    let slots: Vec<(String, String)> = listed
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| {
            (
                p["meal_date"].as_str().unwrap().to_string(),
                p["meal_type"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    assert_eq!(
        slots,
        vec![
            ("2031-06-01".to_string(), "breakfast".to_string()),
            ("2031-06-01".to_string(), "dinner".to_string()),
            ("2031-06-02".to_string(), "breakfast".to_string()),
        ]
    );

    let foreign = app
        .request(
            Method::GET,
            "/v1/meal-plans?start_date=2031-06-01&end_date=2031-06-07",
            Some(other.as_str()),
            None,
        )
        .await;
    assert_eq!(foreign.body, json!([]));

    let plan_id = listed.body[0]["id"].as_i64().unwrap();
    let denied = app
        .request(
            Method::DELETE,
            &format!("/v1/meal-plans/{}", plan_id),
            Some(other.as_str()),
            None,
        )
        .await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_delete_by_slot_and_by_id() {
    let app = TestApp::new().await.unwrap();
    let (token, _, _) = app.register_user("pia").await;
    let recipe = app.create_recipe(&token, "Тост", json!([])).await;

    let mut ids = Vec::new();
    for meal_type in ["breakfast", "snack"] {
        let response = app
            .request(
                Method::POST,
                "/v1/meal-plans",
                Some(token.as_str()),
                Some(json!({"recipe_id": recipe, "meal_date": "2031-07-01", "meal_type": meal_type})),
            )
            .await;
        ids.push(response.body["id"].as_i64().unwrap());
    }

    let by_slot = app
        .request(
            Method::DELETE,
            "/v1/meal-plans?meal_date=2031-07-01&meal_type=breakfast",
            Some(token.as_str()),
            None,
        )
        .await;
    assert_eq!(by_slot.status, StatusCode::NO_CONTENT);

    let by_id = app
        .request(
            Method::DELETE,
            &format!("/v1/meal-plans/{}", ids[1]),
            Some(token.as_str()),
            None,
        )
        .await;
    assert_eq!(by_id.status, StatusCode::NO_CONTENT);

    let missing = app
        .request(
            Method::DELETE,
            &format!("/v1/meal-plans/{}", ids[1]),
            Some(token.as_str()),
            None,
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let listed = app
        .request(
            Method::GET,
            "/v1/meal-plans?start_date=2031-07-01&end_date=2031-07-01",
            Some(token.as_str()),
            None,
        )
        .await;
    assert_eq!(listed.body, json!([]));
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_deleting_recipe_clears_its_meal_plans() {
    let app = TestApp::new().await.unwrap();
    let (token, _, _) = app.register_user("quin").await;
    let recipe = app.create_recipe(&token, "Пирог", json!([])).await;

    let planned = app
        .request(
            Method::POST,
            "/v1/meal-plans",
            Some(token.as_str()),
            Some(json!({"recipe_id": recipe, "meal_date": "2031-08-15", "meal_type": "dinner"})),
        )
        .await;
    assert_eq!(planned.status, StatusCode::CREATED);

    let deleted = app
        .request(
            Method::DELETE,
            &format!("/v1/recipes/{}", recipe),
            Some(token.as_str()),
            None,
        )
        .await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let listed = app
        .request(
            Method::GET,
            "/v1/meal-plans?start_date=2031-08-15&end_date=2031-08-15",
            Some(token.as_str()),
            None,
        )
        .await;
    assert_eq!(listed.body, json!([]));
}
