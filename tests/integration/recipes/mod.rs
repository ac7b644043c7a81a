//! Recipe CRUD and ownership against a real database

use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::common::{recipe_body, unique_name, TestApp};

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_create_and_read_with_ingredient_lines() {
    let app = TestApp::new().await.unwrap();
    let (token, user_id, _) = app.register_user("fay").await;
    let flour = app.create_ingredient(&token, "Мука").await;
    let eggs = app.create_ingredient(&token, "Яйца").await;

    let recipe_id = app
        .create_recipe(
            &token,
            "Блины",
            json!([
                {"ingredient_id": flour, "amount": "200", "unit": "г"},
                {"ingredient_id": eggs, "amount": "1", "unit": "шт"},
                {"ingredient_id": eggs, "amount": "2", "unit": "шт"},
            ]),
        )
        .await;

    let detail = app
        .request(Method::GET, &format!("/v1/recipes/{}", recipe_id), None, None)
        .await;
    assert_eq!(detail.status, StatusCode::OK);
    assert_eq!(detail.body["user_id"], user_id);
    assert_eq!(detail.body["author_name"], "fay");

    let lines = detail.body["ingredients"].as_array().unwrap();
    assert_eq!(lines.len(), 2);
    let egg_line = lines
        .iter()
        .find(|line| line["ingredient_id"] == eggs)
        .unwrap();
    assert_eq!(egg_line["amount"], "2");
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_unknown_recipe_is_not_found() {
    let app = TestApp::new().await.unwrap();
    let response = app
        .request(Method::GET, "/v1/recipes/999999999", None, None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_unknown_ingredient_is_rejected_and_rolled_back() {
    let app = TestApp::new().await.unwrap();
    let (token, _, _) = app.register_user("gus").await;
    let title = unique_name("orphan");

    let response = app
        .request(
            Method::POST,
            "/v1/recipes",
            Some(token.as_str()),
            Some(recipe_body(&title, json!([{"ingredient_id": 999999999}]))),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let listed = app
        .request(
            Method::GET,
            &format!("/v1/recipes?search={}", title),
            None,
            None,
        )
        .await;
    assert_eq!(listed.body, json!([]));
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_only_owner_may_update_or_delete() {
    let app = TestApp::new().await.unwrap();
    let (owner, _, _) = app.register_user("hal").await;
    let (stranger, _, _) = app.register_user("ivy").await;
    let recipe_id = app.create_recipe(&owner, "Омлет", json!([])).await;
    let uri = format!("/v1/recipes/{}", recipe_id);

    let update = app
        .request(
            Method::PUT,
            &uri,
            Some(stranger.as_str()),
            Some(recipe_body("Чужой омлет", json!([]))),
        )
        .await;
    assert_eq!(update.status, StatusCode::FORBIDDEN);

    let delete = app.request(Method::DELETE, &uri, Some(stranger.as_str()), None).await;
    assert_eq!(delete.status, StatusCode::FORBIDDEN);

    let update = app
        .request(
            Method::PUT,
            &uri,
            Some(owner.as_str()),
            Some(recipe_body("Омлет с сыром", json!([]))),
        )
        .await;
    assert_eq!(update.status, StatusCode::OK);
    assert_eq!(update.body["title"], "Омлет с сыром");

    let delete = app.request(Method::DELETE, &uri, Some(owner.as_str()), None).await;
    assert_eq!(delete.status, StatusCode::NO_CONTENT);

    let gone = app.request(Method::GET, &uri, None, None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_update_without_ingredients_keeps_lines() {
    let app = TestApp::new().await.unwrap();
    let (token, _, _) = app.register_user("jon").await;
    let rice = app.create_ingredient(&token, "Рис").await;
    let recipe_id = app
        .create_recipe(&token, "Плов", json!([{"ingredient_id": rice, "amount": "300"}]))
        .await;
    let uri = format!("/v1/recipes/{}", recipe_id);

    let mut body = recipe_body("Плов по-узбекски", json!(null));
    body.as_object_mut().unwrap().remove("ingredients");
    let update = app.request(Method::PUT, &uri, Some(token.as_str()), Some(body)).await;
    assert_eq!(update.status, StatusCode::OK);

    let detail = app.request(Method::GET, &uri, None, None).await;
    assert_eq!(detail.body["ingredients"].as_array().unwrap().len(), 1);

    let update = app
        .request(
            Method::PUT,
            &uri,
            Some(token.as_str()),
            Some(recipe_body("Плов", json!([]))),
        )
        .await;
    assert_eq!(update.status, StatusCode::OK);

    let detail = app.request(Method::GET, &uri, None, None).await;
    assert_eq!(detail.body["ingredients"], json!([]));
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_list_is_newest_first_and_searchable() {
    let app = TestApp::new().await.unwrap();
    let (token, _, _) = app.register_user("kim").await;
    let marker = unique_name("marker");

    let first = app
        .create_recipe(&token, &format!("{} first", marker), json!([]))
        .await;
    let second = app
        .create_recipe(&token, &format!("{} second", marker), json!([]))
        .await;

    let listed = app
        .request(
            Method::GET,
            &format!("/v1/recipes?search={}", marker.to_uppercase()),
            None,
            None,
        )
        .await;
    assert_eq!(listed.status, StatusCode::OK);
    let ids: Vec<i64> = listed
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![second, first]);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_mine_lists_only_callers_recipes() {
    let app = TestApp::new().await.unwrap();
    let (lee, lee_id, _) = app.register_user("lee").await;
    let (max, _, _) = app.register_user("max").await;
    let marker = unique_name("mine");

    let own = app
        .create_recipe(&lee, &format!("{} lee", marker), json!([]))
        .await;
    app.create_recipe(&max, &format!("{} max", marker), json!([]))
        .await;

    let uri = format!("/v1/recipes?mine=true&search={}", marker);
    let listed = app.request(Method::GET, &uri, Some(&lee), None).await;
    assert_eq!(listed.status, StatusCode::OK);
    let rows = listed.body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"].as_i64(), Some(own));
    assert_eq!(rows[0]["user_id"].as_i64(), Some(lee_id));

    let anonymous = app.request(Method::GET, &uri, None, None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
}
