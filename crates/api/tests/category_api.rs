//! HTTP-level integration tests for the category endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, put_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_category_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/categories",
        serde_json::json!({"name": "IT", "description": "Computing equipment"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "IT");
    assert_eq!(json["data"]["description"], "Computing equipment");
    assert!(json["data"]["id"].is_number());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_category_name_returns_409(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/categories", serde_json::json!({"name": "IT"})).await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/categories", serde_json::json!({"name": "IT"})).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_category_with_empty_name_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/categories", serde_json::json!({"name": ""})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_category_overwrites_fields(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/categories",
            serde_json::json!({"name": "Peripherals", "description": "Mice"}),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/categories/{id}"),
        serde_json::json!({"name": "Accessories"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Accessories");
    // Description was overwritten with null, not preserved.
    assert!(json["data"]["description"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_category_is_404_and_leaves_listing_unchanged(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/categories", serde_json::json!({"name": "IT"})).await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        "/api/v1/categories/999999",
        serde_json::json!({"name": "Ghost"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let listing = body_json(get(app, "/api/v1/categories").await).await;
    let items = listing["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "IT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_categories(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/categories", serde_json::json!({"name": "IT"})).await;

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/categories",
        serde_json::json!({"name": "Furniture"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/categories").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 2);
}
