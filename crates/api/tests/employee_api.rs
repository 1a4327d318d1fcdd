//! HTTP-level integration tests for the employee directory and health check.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations", fixtures("employees"))]
async fn test_get_employee(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/employees/1001").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], 1001);
    assert_eq!(json["data"]["full_name"], "Priya Nair");
    assert_eq!(json["data"]["designation"], "Systems Engineer");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_missing_employee_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/employees/424242").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_health_check_reports_db_status(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
}
