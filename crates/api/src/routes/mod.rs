pub mod assets;
pub mod categories;
pub mod employees;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                                  list, create
/// /categories/{id}                             update
/// /categories/{id}/assets                      create asset under category
///
/// /employees/{id}                              get
///
/// /assets                                      list
/// /assets/search                               search by name substring
/// /assets/{id}                                 get, update, delete
/// /assets/{id}/assign/{employee_id}            assign to employee
/// /assets/{id}/recover                         recover from assignment
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest(
            "/categories",
            categories::router().merge(assets::category_assets_router()),
        )
        .nest("/employees", employees::router())
        .nest("/assets", assets::router())
}
