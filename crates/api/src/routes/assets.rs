//! Route definitions for the asset lifecycle.
//!
//! Two routers are provided:
//! - `router()` for asset routes mounted at `/assets`
//! - `category_assets_router()` for the nested creation route mounted at
//!   `/categories`
//!
//! ```text
//! GET    /                              -> list_assets
//! GET    /search                        -> search_assets
//! GET    /{id}                          -> get_asset
//! PUT    /{id}                          -> update_asset
//! DELETE /{id}                          -> delete_asset
//! POST   /{id}/assign/{employee_id}     -> assign_asset
//! POST   /{id}/recover                  -> recover_asset
//! ```
//!
//! All asset routes use `{id}` for the asset segment: axum rejects routers
//! that mix parameter names at the same position.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::assets;
use crate::state::AppState;

/// Asset routes mounted at `/assets`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(assets::list_assets))
        .route("/search", get(assets::search_assets))
        .route(
            "/{id}",
            get(assets::get_asset)
                .put(assets::update_asset)
                .delete(assets::delete_asset),
        )
        .route("/{id}/assign/{employee_id}", post(assets::assign_asset))
        .route("/{id}/recover", post(assets::recover_asset))
}

/// Nested creation route mounted at `/categories`.
///
/// Uses `{id}` to match the parameter name of the sibling category routes
/// it is merged with.
///
/// ```text
/// POST /{id}/assets -> create_asset
/// ```
pub fn category_assets_router() -> Router<AppState> {
    Router::new().route("/{id}/assets", post(assets::create_asset))
}
