//! Handlers for the asset lifecycle: CRUD, search, assignment, and recovery.

use assetdesk_core::error::CoreError;
use assetdesk_core::lifecycle;
use assetdesk_core::types::DbId;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use assetdesk_db::models::asset::{AssetSearchParams, CreateAsset, UpdateAsset};
use assetdesk_db::repositories::{AssetRepo, CategoryRepo, EmployeeRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/categories/{id}/assets
///
/// Create an asset under a category. New assets always start AVAILABLE with
/// no assignee.
pub async fn create_asset(
    State(state): State<AppState>,
    Path(category_id): Path<DbId>,
    Json(input): Json<CreateAsset>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    // Resolve the category first so a missing one yields 404, not an FK error.
    CategoryRepo::find_by_id(&state.pool, category_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id: category_id,
        }))?;

    let asset = AssetRepo::create(&state.pool, category_id, &input).await?;

    tracing::info!(asset_id = asset.id, category_id, name = %asset.name, "Asset created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: asset })))
}

/// GET /api/v1/assets
///
/// List all assets.
pub async fn list_assets(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let assets = AssetRepo::list_all(&state.pool).await?;

    Ok(Json(DataResponse { data: assets }))
}

/// GET /api/v1/assets/search?name=...
///
/// Find assets whose name contains the given substring, case-insensitively.
pub async fn search_assets(
    State(state): State<AppState>,
    Query(params): Query<AssetSearchParams>,
) -> AppResult<impl IntoResponse> {
    let assets = AssetRepo::search_by_name(&state.pool, &params.name).await?;

    Ok(Json(DataResponse { data: assets }))
}

/// GET /api/v1/assets/{id}
///
/// Look up a single asset.
pub async fn get_asset(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let asset = AssetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Asset", id }))?;

    Ok(Json(DataResponse { data: asset }))
}

/// PUT /api/v1/assets/{id}
///
/// Overwrite an asset's name, purchase date, and condition notes. Status,
/// category, and assignee can only change through assign/recover.
pub async fn update_asset(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAsset>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let asset = AssetRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Asset", id }))?;

    tracing::info!(asset_id = id, "Asset updated");

    Ok(Json(DataResponse { data: asset }))
}

/// POST /api/v1/assets/{id}/assign/{employee_id}
///
/// Assign an AVAILABLE asset to an employee.
pub async fn assign_asset(
    State(state): State<AppState>,
    Path((asset_id, employee_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let asset = AssetRepo::find_by_id(&state.pool, asset_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Asset",
            id: asset_id,
        }))?;

    lifecycle::check_assignable(asset_id, asset.status)?;

    EmployeeRepo::find_by_id(&state.pool, employee_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id: employee_id,
        }))?;

    // The repository re-checks the status in the UPDATE's WHERE clause, so a
    // concurrent assignment between our read and this write loses cleanly.
    let asset = AssetRepo::assign(&state.pool, asset_id, employee_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::InvalidState(format!(
                "asset {asset_id} is no longer available for assignment"
            )))
        })?;

    tracing::info!(asset_id, employee_id, "Asset assigned");

    Ok(Json(DataResponse { data: asset }))
}

/// POST /api/v1/assets/{id}/recover
///
/// Recover an asset: clear the assignee and mark it RECOVERED. Succeeds
/// whatever the current status; only a missing asset is an error.
pub async fn recover_asset(
    State(state): State<AppState>,
    Path(asset_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let asset = AssetRepo::recover(&state.pool, asset_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Asset",
            id: asset_id,
        }))?;

    tracing::info!(asset_id, "Asset recovered");

    Ok(Json(DataResponse { data: asset }))
}

/// DELETE /api/v1/assets/{id}
///
/// Permanently remove an asset. Assigned assets must be recovered first.
pub async fn delete_asset(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = AssetRepo::delete(&state.pool, id).await?;

    if !deleted {
        // The conditional delete matched nothing: either the asset is gone
        // or it is currently assigned.
        return match AssetRepo::find_by_id(&state.pool, id).await? {
            Some(asset) => {
                lifecycle::check_deletable(id, asset.status)?;
                Err(AppError::InternalError(format!(
                    "delete of asset {id} matched no row despite deletable status"
                )))
            }
            None => Err(AppError::Core(CoreError::NotFound { entity: "Asset", id })),
        };
    }

    tracing::info!(asset_id = id, "Asset deleted");

    Ok(StatusCode::NO_CONTENT)
}
