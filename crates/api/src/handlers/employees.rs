//! Handlers for the employee directory (read-only).

use assetdesk_core::error::CoreError;
use assetdesk_core::types::DbId;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use assetdesk_db::repositories::EmployeeRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/employees/{id}
///
/// Look up an employee by their externally assigned ID.
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let employee = EmployeeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        }))?;

    Ok(Json(DataResponse { data: employee }))
}
