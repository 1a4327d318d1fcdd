//! Asset model and DTOs.

use assetdesk_core::lifecycle::AssetStatus;
use assetdesk_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `assets` table.
///
/// `assigned_employee_id` is set iff `status` is ASSIGNED; the schema
/// enforces this with a CHECK constraint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Asset {
    pub id: DbId,
    pub name: String,
    pub purchase_date: Option<NaiveDate>,
    pub condition_notes: Option<String>,
    pub status: AssetStatus,
    pub category_id: DbId,
    pub assigned_employee_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an asset under a category.
///
/// Deliberately has no `status` or assignee field: new assets always start
/// AVAILABLE and unassigned, whatever the caller sends.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAsset {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub purchase_date: Option<NaiveDate>,
    pub condition_notes: Option<String>,
}

/// DTO for updating an asset's descriptive fields.
///
/// Status, category, and assignee are never touched by update; those change
/// only through the assign/recover operations.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateAsset {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub purchase_date: Option<NaiveDate>,
    pub condition_notes: Option<String>,
}

/// Query parameters for `GET /api/v1/assets/search`.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetSearchParams {
    /// Case-insensitive substring to match against asset names.
    pub name: String,
}
