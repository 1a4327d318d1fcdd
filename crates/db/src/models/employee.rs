//! Employee model.
//!
//! Employees are provisioned outside this service (ids are externally
//! assigned), so there are no create/update DTOs.

use assetdesk_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `employees` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Employee {
    pub id: DbId,
    pub full_name: String,
    pub designation: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
