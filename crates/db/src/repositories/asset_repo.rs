//! Repository for the `assets` table.
//!
//! The status transitions with preconditions (assign, delete) execute as
//! single conditional statements so the check and the write cannot be split
//! by a concurrent request.

use assetdesk_core::lifecycle::AssetStatus;
use assetdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::asset::{Asset, CreateAsset, UpdateAsset};

/// Column list for `assets` queries.
const ASSET_COLUMNS: &str = "\
    id, name, purchase_date, condition_notes, status, \
    category_id, assigned_employee_id, created_at, updated_at";

/// Provides CRUD and lifecycle operations for assets.
pub struct AssetRepo;

impl AssetRepo {
    /// Insert a new asset under a category.
    ///
    /// Status is always AVAILABLE and the assignee unset; the DTO carries
    /// neither field, so caller-supplied values cannot leak in.
    pub async fn create(
        pool: &PgPool,
        category_id: DbId,
        input: &CreateAsset,
    ) -> Result<Asset, sqlx::Error> {
        let query = format!(
            "INSERT INTO assets (name, purchase_date, condition_notes, status, category_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {ASSET_COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(&input.name)
            .bind(input.purchase_date)
            .bind(input.condition_notes.as_deref())
            .bind(AssetStatus::Available)
            .bind(category_id)
            .fetch_one(pool)
            .await
    }

    /// Find an asset by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!("SELECT {ASSET_COLUMNS} FROM assets WHERE id = $1");
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all assets in insertion order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Asset>, sqlx::Error> {
        let query = format!("SELECT {ASSET_COLUMNS} FROM assets ORDER BY id");
        sqlx::query_as::<_, Asset>(&query).fetch_all(pool).await
    }

    /// Find assets whose name contains `fragment` as a case-insensitive
    /// substring.
    pub async fn search_by_name(
        pool: &PgPool,
        fragment: &str,
    ) -> Result<Vec<Asset>, sqlx::Error> {
        let pattern = format!("%{fragment}%");
        let query = format!(
            "SELECT {ASSET_COLUMNS} FROM assets \
             WHERE name ILIKE $1 \
             ORDER BY id"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(&pattern)
            .fetch_all(pool)
            .await
    }

    /// Overwrite an asset's name, purchase date, and condition notes.
    ///
    /// Status, category, and assignee are left untouched. Returns `None` if
    /// no asset with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAsset,
    ) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!(
            "UPDATE assets SET \
                 name = $2, \
                 purchase_date = $3, \
                 condition_notes = $4, \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING {ASSET_COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.purchase_date)
            .bind(input.condition_notes.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Assign an AVAILABLE asset to an employee.
    ///
    /// The status precondition is part of the WHERE clause, so two concurrent
    /// assignments of the same asset cannot both succeed. Returns `None` if
    /// the asset does not exist or is not AVAILABLE; the caller distinguishes
    /// the two with a follow-up lookup.
    pub async fn assign(
        pool: &PgPool,
        asset_id: DbId,
        employee_id: DbId,
    ) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!(
            "UPDATE assets SET \
                 status = $3, \
                 assigned_employee_id = $2, \
                 updated_at = now() \
             WHERE id = $1 AND status = $4 \
             RETURNING {ASSET_COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(asset_id)
            .bind(employee_id)
            .bind(AssetStatus::Assigned)
            .bind(AssetStatus::Available)
            .fetch_optional(pool)
            .await
    }

    /// Mark an asset RECOVERED and clear its assignee, whatever its current
    /// status. Returns `None` if no asset with the given ID exists.
    pub async fn recover(pool: &PgPool, asset_id: DbId) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!(
            "UPDATE assets SET \
                 status = $2, \
                 assigned_employee_id = NULL, \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING {ASSET_COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(asset_id)
            .bind(AssetStatus::Recovered)
            .fetch_optional(pool)
            .await
    }

    /// Delete an asset unless it is currently ASSIGNED.
    ///
    /// Returns `true` if a row was deleted. `false` means the asset is
    /// missing or assigned; the caller distinguishes the two.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1 AND status <> $2")
            .bind(id)
            .bind(AssetStatus::Assigned)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
