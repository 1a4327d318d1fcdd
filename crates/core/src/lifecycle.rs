//! Asset lifecycle states and transition rules.
//!
//! The lifecycle is AVAILABLE -> ASSIGNED -> RECOVERED. Assignment requires
//! the asset to be AVAILABLE; deletion is forbidden while ASSIGNED. Recovery
//! carries no precondition: recovering an asset that is already AVAILABLE or
//! RECOVERED succeeds and leaves it RECOVERED with no assignee.
//! TODO(product): confirm whether recovery should require ASSIGNED; the
//! current unconditional behaviour is intentional until clarified.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// Lifecycle state of an asset.
///
/// Maps to the PostgreSQL `asset_status` enum and serializes as the uppercase
/// state name (`"AVAILABLE"` etc.) on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "asset_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum AssetStatus {
    Available,
    Assigned,
    Recovered,
}

impl AssetStatus {
    /// Whether an asset in this state may be assigned to an employee.
    pub fn is_assignable(self) -> bool {
        matches!(self, AssetStatus::Available)
    }

    /// Whether an asset in this state may be permanently deleted.
    pub fn is_deletable(self) -> bool {
        !matches!(self, AssetStatus::Assigned)
    }

    /// The uppercase state name, matching the database representation.
    pub fn as_str(self) -> &'static str {
        match self {
            AssetStatus::Available => "AVAILABLE",
            AssetStatus::Assigned => "ASSIGNED",
            AssetStatus::Recovered => "RECOVERED",
        }
    }
}

impl std::fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check the assignment precondition for an asset.
///
/// Only AVAILABLE assets may be assigned.
pub fn check_assignable(asset_id: DbId, status: AssetStatus) -> Result<(), CoreError> {
    if status.is_assignable() {
        Ok(())
    } else {
        Err(CoreError::InvalidState(format!(
            "asset {asset_id} is {status} and cannot be assigned"
        )))
    }
}

/// Check the deletion precondition for an asset.
///
/// ASSIGNED assets must be recovered before they can be deleted.
pub fn check_deletable(asset_id: DbId, status: AssetStatus) -> Result<(), CoreError> {
    if status.is_deletable() {
        Ok(())
    } else {
        Err(CoreError::InvalidState(format!(
            "asset {asset_id} is assigned and cannot be deleted"
        )))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn only_available_assets_are_assignable() {
        assert!(AssetStatus::Available.is_assignable());
        assert!(!AssetStatus::Assigned.is_assignable());
        assert!(!AssetStatus::Recovered.is_assignable());
    }

    #[test]
    fn assigned_assets_are_not_deletable() {
        assert!(AssetStatus::Available.is_deletable());
        assert!(!AssetStatus::Assigned.is_deletable());
        assert!(AssetStatus::Recovered.is_deletable());
    }

    #[test]
    fn check_assignable_rejects_non_available() {
        assert!(check_assignable(1, AssetStatus::Available).is_ok());
        assert_matches!(
            check_assignable(1, AssetStatus::Assigned),
            Err(CoreError::InvalidState(_))
        );
        assert_matches!(
            check_assignable(1, AssetStatus::Recovered),
            Err(CoreError::InvalidState(_))
        );
    }

    #[test]
    fn check_deletable_rejects_assigned() {
        assert!(check_deletable(7, AssetStatus::Available).is_ok());
        assert!(check_deletable(7, AssetStatus::Recovered).is_ok());
        assert_matches!(
            check_deletable(7, AssetStatus::Assigned),
            Err(CoreError::InvalidState(_))
        );
    }

    #[test]
    fn status_serializes_uppercase() {
        let json = serde_json::to_string(&AssetStatus::Available).unwrap();
        assert_eq!(json, "\"AVAILABLE\"");
        assert_eq!(AssetStatus::Recovered.to_string(), "RECOVERED");
    }
}
