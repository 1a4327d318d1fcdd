//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` create/update DTOs, validated with `validator`

pub mod asset;
pub mod category;
pub mod employee;
