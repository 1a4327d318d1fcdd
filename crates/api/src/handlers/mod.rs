//! HTTP handlers, grouped by entity.

pub mod assets;
pub mod categories;
pub mod employees;
