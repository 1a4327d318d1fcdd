//! Domain core for the asset tracking service.
//!
//! Holds the shared ID/timestamp types, the domain error enum, and the asset
//! lifecycle rules. Everything here is pure logic with no I/O so it can be
//! unit-tested without a database.

pub mod error;
pub mod lifecycle;
pub mod types;
