//! Route definitions for the employee directory, mounted at `/employees`.
//!
//! Employees are read-only: records are provisioned by an external system,
//! so only lookup is exposed.
//!
//! ```text
//! GET    /{id}      -> get_employee
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::employees;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", get(employees::get_employee))
}
