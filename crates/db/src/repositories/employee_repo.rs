//! Repository for the `employees` table.
//!
//! Employees are read-only from this service's perspective: records are
//! provisioned externally and only looked up here.

use assetdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::employee::Employee;

/// Column list for `employees` queries.
const EMPLOYEE_COLUMNS: &str = "id, full_name, designation, created_at, updated_at";

/// Read-only lookup of employees.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Find an employee by their externally assigned ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
