//! Department queries and the department budget.

use crate::core::db::{logged, query_rows};
use crate::core::Result;
use crate::store::Department;
use rusqlite::{params, Connection};
use tracing::{debug, info};

/// Lists every department
pub fn list(conn: &Connection) -> Result<Vec<Department>> {
    let rows = logged(
        "Error fetching departments",
        query_rows(conn, "SELECT id, name FROM department", [], Department::from_row),
    )?;
    debug!(count = rows.len(), "fetched departments");
    Ok(rows)
}

/// Inserts a department and returns its new id
pub fn add(conn: &Connection, name: &str) -> Result<i64> {
    logged(
        "Error adding department",
        conn.execute("INSERT INTO department (name) VALUES (?1)", params![name]),
    )?;
    let id = conn.last_insert_rowid();
    info!(id, name, "department added");
    Ok(id)
}

/// Deletes a department by id and returns the number of rows removed
///
/// Roles still pointing at the department are not touched; whether the
/// delete is refused is up to the schema's constraints.
pub fn delete(conn: &Connection, department_id: i64) -> Result<usize> {
    let affected = logged(
        "Error deleting department",
        conn.execute("DELETE FROM department WHERE id = ?1", params![department_id]),
    )?;
    info!(department_id, affected, "department deleted");
    Ok(affected)
}

/// Sums the salaries of every role in a department
///
/// Returns `None` when the department has no roles.
pub fn budget(conn: &Connection, department_id: i64) -> Result<Option<f64>> {
    let total = logged(
        "Error calculating department budget",
        conn.query_row(
            "SELECT SUM(salary) AS total_budget FROM roles WHERE department_id = ?1",
            params![department_id],
            |row| row.get::<_, Option<f64>>("total_budget"),
        ),
    )?;
    debug!(department_id, ?total, "calculated department budget");
    Ok(total)
}
