//! Role queries.

use crate::core::db::{logged, query_rows};
use crate::core::Result;
use crate::store::Role;
use rusqlite::{params, Connection};
use tracing::{debug, info};

/// Lists every role
pub fn list(conn: &Connection) -> Result<Vec<Role>> {
    let rows = logged(
        "Error fetching roles",
        query_rows(
            conn,
            "SELECT id, title, salary, department_id FROM roles",
            [],
            Role::from_row,
        ),
    )?;
    debug!(count = rows.len(), "fetched roles");
    Ok(rows)
}

/// Inserts a role and returns its new id
pub fn add(conn: &Connection, title: &str, salary: f64, department_id: i64) -> Result<i64> {
    logged(
        "Error adding role",
        conn.execute(
            "INSERT INTO roles (title, salary, department_id) VALUES (?1, ?2, ?3)",
            params![title, salary, department_id],
        ),
    )?;
    let id = conn.last_insert_rowid();
    info!(id, title, "role added");
    Ok(id)
}

/// Deletes a role by id and returns the number of rows removed
pub fn delete(conn: &Connection, role_id: i64) -> Result<usize> {
    let affected = logged(
        "Error deleting role",
        conn.execute("DELETE FROM roles WHERE id = ?1", params![role_id]),
    )?;
    info!(role_id, affected, "role deleted");
    Ok(affected)
}
