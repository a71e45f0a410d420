/// Query Execution Module
///
/// Small helpers shared by every data access function: collecting mapped
/// rows and turning a SQLite failure into a logged `EmptrackError`.

use crate::core::{EmptrackError, Result};
use rusqlite::{Connection, Params, Row};
use tracing::error;

/// Runs a parameterized SELECT and maps every row
///
/// # Arguments
///
/// * `conn` - Connection to run the statement on
/// * `sql` - SQL query to execute
/// * `params` - Bound statement parameters
/// * `map` - Converts one result row into a record
pub fn query_rows<T, P, F>(conn: &Connection, sql: &str, params: P, map: F) -> rusqlite::Result<Vec<T>>
where
    P: Params,
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params, map)?;
    rows.collect()
}

/// Logs a failed statement with its context and converts the error
///
/// The SQLite error is passed through untouched inside
/// `EmptrackError::Database`.
pub fn logged<T>(context: &str, result: rusqlite::Result<T>) -> Result<T> {
    result.map_err(|e| {
        error!(error = %e, "{}", context);
        EmptrackError::Database(e)
    })
}
