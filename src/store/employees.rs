//! Employee queries, including the enriched listing used for display.

use crate::core::db::{logged, query_rows};
use crate::core::Result;
use crate::store::{Employee, EmployeeDetails, NewEmployee};
use rusqlite::{params, Connection};
use tracing::{debug, info};

/// Role and department are inner joins, so employees whose role or
/// department no longer exists drop out; the manager is a left join.
const DETAILS_SQL: &str = "
    SELECT
        employees.id,
        employees.first_name,
        employees.last_name,
        roles.title,
        department.name AS department,
        roles.salary,
        manager.first_name || ' ' || manager.last_name AS manager
    FROM employees
    INNER JOIN roles ON employees.role_id = roles.id
    INNER JOIN department ON roles.department_id = department.id
    LEFT JOIN employees manager ON manager.id = employees.manager_id";

const EMPLOYEE_COLUMNS: &str = "id, first_name, last_name, role_id, manager_id";

/// Lists every employee with title, department, salary and manager name
pub fn list_details(conn: &Connection) -> Result<Vec<EmployeeDetails>> {
    let rows = logged(
        "Error fetching employees",
        query_rows(conn, DETAILS_SQL, [], EmployeeDetails::from_row),
    )?;
    debug!(count = rows.len(), "fetched employee details");
    Ok(rows)
}

/// Inserts an employee and returns its new id
pub fn add(conn: &Connection, employee: &NewEmployee) -> Result<i64> {
    logged(
        "Error adding employee",
        conn.execute(
            "INSERT INTO employees (first_name, last_name, role_id, manager_id) VALUES (?1, ?2, ?3, ?4)",
            params![
                employee.first_name,
                employee.last_name,
                employee.role_id,
                employee.manager_id
            ],
        ),
    )?;
    let id = conn.last_insert_rowid();
    info!(
        id,
        first_name = %employee.first_name,
        last_name = %employee.last_name,
        "employee added"
    );
    Ok(id)
}

/// Moves an employee to another role; returns the number of rows changed
pub fn update_role(conn: &Connection, employee_id: i64, role_id: i64) -> Result<usize> {
    let affected = logged(
        "Error updating employee role",
        conn.execute(
            "UPDATE employees SET role_id = ?1 WHERE id = ?2",
            params![role_id, employee_id],
        ),
    )?;
    info!(employee_id, role_id, affected, "employee role updated");
    Ok(affected)
}

/// Sets or clears an employee's manager; returns the number of rows changed
pub fn update_manager(conn: &Connection, employee_id: i64, manager_id: Option<i64>) -> Result<usize> {
    let affected = logged(
        "Error updating employee manager",
        conn.execute(
            "UPDATE employees SET manager_id = ?1 WHERE id = ?2",
            params![manager_id, employee_id],
        ),
    )?;
    info!(employee_id, ?manager_id, affected, "employee manager updated");
    Ok(affected)
}

/// Lists the employees whose manager is exactly `manager_id`
pub fn by_manager(conn: &Connection, manager_id: i64) -> Result<Vec<Employee>> {
    let sql = format!("SELECT {} FROM employees WHERE manager_id = ?1", EMPLOYEE_COLUMNS);
    let rows = logged(
        "Error fetching employees by manager",
        query_rows(conn, &sql, params![manager_id], Employee::from_row),
    )?;
    debug!(manager_id, count = rows.len(), "fetched employees by manager");
    Ok(rows)
}

/// Lists the employees holding any role of the given department
pub fn by_department(conn: &Connection, department_id: i64) -> Result<Vec<Employee>> {
    let sql = format!(
        "SELECT {} FROM employees WHERE role_id IN (SELECT id FROM roles WHERE department_id = ?1)",
        EMPLOYEE_COLUMNS
    );
    let rows = logged(
        "Error retrieving employees by department",
        query_rows(conn, &sql, params![department_id], Employee::from_row),
    )?;
    debug!(department_id, count = rows.len(), "fetched employees by department");
    Ok(rows)
}

/// Deletes an employee by id and returns the number of rows removed
pub fn delete(conn: &Connection, employee_id: i64) -> Result<usize> {
    let affected = logged(
        "Error deleting employee",
        conn.execute("DELETE FROM employees WHERE id = ?1", params![employee_id]),
    )?;
    info!(employee_id, affected, "employee deleted");
    Ok(affected)
}
