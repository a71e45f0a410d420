//! Row types returned by the store.

use rusqlite::Row;

/// An organizational unit grouping roles.
#[derive(Debug, Clone, PartialEq)]
pub struct Department {
    pub id: i64,
    pub name: String,
}

impl Department {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Department {
            id: row.get("id")?,
            name: row.get("name")?,
        })
    }
}

/// A job title with a salary, owned by one department.
#[derive(Debug, Clone, PartialEq)]
pub struct Role {
    pub id: i64,
    pub title: String,
    pub salary: f64,
    pub department_id: i64,
}

impl Role {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Role {
            id: row.get("id")?,
            title: row.get("title")?,
            salary: row.get("salary")?,
            department_id: row.get("department_id")?,
        })
    }
}

/// A raw `employees` row.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub role_id: i64,
    pub manager_id: Option<i64>,
}

impl Employee {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Employee {
            id: row.get("id")?,
            first_name: row.get("first_name")?,
            last_name: row.get("last_name")?,
            role_id: row.get("role_id")?,
            manager_id: row.get("manager_id")?,
        })
    }
}

/// Input for inserting an employee.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub role_id: i64,
    pub manager_id: Option<i64>,
}

/// One line of the enriched employee listing: the employee with role
/// title, department name, salary and manager name resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDetails {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub department: String,
    pub salary: f64,
    /// Manager's "first last", None when the employee has no manager
    pub manager: Option<String>,
}

impl EmployeeDetails {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(EmployeeDetails {
            id: row.get("id")?,
            first_name: row.get("first_name")?,
            last_name: row.get("last_name")?,
            title: row.get("title")?,
            department: row.get("department")?,
            salary: row.get("salary")?,
            manager: row.get("manager")?,
        })
    }
}
