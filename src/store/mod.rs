//! Data access layer.
//!
//! One stateless function per business action, each wrapping a single
//! parameterized statement against `department`, `roles` or `employees`.
//! Every function borrows the connection it runs on; nothing is cached, so
//! every read goes back to the database.
//!
//! Failures are logged with context and returned unchanged inside
//! `EmptrackError::Database`. "No rows" is never an error: reads return an
//! empty vector, the budget returns `None`, mutations report zero affected
//! rows.

pub mod departments;
pub mod employees;
pub mod models;
pub mod roles;

pub use models::{Department, Employee, EmployeeDetails, NewEmployee, Role};
