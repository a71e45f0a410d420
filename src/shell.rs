use crate::core::db::Database;
use crate::core::{EmptrackError, Result};
use crate::menu::{render_menu, MenuAction};
use crate::results_grid::{ResultsGrid, Tabular};
use crate::store::{departments, employees, roles, NewEmployee};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Lifecycle of the interactive loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Running,
    Stopped,
}

/// Parses a required numeric id typed at a prompt.
pub fn parse_id(field: &str, value: &str) -> Result<i64> {
    let value = value.trim();
    value
        .parse::<i64>()
        .map_err(|_| EmptrackError::Input(format!("{} must be a whole number, got '{}'", field, value)))
}

/// Parses an optional id; a blank answer means "none".
pub fn parse_optional_id(field: &str, value: &str) -> Result<Option<i64>> {
    if value.trim().is_empty() {
        Ok(None)
    } else {
        parse_id(field, value).map(Some)
    }
}

/// Parses a salary typed at a prompt.
pub fn parse_salary(value: &str) -> Result<f64> {
    let value = value.trim();
    match value.parse::<f64>() {
        Ok(salary) if salary.is_finite() => Ok(salary),
        _ => Err(EmptrackError::Input(format!("salary must be a number, got '{}'", value))),
    }
}

/// The menu-driven loop: shows the menu, collects the fields an action
/// needs, runs it against the database and prints the outcome.
///
/// Failures from the store are not caught here; they end the loop and are
/// returned to the caller.
pub struct Shell<'a, R, W> {
    db: &'a Database,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(db: &'a Database, input: R, output: W) -> Self {
        Shell { db, input, output }
    }

    /// Runs iterations until the user quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        while self.step()? == ShellState::Running {}
        info!("shell stopped");
        Ok(())
    }

    /// Runs one iteration: one menu selection and the action it names.
    pub fn step(&mut self) -> Result<ShellState> {
        write!(self.output, "\n{}> ", render_menu())?;
        self.output.flush()?;

        let selection = match self.read_line()? {
            Some(line) => line,
            None => {
                debug!("input closed, stopping");
                return Ok(ShellState::Stopped);
            }
        };

        match MenuAction::from_selection(&selection) {
            Some(action) => {
                debug!(action = action.label(), "menu selection");
                self.dispatch(action)
            }
            None => {
                writeln!(
                    self.output,
                    "Unknown choice '{}'. Enter a number from 1 to {}.",
                    selection.trim(),
                    MenuAction::ALL.len()
                )?;
                Ok(ShellState::Running)
            }
        }
    }

    fn dispatch(&mut self, action: MenuAction) -> Result<ShellState> {
        let db = self.db;
        let conn = db.connection();
        match action {
            MenuAction::ViewDepartments => {
                let rows = departments::list(conn)?;
                self.show(&rows)?;
            }
            MenuAction::ViewRoles => {
                let rows = roles::list(conn)?;
                self.show(&rows)?;
            }
            MenuAction::ViewEmployees => {
                let rows = employees::list_details(conn)?;
                self.show(&rows)?;
            }
            MenuAction::AddDepartment => {
                let name = self.prompt("Enter the name of the department:")?;
                let id = departments::add(conn, &name)?;
                writeln!(self.output, "Department \"{}\" added with id {}.", name, id)?;
            }
            MenuAction::AddRole => {
                let title = self.prompt("Enter the title of the role:")?;
                let salary = parse_salary(&self.prompt("Enter the salary of the role:")?)?;
                let department_id = parse_id(
                    "department id",
                    &self.prompt("Enter the department ID of the role:")?,
                )?;
                let id = roles::add(conn, &title, salary, department_id)?;
                writeln!(self.output, "Role \"{}\" added with id {}.", title, id)?;
            }
            MenuAction::AddEmployee => {
                let first_name = self.prompt("Enter the first name of the employee:")?;
                let last_name = self.prompt("Enter the last name of the employee:")?;
                let role_id = parse_id("role id", &self.prompt("Enter the role ID of the employee:")?)?;
                let manager_id = parse_optional_id(
                    "manager id",
                    &self.prompt("Enter the manager ID of the employee (leave blank if none):")?,
                )?;
                let employee = NewEmployee {
                    first_name,
                    last_name,
                    role_id,
                    manager_id,
                };
                let id = employees::add(conn, &employee)?;
                writeln!(
                    self.output,
                    "Employee \"{} {}\" added with id {}.",
                    employee.first_name, employee.last_name, id
                )?;
            }
            MenuAction::UpdateEmployeeRole => {
                let employee_id = parse_id("employee id", &self.prompt("Enter the ID of the employee:")?)?;
                let role_id = parse_id("role id", &self.prompt("Enter the new role ID of the employee:")?)?;
                let affected = employees::update_role(conn, employee_id, role_id)?;
                self.report_update("role", employee_id, affected)?;
            }
            MenuAction::UpdateEmployeeManager => {
                let employee_id = parse_id("employee id", &self.prompt("Enter the ID of the employee:")?)?;
                let manager_id = parse_optional_id(
                    "manager id",
                    &self.prompt("Enter the new manager ID of the employee (leave blank for none):")?,
                )?;
                let affected = employees::update_manager(conn, employee_id, manager_id)?;
                self.report_update("manager", employee_id, affected)?;
            }
            MenuAction::ViewEmployeesByManager => {
                let manager_id = parse_id("manager id", &self.prompt("Enter the ID of the manager:")?)?;
                let rows = employees::by_manager(conn, manager_id)?;
                self.show(&rows)?;
            }
            MenuAction::ViewEmployeesByDepartment => {
                let department_id =
                    parse_id("department id", &self.prompt("Enter the ID of the department:")?)?;
                let rows = employees::by_department(conn, department_id)?;
                self.show(&rows)?;
            }
            MenuAction::DeleteDepartment => {
                let id = parse_id(
                    "department id",
                    &self.prompt("Enter the ID of the department to delete:")?,
                )?;
                let affected = departments::delete(conn, id)?;
                self.report_delete("department", id, affected)?;
            }
            MenuAction::DeleteRole => {
                let id = parse_id("role id", &self.prompt("Enter the ID of the role to delete:")?)?;
                let affected = roles::delete(conn, id)?;
                self.report_delete("role", id, affected)?;
            }
            MenuAction::DeleteEmployee => {
                let id = parse_id("employee id", &self.prompt("Enter the ID of the employee to delete:")?)?;
                let affected = employees::delete(conn, id)?;
                self.report_delete("employee", id, affected)?;
            }
            MenuAction::ViewDepartmentBudget => {
                let id = parse_id("department id", &self.prompt("Enter the ID of the department:")?)?;
                match departments::budget(conn, id)? {
                    Some(total) => {
                        writeln!(self.output, "Total utilized budget of department {}: {}", id, total)?
                    }
                    None => writeln!(self.output, "Department {} has no roles, so no budget.", id)?,
                }
            }
            MenuAction::Quit => {
                writeln!(self.output, "Goodbye.")?;
                return Ok(ShellState::Stopped);
            }
        }
        Ok(ShellState::Running)
    }

    /// Reads one line without its line ending; None at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Asks for one field. Running out of input mid-action is an error.
    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{} ", message)?;
        self.output.flush()?;
        self.read_line()?.ok_or_else(|| {
            EmptrackError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("input ended while waiting for: {}", message),
            ))
        })
    }

    fn show<T: Tabular>(&mut self, records: &[T]) -> Result<()> {
        write!(self.output, "{}", ResultsGrid::from_records(records).render())?;
        Ok(())
    }

    fn report_update(&mut self, what: &str, employee_id: i64, affected: usize) -> Result<()> {
        if affected == 0 {
            writeln!(self.output, "No employee with id {}; nothing updated.", employee_id)?;
        } else {
            writeln!(self.output, "Employee {} updated successfully.", what)?;
        }
        Ok(())
    }

    fn report_delete(&mut self, what: &str, id: i64, affected: usize) -> Result<()> {
        if affected == 0 {
            writeln!(self.output, "No {} with id {}; nothing deleted.", what, id)?;
        } else {
            writeln!(self.output, "Deleted {} {}.", what, id)?;
        }
        Ok(())
    }
}
