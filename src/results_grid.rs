/// Results Grid Module for emptrack
///
/// Renders query results as an aligned text table for the terminal.

use crate::store::{Department, Employee, EmployeeDetails, Role};

/// Text shown for SQL NULL cells
pub const NULL_CELL: &str = "NULL";

/// A record type that can be shown as one row of a results grid.
pub trait Tabular {
    /// Column headers, in display order
    fn headers() -> &'static [&'static str];

    /// Cell text for this record, one entry per header
    fn cells(&self) -> Vec<String>;
}

fn optional<T: ToString>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| NULL_CELL.to_string())
}

impl Tabular for Department {
    fn headers() -> &'static [&'static str] {
        &["id", "name"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone()]
    }
}

impl Tabular for Role {
    fn headers() -> &'static [&'static str] {
        &["id", "title", "salary", "department_id"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.salary.to_string(),
            self.department_id.to_string(),
        ]
    }
}

impl Tabular for Employee {
    fn headers() -> &'static [&'static str] {
        &["id", "first_name", "last_name", "role_id", "manager_id"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.role_id.to_string(),
            optional(&self.manager_id),
        ]
    }
}

impl Tabular for EmployeeDetails {
    fn headers() -> &'static [&'static str] {
        &["id", "first_name", "last_name", "title", "department", "salary", "manager"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.title.clone(),
            self.department.clone(),
            self.salary.to_string(),
            optional(&self.manager),
        ]
    }
}

/// Represents the entire grid structure.
#[derive(Debug, Clone, Default)]
pub struct ResultsGrid {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ResultsGrid {
    /// Creates a new, empty ResultsGrid.
    pub fn new() -> Self {
        ResultsGrid::default()
    }

    /// Builds a grid with one row per record.
    pub fn from_records<T: Tabular>(records: &[T]) -> Self {
        let mut grid = ResultsGrid::new();
        grid.set_headers(T::headers().iter().map(|h| h.to_string()).collect());
        for record in records {
            grid.add_row(record.cells());
        }
        grid
    }

    /// Sets the headers for the grid.
    pub fn set_headers(&mut self, headers: Vec<String>) {
        self.headers = headers;
    }

    /// Adds a row to the grid.
    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Width of every column: the widest of its header and its cells.
    fn column_widths(&self) -> Vec<usize> {
        let columns = self
            .rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0);

        (0..columns)
            .map(|i| {
                let header = self.headers.get(i).map_or(0, |h| h.chars().count());
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .fold(header, usize::max)
            })
            .collect()
    }

    /// Renders the grid with padded columns, a separator under the headers
    /// and a trailing row count.
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let format_line = |cells: &[String]| -> String {
            let padded: Vec<String> = widths
                .iter()
                .enumerate()
                .map(|(i, width)| {
                    let cell = cells.get(i).map(String::as_str).unwrap_or("");
                    format!("{:<width$}", cell, width = *width)
                })
                .collect();
            padded.join(" | ").trim_end().to_string()
        };

        let mut output = String::new();
        if !self.headers.is_empty() {
            output.push_str(&format_line(&self.headers));
            output.push('\n');
            let underline: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            output.push_str(&underline.join("-+-"));
            output.push('\n');
        }
        for row in &self.rows {
            output.push_str(&format_line(row));
            output.push('\n');
        }
        let noun = if self.rows.len() == 1 { "row" } else { "rows" };
        output.push_str(&format!("({} {})\n", self.rows.len(), noun));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_grid() {
        let grid = ResultsGrid::new();
        assert_eq!(grid.render(), "(0 rows)\n");
    }

    #[test]
    fn test_render_pads_columns() {
        let mut grid = ResultsGrid::new();
        grid.set_headers(vec!["id".to_string(), "name".to_string()]);
        grid.add_row(vec!["1".to_string(), "Engineering".to_string()]);
        grid.add_row(vec!["12".to_string(), "Legal".to_string()]);

        let expected = "\
id | name
---+------------
1  | Engineering
12 | Legal
(2 rows)
";
        assert_eq!(grid.render(), expected);
    }

    #[test]
    fn test_from_records_renders_null_manager() {
        let employees = vec![Employee {
            id: 1,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            role_id: 3,
            manager_id: None,
        }];
        let grid = ResultsGrid::from_records(&employees);
        assert_eq!(grid.headers, vec!["id", "first_name", "last_name", "role_id", "manager_id"]);
        assert_eq!(grid.rows[0], vec!["1", "Ada", "Lovelace", "3", "NULL"]);
        assert!(grid.render().ends_with("(1 row)\n"));
    }

    #[test]
    fn test_from_records_without_rows_keeps_headers() {
        let grid = ResultsGrid::from_records::<Department>(&[]);
        let rendered = grid.render();
        assert!(rendered.starts_with("id | name\n"));
        assert!(rendered.ends_with("(0 rows)\n"));
    }

    #[test]
    fn test_salary_formatting() {
        let role = Role {
            id: 1,
            title: "Engineer".to_string(),
            salary: 90000.0,
            department_id: 2,
        };
        assert_eq!(role.cells(), vec!["1", "Engineer", "90000", "2"]);
    }
}
