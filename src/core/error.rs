/// Emptrack Error Module
///
/// This module defines the error type shared by the data access layer, the
/// interactive shell and configuration loading.
use thiserror::Error;

/// Error type for the emptrack application.
///
/// Database failures (connectivity, constraint violations, statement
/// errors) keep the underlying `rusqlite::Error` untouched so callers see
/// exactly what SQLite reported.
#[derive(Error, Debug)]
pub enum EmptrackError {
    /// Database-related errors from SQLite operations
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Malformed user input, e.g. a non-numeric salary or id
    #[error("Input error: {0}")]
    Input(String),

    /// Configuration loading and validation errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal and file system I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Result to use EmptrackError as the error type.
pub type Result<T> = std::result::Result<T, EmptrackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let db_err = EmptrackError::Database(rusqlite::Error::ExecuteReturnedResults);
        assert!(db_err.to_string().contains("Database error"));

        let input_err = EmptrackError::Input("salary must be a number".to_string());
        assert_eq!(input_err.to_string(), "Input error: salary must be a number");

        let config_err = EmptrackError::Config("Invalid config".to_string());
        assert!(config_err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stdin closed");
        let err: EmptrackError = io_err.into();
        match err {
            EmptrackError::Io(_) => {}
            _ => panic!("Expected IO error"),
        }

        let err: EmptrackError = rusqlite::Error::QueryReturnedNoRows.into();
        match err {
            EmptrackError::Database(rusqlite::Error::QueryReturnedNoRows) => {}
            _ => panic!("Expected Database error"),
        }
    }
}
