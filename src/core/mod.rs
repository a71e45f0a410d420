/// Core Module for emptrack
///
/// Shared infrastructure used by both the data access layer and the
/// interactive shell: the error type and database connection management.

pub mod db;
pub mod error;

// Re-export commonly used types for convenience
pub use error::{EmptrackError, Result};
