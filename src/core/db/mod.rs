/// Database Module
///
/// The database layer is split into two concerns:
/// - **Connection Management** (`connection.rs`): the process-scoped handle and its lifecycle
/// - **Query Execution** (`query.rs`): row collection and failure logging shared by the store
///
/// All database operations use the standardized `EmptrackError` type for consistent error propagation.
pub mod connection;
pub mod query;

pub use connection::*;
pub use query::*;
