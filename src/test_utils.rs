/// # Test Utilities Module
///
/// Database fixtures for unit tests. Every fixture is a private in-memory
/// database with the reference schema applied, so tests never share state.

use crate::core::db::Database;
use crate::core::Result;

/// Reference DDL for the three tables the tool works against
pub const SCHEMA_SQL: &str = include_str!("../db/schema.sql");

/// Sample departments, roles and employees
pub const SEEDS_SQL: &str = include_str!("../db/seeds.sql");

/// Isolated database test fixture
pub struct DatabaseFixture {
    pub db: Database,
}

impl DatabaseFixture {
    /// Create an empty database with the standard schema
    pub fn new() -> Result<Self> {
        let db = Database::open_in_memory()?;
        db.connection().execute_batch(SCHEMA_SQL)?;
        Ok(DatabaseFixture { db })
    }

    /// Create a database with the standard schema and sample rows
    pub fn with_sample_data() -> Result<Self> {
        let fixture = Self::new()?;
        fixture.db.connection().execute_batch(SEEDS_SQL)?;
        Ok(fixture)
    }

    pub fn conn(&self) -> &rusqlite::Connection {
        self.db.connection()
    }

    /// Turn foreign key enforcement off so tests can plant dangling references
    pub fn without_foreign_keys(self) -> Result<Self> {
        self.db.connection().execute_batch("PRAGMA foreign_keys = OFF;")?;
        Ok(self)
    }

    /// Count rows in a table
    pub fn count(&self, table: &str) -> i64 {
        self.conn()
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))
            .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_schema() {
        let fixture = DatabaseFixture::new().unwrap();
        for table in ["department", "roles", "employees"] {
            assert_eq!(fixture.count(table), 0, "{} should start empty", table);
        }
    }

    #[test]
    fn test_fixture_sample_data() {
        let fixture = DatabaseFixture::with_sample_data().unwrap();
        assert_eq!(fixture.count("department"), 4);
        assert_eq!(fixture.count("roles"), 8);
        assert_eq!(fixture.count("employees"), 8);
    }
}
