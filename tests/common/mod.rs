//! Shared setup for integration tests.

#![allow(dead_code)]

use emptrack::core::db::Database;
use rusqlite::Connection;
use std::path::Path;

pub const SCHEMA_SQL: &str = include_str!("../../db/schema.sql");
pub const SEEDS_SQL: &str = include_str!("../../db/seeds.sql");

/// In-memory database with the reference schema applied
pub fn empty_database() -> Database {
    let db = Database::open_in_memory().unwrap();
    db.connection().execute_batch(SCHEMA_SQL).unwrap();
    db
}

/// In-memory database with the reference schema and sample rows
pub fn seeded_database() -> Database {
    let db = empty_database();
    db.connection().execute_batch(SEEDS_SQL).unwrap();
    db
}

/// Provisions a database file at `path` the way an operator would
pub fn provision_file(path: &Path) {
    let conn = Connection::open(path).unwrap();
    conn.execute_batch(SCHEMA_SQL).unwrap();
}
