//! # pravo-db
//!
//! libSQL incident store for pravo.
//!
//! Holds the single `incidents` table. Records are inserted and read back,
//! never updated or deleted. Each repository method is one parameterized SQL
//! statement; the only multi-statement write is example seeding, which runs
//! in a transaction.
//!
//! Uses the `libsql` crate (C `SQLite` fork) in local-only mode.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;

#[cfg(test)]
mod test_support;

pub use error::DatabaseError;

use libsql::Builder;

/// Handle owning the incident database and its connection.
///
/// Created once at startup and passed explicitly to whoever needs the store;
/// dropping it closes the connection.
pub struct PravoDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl PravoDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Initializes the schema on every open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or the schema
    /// statement is rejected.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let pravo_db = Self { db, conn };
        pravo_db.initialize_schema().await?;
        tracing::debug!(path, "incident store opened");
        Ok(pravo_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
