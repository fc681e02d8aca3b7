//! Schema initialization.
//!
//! Embeds the SQL schema at compile time and executes it on database open.
//! All statements use `IF NOT EXISTS` for idempotent re-running.

use crate::PravoDb;
use crate::error::DatabaseError;

/// Incident table plus the `store_meta` flag table.
const MIGRATION_001: &str = include_str!("../migrations/001_incidents.sql");

impl PravoDb {
    /// Ensure the incident schema exists. Safe to call on every start.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Migration` if the engine rejects the schema.
    pub async fn initialize_schema(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_incidents: {e}")))?;
        tracing::debug!("incident schema ready");
        Ok(())
    }
}
