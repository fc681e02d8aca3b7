//! Row-to-entity parsing helpers.
//!
//! `libsql::Row` is column-indexed. Every nullable column has to be read as
//! an `Option`, because `row.get::<String>(idx)` on a NULL column is an error,
//! not `""`. The store accepts NULL title/description ungated, so even those
//! are read through these helpers.

use crate::error::DatabaseError;

/// Read a nullable TEXT column, mapping NULL to `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_text_or_empty(row: &libsql::Row, idx: i32) -> Result<String, DatabaseError> {
    Ok(row.get::<Option<String>>(idx)?.unwrap_or_default())
}

/// Read a nullable REAL column.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_f64(row: &libsql::Row, idx: i32) -> Result<Option<f64>, DatabaseError> {
    Ok(row.get::<Option<f64>>(idx)?)
}

/// Convert a SQLite `COUNT(*)` into `u64`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the count is negative.
pub fn count_to_u64(value: i64) -> Result<u64, DatabaseError> {
    u64::try_from(value).map_err(|e| DatabaseError::Query(format!("Invalid count {value}: {e}")))
}
