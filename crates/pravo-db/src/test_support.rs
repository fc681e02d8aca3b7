//! Shared test utilities for pravo-db unit tests.

pub(crate) mod helpers {
    use crate::PravoDb;

    /// Create an in-memory store with the schema initialized.
    pub async fn test_db() -> PravoDb {
        PravoDb::open_local(":memory:").await.unwrap()
    }
}
