//! Local incident store configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::PROJECT_DIR;

/// File name used when no explicit path is configured.
const DEFAULT_DB_FILE: &str = "incidents.db";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Database file path. Empty means `.pravo/incidents.db` under the project root.
    #[serde(default)]
    pub path: String,
}

impl StoreConfig {
    /// Resolve the database path against the project root.
    ///
    /// Relative configured paths are taken relative to the project root, and
    /// `":memory:"` is passed through untouched.
    #[must_use]
    pub fn resolve(&self, project_root: &Path) -> PathBuf {
        if self.path.is_empty() {
            return project_root.join(PROJECT_DIR).join(DEFAULT_DB_FILE);
        }
        let configured = PathBuf::from(&self.path);
        if self.path == ":memory:" || configured.is_absolute() {
            configured
        } else {
            project_root.join(configured)
        }
    }
}
