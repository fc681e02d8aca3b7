//! General application configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Insert the example incidents on startup (once per store).
    #[serde(default)]
    pub seed_examples: bool,
}
