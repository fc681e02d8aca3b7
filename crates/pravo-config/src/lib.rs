//! # pravo-config
//!
//! Layered configuration loading for pravo using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PRAVO_*` prefix, `__` as separator)
//! 2. Project-level `.pravo/config.toml`
//! 3. User-level `~/.config/pravo/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PRAVO_UPLOAD__CLOUD_NAME` -> `upload.cloud_name`,
//! `PRAVO_DEVICE__LATITUDE` -> `device.latitude`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use pravo_config::PravoConfig;
//!
//! let config = PravoConfig::load_with_dotenv().expect("config");
//!
//! if config.upload.is_configured() {
//!     println!("Upload target: {}", config.upload.upload_url());
//! }
//! ```

mod device;
mod error;
mod general;
mod store;
mod upload;

pub use device::DeviceConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use store::StoreConfig;
pub use upload::UploadConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the per-project state directory.
pub const PROJECT_DIR: &str = ".pravo";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PravoConfig {
    #[serde(default)]
    pub upload: UploadConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub device: DeviceConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl PravoConfig {
    /// Load configuration from all sources, resolving the project file
    /// relative to the current directory.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration for a known project root.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` on parse or type errors.
    pub fn load_for_project(project_root: &Path) -> Result<Self, ConfigError> {
        Self::figment_for(Some(project_root))
            .extract()
            .map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` on parse or type errors.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain rooted at the current directory.
    pub fn figment() -> Figment {
        Self::figment_for(None)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment_for(project_root: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = project_root.map_or_else(
            || PathBuf::from(PROJECT_DIR).join("config.toml"),
            |root| root.join(PROJECT_DIR).join("config.toml"),
        );
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("PRAVO_").split("__"))
    }

    /// Validate cross-field constraints figment cannot express.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the device fix is half-set or out
    /// of range, or if the upload endpoint is not an HTTP(S) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.device.validate()?;
        self.upload.validate()?;
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pravo").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = PravoConfig::default();
        assert!(!config.upload.is_configured());
        assert!(config.store.path.is_empty());
        assert!(config.device.fix().is_none());
        assert!(!config.general.seed_examples);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: PravoConfig = PravoConfig::figment().extract()?;
            assert!(!config.upload.is_configured());
            assert_eq!(config.upload.upload_preset, "ml_default");
            Ok(())
        });
    }

    #[test]
    fn default_config_validates() {
        assert!(PravoConfig::default().validate().is_ok());
    }
}
