//! Hosted image upload configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default unsigned upload preset.
fn default_upload_preset() -> String {
    String::from("ml_default")
}

/// Default API base; the cloud name is appended per request.
fn default_endpoint() -> String {
    String::from("https://api.cloudinary.com/v1_1")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadConfig {
    /// Cloud (account) name the upload is addressed to.
    #[serde(default)]
    pub cloud_name: String,

    /// API key. Carried for signed uploads; the unsigned preset path ignores it.
    #[serde(default)]
    pub api_key: String,

    /// API secret. Carried for signed uploads; the unsigned preset path ignores it.
    #[serde(default)]
    pub api_secret: String,

    /// Upload preset name sent with every request.
    #[serde(default = "default_upload_preset")]
    pub upload_preset: String,

    /// API base URL. Override to point at a local stub.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            cloud_name: String::new(),
            api_key: String::new(),
            api_secret: String::new(),
            upload_preset: default_upload_preset(),
            endpoint: default_endpoint(),
        }
    }
}

impl UploadConfig {
    /// Check if the upload config has the minimum required fields.
    pub fn is_configured(&self) -> bool {
        !self.cloud_name.is_empty() && !self.upload_preset.is_empty()
    }

    /// Fail unless [`Self::is_configured`] holds.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` naming the `upload` section.
    pub fn require_configured(&self) -> Result<&Self, ConfigError> {
        if self.is_configured() {
            Ok(self)
        } else {
            Err(ConfigError::NotConfigured {
                section: "upload".into(),
            })
        }
    }

    /// The image upload URL: `{endpoint}/{cloud_name}/image/upload`.
    pub fn upload_url(&self) -> String {
        format!(
            "{}/{}/image/upload",
            self.endpoint.trim_end_matches('/'),
            self.cloud_name
        )
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.starts_with("https://") || self.endpoint.starts_with("http://") {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                field: "upload.endpoint".into(),
                reason: format!("'{}' is not an http(s) URL", self.endpoint),
            })
        }
    }
}
