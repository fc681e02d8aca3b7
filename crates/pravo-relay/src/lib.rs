//! # pravo-relay
//!
//! Forwards a local photo to the configured image host and hands back the
//! public `secure_url`.
//!
//! One unsigned multipart POST per photo: fields `file` (`image/jpeg`),
//! `upload_preset` and `cloud_name`. No retry, no request timeout, no
//! integrity check of the uploaded bytes.

mod error;
mod http;

pub use error::RelayError;

use std::path::Path;

use pravo_config::UploadConfig;
use reqwest::multipart::{Form, Part};

use crate::http::{check_response, parse_secure_url};

/// File name the photo is declared with in the multipart body.
const UPLOAD_FILE_NAME: &str = "upload.jpg";

/// HTTP client for the image host.
pub struct ImageRelay {
    http: reqwest::Client,
    upload_url: String,
    upload_preset: String,
    cloud_name: String,
}

impl ImageRelay {
    /// Build a relay for the given upload settings.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::NotConfigured` if no cloud name is set, or
    /// `RelayError::Http` if the HTTP client cannot be built.
    pub fn new(config: &UploadConfig) -> Result<Self, RelayError> {
        config
            .require_configured()
            .map_err(|e| RelayError::NotConfigured(e.to_string()))?;

        let http = reqwest::Client::builder()
            .user_agent(concat!("pravo/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            upload_url: config.upload_url(),
            upload_preset: config.upload_preset.clone(),
            cloud_name: config.cloud_name.clone(),
        })
    }

    /// Where uploads are POSTed.
    #[must_use]
    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }

    /// Upload a photo and return its public URL.
    ///
    /// Failures are logged and collapse to `None`; use [`Self::try_upload`]
    /// to keep the reason.
    pub async fn upload(&self, image: &Path) -> Option<String> {
        match self.try_upload(image).await {
            Ok(url) => {
                tracing::debug!(image = %image.display(), %url, "image uploaded");
                Some(url)
            }
            Err(error) => {
                tracing::warn!(image = %image.display(), %error, "image upload failed");
                None
            }
        }
    }

    /// Upload a photo, keeping the failure reason.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError`] if the file cannot be read, the request fails,
    /// the host answers with a non-success status, or the body carries no
    /// `secure_url`.
    pub async fn try_upload(&self, image: &Path) -> Result<String, RelayError> {
        let bytes = tokio::fs::read(image)
            .await
            .map_err(|source| RelayError::Read {
                path: image.display().to_string(),
                source,
            })?;
        let form = self.build_form(bytes)?;

        let resp = self
            .http
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await?;
        let resp = check_response(resp).await?;
        let body = resp.text().await?;
        parse_secure_url(&body)
    }

    fn build_form(&self, bytes: Vec<u8>) -> Result<Form, RelayError> {
        let file = Part::bytes(bytes)
            .file_name(UPLOAD_FILE_NAME)
            .mime_str("image/jpeg")?;
        Ok(Form::new()
            .part("file", file)
            .text("upload_preset", self.upload_preset.clone())
            .text("cloud_name", self.cloud_name.clone()))
    }
}
