//! Response checks for the upload endpoint.
//!
//! Maps non-success statuses to [`RelayError::Api`], pulling the provider's
//! `error.message` out of the JSON body when there is one, and extracts
//! `secure_url` from success bodies.

use serde::Deserialize;

use crate::error::RelayError;

#[derive(Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Return the response unchanged on success, [`RelayError::Api`] otherwise.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, RelayError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    Err(RelayError::Api {
        status,
        message: error_message(&body),
    })
}

/// Pull `secure_url` out of a success body.
pub fn parse_secure_url(body: &str) -> Result<String, RelayError> {
    let parsed: UploadResponse =
        serde_json::from_str(body).map_err(|e| RelayError::Parse(e.to_string()))?;
    match parsed.secure_url {
        Some(url) if !url.is_empty() => Ok(url),
        _ => Err(RelayError::Parse("response has no secure_url".into())),
    }
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map_or_else(|_| body.trim().to_string(), |envelope| envelope.error.message)
}
