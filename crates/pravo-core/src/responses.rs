//! CLI response types returned as JSON by `pravo` commands.
//!
//! These structs define the shape of JSON output for `pravo init`,
//! `pravo report`, `pravo seed`, and `pravo upload`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Incident;

/// Response from `pravo init`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InitResponse {
    pub database: String,
    pub incidents: u64,
    pub upload_configured: bool,
}

/// Response from `pravo report`: the saved record plus the re-read list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ReportResponse {
    pub incident: Incident,
    pub incidents: Vec<Incident>,
}

/// Response from `pravo seed`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SeedResponse {
    pub inserted: u32,
    pub already_seeded: bool,
}

/// Response from `pravo upload`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UploadResponse {
    pub source: String,
    pub secure_url: String,
}
