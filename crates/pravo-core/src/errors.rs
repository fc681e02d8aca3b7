//! Cross-cutting error types for pravo.
//!
//! Storage and network failures are defined in their own crates
//! (`DatabaseError`, `RelayError`). Everything converges into `anyhow` in
//! `pravo-cli`, where each failure becomes a blocking notice.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A host capability the shell asks for before it can fill in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Foreground location fix.
    Location,
    /// Photo library access.
    PhotoLibrary,
}

impl Capability {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Location => "location",
            Self::PhotoLibrary => "photo_library",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can be raised by any pravo crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// User input failed validation (blank fields, coordinates out of range).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A device capability was refused or returned nothing usable.
    #[error("Permission denied for {capability}: {reason}")]
    PermissionDenied {
        capability: Capability,
        reason: String,
    },

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    pub fn denied(capability: Capability, reason: impl Into<String>) -> Self {
        Self::PermissionDenied {
            capability,
            reason: reason.into(),
        }
    }

    /// Whether this error came from a refused device capability.
    #[must_use]
    pub const fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denied_message_names_capability() {
        let err = CoreError::denied(Capability::Location, "no fix available");
        assert!(err.is_permission_denied());
        assert_eq!(
            err.to_string(),
            "Permission denied for location: no fix available"
        );
    }

    #[test]
    fn validation_is_not_permission_denied() {
        let err = CoreError::Validation("title is required".into());
        assert!(!err.is_permission_denied());
    }

    #[test]
    fn capability_serializes_snake_case() {
        let json = serde_json::to_string(&Capability::PhotoLibrary).unwrap();
        assert_eq!(json, "\"photo_library\"");
    }
}
