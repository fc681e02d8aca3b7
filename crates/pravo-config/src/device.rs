//! Fallback device location.
//!
//! A terminal has no GPS. When the user does not pass `--lat/--lon`, the shell
//! reads this fixed fix instead; with neither, location is treated as denied.

use pravo_core::geo::Coordinates;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DeviceConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl DeviceConfig {
    /// The configured fix, if both halves are set.
    #[must_use]
    pub const fn fix(&self) -> Option<Coordinates> {
        Coordinates::from_parts(self.latitude, self.longitude)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        match (self.latitude, self.longitude) {
            (None, None) => Ok(()),
            (Some(lat), Some(lon)) => Coordinates::new(lat, lon)
                .map(|_| ())
                .map_err(|e| ConfigError::InvalidValue {
                    field: "device".into(),
                    reason: e.to_string(),
                }),
            _ => Err(ConfigError::InvalidValue {
                field: "device".into(),
                reason: "latitude and longitude must be set together".into(),
            }),
        }
    }
}
