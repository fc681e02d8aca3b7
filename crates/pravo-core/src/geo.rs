//! Decimal-degree coordinates.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Build a validated coordinate pair.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if either value is not finite or lies
    /// outside `-90..=90` (latitude) / `-180..=180` (longitude).
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoreError> {
        validate_latitude(latitude)?;
        validate_longitude(longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Combine two optional halves; a pair with one side missing is no fix at all.
    #[must_use]
    pub const fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => Some(Self {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }
}

pub(crate) fn validate_latitude(value: f64) -> Result<(), CoreError> {
    if value.is_finite() && (-90.0..=90.0).contains(&value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "latitude {value} is outside -90..=90"
        )))
    }
}

pub(crate) fn validate_longitude(value: f64) -> Result<(), CoreError> {
    if value.is_finite() && (-180.0..=180.0).contains(&value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "longitude {value} is outside -180..=180"
        )))
    }
}
