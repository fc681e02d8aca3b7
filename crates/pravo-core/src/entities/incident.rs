use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::geo::{Coordinates, validate_latitude, validate_longitude};

/// A reported offense as stored. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Incident {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image_uri: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Incident {
    #[must_use]
    pub const fn coordinates(&self) -> Option<Coordinates> {
        Coordinates::from_parts(self.latitude, self.longitude)
    }

    /// Whether the attached image lives on a remote host rather than on this device.
    #[must_use]
    pub fn has_remote_image(&self) -> bool {
        self.image_uri
            .as_deref()
            .is_some_and(|uri| uri.starts_with("https://") || uri.starts_with("http://"))
    }
}

/// An incident that has not been saved yet.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct NewIncident {
    pub title: String,
    pub description: String,
    pub image_uri: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl NewIncident {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image_uri: None,
            latitude: None,
            longitude: None,
        }
    }

    #[must_use]
    pub fn with_image_uri(mut self, uri: impl Into<String>) -> Self {
        self.image_uri = Some(uri.into());
        self
    }

    #[must_use]
    pub const fn with_coordinates(mut self, coordinates: Coordinates) -> Self {
        self.latitude = Some(coordinates.latitude);
        self.longitude = Some(coordinates.longitude);
        self
    }

    /// Check the fields a user-created report must carry.
    ///
    /// The store itself accepts any draft; this is the gate the shell applies
    /// before saving.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the title or description is blank,
    /// or if a coordinate is present and out of range.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.title.trim().is_empty() {
            return Err(CoreError::Validation("title is required".into()));
        }
        if self.description.trim().is_empty() {
            return Err(CoreError::Validation("description is required".into()));
        }
        if let Some(lat) = self.latitude {
            validate_latitude(lat)?;
        }
        if let Some(lon) = self.longitude {
            validate_longitude(lon)?;
        }
        Ok(())
    }

    /// Attach the store-assigned id.
    #[must_use]
    pub fn into_incident(self, id: i64) -> Incident {
        Incident {
            id,
            title: self.title,
            description: self.description,
            image_uri: self.image_uri,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}
