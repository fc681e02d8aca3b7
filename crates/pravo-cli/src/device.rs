//! Device capabilities as seen from a terminal.
//!
//! Each capability has two outcomes: granted with a result, or
//! `CoreError::PermissionDenied`. The report flow only talks to the trait so
//! tests can swap in a scripted device.

use std::path::{Path, PathBuf};

use pravo_core::errors::{Capability, CoreError};
use pravo_core::geo::Coordinates;

pub trait DeviceCapabilities {
    /// Current location fix.
    fn current_location(&self) -> Result<Coordinates, CoreError>;

    /// Confirm access to a selected photo and return its absolute path.
    fn pick_photo(&self, path: &Path) -> Result<PathBuf, CoreError>;
}

/// Location from `--lat/--lon`, falling back to the configured `[device]` fix.
pub struct TerminalDevice {
    explicit: Option<(f64, f64)>,
    fallback: Option<Coordinates>,
}

impl TerminalDevice {
    #[must_use]
    pub const fn new(explicit: Option<(f64, f64)>, fallback: Option<Coordinates>) -> Self {
        Self { explicit, fallback }
    }
}

impl DeviceCapabilities for TerminalDevice {
    fn current_location(&self) -> Result<Coordinates, CoreError> {
        if let Some((lat, lon)) = self.explicit {
            return Coordinates::new(lat, lon);
        }
        self.fallback.ok_or_else(|| {
            CoreError::denied(
                Capability::Location,
                "no --lat/--lon given and no [device] fix configured",
            )
        })
    }

    fn pick_photo(&self, path: &Path) -> Result<PathBuf, CoreError> {
        let denied = |reason: String| CoreError::denied(Capability::PhotoLibrary, reason);

        let canonical = path
            .canonicalize()
            .map_err(|e| denied(format!("{}: {e}", path.display())))?;
        if !canonical.is_file() {
            return Err(denied(format!("{} is not a file", canonical.display())));
        }
        std::fs::File::open(&canonical)
            .map_err(|e| denied(format!("{}: {e}", canonical.display())))?;
        Ok(canonical)
    }
}

/// Percent-encoded `file://` URI for a photo kept on this machine.
///
/// # Errors
///
/// Returns `CoreError::Validation` if the path is not absolute.
pub fn local_file_uri(path: &Path) -> Result<String, CoreError> {
    url::Url::from_file_path(path)
        .map(String::from)
        .map_err(|()| CoreError::Validation(format!("{} is not an absolute path", path.display())))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn explicit_location_wins_over_fallback() {
        let device = TerminalDevice::new(
            Some((49.8397, 24.0297)),
            Some(Coordinates::new(50.45, 30.52).unwrap()),
        );
        let fix = device.current_location().unwrap();
        assert!((fix.latitude - 49.8397).abs() < f64::EPSILON);
    }

    #[test]
    fn fallback_used_without_flags() {
        let device = TerminalDevice::new(None, Some(Coordinates::new(50.45, 30.52).unwrap()));
        assert!(device.current_location().is_ok());
    }

    #[test]
    fn no_fix_is_permission_denied() {
        let device = TerminalDevice::new(None, None);
        let err = device.current_location().unwrap_err();
        assert!(err.is_permission_denied());
    }

    #[test]
    fn invalid_explicit_fix_is_validation_error() {
        let device = TerminalDevice::new(Some((120.0, 0.0)), None);
        assert!(matches!(
            device.current_location(),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn existing_photo_is_granted() {
        let dir = TempDir::new().unwrap();
        let photo = dir.path().join("photo.jpg");
        std::fs::write(&photo, b"jpeg").unwrap();

        let device = TerminalDevice::new(None, None);
        let picked = device.pick_photo(&photo).unwrap();
        assert!(picked.is_absolute());
        assert!(local_file_uri(&picked).unwrap().starts_with("file:///"));
    }

    #[test]
    fn file_uri_is_percent_encoded() {
        let path = Path::new("/tmp/мої фото/крадіжка #1.jpg");
        let uri = local_file_uri(path).unwrap();

        assert!(uri.starts_with("file:///tmp/"));
        assert!(uri.contains("%20"));
        assert!(uri.contains("%231.jpg"));
        assert!(uri.is_ascii());
        let parsed = url::Url::parse(&uri).unwrap();
        assert_eq!(parsed.to_file_path().unwrap(), path);
    }

    #[test]
    fn relative_path_has_no_file_uri() {
        assert!(matches!(
            local_file_uri(Path::new("photo.jpg")),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn missing_photo_is_denied() {
        let device = TerminalDevice::new(None, None);
        let err = device
            .pick_photo(Path::new("/no/such/photo.jpg"))
            .unwrap_err();
        assert!(err.is_permission_denied());
    }

    #[test]
    fn directory_is_not_a_photo() {
        let dir = TempDir::new().unwrap();
        let device = TerminalDevice::new(None, None);
        assert!(device.pick_photo(dir.path()).unwrap_err().is_permission_denied());
    }
}
