//! X-Plane 12 installation detection.
//!
//! Provides utilities for detecting X-Plane 12 installation paths across
//! different operating systems.

use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use super::paths;

/// Errors that can occur when detecting X-Plane paths.
#[derive(Debug, Error)]
pub enum XPlanePathError {
    /// Home directory could not be determined.
    #[error("Could not determine home directory")]
    NoHomeDirectory,

    /// X-Plane install reference file not found.
    #[error("X-Plane 12 install reference not found at {0}")]
    InstallFileNotFound(PathBuf),

    /// The configured or referenced install path doesn't exist.
    #[error("X-Plane 12 install path does not exist: {0}")]
    InstallPathNotFound(PathBuf),
}

/// Detect all X-Plane 12 installation directories.
///
/// Reads the install reference file which may contain multiple paths (one per line)
/// for users with multiple X-Plane installations.
///
/// # Returns
///
/// Paths of existing installation directories, in file order; empty if none.
pub fn detect_xplane_installs() -> Vec<PathBuf> {
    let Ok(reference_path) = paths::get_install_reference_path() else {
        return Vec::new();
    };

    let Ok(contents) = fs::read_to_string(&reference_path) else {
        return Vec::new();
    };

    contents
        .lines()
        .map(|line| PathBuf::from(line.trim()))
        .filter(|path| !path.as_os_str().is_empty() && path.exists())
        .collect()
}

/// Detect the X-Plane 12 installation directory.
///
/// If multiple installations exist, returns the first valid one.
///
/// # Errors
///
/// Returns [`XPlanePathError::InstallFileNotFound`] if no installation is
/// referenced.
pub fn detect_xplane_install() -> Result<PathBuf, XPlanePathError> {
    detect_xplane_installs().into_iter().next().ok_or_else(|| {
        let reference_path = paths::get_install_reference_path()
            .unwrap_or_else(|_| PathBuf::from("~/.x-plane/x-plane_install_12.txt"));
        XPlanePathError::InstallFileNotFound(reference_path)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_never_returns_missing_paths() {
        // Whatever the machine has installed, only existing paths come back
        for path in detect_xplane_installs() {
            assert!(path.exists());
        }
    }

    #[test]
    fn test_error_messages() {
        let err = XPlanePathError::InstallPathNotFound(PathBuf::from("/nowhere"));
        assert_eq!(err.to_string(), "X-Plane 12 install path does not exist: /nowhere");
    }
}
