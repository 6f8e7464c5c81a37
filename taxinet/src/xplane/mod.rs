//! X-Plane 12 environment utilities.
//!
//! Locates the installation and the apt.dat files to scan, in the order
//! X-Plane itself prioritizes scenery.
//!
//! # X-Plane Directory Structure
//!
//! ```text
//! X-Plane 12/
//! ├── Custom Scenery/
//! │   ├── scenery_packs.ini     # Scenery load order
//! │   └── <pack>/Earth nav data/apt.dat
//! ├── Global Scenery/
//! │   └── Global Airports/
//! │       └── Earth nav data/
//! │           └── apt.dat       # Airport database (X-Plane 12)
//! └── Resources/
//!     └── default scenery/
//!         └── default apt dat/
//!             └── Earth nav data/
//!                 └── apt.dat   # Airport database (X-Plane 11)
//! ```

mod detection;
mod paths;
mod scenery_packs;

use std::io;
use std::path::{Path, PathBuf};

pub use detection::{detect_xplane_install, detect_xplane_installs, XPlanePathError};
pub use paths::subdirs;
pub use scenery_packs::{apt_dat_candidates, scenery_pack_order};

/// A detected X-Plane 12 installation.
#[derive(Debug, Clone)]
pub struct XPlaneEnvironment {
    installation_path: PathBuf,
}

impl XPlaneEnvironment {
    /// Use the configured root or fall back to detection.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured root does not exist or nothing can
    /// be detected.
    pub fn resolve(configured: Option<&Path>) -> Result<Self, XPlanePathError> {
        match configured {
            Some(path) => Self::from_path(path),
            None => detect_xplane_install().map(|installation_path| Self { installation_path }),
        }
    }

    /// Create from an explicit X-Plane installation path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path doesn't exist.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, XPlanePathError> {
        let installation_path = path.as_ref().to_path_buf();
        if !installation_path.exists() {
            return Err(XPlanePathError::InstallPathNotFound(installation_path));
        }
        Ok(Self { installation_path })
    }

    pub fn installation_path(&self) -> &Path {
        &self.installation_path
    }

    /// apt.dat files to scan, highest priority first.
    ///
    /// Without a readable `scenery_packs.ini` only the global fallbacks are
    /// returned.
    pub fn apt_dat_files(&self) -> Vec<PathBuf> {
        let packs = match scenery_pack_order(&self.installation_path) {
            Ok(packs) => packs,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read scenery_packs.ini");
                Vec::new()
            }
        };
        apt_dat_candidates(&self.installation_path, &packs)
    }
}
