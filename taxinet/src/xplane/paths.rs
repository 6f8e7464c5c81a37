//! X-Plane path utilities.
//!
//! Internal helpers for constructing X-Plane-related paths.

use std::path::{Path, PathBuf};

use super::detection::XPlanePathError;

/// Well-known X-Plane subdirectories and files.
pub mod subdirs {
    /// Custom Scenery directory name.
    pub const CUSTOM_SCENERY: &str = "Custom Scenery";
    /// Scenery load order file (inside Custom Scenery).
    pub const SCENERY_PACKS_INI: &str = "scenery_packs.ini";
    /// Global Scenery directory name (X-Plane 12).
    pub const GLOBAL_SCENERY: &str = "Global Scenery";
    /// Global airports pack (inside Global Scenery).
    pub const GLOBAL_AIRPORTS: &str = "Global Airports";
    /// Resources directory name.
    pub const RESOURCES: &str = "Resources";
    /// Default scenery directory (inside Resources).
    pub const DEFAULT_SCENERY: &str = "default scenery";
    /// Default apt dat directory (inside default scenery).
    pub const DEFAULT_APT_DAT: &str = "default apt dat";
    /// Earth nav data directory.
    pub const EARTH_NAV_DATA: &str = "Earth nav data";
    /// Airport database filename.
    pub const APT_DAT: &str = "apt.dat";
}

/// Get the path to the X-Plane install reference file.
///
/// The location varies by OS:
/// - Linux: `~/.x-plane/x-plane_install_12.txt`
/// - macOS: `~/.x-plane/x-plane_install_12.txt`
/// - Windows: `%LOCALAPPDATA%\x-plane\x-plane_install_12.txt`
pub fn get_install_reference_path() -> Result<PathBuf, XPlanePathError> {
    #[cfg(target_os = "windows")]
    {
        let local_app_data =
            std::env::var("LOCALAPPDATA").map_err(|_| XPlanePathError::NoHomeDirectory)?;
        Ok(PathBuf::from(local_app_data)
            .join("x-plane")
            .join("x-plane_install_12.txt"))
    }

    #[cfg(not(target_os = "windows"))]
    {
        let home = dirs::home_dir().ok_or(XPlanePathError::NoHomeDirectory)?;
        Ok(home.join(".x-plane").join("x-plane_install_12.txt"))
    }
}

/// The apt.dat inside a scenery pack directory.
pub fn pack_apt_dat(pack_dir: &Path) -> PathBuf {
    pack_dir.join(subdirs::EARTH_NAV_DATA).join(subdirs::APT_DAT)
}

/// The X-Plane 12 global airports pack.
pub fn global_airports_dir(xplane_root: &Path) -> PathBuf {
    xplane_root
        .join(subdirs::GLOBAL_SCENERY)
        .join(subdirs::GLOBAL_AIRPORTS)
}

/// The X-Plane 11 default airport pack.
pub fn default_apt_dat_dir(xplane_root: &Path) -> PathBuf {
    xplane_root
        .join(subdirs::RESOURCES)
        .join(subdirs::DEFAULT_SCENERY)
        .join(subdirs::DEFAULT_APT_DAT)
}

/// `Custom Scenery/scenery_packs.ini` of an installation.
pub fn scenery_packs_ini(xplane_root: &Path) -> PathBuf {
    xplane_root
        .join(subdirs::CUSTOM_SCENERY)
        .join(subdirs::SCENERY_PACKS_INI)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_install_reference_path() {
        if let Ok(path) = get_install_reference_path() {
            assert!(path.ends_with("x-plane_install_12.txt"));
        }
    }

    #[test]
    fn test_fallback_locations() {
        let root = Path::new("/xp12");
        assert_eq!(
            pack_apt_dat(&global_airports_dir(root)),
            PathBuf::from("/xp12/Global Scenery/Global Airports/Earth nav data/apt.dat")
        );
        assert_eq!(
            pack_apt_dat(&default_apt_dat_dir(root)),
            PathBuf::from("/xp12/Resources/default scenery/default apt dat/Earth nav data/apt.dat")
        );
        assert_eq!(
            scenery_packs_ini(root),
            PathBuf::from("/xp12/Custom Scenery/scenery_packs.ini")
        );
    }
}
