//! Scenery load order.
//!
//! `Custom Scenery/scenery_packs.ini` lists the enabled scenery packs in
//! priority order, one `SCENERY_PACK <path>` line each. Paths are relative to
//! the X-Plane root unless absolute. Airports defined by an earlier pack take
//! precedence over the same airport in a later one.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::paths;

const PACK_PREFIX: &str = "SCENERY_PACK ";

/// Placeholder for the global airports pack in X-Plane 12 load orders.
const GLOBAL_AIRPORTS_MARKER: &str = "*GLOBAL_AIRPORTS*";

/// Enabled scenery pack directories of an installation, highest priority first.
///
/// # Errors
///
/// Returns the I/O error if `scenery_packs.ini` cannot be read; a missing
/// file yields [`io::ErrorKind::NotFound`].
pub fn scenery_pack_order(xplane_root: &Path) -> io::Result<Vec<PathBuf>> {
    let contents = fs::read(paths::scenery_packs_ini(xplane_root))?;
    let contents = String::from_utf8_lossy(&contents);

    Ok(contents
        .lines()
        .filter_map(|line| line.trim_end().strip_prefix(PACK_PREFIX))
        .map(str::trim)
        .filter(|pack| !pack.is_empty())
        .map(|pack| {
            if pack == GLOBAL_AIRPORTS_MARKER {
                paths::global_airports_dir(xplane_root)
            } else {
                xplane_root.join(pack)
            }
        })
        .collect())
}

/// Candidate apt.dat files for the given packs, in scanning order.
///
/// Each pack contributes its `Earth nav data/apt.dat`, followed by the global
/// airports of X-Plane 12 and the default airports of X-Plane 11 as
/// fallbacks. Duplicates keep their first position.
pub fn apt_dat_candidates(xplane_root: &Path, packs: &[PathBuf]) -> Vec<PathBuf> {
    let fallbacks = [
        paths::global_airports_dir(xplane_root),
        paths::default_apt_dat_dir(xplane_root),
    ];

    let mut candidates: Vec<PathBuf> = Vec::with_capacity(packs.len() + fallbacks.len());
    for pack in packs.iter().chain(fallbacks.iter()) {
        let apt_dat = paths::pack_apt_dat(pack);
        if !candidates.contains(&apt_dat) {
            candidates.push(apt_dat);
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn install_with_packs(ini: &str) -> TempDir {
        let root = tempfile::tempdir().unwrap();
        let custom = root.path().join("Custom Scenery");
        fs::create_dir_all(&custom).unwrap();
        fs::write(custom.join("scenery_packs.ini"), ini).unwrap();
        root
    }

    #[test]
    fn test_pack_order_skips_disabled_and_header() {
        let root = install_with_packs(
            "I\n1000 Version\nSCENERY\n\n\
             SCENERY_PACK Custom Scenery/KSEA Demo Area/\n\
             SCENERY_PACK_DISABLED Custom Scenery/Old Pack/\n\
             SCENERY_PACK *GLOBAL_AIRPORTS*\n\
             SCENERY_PACK /abs/Ortho/\r\n",
        );

        let packs = scenery_pack_order(root.path()).unwrap();
        assert_eq!(
            packs,
            vec![
                root.path().join("Custom Scenery/KSEA Demo Area/"),
                root.path().join("Global Scenery/Global Airports"),
                PathBuf::from("/abs/Ortho/"),
            ]
        );
    }

    #[test]
    fn test_missing_ini_is_not_found() {
        let root = tempfile::tempdir().unwrap();
        let err = scenery_pack_order(root.path()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_candidates_end_with_fallbacks() {
        let root = Path::new("/xp");
        let packs = vec![
            root.join("Custom Scenery/EDDM"),
            paths::global_airports_dir(root),
        ];

        let candidates = apt_dat_candidates(root, &packs);
        assert_eq!(
            candidates,
            vec![
                PathBuf::from("/xp/Custom Scenery/EDDM/Earth nav data/apt.dat"),
                PathBuf::from("/xp/Global Scenery/Global Airports/Earth nav data/apt.dat"),
                PathBuf::from("/xp/Resources/default scenery/default apt dat/Earth nav data/apt.dat"),
            ]
        );
    }
}
