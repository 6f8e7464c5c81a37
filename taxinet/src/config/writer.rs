//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! This module contains the `to_config_string()` function that produces
//! the commented INI representation written to `config.ini`.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let xplane_root = config
        .xplane
        .root
        .as_ref()
        .map(|p| path_to_string(p))
        .unwrap_or_default();
    let dump_directory = config
        .debug
        .dump_directory
        .as_ref()
        .map(|p| path_to_string(p))
        .unwrap_or_default();
    let log_snapping = if config.debug.log_snapping {
        "true"
    } else {
        "false"
    };

    format!(
        r#"[search]
; Standard search distance around the observer in meters (default: 27780 = 15 nm)
; Airports within twice this distance are kept; moving farther triggers a rescan
std_distance_m = {}
; Maximum distance for snapping positions onto taxiways in meters, 0 disables
snap_distance_m = {}

[network]
; Nodes closer than this are the same node (meters)
max_combine_distance_m = {}
; Maximum length of a coalesced taxiway edge (meters)
max_edge_length_m = {}
; Maximum turn within a coalesced taxiway edge (degrees)
max_segment_turn_deg = {}
; Open taxiway ends join other edges up to this distance (meters)
join_max_distance_m = {}
; Preferred and maximum angle for joining open ends (degrees)
join_angle_tolerance_deg = {}
join_angle_tolerance_ext_deg = {}
; Edges outside the preferred angle must be about this much closer to win (meters)
angle_ext_distance_m = {}
; Share of the runway length between threshold and touch-down point
touchdown_fraction = {}

[snap]
; Preferred and maximum angle between heading and taxiway (degrees)
angle_tolerance_deg = {}
angle_tolerance_ext_deg = {}
; Minimum time between leaving the runway and the first taxi position (seconds)
similar_ts_interval_s = {}
; Factor on the modelled taxi speed limiting the taxi path search
taxi_speed_factor = {}

[runway]
; Maximum difference between heading and bearing to the runway (degrees)
max_heading_diff_deg = {}
; Factor widening the modelled final approach sink rate
max_vsi_factor = {}
; Share of the flaps-down speed used as approach speed cap
approach_speed_factor = {}

[xplane]
; X-Plane installation directory (empty = auto-detect)
root = {}

[logging]
; Log file path (default: ~/.taxinet/logs/taxinet.log)
file = {}

[debug]
; Log every snapping decision (default: false)
log_snapping = {}
; Write each loaded airport as GPS Visualizer CSV into this directory (empty = off)
dump_directory = {}
"#,
        config.search.std_distance_m,
        config.search.snap_distance_m,
        config.network.max_combine_distance_m,
        config.network.max_edge_length_m,
        config.network.max_segment_turn_deg,
        config.network.join_max_distance_m,
        config.network.join_angle_tolerance_deg,
        config.network.join_angle_tolerance_ext_deg,
        config.network.angle_ext_distance_m,
        config.network.touchdown_fraction,
        config.snap.angle_tolerance_deg,
        config.snap.angle_tolerance_ext_deg,
        config.snap.similar_ts_interval_s,
        config.snap.taxi_speed_factor,
        config.runway.max_heading_diff_deg,
        config.runway.max_vsi_factor,
        config.runway.approach_speed_factor,
        xplane_root,
        path_to_string(&config.logging.file),
        log_snapping,
        dump_directory,
    )
}

/// Convert a path to a string, replacing home directory with ~.
fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}
