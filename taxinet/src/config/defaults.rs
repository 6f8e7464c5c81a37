//! Default values and constants for all configuration settings.

use super::settings::*;

// =============================================================================
// [search]
// =============================================================================

/// Standard search distance: 15 nm.
pub const DEFAULT_STD_DISTANCE_M: f64 = 27_780.0;
pub const DEFAULT_SNAP_DISTANCE_M: f64 = 8.0;

// =============================================================================
// [network]
// =============================================================================

pub const DEFAULT_MAX_COMBINE_DISTANCE_M: f64 = 1.0;
pub const DEFAULT_MAX_EDGE_LENGTH_M: f64 = 500.0;
pub const DEFAULT_MAX_SEGMENT_TURN_DEG: f64 = 15.0;
pub const DEFAULT_JOIN_MAX_DISTANCE_M: f64 = 10.0;
pub const DEFAULT_JOIN_ANGLE_TOLERANCE_DEG: f64 = 20.0;
pub const DEFAULT_JOIN_ANGLE_TOLERANCE_EXT_DEG: f64 = 80.0;
pub const DEFAULT_ANGLE_EXT_DISTANCE_M: f64 = 5.0;
pub const DEFAULT_TOUCHDOWN_FRACTION: f64 = 0.10;

// =============================================================================
// [snap]
// =============================================================================

pub const DEFAULT_SNAP_ANGLE_TOLERANCE_DEG: f64 = 30.0;
pub const DEFAULT_SNAP_ANGLE_TOLERANCE_EXT_DEG: f64 = 80.0;
pub const DEFAULT_SIMILAR_TS_INTERVAL_S: f64 = 3.0;
pub const DEFAULT_TAXI_SPEED_FACTOR: f64 = 1.5;

// =============================================================================
// [runway]
// =============================================================================

pub const DEFAULT_RWY_MAX_HEADING_DIFF_DEG: f64 = 15.0;
pub const DEFAULT_RWY_MAX_VSI_FACTOR: f64 = 1.5;
pub const DEFAULT_APPROACH_SPEED_FACTOR: f64 = 0.8;

// =============================================================================
// Default impls
// =============================================================================

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            std_distance_m: DEFAULT_STD_DISTANCE_M,
            snap_distance_m: DEFAULT_SNAP_DISTANCE_M,
        }
    }
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            max_combine_distance_m: DEFAULT_MAX_COMBINE_DISTANCE_M,
            max_edge_length_m: DEFAULT_MAX_EDGE_LENGTH_M,
            max_segment_turn_deg: DEFAULT_MAX_SEGMENT_TURN_DEG,
            join_max_distance_m: DEFAULT_JOIN_MAX_DISTANCE_M,
            join_angle_tolerance_deg: DEFAULT_JOIN_ANGLE_TOLERANCE_DEG,
            join_angle_tolerance_ext_deg: DEFAULT_JOIN_ANGLE_TOLERANCE_EXT_DEG,
            angle_ext_distance_m: DEFAULT_ANGLE_EXT_DISTANCE_M,
            touchdown_fraction: DEFAULT_TOUCHDOWN_FRACTION,
        }
    }
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self {
            angle_tolerance_deg: DEFAULT_SNAP_ANGLE_TOLERANCE_DEG,
            angle_tolerance_ext_deg: DEFAULT_SNAP_ANGLE_TOLERANCE_EXT_DEG,
            similar_ts_interval_s: DEFAULT_SIMILAR_TS_INTERVAL_S,
            taxi_speed_factor: DEFAULT_TAXI_SPEED_FACTOR,
        }
    }
}

impl Default for RunwaySettings {
    fn default() -> Self {
        Self {
            max_heading_diff_deg: DEFAULT_RWY_MAX_HEADING_DIFF_DEG,
            max_vsi_factor: DEFAULT_RWY_MAX_VSI_FACTOR,
            approach_speed_factor: DEFAULT_APPROACH_SPEED_FACTOR,
        }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        let config_dir = super::file::config_directory();

        Self {
            search: SearchSettings::default(),
            network: NetworkSettings::default(),
            snap: SnapSettings::default(),
            runway: RunwaySettings::default(),
            xplane: XPlaneSettings { root: None },
            logging: LoggingSettings {
                file: config_dir.join("logs").join("taxinet.log"),
            },
            debug: DebugSettings {
                log_snapping: false,
                dump_directory: None,
            },
        }
    }
}
