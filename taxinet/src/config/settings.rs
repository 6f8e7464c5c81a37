//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;

/// Complete configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Search radii
    pub search: SearchSettings,
    /// Network construction thresholds
    pub network: NetworkSettings,
    /// Snapping thresholds
    pub snap: SnapSettings,
    /// Runway selection thresholds
    pub runway: RunwaySettings,
    /// X-Plane installation
    pub xplane: XPlaneSettings,
    /// Logging settings
    pub logging: LoggingSettings,
    /// Diagnostics
    pub debug: DebugSettings,
}

/// Search radii around the observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchSettings {
    /// Standard search distance in meters.
    ///
    /// Airports are read within twice this radius, and a new scan starts
    /// once the observer moved farther than this since the last one.
    pub std_distance_m: f64,
    /// Maximum distance for snapping positions onto the network (0 disables)
    pub snap_distance_m: f64,
}

/// Thresholds applied while building an airport's network.
///
/// These are empirically tuned; the defaults are what the facility data of
/// real airports needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkSettings {
    /// Nodes closer than this are merged
    pub max_combine_distance_m: f64,
    /// Centerline vertices are coalesced into edges up to this length
    pub max_edge_length_m: f64,
    /// Centerline vertices are coalesced while turning less than this
    pub max_segment_turn_deg: f64,
    /// Open ends join edges at most this far away
    pub join_max_distance_m: f64,
    /// Preferred angle between an open end and the edge it joins
    pub join_angle_tolerance_deg: f64,
    /// Maximum angle between an open end and the edge it joins
    pub join_angle_tolerance_ext_deg: f64,
    /// How much closer an edge outside the preferred angle must be to win
    pub angle_ext_distance_m: f64,
    /// Fraction of runway length between threshold and touch-down point
    pub touchdown_fraction: f64,
}

/// Thresholds for snapping track positions onto the network.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapSettings {
    /// Preferred angle between heading and edge
    pub angle_tolerance_deg: f64,
    /// Maximum angle between heading and edge
    pub angle_tolerance_ext_deg: f64,
    /// Minimum time between a runway position and the first taxi position
    pub similar_ts_interval_s: f64,
    /// Factor on the modelled taxi speed bounding the path search
    pub taxi_speed_factor: f64,
}

/// Thresholds for picking a landing runway.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunwaySettings {
    /// Maximum difference between aircraft heading and bearing to the runway
    pub max_heading_diff_deg: f64,
    /// Factor widening the modelled final approach sink rate into a band
    pub max_vsi_factor: f64,
    /// Share of the flaps-down speed used as approach speed cap
    pub approach_speed_factor: f64,
}

/// X-Plane installation settings.
#[derive(Debug, Clone, PartialEq)]
pub struct XPlaneSettings {
    /// X-Plane root directory (None = auto-detect)
    pub root: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}

/// Diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct DebugSettings {
    /// Log every snapping decision at debug level
    pub log_snapping: bool,
    /// Write each merged airport as CSV into this directory
    pub dump_directory: Option<PathBuf>,
}
