//! Common arguments shared across CLI commands.

use std::path::PathBuf;

use clap::Args;

/// Where and around which position to load airports.
#[derive(Debug, Clone, Args)]
pub struct AirportSource {
    /// Latitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,

    /// apt.dat file to read instead of the X-Plane scenery (repeatable, highest priority first)
    #[arg(long = "apt-dat", value_name = "FILE")]
    pub apt_dat: Vec<PathBuf>,

    /// X-Plane installation directory (overrides config and auto-detection)
    #[arg(long, value_name = "DIR")]
    pub xplane: Option<PathBuf>,

    /// Ground elevation in meters assumed for all airports
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub elevation_m: f64,
}
