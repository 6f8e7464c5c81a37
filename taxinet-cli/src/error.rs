//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;
use taxinet::config::ConfigFileError;
use taxinet::refresh::RefreshError;
use taxinet::xplane::XPlanePathError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// X-Plane installation could not be located
    XPlane(XPlanePathError),
    /// Background scan could not be started
    Refresh(RefreshError),
    /// No apt.dat file could be read
    NoAptDat,
    /// The requested airport is not loaded
    AirportNotFound(String),
    /// Failed to write output file
    FileWrite { path: String, error: std::io::Error },
    /// Failed to encode the airport dump
    Dump(csv::Error),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::XPlane(_) | CliError::NoAptDat => {
                eprintln!();
                eprintln!("Point taxinet at your airport data with one of:");
                eprintln!("  1. --apt-dat <FILE> (repeatable, highest priority first)");
                eprintln!("  2. --xplane <DIR> or 'root' in the [xplane] section of config.ini");
            }
            CliError::AirportNotFound(_) => {
                eprintln!();
                eprintln!("Airports are only loaded around --lat/--lon.");
                eprintln!("Use 'taxinet scan' to list the airports found there.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::XPlane(e) => write!(f, "X-Plane not found: {}", e),
            CliError::Refresh(e) => write!(f, "Failed to scan airports: {}", e),
            CliError::NoAptDat => write!(f, "{}", taxinet::refresh::NO_APT_DAT_WARNING),
            CliError::AirportNotFound(id) => write!(f, "Airport '{}' not loaded", id),
            CliError::FileWrite { path, error } => {
                write!(f, "Failed to write file '{}': {}", path, error)
            }
            CliError::Dump(e) => write!(f, "Failed to dump airport: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::XPlane(e) => Some(e),
            CliError::Refresh(e) => Some(e),
            CliError::FileWrite { error, .. } => Some(error),
            CliError::Dump(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<XPlanePathError> for CliError {
    fn from(e: XPlanePathError) -> Self {
        CliError::XPlane(e)
    }
}

impl From<RefreshError> for CliError {
    fn from(e: RefreshError) -> Self {
        CliError::Refresh(e)
    }
}

impl From<csv::Error> for CliError {
    fn from(e: csv::Error) -> Self {
        CliError::Dump(e)
    }
}
