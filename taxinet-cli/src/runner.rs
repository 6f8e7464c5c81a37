//! CLI runner for common setup and operations.
//!
//! Encapsulates logging initialization and airport loading so command
//! handlers only deal with their own output.

use std::path::PathBuf;

use tracing::info;
use taxinet::config::ConfigFile;
use taxinet::logging::{init_logging, LoggingGuard};
use taxinet::refresh::RefreshController;
use taxinet::terrain::FlatTerrain;
use taxinet::xplane::XPlaneEnvironment;

use crate::commands::common::AirportSource;
use crate::error::CliError;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
}

impl CliRunner {
    /// Load the config and initialize logging.
    ///
    /// # Arguments
    ///
    /// * `debug_mode` - When true, logs at debug level unless RUST_LOG says otherwise
    pub fn with_debug(debug_mode: bool) -> Result<Self, CliError> {
        let config = ConfigFile::load()?;

        let level = if debug_mode { "debug" } else { "warn" };
        let logging_guard = init_logging(&config.logging.file, level)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("taxinet v{}", taxinet::VERSION);
        info!("taxinet CLI: {} command", command);
    }

    /// apt.dat files to read, highest priority first.
    ///
    /// Explicit files win over the X-Plane installation.
    pub fn apt_dat_files(&self, source: &AirportSource) -> Result<Vec<PathBuf>, CliError> {
        if !source.apt_dat.is_empty() {
            return Ok(source.apt_dat.clone());
        }
        let root = source.xplane.as_deref().or(self.config.xplane.root.as_deref());
        let env = XPlaneEnvironment::resolve(root)?;
        info!(root = %env.installation_path().display(), "Using X-Plane installation");
        Ok(env.apt_dat_files())
    }

    /// Scan the airports around the source position and wait for the scan.
    ///
    /// Runway altitudes are set to the flat field elevation.
    pub fn load_airports(&self, source: &AirportSource) -> Result<RefreshController, CliError> {
        let files = self.apt_dat_files(source)?;
        let probe = Box::new(FlatTerrain::new(source.elevation_m));
        let mut ctrl = RefreshController::new(&self.config, files, Some(probe));

        ctrl.refresh(source.lat, source.lon)?;
        ctrl.wait();
        if ctrl.last_scan().is_some_and(|s| s.nothing_readable()) {
            return Err(CliError::NoAptDat);
        }
        ctrl.update_altitudes();
        Ok(ctrl)
    }
}
