//! taxinet - Airport ground networks for X-Plane traffic
//!
//! Reads runways and taxiways from X-Plane's `apt.dat` files into per-airport
//! graphs, then uses them to keep ground traffic on the taxiways and to pick
//! a runway for approaching aircraft.
//!
//! # Overview
//!
//! - [`refresh::RefreshController`] scans apt.dat files around the observer
//!   on a background thread and merges airports into an
//!   [`store::AirportStore`]
//! - [`graph::Airport`] holds one airport's network with nearest-edge search
//!   and bounded shortest paths
//! - [`snap`] moves track positions onto taxiways and inserts the taxi route
//!   in between
//! - [`runway`] selects the touch-down point for an approach
//!
//! ```ignore
//! use taxinet::config::ConfigFile;
//! use taxinet::refresh::RefreshController;
//! use taxinet::terrain::FlatTerrain;
//! use taxinet::xplane::XPlaneEnvironment;
//!
//! let config = ConfigFile::load()?;
//! let env = XPlaneEnvironment::resolve(config.xplane.root.as_deref())?;
//! let mut ctrl = RefreshController::new(&config, env.apt_dat_files(), Some(Box::new(FlatTerrain::new(0.0))));
//! ctrl.refresh(47.45, -122.31)?;
//! ```

pub mod config;
pub mod geometry;
pub mod graph;
pub mod logging;
pub mod parser;
pub mod position;
pub mod refresh;
pub mod runway;
pub mod snap;
pub mod store;
pub mod terrain;
pub mod track;
pub mod xplane;

/// Version of the taxinet library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
