//! Configuration for the ground network.
//!
//! Settings are read from `~/.taxinet/config.ini`; every section maps to one
//! settings struct and every key has a default, so a missing file or section
//! simply yields the defaults.
//!
//! # Example
//!
//! ```
//! use taxinet::config::ConfigFile;
//!
//! let config = ConfigFile::default();
//! assert!(config.search.snap_distance_m > 0.0);
//! ```

mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::*;
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::*;
