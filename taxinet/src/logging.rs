//! Logging infrastructure for taxinet.
//!
//! Structured logging through `tracing` with two outputs:
//! - the configured log file (cleared on session start)
//! - stdout, for following along in a terminal
//!
//! The level defaults to the one passed in and can be overridden with the
//! `RUST_LOG` environment variable, e.g. `RUST_LOG=taxinet=debug`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard will flush and close the log file writer.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize logging.
///
/// # Arguments
///
/// * `log_file` - Full path of the log file; its directory is created
/// * `default_level` - Filter used when `RUST_LOG` is not set, e.g. "info"
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or the log file
/// cannot be cleared.
pub fn init_logging(log_file: &Path, default_level: &str) -> Result<LoggingGuard, io::Error> {
    let (dir, name) = prepare_log_file(log_file)?;

    let file_appender = tracing_appender::rolling::never(dir, name);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_target(true);

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout)
        .with_ansi(true)
        .with_target(false)
        .compact();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Create the log directory and truncate the log file.
///
/// # Returns
///
/// The directory and the file name.
fn prepare_log_file(log_file: &Path) -> io::Result<(PathBuf, PathBuf)> {
    let name = log_file
        .file_name()
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "log path has no file name"))?;
    let dir = log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    fs::create_dir_all(&dir)?;
    fs::write(log_file, "")?;
    Ok((dir, name))
}

/// Get default log file name.
pub fn default_log_file() -> &'static str {
    "taxinet.log"
}
