//! `taxinet dump` - write one airport's ground network as CSV.
//!
//! The output loads directly into GPS Visualizer style map tools: one
//! waypoint per taxi node and one track per edge.

use std::fs::File;
use std::path::{Path, PathBuf};

use clap::Args;
use taxinet::store::AirportStore;

use crate::commands::common::AirportSource;
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the dump command.
#[derive(Debug, Args)]
pub struct DumpArgs {
    #[command(flatten)]
    pub source: AirportSource,

    /// Airport identifier, e.g. EDDM
    #[arg(long)]
    pub airport: String,

    /// Output file (default: <AIRPORT>.csv)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: DumpArgs, debug: bool) -> Result<(), CliError> {
    let runner = CliRunner::with_debug(debug)?;
    runner.log_startup("dump");
    let ctrl = runner.load_airports(&args.source)?;

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("{}.csv", args.airport)));
    write_dump(ctrl.store(), &args.airport, &output)?;

    println!("Wrote {} to {}", args.airport, output.display());
    Ok(())
}

/// Write `airport` as CSV to `output`.
///
/// Nothing is created for an unknown airport.
fn write_dump(store: &AirportStore, airport: &str, output: &Path) -> Result<(), CliError> {
    if !store.contains(airport) {
        return Err(CliError::AirportNotFound(airport.to_string()));
    }
    let file = File::create(output).map_err(|error| CliError::FileWrite {
        path: output.display().to_string(),
        error,
    })?;

    store
        .dump_csv(airport, file)
        .ok_or_else(|| CliError::AirportNotFound(airport.to_string()))??;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use taxinet::graph::{Airport, RunwayThreshold};

    fn store_with(id: &str) -> AirportStore {
        let mut apt = Airport::new(id);
        apt.add_runway(
            &RunwayThreshold::new("09", 0.0, 0.0, 0.0),
            &RunwayThreshold::new("27", 0.0, 0.01, 0.0),
        );
        apt.finalize(8.0);
        let store = AirportStore::new();
        store.insert(apt);
        store
    }

    #[test]
    fn test_unknown_airport_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("NONE.csv");

        let result = write_dump(&store_with("ZERO"), "NONE", &output);

        assert!(matches!(result, Err(CliError::AirportNotFound(id)) if id == "NONE"));
        assert!(!output.exists());
    }

    #[test]
    fn test_known_airport_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("ZERO.csv");

        write_dump(&store_with("ZERO"), "ZERO", &output).unwrap();

        let csv = std::fs::read_to_string(&output).unwrap();
        assert!(csv.starts_with("type,BOT,symbol"));
    }
}
