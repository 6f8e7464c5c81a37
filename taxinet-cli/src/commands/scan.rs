//! `taxinet scan` - list airports around a position.

use clap::Args;

use crate::commands::common::AirportSource;
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the scan command.
#[derive(Debug, Args)]
pub struct ScanArgs {
    #[command(flatten)]
    pub source: AirportSource,
}

pub fn run(args: ScanArgs, debug: bool) -> Result<(), CliError> {
    let runner = CliRunner::with_debug(debug)?;
    runner.log_startup("scan");
    let ctrl = runner.load_airports(&args.source)?;
    let store = ctrl.store();

    println!(
        "{} airports around ({:.5}, {:.5})",
        store.len(),
        args.source.lat,
        args.source.lon
    );
    println!();
    println!("{:<8} {:>6} {:>6}  Runways", "Airport", "Nodes", "Edges");
    for id in store.ids() {
        if let Some(line) = store.with_airport(&id, |apt| {
            format!(
                "{:<8} {:>6} {:>6}  {}",
                apt.id(),
                apt.nodes().len(),
                apt.edges().len() - apt.runway_count(),
                apt.runways_summary()
            )
        }) {
            println!("{}", line);
        }
    }
    Ok(())
}
