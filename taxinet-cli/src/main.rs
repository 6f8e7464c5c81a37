//! taxinet CLI - Command-line interface
//!
//! Inspect the airport ground networks taxinet builds from X-Plane's apt.dat
//! files: list airports, dump their graphs, try out snapping and runway
//! selection.

mod commands;
mod error;
mod runner;

use clap::{Parser, Subcommand};

use commands::config::ConfigCommands;
use commands::dump::DumpArgs;
use commands::runway::RunwayArgs;
use commands::scan::ScanArgs;
use commands::snap::SnapArgs;

#[derive(Parser)]
#[command(name = "taxinet")]
#[command(version = taxinet::VERSION)]
#[command(about = "Airport ground networks from X-Plane apt.dat files", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List airports around a position
    Scan(ScanArgs),

    /// Write one airport's ground network as CSV
    Dump(DumpArgs),

    /// Snap a position onto the taxi network
    Snap(SnapArgs),

    /// Select the runway for an approaching aircraft
    Runway(RunwayArgs),

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Scan(args) => commands::scan::run(args, cli.debug),
        Commands::Dump(args) => commands::dump::run(args, cli.debug),
        Commands::Snap(args) => commands::snap::run(args, cli.debug),
        Commands::Runway(args) => commands::runway::run(args, cli.debug),
        Commands::Config(command) => commands::config::run(command),
    };

    if let Err(e) = result {
        e.exit();
    }
}
