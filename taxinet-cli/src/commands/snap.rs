//! `taxinet snap` - snap one position onto the taxi network.

use clap::Args;
use taxinet::position::GroundPosition;
use taxinet::snap::SnapContext;
use taxinet::track::{FlightModel, FlightTrack};

use crate::commands::common::AirportSource;
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the snap command.
#[derive(Debug, Args)]
pub struct SnapArgs {
    #[command(flatten)]
    pub source: AirportSource,

    /// True heading of the aircraft in degrees
    #[arg(long)]
    pub heading: f64,

    /// Snap distance in meters (default: from config)
    #[arg(long)]
    pub distance_m: Option<f64>,
}

pub fn run(args: SnapArgs, debug: bool) -> Result<(), CliError> {
    let runner = CliRunner::with_debug(debug)?;
    runner.log_startup("snap");
    let ctrl = runner.load_airports(&args.source)?;

    let config = runner.config();
    let mut ctx = SnapContext::new(
        args.distance_m.unwrap_or(config.search.snap_distance_m),
        config.snap,
    );
    ctx.log_snapping = config.debug.log_snapping;

    let pos = GroundPosition::new(args.source.lat, args.source.lon, 0.0).with_heading(args.heading);
    let mut track = FlightTrack::new("CLI", FlightModel::default());
    track.push(pos.clone());
    let mut cursor = 0;

    if !ctrl.store().snap(&ctx, &mut track, &mut cursor) {
        println!("{} is not near any taxiway or runway", pos);
        return Ok(());
    }

    if let Some(snapped) = track.get(cursor) {
        let airport = ctrl.store().airport_at(pos.lat_lon()).unwrap_or_default();
        println!("Snapped {} onto {} edge {:?}", pos, airport, snapped.edge.edge());
        println!(
            "  now at ({:.6}, {:.6}), phase {}",
            snapped.lat, snapped.lon, snapped.phase
        );
    }
    Ok(())
}
