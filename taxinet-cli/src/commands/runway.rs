//! `taxinet runway` - select the runway an approaching aircraft lands on.

use clap::Args;
use taxinet::position::GroundPosition;
use taxinet::track::{FlightModel, MS_PER_KT};

use crate::commands::common::AirportSource;
use crate::error::CliError;
use crate::runner::CliRunner;

const M_PER_FT: f64 = 0.3048;

/// Arguments for the runway command.
#[derive(Debug, Args)]
pub struct RunwayArgs {
    #[command(flatten)]
    pub source: AirportSource,

    /// True heading of the aircraft in degrees
    #[arg(long)]
    pub heading: f64,

    /// Altitude above mean sea level in feet
    #[arg(long)]
    pub alt_ft: f64,

    /// Ground speed in knots
    #[arg(long, default_value = "140")]
    pub speed_kn: f64,

    /// Final approach vertical speed of the aircraft in feet per minute
    #[arg(long, default_value = "-800", allow_hyphen_values = true)]
    pub vsi_final_fpm: f64,
}

pub fn run(args: RunwayArgs, debug: bool) -> Result<(), CliError> {
    let runner = CliRunner::with_debug(debug)?;
    runner.log_startup("runway");
    let ctrl = runner.load_airports(&args.source)?;

    let from = GroundPosition::new(args.source.lat, args.source.lon, 0.0)
        .with_heading(args.heading)
        .with_alt_m(args.alt_ft * M_PER_FT);
    let model = FlightModel {
        vsi_final_fpm: args.vsi_final_fpm,
        ..FlightModel::default()
    };

    match ctrl.store().find_runway(
        &from,
        args.speed_kn * MS_PER_KT,
        &model,
        &runner.config().runway,
    ) {
        Some(target) => {
            println!("Runway {}/{}", target.airport_id, target.runway_id);
            println!("  touch-down at {}", target.position);
            println!("  in {:.0}s", target.position.ts - from.ts);
        }
        None => println!("No runway matches heading {:.0}° and descent", args.heading),
    }
    Ok(())
}
