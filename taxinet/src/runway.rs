//! Runway selection for approaching aircraft.
//!
//! Among all runways roughly aligned with the aircraft's heading, the one
//! requiring the least turn wins, provided the descent towards its
//! touch-down point fits the aircraft's modelled sink rate.

use tracing::debug;

use crate::config::RunwaySettings;
use crate::geometry::{bearing_deg, distance_m, heading_diff, normalize_heading};
use crate::graph::EdgeKind;
use crate::position::{FlightPhase, GroundPosition};
use crate::store::AirportStore;
use crate::track::{FlightModel, MS_PER_FTM, MS_PER_KT};

/// A selected touch-down point.
#[derive(Debug, Clone, PartialEq)]
pub struct RunwayTarget {
    /// Airport identifier
    pub airport_id: String,
    /// Identifier of the runway end touched down at, e.g. "09"
    pub runway_id: String,
    /// Touch-down position with runway heading, flare pitch and estimated
    /// arrival time
    pub position: GroundPosition,
}

struct Candidate<'a> {
    airport_id: &'a str,
    runway_id: &'a str,
    lat: f64,
    lon: f64,
    alt_m: f64,
    heading: f64,
    heading_diff: f64,
    arrival_ts: f64,
}

impl AirportStore {
    /// Find the best runway for an aircraft at `from` to land on.
    ///
    /// `from` needs a heading and an altitude; `speed_m_s` is the current
    /// ground speed, capped at the model's approach speed.
    ///
    /// # Returns
    ///
    /// `None` if no runway across all airports is aligned within the
    /// configured heading difference while yielding a vertical speed within
    /// the model's band.
    pub fn find_runway(
        &self,
        from: &GroundPosition,
        speed_m_s: f64,
        model: &FlightModel,
        settings: &RunwaySettings,
    ) -> Option<RunwayTarget> {
        let (Some(heading), Some(from_alt)) = (from.heading, from.alt_m) else {
            return None;
        };

        let vsi_min = model.vsi_final_fpm * settings.max_vsi_factor * MS_PER_FTM;
        let vsi_max = model.vsi_final_fpm / settings.max_vsi_factor * MS_PER_FTM;
        let speed = speed_m_s
            .min(model.flaps_down_speed_kn * settings.approach_speed_factor * MS_PER_KT);
        if speed <= 0.0 {
            return None;
        }

        let mut head_search = normalize_heading(heading);
        let inverted = head_search >= 180.0;
        if inverted {
            head_search -= 180.0;
        }

        let airports = self.lock();
        let mut best: Option<Candidate<'_>> = None;
        let mut best_diff = settings.max_heading_diff_deg;

        for apt in airports.values() {
            let runways = apt.find_edges_for_heading(
                head_search,
                settings.max_heading_diff_deg,
                Some(EdgeKind::Runway),
            );
            for edge_idx in runways {
                let edge = &apt.edges()[edge_idx];
                let end_idx = if inverted { edge.b() } else { edge.a() };
                let Some(rwy_end) = apt.endpoint(EdgeKind::Runway, end_idx) else {
                    continue;
                };
                let Some(alt_m) = rwy_end.alt_m() else {
                    continue;
                };

                let target = rwy_end.lat_lon();
                let diff = heading_diff(heading, bearing_deg(from.lat_lon(), target)).abs();
                if diff > best_diff {
                    continue;
                }

                let flight_time = distance_m(from.lat_lon(), target) / speed;
                let vsi = (alt_m - from_alt) / flight_time;
                if !(vsi_min..=vsi_max).contains(&vsi) {
                    continue;
                }

                best_diff = diff;
                best = Some(Candidate {
                    airport_id: apt.id(),
                    runway_id: rwy_end.runway_id().unwrap_or_default(),
                    lat: target.0,
                    lon: target.1,
                    alt_m,
                    heading: edge.bearing() + if inverted { 180.0 } else { 0.0 },
                    heading_diff: diff,
                    arrival_ts: from.ts + flight_time,
                });
            }
        }

        let Some(best) = best else {
            debug!("Didn't find runway for {} with heading {:.0}°", from, heading);
            return None;
        };

        let mut position = GroundPosition::new(best.lat, best.lon, best.arrival_ts)
            .with_heading(best.heading)
            .with_alt_m(best.alt_m);
        position.pitch = model.pitch_flare_deg;
        position.on_ground = true;
        position.phase = FlightPhase::TouchDown;

        debug!(
            heading_diff = best.heading_diff,
            "Found runway {}/{} at {} for {}", best.airport_id, best.runway_id, position, from
        );
        Some(RunwayTarget {
            airport_id: best.airport_id.to_string(),
            runway_id: best.runway_id.to_string(),
            position,
        })
    }
}
