//! Snapping track positions onto the taxi network.
//!
//! A snapped position is moved onto the closest suitable edge. When the
//! previous position sits on a different taxiway, the taxi route between
//! both is looked up and its nodes are inserted into the track so the
//! aircraft follows the taxiways instead of cutting across the grass.

use tracing::debug;

use crate::config::SnapSettings;
use crate::geometry::distance_m;
use crate::graph::{Airport, PathNode};
use crate::position::{EdgeLink, FlightPhase, GroundPosition};
use crate::store::AirportStore;
use crate::track::FlightTrack;

/// Parameters of one snapping run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapContext {
    /// Maximum distance between a position and the edge it snaps to
    pub snap_distance_m: f64,
    /// Angle tolerances and timing
    pub settings: SnapSettings,
    /// Log each decision at debug level
    pub log_snapping: bool,
}

impl SnapContext {
    pub fn new(snap_distance_m: f64, settings: SnapSettings) -> Self {
        Self {
            snap_distance_m,
            settings,
            log_snapping: false,
        }
    }
}

impl Airport {
    /// Snap the track position at `cursor` onto this airport's network.
    ///
    /// On success the position moves onto the closest edge; on a taxiway it
    /// is tagged [`FlightPhase::Taxi`]. If the previous position (or the
    /// track's current target when `cursor` is 0) was snapped to another
    /// edge, the nodes of the shortest taxi path in between are inserted
    /// before the position and `cursor` advances so it still refers to the
    /// same position.
    ///
    /// # Returns
    ///
    /// `false` if no edge is close enough; the position is then marked
    /// [`EdgeLink::Unavailable`].
    pub fn snap_to_taxiway(
        &self,
        ctx: &SnapContext,
        track: &mut FlightTrack,
        cursor: &mut usize,
    ) -> bool {
        let Some(pos) = track.get(*cursor) else {
            return false;
        };
        let found = pos.heading.and_then(|heading| {
            self.find_closest_edge(
                pos.lat_lon(),
                heading,
                ctx.snap_distance_m,
                ctx.settings.angle_tolerance_deg,
                ctx.settings.angle_tolerance_ext_deg,
                None,
            )
        });
        let heading = pos.heading.unwrap_or_default();

        let Some(found) = found else {
            if let Some(pos) = track.get_mut(*cursor) {
                pos.edge = EdgeLink::Unavailable;
            }
            return false;
        };
        let edge = &self.edges()[found.edge];

        if ctx.log_snapping {
            debug!(
                aircraft = %track.label,
                airport = %self.id(),
                edge = found.edge,
                kind = %edge.kind(),
                "Snapped {} to ({:.6}, {:.6})",
                pos,
                found.lat,
                found.lon
            );
        }

        let Some(pos) = track.get_mut(*cursor) else {
            return false;
        };
        pos.lat = found.lat;
        pos.lon = found.lon;
        pos.edge = EdgeLink::Edge(found.edge);
        if edge.is_runway() {
            // A runway is no destination for a taxi route
            return true;
        }
        pos.phase = FlightPhase::Taxi;
        let pos = pos.clone();

        let prev = if *cursor == 0 {
            track.current_target.clone()
        } else {
            track.get(*cursor - 1).cloned()
        };
        let Some(prev) = prev else {
            return true;
        };
        let Some(prev_edge) = prev.edge.edge().and_then(|e| self.edge(e)) else {
            return true;
        };
        if prev.edge == pos.edge {
            return true;
        }

        let prev_heading = prev.heading.unwrap_or(heading);
        let prev_is_runway = prev_edge.is_runway();
        let prev_node = if prev_is_runway {
            prev_edge.start_by_heading(prev_heading)
        } else {
            prev_edge.end_by_heading(prev_heading)
        };
        let curr_start = edge.start_by_heading(heading);

        let elapsed = pos.ts - prev.ts;
        if elapsed <= 0.0 {
            return true;
        }
        let max_len = elapsed * track.model.taxi_speed_m_s * ctx.settings.taxi_speed_factor;
        let path = self.shortest_path(prev_node, prev_is_runway, curr_start, max_len);
        if path.len() < 2 {
            return true;
        }

        let Some(start_ts) = self.path_start_ts(ctx, track, &path, &prev, &pos, prev_is_runway)
        else {
            return true;
        };
        let path_len = self.path_len_to(&path, &pos);
        let path_time = pos.ts - start_ts;

        if ctx.log_snapping {
            debug!(
                aircraft = %track.label,
                airport = %self.id(),
                nodes = path.len(),
                "Inserting taxi path of {:.0}m from {:.1}s to {:.1}s",
                path_len,
                start_ts,
                pos.ts
            );
        }

        for step in path.iter().rev() {
            let node = &self.nodes()[step.node];
            let mut synth = GroundPosition::new(
                node.lat,
                node.lon,
                start_ts + path_time * step.path_len_m / path_len,
            );
            synth.on_ground = true;
            synth.phase = FlightPhase::Taxi;
            synth.edge = EdgeLink::Unavailable;
            track.insert(*cursor, synth);
            *cursor += 1;
        }
        true
    }

    /// Full length from the path start to the snapped position.
    fn path_len_to(&self, path: &[PathNode], pos: &GroundPosition) -> f64 {
        let front = &path[0];
        front.path_len_m + distance_m(self.nodes()[front.node].lat_lon(), pos.lat_lon())
    }

    /// Timestamp at which the aircraft enters the path.
    ///
    /// Leaving a runway, the aircraft is assumed to taxi at modelled speed
    /// and enters the path just in time, but not sooner than the minimum
    /// interval after the runway position. Otherwise the speed is constant
    /// from the previous position through the path to the new one.
    fn path_start_ts(
        &self,
        ctx: &SnapContext,
        track: &FlightTrack,
        path: &[PathNode],
        prev: &GroundPosition,
        pos: &GroundPosition,
        prev_is_runway: bool,
    ) -> Option<f64> {
        let path_len = self.path_len_to(path, pos);
        if path_len <= 0.0 {
            return None;
        }

        let start_ts = if prev_is_runway {
            let taxi_time = path_len / track.model.taxi_speed_m_s;
            (pos.ts - taxi_time).max(prev.ts + ctx.settings.similar_ts_interval_s)
        } else {
            let entry = path.last()?;
            let to_entry = distance_m(prev.lat_lon(), self.nodes()[entry.node].lat_lon());
            let speed = (to_entry + path_len) / (pos.ts - prev.ts);
            prev.ts + to_entry / speed
        };

        (start_ts < pos.ts).then_some(start_ts)
    }
}

impl AirportStore {
    /// Snap the track position at `cursor` onto the airport it lies in.
    ///
    /// Holds the collection lock for the duration of the snap.
    ///
    /// # Returns
    ///
    /// `false` if snapping is disabled (non-positive snap distance), the
    /// position lies in no airport, or no edge is close enough.
    pub fn snap(&self, ctx: &SnapContext, track: &mut FlightTrack, cursor: &mut usize) -> bool {
        if ctx.snap_distance_m <= 0.0 {
            return false;
        }
        let Some(pos) = track.get(*cursor).map(GroundPosition::lat_lon) else {
            return false;
        };

        let airports = self.lock();
        match airports.values().find(|apt| apt.bounds().contains(pos)) {
            Some(apt) => apt.snap_to_taxiway(ctx, track, cursor),
            None => false,
        }
    }
}
