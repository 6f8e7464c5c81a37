//! Bearing index and nearest-edge search.
//!
//! Every edge bearing lies in [0, 180), so a permutation of edge indices
//! sorted by bearing answers "which edges run roughly along heading h" with a
//! binary search plus a short linear scan.

use tracing::trace;

use super::airport::Airport;
use super::edge::EdgeKind;
use super::{EdgeIdx, NodeIdx};
use crate::geometry::{
    axial_heading, from_local, heading_diff, normalize_heading, to_local, SegmentDistance,
};

/// Result of a nearest-edge search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestEdge {
    /// Index of the winning edge
    pub edge: EdgeIdx,
    /// Latitude of the foot of the perpendicular on that edge
    pub lat: f64,
    /// Longitude of the foot of the perpendicular on that edge
    pub lon: f64,
}

impl Airport {
    /// (Re)build the bearing-sorted edge permutation.
    ///
    /// Must run after the last edge was added and before any search.
    pub fn sort_edges_by_bearing(&mut self) {
        if self.by_bearing.len() != self.edges.len() {
            self.by_bearing = (0..self.edges.len()).collect();
        }
        let edges = &self.edges;
        self.by_bearing
            .sort_by(|&a, &b| edges[a].bearing().total_cmp(&edges[b].bearing()));
    }

    /// Edges whose bearing lies within `tolerance` of `heading`.
    ///
    /// The heading is folded onto [0, 180) like the edges; a window crossing
    /// 0° or 180° is searched as two sub-windows. With `kind` set, only edges
    /// of that kind are returned. An empty result means nothing matched.
    pub fn find_edges_for_heading(
        &self,
        heading: f64,
        tolerance: f64,
        kind: Option<EdgeKind>,
    ) -> Vec<EdgeIdx> {
        let head = axial_heading(heading);
        let begin = head - tolerance;
        let end = head + tolerance;

        let windows: [(f64, f64); 2] = if tolerance >= 90.0 {
            [(0.0, 180.0), (1.0, 0.0)]
        } else if begin < 0.0 {
            [(0.0, end), (begin + 180.0, 180.0)]
        } else if end >= 180.0 {
            [(0.0, end - 180.0), (begin, 180.0)]
        } else {
            [(begin, end), (1.0, 0.0)]
        };

        let mut found = Vec::new();
        for (lo, hi) in windows.into_iter().filter(|(lo, hi)| lo <= hi) {
            let first = self
                .by_bearing
                .partition_point(|&e| self.edges[e].bearing() < lo);
            found.extend(
                self.by_bearing[first..]
                    .iter()
                    .copied()
                    .take_while(|&e| self.edges[e].bearing() <= hi)
                    .filter(|&e| kind.map_or(true, |k| self.edges[e].kind() == k)),
            );
        }
        found
    }

    /// Find the edge closest to a position moving along `heading`.
    ///
    /// Candidates come from [`Self::find_edges_for_heading`] with the wider
    /// of both tolerances. Edges only within `tolerance_ext` need to be
    /// closer by about the configured extension distance to beat an edge
    /// within `tolerance`. Edges farther than `max_dist_m`, or whose foot of
    /// the perpendicular lies farther than that beyond the segment, never win.
    pub fn find_closest_edge(
        &self,
        pos: (f64, f64),
        heading: f64,
        max_dist_m: f64,
        tolerance: f64,
        tolerance_ext: f64,
        skip: Option<EdgeIdx>,
    ) -> Option<ClosestEdge> {
        let max_dist2 = max_dist_m * max_dist_m;
        let ext = self.tuning.angle_ext_distance_m;
        let secondary_penalty = 3.0 * ext + ext * ext;
        let head = normalize_heading(heading);

        let mut best: Option<(EdgeIdx, f64, (f64, f64))> = None;
        for edge_idx in self.find_edges_for_heading(head, tolerance.max(tolerance_ext), None) {
            if Some(edge_idx) == skip {
                continue;
            }
            let edge = &self.edges[edge_idx];
            let (Some(from), Some(to)) = (
                self.endpoint(edge.kind(), edge.start_by_heading(head)),
                self.endpoint(edge.kind(), edge.end_by_heading(head)),
            ) else {
                continue;
            };

            let dist = SegmentDistance::compute(
                (0.0, 0.0),
                to_local(pos, from.lat_lon()),
                to_local(pos, to.lat_lon()),
            );
            if dist.dist2 > max_dist2 {
                continue;
            }

            let mut prio = dist.dist2;
            if heading_diff(edge.bearing_by_heading(head), head).abs() > tolerance {
                prio += secondary_penalty;
            }
            if best.is_some_and(|(_, best_prio, _)| prio >= best_prio) {
                continue;
            }
            if dist.beyond_sqr() > max_dist2 {
                continue;
            }
            best = Some((edge_idx, prio, dist.base));
        }

        best.map(|(edge, _, base)| {
            let (lat, lon) = from_local(pos, base);
            ClosestEdge { edge, lat, lon }
        })
    }

    /// Connect dead-end taxi nodes to nearby edges.
    ///
    /// For every node with exactly one taxi edge, look ahead along that edge
    /// for another edge within the join distance. A runway match registers
    /// the node with the runway end it faces; a taxiway match moves the node
    /// onto the found edge and splits that edge there.
    pub fn join_open_ends(&mut self) {
        let max_dist = self.tuning.join_max_distance_m;
        let tolerance = self.tuning.join_angle_tolerance_deg;
        let tolerance_ext = self.tuning.join_angle_tolerance_ext_deg;

        for node_idx in 0..self.nodes.len() {
            let node = &self.nodes[node_idx];
            if node.edges().len() != 1 || !node.has_geo_coords() {
                continue;
            }
            let edge_idx = node.edges()[0];
            let edge = &self.edges[edge_idx];
            if edge.is_runway() {
                continue;
            }
            let taxi_bearing = edge.bearing_from(node_idx);
            let search_heading = edge.bearing();
            let pos = node.lat_lon();

            let Some(found) = self.find_closest_edge(
                pos,
                search_heading,
                max_dist,
                tolerance,
                tolerance_ext,
                Some(edge_idx),
            ) else {
                continue;
            };

            let join = &self.edges[found.edge];
            if join.is_runway() {
                let end: NodeIdx = join.start_by_heading(taxi_bearing);
                trace!(airport = %self.id(), node = node_idx, runway_end = end, "Joined open end to runway");
                self.runway_ends[end].attach_taxi_node(node_idx);
            } else {
                trace!(airport = %self.id(), node = node_idx, edge = found.edge, "Joined open end to taxiway");
                let node = &mut self.nodes[node_idx];
                node.lat = found.lat;
                node.lon = found.lon;
                self.recalc_edge(edge_idx);
                self.split_edge(found.edge, node_idx);
                self.sort_edges_by_bearing();
            }
        }
    }
}
