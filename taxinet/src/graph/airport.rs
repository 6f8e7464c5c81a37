//! The `Airport` aggregate and the operations that build it.

use tracing::debug;

use super::edge::{Edge, EdgeKind};
use super::node::Node;
use super::{EdgeIdx, NodeIdx};
use crate::config::NetworkSettings;
use crate::geometry::{bearing_deg, distance_m, project, BoundingBox, EARTH_RADIUS_M};
use crate::terrain::{ProbeError, TerrainProbe};

/// One end of a runway as declared in the facility data.
#[derive(Debug, Clone, PartialEq)]
pub struct RunwayThreshold {
    /// Runway designator, e.g. "09" or "27L"
    pub id: String,
    /// Threshold latitude in degrees
    pub lat: f64,
    /// Threshold longitude in degrees
    pub lon: f64,
    /// Displaced threshold length in meters
    pub displaced_m: f64,
}

impl RunwayThreshold {
    pub fn new(id: impl Into<String>, lat: f64, lon: f64, displaced_m: f64) -> Self {
        Self {
            id: id.into(),
            lat,
            lon,
            displaced_m,
        }
    }
}

/// Ground network of one airport.
///
/// Nodes and edges refer to each other by index only; indices stay stable
/// for the lifetime of the airport while the vectors grow.
#[derive(Debug, Clone)]
pub struct Airport {
    id: String,
    bounds: BoundingBox,
    alt_m: Option<f64>,
    pub(crate) nodes: Vec<Node>,
    pub(crate) runway_ends: Vec<Node>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) by_bearing: Vec<EdgeIdx>,
    pub(crate) tuning: NetworkSettings,
}

impl Airport {
    /// Create an empty airport using the default network tuning.
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_tuning(id, NetworkSettings::default())
    }

    /// Create an empty airport with explicit network tuning.
    pub fn with_tuning(id: impl Into<String>, tuning: NetworkSettings) -> Self {
        Self {
            id: id.into(),
            bounds: BoundingBox::empty(),
            alt_m: None,
            nodes: Vec::new(),
            runway_ends: Vec::new(),
            edges: Vec::new(),
            by_bearing: Vec::new(),
            tuning,
        }
    }

    // ==================== accessors ====================

    /// Airport identifier, typically the ICAO code.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    /// Airport altitude at the center of the bounding box, if computed.
    pub fn alt_m(&self) -> Option<f64> {
        self.alt_m
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn runway_ends(&self) -> &[Node] {
        &self.runway_ends
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, idx: EdgeIdx) -> Option<&Edge> {
        self.edges.get(idx)
    }

    pub fn node(&self, idx: NodeIdx) -> Option<&Node> {
        self.nodes.get(idx)
    }

    /// Resolve an endpoint index of an edge of the given kind.
    pub fn endpoint(&self, kind: EdgeKind, idx: NodeIdx) -> Option<&Node> {
        match kind {
            EdgeKind::Runway => self.runway_ends.get(idx),
            EdgeKind::Taxiway => self.nodes.get(idx),
        }
    }

    pub fn has_runway_ends(&self) -> bool {
        !self.runway_ends.is_empty()
    }

    pub fn has_edges(&self) -> bool {
        !self.edges.is_empty()
    }

    /// Number of runways (each contributes two runway ends).
    pub fn runway_count(&self) -> usize {
        self.runway_ends.len() / 2
    }

    /// An airport is valid with an id, at least one edge and one runway end.
    pub fn is_valid(&self) -> bool {
        !self.id.is_empty() && self.has_edges() && self.has_runway_ends()
    }

    /// Runway designators as "09/27 18/36".
    pub fn runways_summary(&self) -> String {
        self.edges
            .iter()
            .filter(|e| e.is_runway())
            .filter_map(|e| {
                let a = self.runway_ends.get(e.a())?.runway_id()?;
                let b = self.runway_ends.get(e.b())?.runway_id()?;
                Some(format!("{}/{}", a, b))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    // ==================== construction ====================

    /// Add a taxi node, reusing an existing one that is close enough.
    ///
    /// Nodes closer than the configured combine distance are considered the
    /// same node, except `exclude` which is never returned.
    ///
    /// # Returns
    ///
    /// Index of the matching or newly created node.
    pub fn add_node(&mut self, lat: f64, lon: f64, exclude: Option<NodeIdx>) -> NodeIdx {
        let max_dlat = (self.tuning.max_combine_distance_m / EARTH_RADIUS_M).to_degrees();
        let max_dlon = max_dlat / lat.to_radians().cos();

        let existing = self.nodes.iter().enumerate().position(|(idx, n)| {
            Some(idx) != exclude
                && (n.lat - lat).abs() <= max_dlat
                && (n.lon - lon).abs() <= max_dlon
        });
        if let Some(idx) = existing {
            return idx;
        }

        self.bounds.enlarge((lat, lon));
        self.nodes.push(Node::new(lat, lon));
        self.nodes.len() - 1
    }

    /// Place a taxi node at an explicit index.
    ///
    /// Slots in between stay unassigned (NaN coordinates) until filled.
    pub fn add_node_at(&mut self, lat: f64, lon: f64, idx: NodeIdx) {
        if idx >= self.nodes.len() {
            self.nodes.resize_with(idx + 1, Node::default);
        }
        self.bounds.enlarge((lat, lon));
        let node = &mut self.nodes[idx];
        node.lat = lat;
        node.lon = lon;
    }

    /// Connect two taxi nodes.
    ///
    /// Bearing is always computed; the length only when not supplied.
    ///
    /// # Returns
    ///
    /// The new edge's index, or `None` if either node is missing, lacks
    /// coordinates, or both are the same node.
    pub fn add_edge(&mut self, n1: NodeIdx, n2: NodeIdx, length_m: Option<f64>) -> Option<EdgeIdx> {
        let (p1, p2) = match (self.nodes.get(n1), self.nodes.get(n2)) {
            (Some(a), Some(b)) if a.has_geo_coords() && b.has_geo_coords() && n1 != n2 => {
                (a.lat_lon(), b.lat_lon())
            }
            _ => {
                debug!(
                    airport = %self.id,
                    n1,
                    n2,
                    "Rejected taxi edge: node missing or without coordinates"
                );
                return None;
            }
        };

        let bearing = bearing_deg(p1, p2);
        let length = length_m.unwrap_or_else(|| distance_m(p1, p2));
        let idx = self.edges.len();
        self.edges
            .push(Edge::new(EdgeKind::Taxiway, n1, n2, bearing, length));
        self.nodes[n1].edges.push(idx);
        self.nodes[n2].edges.push(idx);
        Some(idx)
    }

    /// Recompute bearing and length of a taxi edge from its nodes.
    pub fn recalc_edge(&mut self, edge_idx: EdgeIdx) {
        let Some(edge) = self.edges.get(edge_idx) else {
            return;
        };
        if edge.is_runway() {
            return;
        }
        let pa = self.nodes[edge.a()].lat_lon();
        let pb = self.nodes[edge.b()].lat_lon();
        self.edges[edge_idx].set_geometry(bearing_deg(pa, pb), distance_m(pa, pb));
    }

    /// Split a taxi edge at node `ins`.
    ///
    /// The existing edge is shortened to end at `ins` and a new edge joins
    /// `ins` to the original far end. Nothing happens when `ins` already is
    /// an endpoint or the edge is a runway.
    ///
    /// # Returns
    ///
    /// Index of the newly added edge.
    pub fn split_edge(&mut self, edge_idx: EdgeIdx, ins: NodeIdx) -> Option<EdgeIdx> {
        let edge = self.edges.get(edge_idx)?;
        if edge.is_runway() || edge.connects(ins) || !self.node(ins)?.has_geo_coords() {
            return None;
        }

        let a = edge.a();
        let orig_b = edge.b();
        let pa = self.nodes[a].lat_lon();
        let pins = self.nodes[ins].lat_lon();

        self.edges[edge_idx].set_end_node(ins, bearing_deg(pa, pins), distance_m(pa, pins));
        self.nodes[ins].edges.push(edge_idx);
        self.nodes[orig_b].edges.retain(|&e| e != edge_idx);

        self.add_edge(ins, orig_b, None)
    }

    /// Add a runway from its two declared thresholds.
    ///
    /// Each end moves inwards by its displaced threshold plus the touch-down
    /// fraction of the remaining length, and the stored length shrinks
    /// accordingly.
    pub fn add_runway(&mut self, end1: &RunwayThreshold, end2: &RunwayThreshold) -> EdgeIdx {
        let p1 = (end1.lat, end1.lon);
        let p2 = (end2.lat, end2.lon);
        let bearing = bearing_deg(p1, p2);
        let reverse = bearing_deg(p2, p1);
        let td = self.tuning.touchdown_fraction;

        let usable = distance_m(p1, p2) - end1.displaced_m - end2.displaced_m;
        let td1 = project(p1, bearing, end1.displaced_m + usable * td);
        let td2 = project(p2, reverse, end2.displaced_m + usable * td);
        let length = usable * (1.0 - 2.0 * td);

        self.bounds.enlarge(td1);
        self.bounds.enlarge(td2);

        let idx1 = self.runway_ends.len();
        let idx2 = idx1 + 1;
        self.runway_ends
            .push(Node::runway_end(end1.id.clone(), td1.0, td1.1));
        self.runway_ends
            .push(Node::runway_end(end2.id.clone(), td2.0, td2.1));

        let edge_idx = self.edges.len();
        self.edges.push(Edge::new(
            EdgeKind::Runway,
            idx1,
            idx2,
            bearing_deg(td1, td2),
            length,
        ));
        self.runway_ends[idx1].edges.push(edge_idx);
        self.runway_ends[idx2].edges.push(edge_idx);
        edge_idx
    }

    /// Complete an airport after parsing.
    ///
    /// Pads the bounding box by `pad_m`, builds the bearing index and joins
    /// open ends onto nearby edges.
    pub fn finalize(&mut self, pad_m: f64) {
        self.bounds.enlarge_m(pad_m);
        self.sort_edges_by_bearing();
        self.join_open_ends();

        debug!(
            "Added {} at {} with {} runways ({}) and [{}|{}] taxi nodes|edges",
            self.id,
            self.bounds,
            self.runway_count(),
            self.runways_summary(),
            self.nodes.len(),
            self.edges.len() - self.runway_count()
        );
    }

    // ==================== altitudes ====================

    /// Probe ground altitudes.
    ///
    /// The airport altitude is refreshed at the bounding-box center; runway
    /// ends are probed only while their altitude is still unknown. Points
    /// without terrain stay unknown.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Unavailable`] as soon as the probe itself fails.
    pub fn update_altitudes(&mut self, probe: &mut dyn TerrainProbe) -> Result<(), ProbeError> {
        if let Some(center) = self.bounds.center() {
            match probe.ground_altitude_m(center.0, center.1) {
                Ok(alt) => self.alt_m = Some(alt),
                Err(ProbeError::NoTerrain { .. }) => {}
                Err(e) => return Err(e),
            }
        }

        for end in self.runway_ends.iter_mut().filter(|e| e.alt_m().is_none()) {
            match probe.ground_altitude_m(end.lat, end.lon) {
                Ok(alt) => end.set_alt_m(alt),
                Err(ProbeError::NoTerrain { .. }) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}
