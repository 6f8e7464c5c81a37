//! Network nodes: plain taxi nodes and runway ends.

use super::{EdgeIdx, NodeIdx};

/// Coordinates closer than this (in degrees) denote the same place.
const SAME_POSITION_EPSILON: f64 = 1e-9;

/// What a node represents.
///
/// Runway ends live in their own vector of the airport; runway edges index
/// into that vector, taxiway edges into the plain node vector. The edge's
/// kind therefore always tells which variant to expect.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum NodeKind {
    /// A plain taxiway node.
    #[default]
    Taxi,
    /// One end of a runway.
    RunwayEnd {
        /// Runway designator, e.g. "23" or "05R"
        id: String,
        /// Ground altitude in meters, computed lazily
        alt_m: Option<f64>,
        /// Taxi nodes that were joined onto this runway end
        taxi_nodes: Vec<NodeIdx>,
    },
}

/// A node of the ground network.
#[derive(Debug, Clone)]
pub struct Node {
    /// Latitude in degrees (NaN while unassigned)
    pub lat: f64,
    /// Longitude in degrees (NaN while unassigned)
    pub lon: f64,
    pub(crate) edges: Vec<EdgeIdx>,
    pub(crate) kind: NodeKind,
}

impl Default for Node {
    /// An unassigned slot, used to pad the vector when nodes arrive by
    /// explicit index.
    fn default() -> Self {
        Self {
            lat: f64::NAN,
            lon: f64::NAN,
            edges: Vec::new(),
            kind: NodeKind::Taxi,
        }
    }
}

impl Node {
    /// A plain taxi node.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            ..Self::default()
        }
    }

    /// A runway end with unknown altitude.
    pub fn runway_end(id: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            edges: Vec::new(),
            kind: NodeKind::RunwayEnd {
                id: id.into(),
                alt_m: None,
                taxi_nodes: Vec::new(),
            },
        }
    }

    /// Whether both coordinates have been assigned.
    pub fn has_geo_coords(&self) -> bool {
        !self.lat.is_nan() && !self.lon.is_nan()
    }

    #[inline]
    pub fn lat_lon(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }

    /// Indices of all edges that end at this node.
    pub fn edges(&self) -> &[EdgeIdx] {
        &self.edges
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Runway designator, `None` for taxi nodes.
    pub fn runway_id(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::RunwayEnd { id, .. } => Some(id),
            NodeKind::Taxi => None,
        }
    }

    /// Ground altitude of a runway end, if computed.
    pub fn alt_m(&self) -> Option<f64> {
        match &self.kind {
            NodeKind::RunwayEnd { alt_m, .. } => *alt_m,
            NodeKind::Taxi => None,
        }
    }

    /// Taxi nodes joined onto a runway end. Empty for taxi nodes.
    pub fn taxi_nodes(&self) -> &[NodeIdx] {
        match &self.kind {
            NodeKind::RunwayEnd { taxi_nodes, .. } => taxi_nodes,
            NodeKind::Taxi => &[],
        }
    }

    pub(crate) fn set_alt_m(&mut self, alt: f64) {
        if let NodeKind::RunwayEnd { alt_m, .. } = &mut self.kind {
            *alt_m = Some(alt);
        }
    }

    pub(crate) fn attach_taxi_node(&mut self, node: NodeIdx) {
        if let NodeKind::RunwayEnd { taxi_nodes, .. } = &mut self.kind {
            if !taxi_nodes.contains(&node) {
                taxi_nodes.push(node);
            }
        }
    }
}

/// Nodes compare by position only.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        (self.lat - other.lat).abs() < SAME_POSITION_EPSILON
            && (self.lon - other.lon).abs() < SAME_POSITION_EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_node_is_unassigned() {
        let node = Node::default();
        assert!(!node.has_geo_coords());
        assert!(node.edges().is_empty());
        assert!(node.runway_id().is_none());
    }

    #[test]
    fn test_equality_is_geographic() {
        let mut a = Node::new(1.0, 2.0);
        let b = Node::runway_end("09", 1.0, 2.0);
        a.edges.push(7);
        assert_eq!(a, b);
        assert_ne!(a, Node::new(1.0, 2.0001));
    }

    #[test]
    fn test_runway_end_accessors() {
        let mut end = Node::runway_end("05R", 1.0, 2.0);
        assert_eq!(end.runway_id(), Some("05R"));
        assert!(end.alt_m().is_none());

        end.set_alt_m(123.0);
        end.attach_taxi_node(4);
        end.attach_taxi_node(4);
        assert_eq!(end.alt_m(), Some(123.0));
        assert_eq!(end.taxi_nodes(), &[4]);
    }

    #[test]
    fn test_taxi_node_ignores_runway_setters() {
        let mut node = Node::new(1.0, 2.0);
        node.set_alt_m(10.0);
        node.attach_taxi_node(3);
        assert!(node.alt_m().is_none());
        assert!(node.taxi_nodes().is_empty());
    }
}
