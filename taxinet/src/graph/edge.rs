//! Undirected network edges.

use std::fmt;

use super::NodeIdx;
use crate::geometry::{heading_diff, normalize_heading};

/// Surface an edge runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Runway centerline between two runway ends.
    Runway,
    /// Taxiway segment between two taxi nodes.
    Taxiway,
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeKind::Runway => write!(f, "runway"),
            EdgeKind::Taxiway => write!(f, "taxiway"),
        }
    }
}

/// An undirected edge between two nodes.
///
/// The stored bearing always lies in [0, 180): the endpoints are swapped when
/// needed so that the bearing describes the direction from `a` to `b`.
/// For [`EdgeKind::Runway`] the endpoints index the airport's runway ends,
/// otherwise its taxi nodes.
#[derive(Debug, Clone)]
pub struct Edge {
    kind: EdgeKind,
    a: NodeIdx,
    b: NodeIdx,
    bearing: f64,
    length_m: f64,
}

impl Edge {
    /// Create an edge from `a` to `b` with the bearing measured from `a`.
    pub fn new(kind: EdgeKind, a: NodeIdx, b: NodeIdx, bearing: f64, length_m: f64) -> Self {
        let mut edge = Self {
            kind,
            a,
            b,
            bearing,
            length_m,
        };
        edge.normalize();
        edge
    }

    fn normalize(&mut self) {
        self.bearing = normalize_heading(self.bearing);
        if self.bearing >= 180.0 {
            std::mem::swap(&mut self.a, &mut self.b);
            self.bearing -= 180.0;
        }
    }

    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    pub fn is_runway(&self) -> bool {
        self.kind == EdgeKind::Runway
    }

    /// Start node (the one the bearing is measured from).
    pub fn a(&self) -> NodeIdx {
        self.a
    }

    /// End node.
    pub fn b(&self) -> NodeIdx {
        self.b
    }

    /// Normalized bearing in [0, 180).
    pub fn bearing(&self) -> f64 {
        self.bearing
    }

    pub fn length_m(&self) -> f64 {
        self.length_m
    }

    /// Bearing when leaving `node` along this edge.
    pub fn bearing_from(&self, node: NodeIdx) -> f64 {
        if node == self.a {
            self.bearing
        } else {
            self.bearing + 180.0
        }
    }

    /// Edge direction that matches `heading` more closely.
    pub fn bearing_by_heading(&self, heading: f64) -> f64 {
        if heading_diff(heading, self.bearing).abs() < 90.0 {
            self.bearing
        } else {
            self.bearing + 180.0
        }
    }

    /// The node a vehicle moving along `heading` leaves from.
    pub fn start_by_heading(&self, heading: f64) -> NodeIdx {
        if heading_diff(heading, self.bearing).abs() < 90.0 {
            self.a
        } else {
            self.b
        }
    }

    /// The node a vehicle moving along `heading` heads towards.
    pub fn end_by_heading(&self, heading: f64) -> NodeIdx {
        if heading_diff(heading, self.bearing).abs() < 90.0 {
            self.b
        } else {
            self.a
        }
    }

    /// The endpoint that is not `node`.
    pub fn other_node(&self, node: NodeIdx) -> NodeIdx {
        if node == self.a {
            self.b
        } else {
            self.a
        }
    }

    /// Whether `node` is one of the two endpoints.
    pub fn connects(&self, node: NodeIdx) -> bool {
        self.a == node || self.b == node
    }

    /// Replace the end node, keeping `a` as the start before normalizing.
    pub(crate) fn set_end_node(&mut self, b: NodeIdx, bearing: f64, length_m: f64) {
        self.b = b;
        self.bearing = bearing;
        self.length_m = length_m;
        self.normalize();
    }

    /// Replace bearing (measured from `a`) and length after a node moved.
    pub(crate) fn set_geometry(&mut self, bearing: f64, length_m: f64) {
        self.bearing = bearing;
        self.length_m = length_m;
        self.normalize();
    }
}

/// Edges are equal when they join the same pair of nodes on the same surface.
impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && ((self.a == other.a && self.b == other.b)
                || (self.a == other.b && self.b == other.a))
    }
}
