//! Airport ground networks.
//!
//! An [`Airport`] is an arena: taxi nodes, runway ends and edges live in
//! vectors and refer to each other by index only. Indices are stable
//! identifiers for the lifetime of an airport; references into the vectors
//! are not, since the vectors grow while the facility data is parsed.
//!
//! # Building blocks
//!
//! - [`Node`] / [`NodeKind`] - taxi node or runway end
//! - [`Edge`] / [`EdgeKind`] - undirected runway or taxiway segment
//! - [`Airport`] - the aggregate with its construction operations
//! - bearing index and nearest-edge search ([`ClosestEdge`])
//! - bounded shortest path ([`PathNode`])
//! - CSV debug dump
//!
//! # Example
//!
//! ```
//! use taxinet::graph::{Airport, RunwayThreshold};
//!
//! let mut apt = Airport::new("XMPL");
//! apt.add_runway(
//!     &RunwayThreshold::new("09", 0.0, 0.0, 0.0),
//!     &RunwayThreshold::new("27", 0.0, 0.01, 0.0),
//! );
//! let a = apt.add_node(0.001, 0.002, None);
//! let b = apt.add_node(0.001, 0.004, None);
//! apt.add_edge(a, b, None);
//! apt.finalize(8.0);
//!
//! assert!(apt.is_valid());
//! assert_eq!(apt.runways_summary(), "09/27");
//! ```

mod airport;
mod dump;
mod edge;
mod node;
mod path;
mod search;

pub use airport::{Airport, RunwayThreshold};
pub use edge::{Edge, EdgeKind};
pub use node::{Node, NodeKind};
pub use path::PathNode;
pub use search::ClosestEdge;

/// Index into an airport's taxi node (or runway end) vector.
pub type NodeIdx = usize;

/// Index into an airport's edge vector.
pub type EdgeIdx = usize;
