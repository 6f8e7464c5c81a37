//! Geometry utilities for ground-network work.
//!
//! Positions are `(latitude, longitude)` tuples in decimal degrees. Distances
//! are meters, headings and bearings are degrees true (0-360, 0=north).
//!
//! Two models are used side by side:
//!
//! - [`sphere`]: great-circle distance, bearing and projection for anything
//!   that spans more than a few hundred meters (runways, search radii).
//! - [`plane`]: a flat-earth approximation around a reference point, used for
//!   the point-to-segment tests of the nearest-edge search.

pub mod bounds;
pub mod plane;
pub mod sphere;

pub use bounds::BoundingBox;
pub use plane::{from_local, to_local, SegmentDistance};
pub use sphere::{
    axial_heading, bearing_deg, distance_m, heading_diff, normalize_heading, project,
    EARTH_RADIUS_M,
};
