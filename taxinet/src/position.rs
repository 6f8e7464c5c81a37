//! Track positions as seen by the ground network.
//!
//! - [`FlightPhase`] - the phase tag attached to a position
//! - [`EdgeLink`] - whether (and where) a position was snapped to the network
//! - [`GroundPosition`] - one timestamped point of an aircraft track

use std::fmt;

use crate::graph::EdgeIdx;

/// Flight phase tag of a track position.
///
/// Only the phases the ground network itself assigns are modelled here; the
/// owner of the flight state maps them into its own phase model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlightPhase {
    /// Phase not (yet) determined.
    #[default]
    Unknown,
    /// Moving on the taxiway network.
    Taxi,
    /// Final approach towards a runway.
    Approach,
    /// Touching down on a runway.
    TouchDown,
}

impl fmt::Display for FlightPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlightPhase::Unknown => write!(f, "Unknown"),
            FlightPhase::Taxi => write!(f, "Taxi"),
            FlightPhase::Approach => write!(f, "Approach"),
            FlightPhase::TouchDown => write!(f, "Touch Down"),
        }
    }
}

/// Relation between a position and an edge of the ground network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeLink {
    /// Snapping has not been attempted yet.
    #[default]
    Unknown,
    /// Not on the network, or deliberately excluded from snapping.
    ///
    /// Positions synthesized along a taxi path carry this tag so they are
    /// never snapped a second time.
    Unavailable,
    /// Snapped onto the given edge of the airport that contains the position.
    Edge(EdgeIdx),
}

impl EdgeLink {
    /// The linked edge, if any.
    pub fn edge(&self) -> Option<EdgeIdx> {
        match self {
            EdgeLink::Edge(idx) => Some(*idx),
            _ => None,
        }
    }
}

/// A timestamped aircraft position.
#[derive(Debug, Clone, PartialEq)]
pub struct GroundPosition {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
    /// Altitude in meters above mean sea level, if known
    pub alt_m: Option<f64>,
    /// Timestamp in seconds (simulator time base)
    pub ts: f64,
    /// True heading in degrees, if known
    pub heading: Option<f64>,
    /// Pitch in degrees
    pub pitch: f64,
    /// Roll in degrees
    pub roll: f64,
    /// Whether the aircraft is on the ground at this position
    pub on_ground: bool,
    /// Flight phase tag
    pub phase: FlightPhase,
    /// Network edge this position is snapped to
    pub edge: EdgeLink,
}

impl GroundPosition {
    /// Create a position with the given coordinates and timestamp.
    ///
    /// Everything else starts unknown: no altitude, no heading, airborne,
    /// not yet snapped.
    pub fn new(lat: f64, lon: f64, ts: f64) -> Self {
        Self {
            lat,
            lon,
            alt_m: None,
            ts,
            heading: None,
            pitch: 0.0,
            roll: 0.0,
            on_ground: false,
            phase: FlightPhase::Unknown,
            edge: EdgeLink::Unknown,
        }
    }

    /// Set the heading.
    pub fn with_heading(mut self, heading: f64) -> Self {
        self.heading = Some(heading);
        self
    }

    /// Set the altitude.
    pub fn with_alt_m(mut self, alt_m: f64) -> Self {
        self.alt_m = Some(alt_m);
        self
    }

    /// Latitude/longitude tuple as used by the geometry helpers.
    #[inline]
    pub fn lat_lon(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }

    /// Whether both coordinates are usable.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

impl fmt::Display for GroundPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6}", self.lat, self.lon)?;
        if let Some(alt) = self.alt_m {
            write!(f, " {:.0}m", alt)?;
        }
        if let Some(heading) = self.heading {
            write!(f, " {:03.0}°", heading)?;
        }
        write!(f, " @{:.1}s)", self.ts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_position_defaults() {
        let pos = GroundPosition::new(53.63, 9.99, 100.0);
        assert!(pos.alt_m.is_none());
        assert!(pos.heading.is_none());
        assert!(!pos.on_ground);
        assert_eq!(pos.phase, FlightPhase::Unknown);
        assert_eq!(pos.edge, EdgeLink::Unknown);
    }

    #[test]
    fn test_validity() {
        assert!(GroundPosition::new(53.63, 9.99, 0.0).is_valid());
        assert!(!GroundPosition::new(f64::NAN, 9.99, 0.0).is_valid());
        assert!(!GroundPosition::new(91.0, 9.99, 0.0).is_valid());
    }

    #[test]
    fn test_edge_link() {
        assert_eq!(EdgeLink::Edge(4).edge(), Some(4));
        assert_eq!(EdgeLink::Unavailable.edge(), None);
        assert_eq!(EdgeLink::Unknown.edge(), None);
    }

    #[test]
    fn test_display() {
        let pos = GroundPosition::new(1.5, 2.5, 10.0)
            .with_heading(90.0)
            .with_alt_m(120.0);
        assert_eq!(pos.to_string(), "(1.500000, 2.500000 120m 090° @10.0s)");
    }
}
