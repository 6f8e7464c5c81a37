//! Per-aircraft track storage and the flight model it is flown with.
//!
//! The snapping engine inserts synthesized taxi positions into a
//! [`FlightTrack`]; positions are addressed by index, and inserting before
//! an index shifts that position (and all after it) back by one.

use std::collections::VecDeque;

use crate::position::GroundPosition;

/// Meters per second in one knot.
pub const MS_PER_KT: f64 = 0.514_444;

/// Meters per second in one foot per minute.
pub const MS_PER_FTM: f64 = 0.00508;

/// Performance figures of an aircraft type relevant on and near the ground.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightModel {
    /// Model name, e.g. "MediumJets"
    pub name: String,
    /// Modelled taxi speed in meters per second
    pub taxi_speed_m_s: f64,
    /// Final approach vertical speed in feet per minute (negative = sinking)
    pub vsi_final_fpm: f64,
    /// Flaps-down speed in knots
    pub flaps_down_speed_kn: f64,
    /// Pitch during the flare in degrees
    pub pitch_flare_deg: f64,
}

impl Default for FlightModel {
    /// A generic medium jet.
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            taxi_speed_m_s: 10.0,
            vsi_final_fpm: -800.0,
            flaps_down_speed_kn: 180.0,
            pitch_flare_deg: 10.0,
        }
    }
}

/// Ordered positions of one aircraft.
#[derive(Debug, Clone, Default)]
pub struct FlightTrack {
    /// Aircraft label for log messages (call sign or transponder code)
    pub label: String,
    /// Flight model of the aircraft type
    pub model: FlightModel,
    /// The position the aircraft is currently heading to.
    ///
    /// This is the routing context for the first queued position.
    pub current_target: Option<GroundPosition>,
    positions: VecDeque<GroundPosition>,
}

impl FlightTrack {
    pub fn new(label: impl Into<String>, model: FlightModel) -> Self {
        Self {
            label: label.into(),
            model,
            current_target: None,
            positions: VecDeque::new(),
        }
    }

    /// Append a position at the end of the track.
    pub fn push(&mut self, pos: GroundPosition) {
        self.positions.push_back(pos);
    }

    /// Insert a position before index `idx`.
    pub fn insert(&mut self, idx: usize, pos: GroundPosition) {
        self.positions.insert(idx, pos);
    }

    pub fn get(&self, idx: usize) -> Option<&GroundPosition> {
        self.positions.get(idx)
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut GroundPosition> {
        self.positions.get_mut(idx)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GroundPosition> {
        self.positions.iter()
    }

    /// Drop positions up to (excluding) `idx`, e.g. once they were flown.
    pub fn drain_before(&mut self, idx: usize) {
        let n = idx.min(self.positions.len());
        self.positions.drain(..n);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order() {
        let mut track = FlightTrack::new("TEST", FlightModel::default());
        track.push(GroundPosition::new(0.0, 0.0, 0.0));
        track.push(GroundPosition::new(0.0, 0.0, 30.0));
        track.insert(1, GroundPosition::new(0.0, 0.0, 10.0));

        let ts: Vec<f64> = track.iter().map(|p| p.ts).collect();
        assert_eq!(ts, vec![0.0, 10.0, 30.0]);
        assert_eq!(track.get(2).map(|p| p.ts), Some(30.0));
    }

    #[test]
    fn test_drain_before() {
        let mut track = FlightTrack::default();
        for ts in 0..5 {
            track.push(GroundPosition::new(0.0, 0.0, ts as f64));
        }
        track.drain_before(3);
        assert_eq!(track.len(), 2);
        assert_eq!(track.get(0).map(|p| p.ts), Some(3.0));

        track.drain_before(10);
        assert!(track.is_empty());
    }
}
