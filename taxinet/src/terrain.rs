//! Terrain height probing.
//!
//! The host simulator owns the actual terrain probe. It is not thread-safe,
//! so [`TerrainProbe`] does not require `Send` and is only ever called from
//! the thread that owns the [`RefreshController`](crate::refresh::RefreshController).

use thiserror::Error;

/// Terrain probe errors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProbeError {
    /// The probe resource could not be acquired or has been released.
    #[error("Terrain probe unavailable: {0}")]
    Unavailable(String),

    /// No terrain loaded at the queried position.
    #[error("No terrain at ({lat:.5}, {lon:.5})")]
    NoTerrain { lat: f64, lon: f64 },
}

/// Supplies ground altitudes.
pub trait TerrainProbe {
    /// Ground altitude in meters above mean sea level at a position.
    fn ground_altitude_m(&mut self, lat: f64, lon: f64) -> Result<f64, ProbeError>;
}

/// A probe reporting the same altitude everywhere.
///
/// Stands in for the simulator in tools and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatTerrain {
    alt_m: f64,
}

impl FlatTerrain {
    pub fn new(alt_m: f64) -> Self {
        Self { alt_m }
    }
}

impl TerrainProbe for FlatTerrain {
    fn ground_altitude_m(&mut self, _lat: f64, _lon: f64) -> Result<f64, ProbeError> {
        Ok(self.alt_m)
    }
}

impl<F> TerrainProbe for F
where
    F: FnMut(f64, f64) -> Result<f64, ProbeError>,
{
    fn ground_altitude_m(&mut self, lat: f64, lon: f64) -> Result<f64, ProbeError> {
        self(lat, lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_terrain() {
        let mut probe = FlatTerrain::new(12.5);
        assert_eq!(probe.ground_altitude_m(1.0, 2.0), Ok(12.5));
    }

    #[test]
    fn test_closure_probe() {
        let mut calls = 0;
        let mut probe = |lat: f64, _lon: f64| {
            calls += 1;
            if lat > 0.0 {
                Ok(lat * 10.0)
            } else {
                Err(ProbeError::NoTerrain { lat, lon: 0.0 })
            }
        };
        assert_eq!(probe.ground_altitude_m(2.0, 0.0), Ok(20.0));
        assert!(probe.ground_altitude_m(-1.0, 0.0).is_err());
        assert_eq!(calls, 2);
    }
}
