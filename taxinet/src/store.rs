//! The shared airport collection.
//!
//! The background scanner merges finalized airports while queries iterate
//! them from the caller's thread. One coarse mutex guards the whole map;
//! it is never held while a file is parsed, only for a merge, a purge or
//! the duration of one query.

use std::collections::BTreeMap;
use std::io::Write;
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};
use tracing::{debug, warn};

use crate::geometry::BoundingBox;
use crate::graph::Airport;
use crate::terrain::{ProbeError, TerrainProbe};

/// Airports keyed by identifier.
///
/// Cloning is cheap and yields a handle onto the same collection.
#[derive(Debug, Clone, Default)]
pub struct AirportStore {
    airports: Arc<Mutex<BTreeMap<String, Airport>>>,
}

impl AirportStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a finalized airport.
    ///
    /// An airport already present wins: facility files are scanned in
    /// priority order, so the first definition is the one to keep.
    ///
    /// # Returns
    ///
    /// `true` if the airport was added.
    pub fn insert(&self, airport: Airport) -> bool {
        let mut airports = self.airports.lock();
        if airports.contains_key(airport.id()) {
            debug!(airport = %airport.id(), "Airport already known, keeping first definition");
            return false;
        }
        airports.insert(airport.id().to_string(), airport);
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.airports.lock().contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.airports.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.lock().is_empty()
    }

    /// Identifiers of all stored airports, sorted.
    pub fn ids(&self) -> Vec<String> {
        self.airports.lock().keys().cloned().collect()
    }

    /// Remove every airport whose bounds do not overlap `region`.
    ///
    /// # Returns
    ///
    /// The number of airports removed.
    pub fn purge(&self, region: &BoundingBox) -> usize {
        let mut airports = self.airports.lock();
        let before = airports.len();
        airports.retain(|id, apt| {
            let keep = apt.bounds().overlaps(region);
            if !keep {
                debug!(airport = %id, "Purged airport outside {}", region);
            }
            keep
        });
        before - airports.len()
    }

    /// Identifier of the first airport whose bounds contain `pos`.
    pub fn airport_at(&self, pos: (f64, f64)) -> Option<String> {
        self.airports
            .lock()
            .values()
            .find(|apt| apt.bounds().contains(pos))
            .map(|apt| apt.id().to_string())
    }

    /// Run `f` on one airport while holding the lock.
    pub fn with_airport<R>(&self, id: &str, f: impl FnOnce(&Airport) -> R) -> Option<R> {
        self.airports.lock().get(id).map(f)
    }

    /// Write one airport's network as CSV.
    ///
    /// # Returns
    ///
    /// `None` if the airport is unknown.
    pub fn dump_csv<W: Write>(&self, id: &str, writer: W) -> Option<Result<(), csv::Error>> {
        self.with_airport(id, |apt| apt.write_csv(writer))
    }

    /// Probe altitudes of all airports and their runway ends.
    ///
    /// # Errors
    ///
    /// Stops at the first [`ProbeError::Unavailable`]; altitudes probed so
    /// far are kept, the rest stay unknown.
    pub fn update_altitudes(&self, probe: &mut dyn TerrainProbe) -> Result<(), ProbeError> {
        let mut airports = self.airports.lock();
        for apt in airports.values_mut() {
            if let Err(e) = apt.update_altitudes(probe) {
                warn!(airport = %apt.id(), error = %e, "Terrain probe failed, altitudes stay unknown");
                return Err(e);
            }
        }
        Ok(())
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, BTreeMap<String, Airport>> {
        self.airports.lock()
    }
}
