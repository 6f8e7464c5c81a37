//! Keeping the airport collection in line with the observer's position.
//!
//! [`RefreshController::refresh`] is called regularly from the host's main
//! thread. Once the observer has moved far enough, airports out of reach are
//! purged and a background thread scans the apt.dat files for airports in
//! the new region. At most one scan runs at any time.

use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::Mutex;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{ConfigFile, NetworkSettings, SearchSettings};
use crate::geometry::{distance_m, BoundingBox};
use crate::parser::{open_apt_dat, AptDatReader};
use crate::store::AirportStore;
use crate::terrain::TerrainProbe;

/// Logged when not a single apt.dat file could be read.
pub const NO_APT_DAT_WARNING: &str =
    "Could not open ANY apt.dat file. No runway/taxiway info available to guide ground traffic.";

/// Errors starting a refresh.
#[derive(Debug, Error)]
pub enum RefreshError {
    #[error("Failed to spawn apt.dat scanner thread: {0}")]
    Spawn(#[from] io::Error),
}

/// What a call to [`RefreshController::refresh`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// A scan is still running, nothing done
    Busy,
    /// The observer position is unusable, nothing done
    InvalidPosition,
    /// The observer has not moved far enough, nothing to do
    Unchanged,
    /// The observer has not moved far enough, but altitudes of newly added
    /// airports were probed
    AltitudesUpdated,
    /// Out-of-reach airports were purged and a new scan started
    Started,
}

/// Result of one completed scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// apt.dat files opened
    pub files_read: usize,
    /// Airports merged into the collection
    pub airports_added: usize,
    /// The scan ended on a stop request
    pub stopped: bool,
}

impl ScanSummary {
    /// No ground routing data is available at all.
    pub fn nothing_readable(&self) -> bool {
        self.files_read == 0 && !self.stopped
    }
}

/// Everything the scanner thread needs.
struct ScanJob {
    store: AirportStore,
    files: Vec<PathBuf>,
    region: BoundingBox,
    tuning: NetworkSettings,
    pad_m: f64,
    dump_directory: Option<PathBuf>,
    airports_added: Arc<AtomicBool>,
    last_scan: Arc<Mutex<Option<ScanSummary>>>,
}

impl ScanJob {
    /// Read all files in priority order, skipping those that don't exist.
    fn run(self, stop: &AtomicBool) {
        let mut summary = ScanSummary::default();

        for path in &self.files {
            if stop.load(Ordering::Relaxed) {
                summary.stopped = true;
                break;
            }

            let input = match open_apt_dat(path) {
                Ok(input) => input,
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Could not open apt.dat");
                    continue;
                }
            };
            debug!(path = %path.display(), "Reading apt.dat");
            summary.files_read += 1;
            let before = self.store.len();

            let result = AptDatReader::new(&self.store, self.region, self.tuning, self.pad_m, stop)
                .with_dump_directory(self.dump_directory.as_deref())
                .read(input);
            match result {
                Ok(stats) => {
                    summary.airports_added += stats.airports;
                    if stats.stopped {
                        summary.stopped = true;
                        break;
                    }
                }
                Err(e) => {
                    summary.airports_added += self.store.len().saturating_sub(before);
                    warn!(path = %path.display(), error = %e, "Failed reading apt.dat, keeping airports read so far");
                }
            }
        }

        if summary.nothing_readable() {
            warn!("{}", NO_APT_DAT_WARNING);
        } else {
            info!(
                files = summary.files_read,
                added = summary.airports_added,
                count = self.store.len(),
                "Done reading apt.dat files"
            );
        }

        if summary.airports_added > 0 {
            self.airports_added.store(true, Ordering::Release);
        }
        *self.last_scan.lock() = Some(summary);
    }
}

/// Handle onto the scanner thread.
struct ScanWorker {
    thread_handle: Option<JoinHandle<()>>,
    stop: Arc<AtomicBool>,
}

impl ScanWorker {
    fn start(job: ScanJob) -> Result<Self, RefreshError> {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_clone = Arc::clone(&stop);

        let thread_handle = thread::Builder::new()
            .name("apt-dat-scan".to_string())
            .spawn(move || job.run(&stop_clone))?;

        Ok(Self {
            thread_handle: Some(thread_handle),
            stop,
        })
    }

    fn shutdown(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    fn join(&mut self) {
        if let Some(handle) = self.thread_handle.take() {
            if let Err(e) = handle.join() {
                warn!("apt.dat scanner thread panicked: {:?}", e);
            }
        }
    }

    fn is_running(&self) -> bool {
        self.thread_handle
            .as_ref()
            .is_some_and(|h| !h.is_finished())
    }
}

impl Drop for ScanWorker {
    fn drop(&mut self) {
        self.shutdown();
        self.join();
    }
}

/// Owns the airport collection and the scanner thread.
///
/// The terrain probe is only ever used from the thread owning the
/// controller, never from the scanner.
pub struct RefreshController {
    store: AirportStore,
    search: SearchSettings,
    tuning: NetworkSettings,
    dump_directory: Option<PathBuf>,
    files: Vec<PathBuf>,
    probe: Option<Box<dyn TerrainProbe>>,
    worker: Option<ScanWorker>,
    last_center: Option<(f64, f64)>,
    airports_added: Arc<AtomicBool>,
    last_scan: Arc<Mutex<Option<ScanSummary>>>,
}

impl RefreshController {
    /// Create a controller scanning `files` in the given priority order.
    pub fn new(config: &ConfigFile, files: Vec<PathBuf>, probe: Option<Box<dyn TerrainProbe>>) -> Self {
        Self {
            store: AirportStore::new(),
            search: config.search,
            tuning: config.network,
            dump_directory: config.debug.dump_directory.clone(),
            files,
            probe,
            worker: None,
            last_center: None,
            airports_added: Arc::new(AtomicBool::new(false)),
            last_scan: Arc::new(Mutex::new(None)),
        }
    }

    /// The managed collection, for queries.
    pub fn store(&self) -> &AirportStore {
        &self.store
    }

    /// Whether a scan is in progress.
    pub fn is_running(&self) -> bool {
        self.worker.as_ref().is_some_and(ScanWorker::is_running)
    }

    /// Summary of the most recently completed scan.
    pub fn last_scan(&self) -> Option<ScanSummary> {
        *self.last_scan.lock()
    }

    /// Bring the collection in line with the observer position.
    ///
    /// # Errors
    ///
    /// Returns [`RefreshError::Spawn`] if the scanner thread cannot be
    /// started; the purge has happened by then.
    pub fn refresh(&mut self, lat: f64, lon: f64) -> Result<RefreshOutcome, RefreshError> {
        if self.is_running() {
            return Ok(RefreshOutcome::Busy);
        }
        if !(lat.is_finite() && lon.is_finite())
            || !(-90.0..=90.0).contains(&lat)
            || !(-180.0..=180.0).contains(&lon)
        {
            return Ok(RefreshOutcome::InvalidPosition);
        }

        let center = (lat, lon);
        if let Some(last) = self.last_center {
            if distance_m(last, center) < self.search.std_distance_m {
                if self.airports_added.swap(false, Ordering::AcqRel) && self.update_altitudes() {
                    return Ok(RefreshOutcome::AltitudesUpdated);
                }
                return Ok(RefreshOutcome::Unchanged);
            }
        }

        // The previous scan has finished, reap its thread
        if let Some(mut worker) = self.worker.take() {
            worker.join();
        }

        self.last_center = Some(center);
        let radius = 2.0 * self.search.std_distance_m;
        let region = BoundingBox::around(center, radius);
        let purged = self.store.purge(&region);
        debug!(purged, remaining = self.store.len(), "Done purging airports");
        debug!(
            "Starting thread to read apt.dat for airports {:.1}nm around ({:.5}, {:.5})",
            radius / 1852.0,
            lat,
            lon
        );

        let job = ScanJob {
            store: self.store.clone(),
            files: self.files.clone(),
            region,
            tuning: self.tuning,
            pad_m: self.search.snap_distance_m,
            dump_directory: self.dump_directory.clone(),
            airports_added: Arc::clone(&self.airports_added),
            last_scan: Arc::clone(&self.last_scan),
        };
        self.worker = Some(ScanWorker::start(job)?);
        Ok(RefreshOutcome::Started)
    }

    /// Block until the running scan, if any, has finished.
    pub fn wait(&mut self) {
        if let Some(worker) = self.worker.as_mut() {
            worker.join();
        }
    }

    /// Probe ground altitudes of all airports.
    ///
    /// A failing probe is released; altitudes stay unknown from then on.
    ///
    /// # Returns
    ///
    /// `true` if the altitudes were updated.
    pub fn update_altitudes(&mut self) -> bool {
        let Some(probe) = self.probe.as_mut() else {
            return false;
        };
        match self.store.update_altitudes(probe.as_mut()) {
            Ok(()) => {
                debug!("Finished updating ground altitudes");
                true
            }
            Err(e) => {
                warn!(error = %e, "Releasing terrain probe, runway altitudes stay unknown");
                self.probe = None;
                false
            }
        }
    }

    /// Stop the scan, wait for it and release the terrain probe.
    pub fn disable(&mut self) {
        if let Some(mut worker) = self.worker.take() {
            worker.shutdown();
            worker.join();
        }
        self.probe = None;
    }
}
