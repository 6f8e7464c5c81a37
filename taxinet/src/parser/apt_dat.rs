//! Streaming reader for `apt.dat` files.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, warn};

use super::centerline::{Centerline, VertexRow};
use crate::config::NetworkSettings;
use crate::geometry::BoundingBox;
use crate::graph::{Airport, RunwayThreshold};
use crate::store::AirportStore;

/// Highest node index accepted from a `1201` route network node.
const MAX_ROUTE_NODE_INDEX: usize = 1 << 20;

/// Error type for apt.dat parsing.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid number '{value}' at line {line}")]
    InvalidNumber { line: usize, value: String },
}

/// Counters of one read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadStats {
    /// Lines read, including those of skipped airports
    pub lines: usize,
    /// Airports merged into the store
    pub airports: usize,
    /// Reading ended early on a stop request
    pub stopped: bool,
}

/// Which kind of taxi network the current airport describes.
///
/// An airport uses either painted centerlines or a route network; the first
/// one seen wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum NetworkFormat {
    #[default]
    Undecided,
    Centerlines,
    RouteNetwork,
}

/// Open an apt.dat file, transparently decompressing `.gz` files.
pub fn open_apt_dat(path: &Path) -> io::Result<Box<dyn BufRead + Send>> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        debug!(path = %path.display(), "Reading gzip compressed apt.dat");
        Ok(Box::new(BufReader::new(flate2::read::GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Lines of a file, decoded leniently, with one line of push-back.
struct Lines<R> {
    reader: R,
    buf: Vec<u8>,
    number: usize,
    pushed_back: Option<String>,
}

impl<R: BufRead> Lines<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            number: 0,
            pushed_back: None,
        }
    }

    fn next_line(&mut self) -> io::Result<Option<String>> {
        if let Some(line) = self.pushed_back.take() {
            return Ok(Some(line));
        }
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        self.number += 1;
        let line = String::from_utf8_lossy(&self.buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn push_back(&mut self, line: String) {
        self.pushed_back = Some(line);
    }
}

/// Per-file parsing state.
#[derive(Default)]
struct FileState {
    /// Airport being read; `None` while skipping an airport of no interest
    current: Option<Airport>,
    format: NetworkFormat,
    stats: ReadStats,
}

/// Reads airports inside a region from apt.dat streams into a store.
///
/// Airports already in the store are skipped, so reading files in scenery
/// priority order keeps the highest priority definition.
pub struct AptDatReader<'a> {
    store: &'a AirportStore,
    region: BoundingBox,
    tuning: NetworkSettings,
    pad_m: f64,
    stop: &'a AtomicBool,
    dump_directory: Option<&'a Path>,
}

impl<'a> AptDatReader<'a> {
    /// Create a reader merging into `store`.
    ///
    /// An airport is of interest when its first runway starts inside
    /// `region`. Finalized airports have their bounds padded by `pad_m`.
    /// Reading stops as soon as `stop` is set.
    pub fn new(
        store: &'a AirportStore,
        region: BoundingBox,
        tuning: NetworkSettings,
        pad_m: f64,
        stop: &'a AtomicBool,
    ) -> Self {
        Self {
            store,
            region,
            tuning,
            pad_m,
            stop,
            dump_directory: None,
        }
    }

    /// Write every merged airport as `<ID>.csv` into `dir`.
    pub fn with_dump_directory(mut self, dir: Option<&'a Path>) -> Self {
        self.dump_directory = dir;
        self
    }

    /// Read all airports of interest from one stream.
    ///
    /// Malformed records are skipped; the airport being read when a stop is
    /// requested is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Io`] if the stream cannot be read. Everything
    /// parsed up to the failure is kept: completed airports stay merged and
    /// the airport being read is merged if it is valid so far.
    pub fn read<R: BufRead>(&self, reader: R) -> Result<ReadStats, ParseError> {
        let mut lines = Lines::new(reader);
        let mut state = FileState::default();

        loop {
            let line = match lines.next_line() {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    self.close_airport(&mut state);
                    return Err(e.into());
                }
            };
            if self.stop.load(Ordering::Relaxed) {
                state.stats.stopped = true;
                state.stats.lines = lines.number;
                return Ok(state.stats);
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            let Some(&code) = fields.first() else {
                continue;
            };

            match code {
                "1" | "16" | "17" if line.len() > 10 => {
                    self.close_airport(&mut state);
                    state.format = NetworkFormat::Undecided;
                    if let Some(&id) = fields.get(4) {
                        if !self.store.contains(id) {
                            state.current = Some(Airport::with_tuning(id, self.tuning));
                        }
                    }
                }
                "99" => self.close_airport(&mut state),
                "100" if line.len() > 20 => {
                    if let Err(e) = self.read_runway(&mut state, &fields, lines.number) {
                        debug!(error = %e, "Skipping runway");
                    }
                }
                "120" if state.format != NetworkFormat::RouteNetwork => {
                    if let Some(apt) = state.current.as_mut().filter(|a| a.has_runway_ends()) {
                        match self.read_centerline(&mut lines) {
                            Ok(centerline) => {
                                centerline.add_to(apt, &self.tuning);
                                if apt.edges().len() > apt.runway_count() {
                                    state.format = NetworkFormat::Centerlines;
                                }
                            }
                            Err(e @ ParseError::Io(_)) => {
                                self.close_airport(&mut state);
                                return Err(e);
                            }
                            Err(e) => debug!(airport = %apt.id(), error = %e, "Skipping line segment"),
                        }
                    }
                }
                "1201" | "1202" if state.format != NetworkFormat::Centerlines => {
                    if let Err(e) = self.read_route(&mut state, &fields, lines.number) {
                        debug!(error = %e, "Skipping taxi route record");
                    }
                }
                _ => {}
            }
        }

        self.close_airport(&mut state);
        state.stats.lines = lines.number;
        Ok(state.stats)
    }

    /// Row `100`: a land runway with its two ends.
    fn read_runway(
        &self,
        state: &mut FileState,
        fields: &[&str],
        line: usize,
    ) -> Result<(), ParseError> {
        if fields.len() != 26 {
            return Ok(());
        }
        let Some(apt) = state.current.as_mut() else {
            return Ok(());
        };

        let lat: f64 = number(fields[9], line)?;
        let lon: f64 = number(fields[10], line)?;
        if !valid_lat_lon(lat, lon) {
            return Ok(());
        }
        if !apt.has_runway_ends() && !self.region.contains((lat, lon)) {
            // first runway outside the region: airport is of no interest
            state.current = None;
            return Ok(());
        }

        let end1 = RunwayThreshold::new(fields[8], lat, lon, number(fields[11], line)?);
        let end2 = RunwayThreshold::new(
            fields[17],
            number(fields[18], line)?,
            number(fields[19], line)?,
            number(fields[20], line)?,
        );
        apt.add_runway(&end1, &end2);
        Ok(())
    }

    /// Vertex rows following a `120` header.
    ///
    /// The first row that is no centerline vertex ends the section and is
    /// pushed back to be processed on its own.
    fn read_centerline<R: BufRead>(&self, lines: &mut Lines<R>) -> Result<Centerline, ParseError> {
        let mut centerline = Centerline::default();
        while let Some(line) = lines.next_line()? {
            if self.stop.load(Ordering::Relaxed) {
                break;
            }
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.is_empty() {
                continue;
            }
            match VertexRow::classify(&fields, lines.number)? {
                VertexRow::Centerline(lat, lon) => centerline.push(lat, lon),
                VertexRow::OtherPaint | VertexRow::EndOfSection => {
                    lines.push_back(line);
                    break;
                }
            }
        }
        Ok(centerline)
    }

    /// Rows `1201` (route node) and `1202` (route edge).
    fn read_route(
        &self,
        state: &mut FileState,
        fields: &[&str],
        line: usize,
    ) -> Result<(), ParseError> {
        let Some(apt) = state.current.as_mut().filter(|a| a.has_runway_ends()) else {
            return Ok(());
        };

        match fields[0] {
            "1201" if fields.len() >= 5 => {
                let lat: f64 = number(fields[1], line)?;
                let lon: f64 = number(fields[2], line)?;
                let idx: usize = number(fields[4], line)?;
                if !valid_lat_lon(lat, lon) {
                    return Ok(());
                }
                if idx > MAX_ROUTE_NODE_INDEX {
                    debug!(airport = %apt.id(), idx, "Route node index out of range");
                    return Ok(());
                }
                state.format = NetworkFormat::RouteNetwork;
                apt.add_node_at(lat, lon, idx);
            }
            "1202" if fields.len() >= 3 => {
                let n1: usize = number(fields[1], line)?;
                let n2: usize = number(fields[2], line)?;
                apt.add_edge(n1, n2, None);
            }
            _ => {}
        }
        Ok(())
    }

    /// Finalize and merge the current airport if it is complete.
    fn close_airport(&self, state: &mut FileState) {
        let Some(mut apt) = state.current.take() else {
            return;
        };
        if !apt.is_valid() {
            return;
        }
        apt.finalize(self.pad_m);

        if let Some(dir) = self.dump_directory {
            let path = dir.join(format!("{}.csv", apt.id()));
            let written = File::create(&path)
                .map_err(csv::Error::from)
                .and_then(|file| apt.write_csv(file));
            if let Err(e) = written {
                warn!(path = %path.display(), error = %e, "Failed to dump airport");
            }
        }

        if self.store.insert(apt) {
            state.stats.airports += 1;
        }
    }
}

pub(super) fn number<T: FromStr>(field: &str, line: usize) -> Result<T, ParseError> {
    field.parse().map_err(|_| ParseError::InvalidNumber {
        line,
        value: field.to_string(),
    })
}

fn valid_lat_lon(lat: f64, lon: f64) -> bool {
    (-90.0..=90.0).contains(&lat) && (-180.0..180.0).contains(&lon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    // ==================== Helpers ====================

    const RUNWAY_09_27: &str = "100 45.00 1 0 0.25 0 2 1 09 0.000000 0.000000 0 0 3 2 1 0 27 0.000000 0.010000 0 0 3 2 1 0";

    fn read(data: &str, store: &AirportStore) -> ReadStats {
        let stop = AtomicBool::new(false);
        let region = BoundingBox::new(-1.0, -1.0, 1.0, 1.0);
        AptDatReader::new(store, region, NetworkSettings::default(), 8.0, &stop)
            .read(Cursor::new(data.as_bytes()))
            .unwrap()
    }

    fn header(id: &str) -> String {
        format!("1 1000 0 0 {} Test Airport {}", id, id)
    }

    fn reader<'a>(store: &'a AirportStore, stop: &'a AtomicBool) -> AptDatReader<'a> {
        AptDatReader::new(
            store,
            BoundingBox::new(-1.0, -1.0, 1.0, 1.0),
            NetworkSettings::default(),
            8.0,
            stop,
        )
    }

    /// Serves its data, then fails instead of reporting end of file.
    struct FailsAtEnd(Cursor<Vec<u8>>);

    impl Read for FailsAtEnd {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.0.read(buf)? {
                0 => Err(io::Error::other("device removed")),
                n => Ok(n),
            }
        }
    }

    /// Serves one line per read and raises `stop` when serving line `stop_at`.
    struct LineByLine<'a> {
        lines: Vec<String>,
        next: usize,
        stop_at: usize,
        stop: &'a AtomicBool,
    }

    impl Read for LineByLine<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let Some(line) = self.lines.get(self.next) else {
                return Ok(0);
            };
            if self.next == self.stop_at {
                self.stop.store(true, Ordering::Relaxed);
            }
            self.next += 1;
            let bytes = line.as_bytes();
            buf[..bytes.len()].copy_from_slice(bytes);
            Ok(bytes.len())
        }
    }

    // ==================== Tests ====================

    #[test]
    fn test_runway_only_airport() {
        let data = format!("I\n1100 Version\n\n{}\n{}\n99\n", header("ZERO"), RUNWAY_09_27);
        let store = AirportStore::new();
        let stats = read(&data, &store);

        assert_eq!(stats.airports, 1);
        assert_eq!(stats.lines, 6);
        assert!(!stats.stopped);
        let summary = store.with_airport("ZERO", |a| a.runways_summary()).unwrap();
        assert_eq!(summary, "09/27");
    }

    #[test]
    fn test_airport_without_runway_is_dropped() {
        let data = format!("{}\n120 Taxiway\n111 0.0 0.0 1\n115 0.0 0.001\n", header("NORW"));
        let store = AirportStore::new();
        assert_eq!(read(&data, &store).airports, 0);
    }

    #[test]
    fn test_airport_outside_region_is_skipped() {
        let far_runway = RUNWAY_09_27
            .replace(" 0.000000 0.000000 ", " 10.000000 10.000000 ")
            .replace(" 0.000000 0.010000 ", " 10.000000 10.010000 ");
        let data = format!("{}\n{}\n{}\n{}\n", header("FAR"), far_runway, header("NEAR"), RUNWAY_09_27);
        let store = AirportStore::new();
        read(&data, &store);

        assert_eq!(store.ids(), vec!["NEAR".to_string()]);
    }

    #[test]
    fn test_known_airport_is_not_reread() {
        let store = AirportStore::new();
        let first = format!("{}\n{}\n", header("ZERO"), RUNWAY_09_27);
        read(&first, &store);

        let shifted = RUNWAY_09_27.replace(" 09 0.000000 ", " 09 0.001000 ");
        let second = format!("{}\n{}\n", header("ZERO"), shifted);
        assert_eq!(read(&second, &store).airports, 0);
        let lat = store.with_airport("ZERO", |a| a.runway_ends()[0].lat).unwrap();
        assert!(lat.abs() < 1e-9);
    }

    #[test]
    fn test_centerline_section_builds_taxiways() {
        let data = format!(
            "{}\n{}\n120 Taxiway A\n111 0.001 0.002 1\n111 0.001 0.003 1\n111 0.001 0.003 1\n115 0.001 0.004\n120 Edge line\n111 0.002 0.002 3\n113 0.002 0.003 3\n",
            header("CTRL"),
            RUNWAY_09_27
        );
        let store = AirportStore::new();
        read(&data, &store);

        let (nodes, taxi_edges) = store
            .with_airport("CTRL", |a| {
                (a.nodes().len(), a.edges().iter().filter(|e| !e.is_runway()).count())
            })
            .unwrap();
        assert_eq!(nodes, 2);
        assert_eq!(taxi_edges, 1);
    }

    #[test]
    fn test_row_ending_section_is_processed() {
        // the second airport header directly follows the vertices
        let data = format!(
            "{}\n{}\n120\n111 0.001 0.002 1\n115 0.001 0.004\n{}\n{}\n",
            header("ONE"),
            RUNWAY_09_27,
            header("TWO"),
            RUNWAY_09_27
        );
        let store = AirportStore::new();
        assert_eq!(read(&data, &store).airports, 2);
    }

    #[test]
    fn test_route_network() {
        let data = format!(
            "{}\n{}\n1200\n1201 0.001 0.002 both 0 A_start\n1201 0.001 0.004 both 1 A_end\n1201 0.002 0.004 both 3 B_end\n1202 0 1 twoway taxiway A\n1202 1 3 twoway taxiway B\n1202 1 2 twoway taxiway C\n",
            header("ROUT"),
            RUNWAY_09_27
        );
        let store = AirportStore::new();
        read(&data, &store);

        let (nodes, taxi_edges) = store
            .with_airport("ROUT", |a| {
                (a.nodes().len(), a.edges().iter().filter(|e| !e.is_runway()).count())
            })
            .unwrap();
        // index 2 is never defined, so the edge to it is rejected
        assert_eq!(nodes, 4);
        assert_eq!(taxi_edges, 2);
    }

    #[test]
    fn test_centerlines_win_over_route_network() {
        let data = format!(
            "{}\n{}\n120\n111 0.001 0.002 1\n115 0.001 0.004\n1201 0.003 0.002 both 0 X\n1201 0.003 0.004 both 1 Y\n1202 0 1 twoway taxiway\n",
            header("BOTH"),
            RUNWAY_09_27
        );
        let store = AirportStore::new();
        read(&data, &store);

        let taxi_edges = store
            .with_airport("BOTH", |a| a.edges().iter().filter(|e| !e.is_runway()).count())
            .unwrap();
        assert_eq!(taxi_edges, 1);
    }

    #[test]
    fn test_network_format_is_decided_per_airport() {
        let data = format!(
            "{}\n{}\n120\n111 0.001 0.002 1\n115 0.001 0.004\n{}\n{}\n1201 0.001 0.002 both 0 X\n1201 0.001 0.004 both 1 Y\n1202 0 1 twoway taxiway\n",
            header("CTRL"),
            RUNWAY_09_27,
            header("ROUT"),
            RUNWAY_09_27
        );
        let store = AirportStore::new();
        read(&data, &store);

        let taxi_edges = store
            .with_airport("ROUT", |a| a.edges().iter().filter(|e| !e.is_runway()).count())
            .unwrap();
        assert_eq!(taxi_edges, 1);
    }

    #[test]
    fn test_malformed_records_are_skipped() {
        let bad_runway = RUNWAY_09_27.replace(" 09 0.000000 ", " 09 zero ");
        let data = format!(
            "{}\n{}\n100 too short\n{}\n120\n111 north 0.002 1\n111 0.001 0.003 1\n",
            header("BAD"),
            bad_runway,
            RUNWAY_09_27
        );
        let store = AirportStore::new();
        read(&data, &store);

        let summary = store.with_airport("BAD", |a| a.runways_summary()).unwrap();
        assert_eq!(summary, "09/27");
    }

    #[test]
    fn test_invalid_utf8_is_tolerated() {
        let mut data = b"1 1000 0 0 UTF8 Caf\xe9 airport\n".to_vec();
        data.extend_from_slice(RUNWAY_09_27.as_bytes());
        data.push(b'\n');
        let store = AirportStore::new();
        let stop = AtomicBool::new(false);
        let region = BoundingBox::new(-1.0, -1.0, 1.0, 1.0);
        AptDatReader::new(&store, region, NetworkSettings::default(), 8.0, &stop)
            .read(Cursor::new(data))
            .unwrap();

        assert!(store.contains("UTF8"));
    }

    #[test]
    fn test_heliport_header_closes_airport() {
        let data = format!(
            "{}\n{}\n17 100 0 0 HELI Heliport\n100 45.00 1 0 0.25 0 2 1 09 0.5 0.5 0 0 3 2 1 0 27 0.5 0.51 0 0 3 2 1 0\n",
            header("LAND"),
            RUNWAY_09_27
        );
        let store = AirportStore::new();
        read(&data, &store);

        assert_eq!(store.ids(), vec!["HELI".to_string(), "LAND".to_string()]);
    }

    #[test]
    fn test_stop_request_drops_current_airport() {
        let data = format!("{}\n{}\n", header("STOP"), RUNWAY_09_27);
        let store = AirportStore::new();
        let stop = AtomicBool::new(true);
        let stats = AptDatReader::new(
            &store,
            BoundingBox::new(-1.0, -1.0, 1.0, 1.0),
            NetworkSettings::default(),
            8.0,
            &stop,
        )
        .read(Cursor::new(data.as_bytes()))
        .unwrap();

        assert!(stats.stopped);
        assert!(store.is_empty());
    }

    #[test]
    fn test_stop_mid_stream_drops_only_current_airport() {
        let lines = [
            header("ONE"),
            RUNWAY_09_27.to_string(),
            "99".to_string(),
            header("TWO"),
            RUNWAY_09_27.to_string(),
            "120 Taxiway".to_string(),
            "111 0.001 0.002 1".to_string(),
            "115 0.001 0.004".to_string(),
        ];
        let store = AirportStore::new();
        let stop = AtomicBool::new(false);
        let input = LineByLine {
            lines: lines.iter().map(|l| format!("{}\n", l)).collect(),
            next: 0,
            stop_at: 5,
            stop: &stop,
        };

        let stats = reader(&store, &stop).read(BufReader::new(input)).unwrap();

        assert!(stats.stopped);
        assert_eq!(stats.airports, 1);
        assert_eq!(stats.lines, 6);
        assert_eq!(store.ids(), vec!["ONE".to_string()]);
    }

    #[test]
    fn test_read_failure_keeps_airport_in_progress() {
        let data = format!("{}\n{}\n99\n{}\n{}\n", header("DONE"), RUNWAY_09_27, header("PART"), RUNWAY_09_27);
        let store = AirportStore::new();
        let stop = AtomicBool::new(false);

        let result = reader(&store, &stop).read(BufReader::new(FailsAtEnd(Cursor::new(data.into_bytes()))));

        assert!(matches!(result, Err(ParseError::Io(_))));
        assert_eq!(store.ids(), vec!["DONE".to_string(), "PART".to_string()]);
    }

    #[test]
    fn test_read_failure_inside_centerline_keeps_airport() {
        let data = format!("{}\n{}\n120 Taxiway\n111 0.001 0.002 1\n", header("PART"), RUNWAY_09_27);
        let store = AirportStore::new();
        let stop = AtomicBool::new(false);

        let result = reader(&store, &stop).read(BufReader::new(FailsAtEnd(Cursor::new(data.into_bytes()))));

        assert!(matches!(result, Err(ParseError::Io(_))));
        let summary = store.with_airport("PART", |a| a.runways_summary()).unwrap();
        assert_eq!(summary, "09/27");
    }

    #[test]
    fn test_read_failure_drops_invalid_airport() {
        // header only, no runway yet
        let data = format!("{}\n", header("NORW"));
        let store = AirportStore::new();
        let stop = AtomicBool::new(false);

        let result = reader(&store, &stop).read(BufReader::new(FailsAtEnd(Cursor::new(data.into_bytes()))));

        assert!(result.is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_malformed_line_type_abandons_section() {
        let data = format!(
            "{}\n{}\n120\n111 0.001 0.002 1\n111 0.001 0.003 x\n115 0.001 0.004\n",
            header("TYPE"),
            RUNWAY_09_27
        );
        let store = AirportStore::new();
        read(&data, &store);

        let taxi_edges = store
            .with_airport("TYPE", |a| a.edges().iter().filter(|e| !e.is_runway()).count())
            .unwrap();
        assert_eq!(taxi_edges, 0);
    }

    #[test]
    fn test_dump_directory_receives_csv() {
        let dir = tempfile::tempdir().unwrap();
        let data = format!("{}\n{}\n", header("DUMP"), RUNWAY_09_27);
        let store = AirportStore::new();
        let stop = AtomicBool::new(false);
        AptDatReader::new(
            &store,
            BoundingBox::new(-1.0, -1.0, 1.0, 1.0),
            NetworkSettings::default(),
            8.0,
            &stop,
        )
        .with_dump_directory(Some(dir.path()))
        .read(Cursor::new(data.as_bytes()))
        .unwrap();

        let csv = std::fs::read_to_string(dir.path().join("DUMP.csv")).unwrap();
        assert!(csv.starts_with("type,BOT,symbol"));
    }

    #[test]
    fn test_open_gzipped_file() {
        use flate2::write::GzEncoder;
        use flate2::Compression;
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("apt.dat.gz");
        let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        write!(encoder, "{}\n{}\n", header("GZIP"), RUNWAY_09_27).unwrap();
        encoder.finish().unwrap();

        let store = AirportStore::new();
        let stop = AtomicBool::new(false);
        AptDatReader::new(
            &store,
            BoundingBox::new(-1.0, -1.0, 1.0, 1.0),
            NetworkSettings::default(),
            8.0,
            &stop,
        )
        .read(open_apt_dat(&path).unwrap())
        .unwrap();

        assert!(store.contains("GZIP"));
    }
}
