//! Debug dump of an airport's network in GPS Visualizer CSV format.
//!
//! Load the output at <https://www.gpsvisualizer.com/map_input> to inspect
//! nodes and edges on a map.

use std::io::Write;

use super::airport::Airport;

const HEADER: [&str; 10] = [
    "type", "BOT", "symbol", "latitude", "longitude", "time", "speed", "course", "name", "desc",
];

/// Waypoint symbol by number of incident edges.
fn node_symbol(edge_count: usize) -> &'static str {
    match edge_count {
        0 => "pin",
        1 => "circle",
        2 => "square",
        3 => "triangle",
        4 => "diamond",
        _ => "star",
    }
}

impl Airport {
    /// Write all taxi nodes and edges as CSV.
    ///
    /// One `W` row per taxi node and a pair of `T` rows (start and end) per
    /// edge. Runway edges use the runway end positions.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(HEADER)?;

        for (idx, node) in self.nodes.iter().enumerate() {
            let edge_count = node.edges().len();
            csv.write_record([
                "W".to_string(),
                String::new(),
                node_symbol(edge_count).to_string(),
                format!("{:.7}", node.lat),
                format!("{:.7}", node.lon),
                String::new(),
                String::new(),
                String::new(),
                format!("Node {}", idx),
                format!("{} edges", edge_count),
            ])?;
        }

        for (idx, edge) in self.edges.iter().enumerate() {
            let (Some(a), Some(b)) = (
                self.endpoint(edge.kind(), edge.a()),
                self.endpoint(edge.kind(), edge.b()),
            ) else {
                continue;
            };
            csv.write_record([
                "T".to_string(),
                "1".to_string(),
                String::new(),
                format!("{:.7}", a.lat),
                format!("{:.7}", a.lon),
                String::new(),
                String::new(),
                format!("{:.0}", edge.bearing()),
                format!("Edge {}", idx),
                format!("{} nodes {}-{}", edge.kind(), edge.a(), edge.b()),
            ])?;
            csv.write_record([
                "T".to_string(),
                "0".to_string(),
                String::new(),
                format!("{:.7}", b.lat),
                format!("{:.7}", b.lon),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
            ])?;
        }

        csv.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::RunwayThreshold;

    #[test]
    fn test_dump_rows() {
        let mut apt = Airport::new("DUMP");
        apt.add_runway(
            &RunwayThreshold::new("09", 0.0, 0.0, 0.0),
            &RunwayThreshold::new("27", 0.0, 0.01, 0.0),
        );
        let a = apt.add_node(0.001, 0.0, None);
        let b = apt.add_node(0.001, 0.001, None);
        apt.add_edge(a, b, None);

        let mut out = Vec::new();
        apt.write_csv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        // header + 2 nodes + 2 rows per edge
        assert_eq!(lines.len(), 1 + 2 + 4);
        assert_eq!(
            lines[0],
            "type,BOT,symbol,latitude,longitude,time,speed,course,name,desc"
        );
        assert_eq!(lines[1], "W,,circle,0.0010000,0.0000000,,,,Node 0,1 edges");
        assert!(lines[3].starts_with("T,1,,"));
        assert!(lines[3].ends_with(",0.0010000,,,90,Edge 0,runway nodes 0-1"));
        assert!(lines[4].starts_with("T,0,,"));
        assert!(lines[4].contains(",0.0090000,"));
        assert!(lines[6].starts_with("T,0,,0.0010000,0.0010000,"));
    }

    #[test]
    fn test_node_symbols() {
        assert_eq!(node_symbol(0), "pin");
        assert_eq!(node_symbol(3), "triangle");
        assert_eq!(node_symbol(9), "star");
    }
}
