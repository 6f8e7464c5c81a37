//! Taxiway centerline sections.
//!
//! A `120` line segment is followed by vertex rows `111`-`116`. Consecutive
//! vertices are often very close or even identical, so the vertex chain is
//! thinned out before it becomes taxi nodes and edges: an edge grows along
//! the chain until it would get too long or the chain turns away from the
//! edge's initial direction.

use super::apt_dat::{number, ParseError};
use crate::config::NetworkSettings;
use crate::geometry::{bearing_deg, distance_m, heading_diff};
use crate::graph::Airport;

/// Line type codes painted as taxiway centerlines.
const CENTERLINE_TYPES: [u32; 4] = [1, 7, 51, 57];

/// Classification of one row inside a line segment section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum VertexRow {
    /// A centerline vertex
    Centerline(f64, f64),
    /// A vertex of some other paint line
    OtherPaint,
    /// Not a vertex row, ends the section
    EndOfSection,
}

impl VertexRow {
    /// Classify the whitespace separated `fields` of a row.
    ///
    /// Rows `111`/`113` carry the line type in field 3, rows `112`/`114` in
    /// field 5; rows without a line type count as centerline.
    ///
    /// # Errors
    ///
    /// [`ParseError::InvalidNumber`] if the line type or a coordinate of a
    /// vertex row is no number; `line` is reported with it.
    pub(crate) fn classify(fields: &[&str], line: usize) -> Result<Self, ParseError> {
        if fields.len() < 3 {
            return Ok(VertexRow::EndOfSection);
        }
        let line_type_field = match fields[0] {
            "111" | "113" => 3,
            "112" | "114" => 5,
            "115" | "116" => usize::MAX,
            _ => return Ok(VertexRow::EndOfSection),
        };
        let line_type: u32 = match fields.get(line_type_field) {
            Some(field) => number(field, line)?,
            None => 1,
        };
        if !CENTERLINE_TYPES.contains(&line_type) {
            return Ok(VertexRow::OtherPaint);
        }
        Ok(VertexRow::Centerline(
            number(fields[1], line)?,
            number(fields[2], line)?,
        ))
    }
}

/// Vertex chain of one centerline section.
#[derive(Debug, Default)]
pub(crate) struct Centerline {
    vertices: Vec<(f64, f64)>,
}

impl Centerline {
    /// Append a vertex unless it repeats the previous one.
    pub(crate) fn push(&mut self, lat: f64, lon: f64) {
        let repeated = self
            .vertices
            .last()
            .is_some_and(|&(plat, plon)| (plat - lat).abs() < 1e-9 && (plon - lon).abs() < 1e-9);
        if !repeated {
            self.vertices.push((lat, lon));
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Add the thinned-out chain to the airport's network.
    ///
    /// The first and last vertex always become nodes, and the last one is
    /// never merged into the first, so every chain of two or more vertices
    /// adds at least one edge.
    pub(crate) fn add_to(&self, apt: &mut Airport, tuning: &NetworkSettings) {
        let (Some(&first), Some(&last)) = (self.vertices.first(), self.vertices.last()) else {
            return;
        };
        if self.vertices.len() < 2 {
            return;
        }

        let first_idx = apt.add_node(first.0, first.1, None);
        let mut from = first_idx;
        let mut edge_bearing: Option<f64> = None;

        for pair in self.vertices.windows(2) {
            let (b, c) = (pair[0], pair[1]);
            let bc = bearing_deg(b, c);
            let Some(reference) = edge_bearing else {
                edge_bearing = Some(bc);
                continue;
            };

            let from_pos = apt.nodes()[from].lat_lon();
            if distance_m(from_pos, c) > tuning.max_edge_length_m
                || heading_diff(reference, bc).abs() > tuning.max_segment_turn_deg
            {
                let to = apt.add_node(b.0, b.1, None);
                if to != from {
                    apt.add_edge(from, to, None);
                    from = to;
                    edge_bearing = None;
                }
            }
        }

        let to = apt.add_node(last.0, last.1, Some(first_idx));
        if to != from {
            apt.add_edge(from, to, None);
        }
    }
}
