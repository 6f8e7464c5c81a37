//! Geographic bounding boxes.

use super::sphere::{project, EARTH_RADIUS_M};

/// An axis-aligned latitude/longitude rectangle.
///
/// A fresh box is empty (all sides NaN) and grows as positions are added.
/// Boxes crossing the antimeridian are not supported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}

impl BoundingBox {
    /// An empty box which contains nothing.
    pub fn empty() -> Self {
        Self {
            south: f64::NAN,
            west: f64::NAN,
            north: f64::NAN,
            east: f64::NAN,
        }
    }

    /// Create a box from explicit edges.
    pub fn new(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self {
            south,
            west,
            north,
            east,
        }
    }

    /// Square box of `radius_m` around `center`.
    pub fn around(center: (f64, f64), radius_m: f64) -> Self {
        let mut bounds = Self::new(center.0, center.1, center.0, center.1);
        bounds.enlarge_m(radius_m);
        bounds
    }

    /// Whether any position has been added yet.
    pub fn is_empty(&self) -> bool {
        self.south.is_nan() || self.west.is_nan() || self.north.is_nan() || self.east.is_nan()
    }

    /// Grow the box so it includes `pos`.
    pub fn enlarge(&mut self, pos: (f64, f64)) {
        let (lat, lon) = pos;
        if self.is_empty() {
            *self = Self::new(lat, lon, lat, lon);
            return;
        }
        self.south = self.south.min(lat);
        self.north = self.north.max(lat);
        self.west = self.west.min(lon);
        self.east = self.east.max(lon);
    }

    /// Push every side outwards by `dist_m` meters.
    pub fn enlarge_m(&mut self, dist_m: f64) {
        if self.is_empty() {
            return;
        }
        let dlat = (dist_m / EARTH_RADIUS_M).to_degrees();
        self.south = (self.south - dlat).max(-90.0);
        self.north = (self.north + dlat).min(90.0);

        // Longitude degrees shrink towards the poles, use the wider latitude
        let widest = if self.south.abs() > self.north.abs() {
            self.south
        } else {
            self.north
        };
        let west = project((widest, self.west), 270.0, dist_m).1;
        let east = project((widest, self.east), 90.0, dist_m).1;
        self.west = west.max(-180.0).min(self.west);
        self.east = east.min(180.0).max(self.east);
    }

    /// Whether `pos` lies inside the box (edges inclusive).
    pub fn contains(&self, pos: (f64, f64)) -> bool {
        let (lat, lon) = pos;
        !self.is_empty()
            && lat >= self.south
            && lat <= self.north
            && lon >= self.west
            && lon <= self.east
    }

    /// Whether two boxes share any area (touching edges count as overlap).
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.south <= other.north
            && other.south <= self.north
            && self.west <= other.east
            && other.west <= self.east
    }

    /// Center of the box, or `None` when empty.
    pub fn center(&self) -> Option<(f64, f64)> {
        if self.is_empty() {
            return None;
        }
        Some((
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        ))
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{:.4},{:.4}]-[{:.4},{:.4}]",
            self.south, self.west, self.north, self.east
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::distance_m;

    #[test]
    fn test_empty_box_contains_nothing() {
        let bounds = BoundingBox::empty();
        assert!(bounds.is_empty());
        assert!(!bounds.contains((0.0, 0.0)));
        assert!(bounds.center().is_none());
    }

    #[test]
    fn test_enlarge_from_empty() {
        let mut bounds = BoundingBox::empty();
        bounds.enlarge((10.0, 20.0));
        bounds.enlarge((11.0, 19.0));

        assert_eq!(bounds, BoundingBox::new(10.0, 19.0, 11.0, 20.0));
        assert!(bounds.contains((10.5, 19.5)));
        assert!(!bounds.contains((12.0, 19.5)));
    }

    #[test]
    fn test_enlarge_m_pads_all_sides() {
        let mut bounds = BoundingBox::new(0.0, 0.0, 0.0, 0.0);
        bounds.enlarge_m(1000.0);

        let north_pad = distance_m((0.0, 0.0), (bounds.north, 0.0));
        let east_pad = distance_m((0.0, 0.0), (0.0, bounds.east));
        assert!((north_pad - 1000.0).abs() < 1.0);
        assert!((east_pad - 1000.0).abs() < 1.0);
        assert!(bounds.south < 0.0 && bounds.west < 0.0);
    }

    #[test]
    fn test_around_center() {
        let bounds = BoundingBox::around((50.0, 8.0), 5000.0);
        let center = bounds.center().unwrap();
        assert!((center.0 - 50.0).abs() < 1e-9);
        assert!((center.1 - 8.0).abs() < 1e-9);
        assert!(bounds.contains((50.04, 8.06)));
        assert!(!bounds.contains((50.1, 8.0)));
    }

    #[test]
    fn test_overlaps_partial_and_disjoint() {
        let a = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
        let partial = BoundingBox::new(0.5, 0.5, 2.0, 2.0);
        let disjoint = BoundingBox::new(1.5, 1.5, 2.0, 2.0);

        assert!(a.overlaps(&partial));
        assert!(partial.overlaps(&a));
        assert!(!a.overlaps(&disjoint));
        assert!(!a.overlaps(&BoundingBox::empty()));
    }
}
