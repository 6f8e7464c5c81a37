//! Flat-earth approximation around a reference position.
//!
//! Good to well under a meter over the few hundred meters an airport edge
//! spans, which is all the nearest-edge search needs.

use super::sphere::EARTH_RADIUS_M;

/// Convert a geographic position to planar meters relative to `origin`.
///
/// Returns `(x, y)` with x pointing east and y pointing north.
pub fn to_local(origin: (f64, f64), pos: (f64, f64)) -> (f64, f64) {
    let x = (pos.1 - origin.1).to_radians() * EARTH_RADIUS_M * origin.0.to_radians().cos();
    let y = (pos.0 - origin.0).to_radians() * EARTH_RADIUS_M;
    (x, y)
}

/// Inverse of [`to_local`].
pub fn from_local(origin: (f64, f64), local: (f64, f64)) -> (f64, f64) {
    let lat = origin.0 + (local.1 / EARTH_RADIUS_M).to_degrees();
    let lon = origin.1 + (local.0 / (EARTH_RADIUS_M * origin.0.to_radians().cos())).to_degrees();
    (lat, lon)
}

/// Squared distances between a point and a line segment in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentDistance {
    /// Squared distance from the point to the infinite line through the segment.
    pub dist2: f64,
    /// Position of the foot of the perpendicular along the segment.
    ///
    /// 0 is the segment start, 1 its end; values outside [0, 1] lie beyond.
    pub t: f64,
    /// Squared length of the segment.
    pub len2: f64,
    /// The foot of the perpendicular (base point) in planar coordinates.
    pub base: (f64, f64),
}

impl SegmentDistance {
    /// Compute the distances of `point` to the segment `from`-`to`.
    ///
    /// A degenerate segment (both ends equal) is treated as a single point.
    pub fn compute(point: (f64, f64), from: (f64, f64), to: (f64, f64)) -> Self {
        let dx = to.0 - from.0;
        let dy = to.1 - from.1;
        let len2 = dx * dx + dy * dy;

        if len2 <= f64::EPSILON {
            let ex = point.0 - from.0;
            let ey = point.1 - from.1;
            return Self {
                dist2: ex * ex + ey * ey,
                t: 0.0,
                len2: 0.0,
                base: from,
            };
        }

        let t = ((point.0 - from.0) * dx + (point.1 - from.1) * dy) / len2;
        let base = (from.0 + t * dx, from.1 + t * dy);
        let ex = point.0 - base.0;
        let ey = point.1 - base.1;

        Self {
            dist2: ex * ex + ey * ey,
            t,
            len2,
            base,
        }
    }

    /// Squared distance by which the base point lies beyond the segment.
    ///
    /// Zero when the base point falls onto the segment itself.
    pub fn beyond_sqr(&self) -> f64 {
        if self.t < 0.0 {
            self.t * self.t * self.len2
        } else if self.t > 1.0 {
            (self.t - 1.0) * (self.t - 1.0) * self.len2
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_round_trip() {
        let origin = (47.45, 8.56);
        let pos = (47.452, 8.563);
        let local = to_local(origin, pos);
        let back = from_local(origin, local);
        assert!((back.0 - pos.0).abs() < 1e-12);
        assert!((back.1 - pos.1).abs() < 1e-12);
    }

    #[test]
    fn test_local_axes() {
        let (x, y) = to_local((0.0, 0.0), (0.0, 0.001));
        assert!(x > 111.0 && x < 112.0);
        assert!(y.abs() < 1e-9);

        let (x, y) = to_local((0.0, 0.0), (0.001, 0.0));
        assert!(x.abs() < 1e-9);
        assert!(y > 111.0 && y < 112.0);
    }

    #[test]
    fn test_segment_distance_perpendicular() {
        let d = SegmentDistance::compute((5.0, 3.0), (0.0, 0.0), (10.0, 0.0));
        assert!((d.dist2 - 9.0).abs() < 1e-12);
        assert!((d.t - 0.5).abs() < 1e-12);
        assert_eq!(d.base, (5.0, 0.0));
        assert_eq!(d.beyond_sqr(), 0.0);
    }

    #[test]
    fn test_segment_distance_beyond_end() {
        let d = SegmentDistance::compute((13.0, 4.0), (0.0, 0.0), (10.0, 0.0));
        // Distance to the infinite line only counts the perpendicular part
        assert!((d.dist2 - 16.0).abs() < 1e-12);
        assert!((d.beyond_sqr() - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_segment_distance_before_start() {
        let d = SegmentDistance::compute((-2.0, 0.0), (0.0, 0.0), (10.0, 0.0));
        assert!(d.dist2.abs() < 1e-12);
        assert!((d.beyond_sqr() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_segment() {
        let d = SegmentDistance::compute((3.0, 4.0), (0.0, 0.0), (0.0, 0.0));
        assert!((d.dist2 - 25.0).abs() < 1e-12);
        assert_eq!(d.beyond_sqr(), 0.0);
    }
}
