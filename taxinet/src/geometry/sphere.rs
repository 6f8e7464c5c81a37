//! Great-circle helpers on a spherical earth.

use std::f64::consts::PI;

/// Mean earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

const DEG_TO_RAD: f64 = PI / 180.0;
const RAD_TO_DEG: f64 = 180.0 / PI;

/// Calculate the great-circle distance between two positions.
///
/// Uses the haversine formula for accuracy over short distances.
///
/// # Arguments
///
/// * `from` - First position as (latitude, longitude) in degrees
/// * `to` - Second position as (latitude, longitude) in degrees
///
/// # Returns
///
/// Distance in meters.
///
/// # Example
///
/// ```
/// use taxinet::geometry::distance_m;
///
/// // One degree of latitude is roughly 111 km
/// let dist = distance_m((0.0, 0.0), (1.0, 0.0));
/// assert!((dist - 111_195.0).abs() < 10.0);
/// ```
pub fn distance_m(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lon1) = from;
    let (lat2, lon2) = to;

    let lat1_rad = lat1 * DEG_TO_RAD;
    let lat2_rad = lat2 * DEG_TO_RAD;
    let delta_lat = (lat2 - lat1) * DEG_TO_RAD;
    let delta_lon = (lon2 - lon1) * DEG_TO_RAD;

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Calculate the initial bearing from one position to another.
///
/// Returns the forward azimuth normalized to 0-360.
///
/// # Example
///
/// ```
/// use taxinet::geometry::bearing_deg;
///
/// let bearing = bearing_deg((0.0, 0.0), (0.0, 1.0));
/// assert!((bearing - 90.0).abs() < 0.01);
/// ```
pub fn bearing_deg(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lon1) = from;
    let (lat2, lon2) = to;

    let lat1_rad = lat1 * DEG_TO_RAD;
    let lat2_rad = lat2 * DEG_TO_RAD;
    let delta_lon = (lon2 - lon1) * DEG_TO_RAD;

    let y = delta_lon.sin() * lat2_rad.cos();
    let x = lat1_rad.cos() * lat2_rad.sin() - lat1_rad.sin() * lat2_rad.cos() * delta_lon.cos();

    normalize_heading(y.atan2(x) * RAD_TO_DEG)
}

/// Project a position along a bearing for a given distance.
///
/// Negative distances project backwards, i.e. along the reciprocal bearing.
///
/// # Arguments
///
/// * `start` - Starting position as (latitude, longitude) in degrees
/// * `bearing` - True bearing in degrees
/// * `dist_m` - Distance in meters
pub fn project(start: (f64, f64), bearing: f64, dist_m: f64) -> (f64, f64) {
    let (lat1, lon1) = start;
    let lat1_rad = lat1 * DEG_TO_RAD;
    let lon1_rad = lon1 * DEG_TO_RAD;
    let bearing_rad = bearing * DEG_TO_RAD;
    let angular_distance = dist_m / EARTH_RADIUS_M;

    let sin_lat1 = lat1_rad.sin();
    let cos_lat1 = lat1_rad.cos();
    let sin_d = angular_distance.sin();
    let cos_d = angular_distance.cos();

    let lat2_rad = (sin_lat1 * cos_d + cos_lat1 * sin_d * bearing_rad.cos()).asin();
    let lon2_rad =
        lon1_rad + (bearing_rad.sin() * sin_d * cos_lat1).atan2(cos_d - sin_lat1 * lat2_rad.sin());

    let mut lon2 = lon2_rad * RAD_TO_DEG;
    if lon2 > 180.0 {
        lon2 -= 360.0;
    } else if lon2 < -180.0 {
        lon2 += 360.0;
    }

    (lat2_rad * RAD_TO_DEG, lon2)
}

/// Normalize a heading to the range [0, 360).
pub fn normalize_heading(heading: f64) -> f64 {
    let h = heading.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

/// Fold a heading onto the undirected range [0, 180).
///
/// Edges are stored without direction, so 270° and 90° describe the same line.
pub fn axial_heading(heading: f64) -> f64 {
    let h = normalize_heading(heading);
    if h >= 180.0 {
        h - 180.0
    } else {
        h
    }
}

/// Signed difference from one heading to another, in (-180, 180].
///
/// Positive means `to` lies clockwise of `from`.
///
/// # Example
///
/// ```
/// use taxinet::geometry::heading_diff;
///
/// assert_eq!(heading_diff(350.0, 10.0), 20.0);
/// assert_eq!(heading_diff(10.0, 350.0), -20.0);
/// ```
pub fn heading_diff(from: f64, to: f64) -> f64 {
    let diff = normalize_heading(to - from);
    if diff > 180.0 {
        diff - 360.0
    } else {
        diff
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== distance ====================

    #[test]
    fn test_distance_same_point_is_zero() {
        assert_eq!(distance_m((53.63, 9.99), (53.63, 9.99)), 0.0);
    }

    #[test]
    fn test_distance_along_equator() {
        // 0.01° of longitude at the equator is ~1112 m
        let dist = distance_m((0.0, 0.0), (0.0, 0.01));
        assert!((dist - 1111.95).abs() < 0.1, "got {}", dist);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = (47.46, 8.55);
        let b = (47.48, 8.57);
        assert!((distance_m(a, b) - distance_m(b, a)).abs() < 1e-9);
    }

    // ==================== bearing ====================

    #[test]
    fn test_bearing_cardinal_directions() {
        assert!((bearing_deg((0.0, 0.0), (1.0, 0.0)) - 0.0).abs() < 0.01);
        assert!((bearing_deg((0.0, 0.0), (0.0, 1.0)) - 90.0).abs() < 0.01);
        assert!((bearing_deg((0.0, 0.0), (-1.0, 0.0)) - 180.0).abs() < 0.01);
        assert!((bearing_deg((0.0, 0.0), (0.0, -1.0)) - 270.0).abs() < 0.01);
    }

    #[test]
    fn test_bearing_diagonal() {
        let bearing = bearing_deg((0.0, 0.0), (0.001, 0.001));
        assert!((bearing - 45.0).abs() < 0.01, "got {}", bearing);
    }

    // ==================== project ====================

    #[test]
    fn test_project_then_measure() {
        let start = (50.0, 8.0);
        let end = project(start, 70.0, 1500.0);

        assert!((distance_m(start, end) - 1500.0).abs() < 0.5);
        assert!((bearing_deg(start, end) - 70.0).abs() < 0.05);
    }

    #[test]
    fn test_project_negative_distance_goes_backwards() {
        let start = (0.0, 0.0);
        let end = project(start, 90.0, -1000.0);
        assert!(end.1 < 0.0);
        assert!(end.0.abs() < 1e-9);
    }

    // ==================== headings ====================

    #[test]
    fn test_normalize_heading() {
        assert_eq!(normalize_heading(0.0), 0.0);
        assert_eq!(normalize_heading(360.0), 0.0);
        assert_eq!(normalize_heading(-90.0), 270.0);
        assert_eq!(normalize_heading(725.0), 5.0);
    }

    #[test]
    fn test_axial_heading() {
        assert_eq!(axial_heading(90.0), 90.0);
        assert_eq!(axial_heading(270.0), 90.0);
        assert_eq!(axial_heading(180.0), 0.0);
        assert_eq!(axial_heading(-10.0), 170.0);
    }

    #[test]
    fn test_heading_diff_wraps() {
        assert_eq!(heading_diff(0.0, 90.0), 90.0);
        assert_eq!(heading_diff(90.0, 0.0), -90.0);
        assert_eq!(heading_diff(350.0, 10.0), 20.0);
        assert_eq!(heading_diff(0.0, 180.0), 180.0);
    }
}
