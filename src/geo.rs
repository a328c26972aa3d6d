//! Geographic points and distance primitives.
//!
//! Angles are degrees at this boundary; great-circle results are kilometers.
//! Planar distances in meters live in `projection`.

/// Mean Earth radius in kilometers (spherical approximation)
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic point (latitude, longitude) in degrees
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Great-circle distance between two points in kilometers (haversine formula)
pub fn haversine(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + (d_lon / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Total great-circle length of a polyline in kilometers.
///
/// Sequences with fewer than 2 points have length 0.
pub fn polyline_length(points: &[GeoPoint]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }
    points.windows(2).map(|w| haversine(w[0], w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn haversine_zero_for_identical_points() {
        let p = GeoPoint::new(43.5, 35.0);
        assert_eq!(haversine(p, p), 0.0);
    }

    #[test]
    fn haversine_is_symmetric() {
        let a = GeoPoint::new(46.48, 30.73);
        let b = GeoPoint::new(41.65, 41.63);
        assert!((haversine(a, b) - haversine(b, a)).abs() < 1e-9);
    }

    #[test]
    fn haversine_one_degree_of_latitude() {
        // One degree of latitude is ~111.19 km on a 6371 km sphere
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(1.0, 0.0);
        let expected = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;
        assert!((haversine(a, b) - expected).abs() < 1e-6);
    }

    #[test]
    fn polyline_length_degenerate_inputs() {
        assert_eq!(polyline_length(&[]), 0.0);
        assert_eq!(polyline_length(&[GeoPoint::new(1.0, 2.0)]), 0.0);
    }

    #[test]
    fn polyline_length_sums_segments() {
        let points = [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(1.0, 0.0),
            GeoPoint::new(2.0, 0.0),
        ];
        let expected = haversine(points[0], points[1]) + haversine(points[1], points[2]);
        assert!((polyline_length(&points) - expected).abs() < 1e-9);
    }
}
