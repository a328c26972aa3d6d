//! Deterministic Koch subdivision of a polyline.
//!
//! Each iteration replaces every segment AB with four segments through the
//! third-points P1/P3 and the apex P2 of an equilateral triangle raised over
//! the middle third. The 60° rotation is applied to raw lat/lon deltas, the
//! same flat approximation the projection uses: exact on a plane, only
//! approximate on the sphere.

use crate::geo::GeoPoint;

/// Hard cap on iterations. Point count grows as 4^n; ten iterations of even
/// a single segment already exceeds a million points.
pub const MAX_ITERATIONS: usize = 10;

/// Apply `iterations` Koch subdivision passes to `base`.
///
/// Iteration 0 returns a copy of the input. Requests above
/// [`MAX_ITERATIONS`] are clamped with a warning rather than refused.
pub fn koch_curve(base: &[GeoPoint], iterations: usize) -> Vec<GeoPoint> {
    let iterations = if iterations > MAX_ITERATIONS {
        eprintln!(
            "Warning: {} Koch iterations requested, clamping to {}",
            iterations, MAX_ITERATIONS
        );
        MAX_ITERATIONS
    } else {
        iterations
    };

    let mut points = base.to_vec();
    for _ in 0..iterations {
        points = koch_iteration(&points);
    }
    points
}

/// One subdivision pass: every segment contributes (A, P1, P2, P3), and the
/// final point of the polyline is appended once at the end. Polylines with
/// fewer than 2 points pass through unchanged.
fn koch_iteration(points: &[GeoPoint]) -> Vec<GeoPoint> {
    if points.len() < 2 {
        return points.to_vec();
    }

    let mut out = Vec::with_capacity(points.len() * 4);
    for w in points.windows(2) {
        out.extend_from_slice(&koch_segment(w[0], w[1]));
    }
    out.push(points[points.len() - 1]);
    out
}

/// The four leading Koch points for segment a→b
fn koch_segment(a: GeoPoint, b: GeoPoint) -> [GeoPoint; 4] {
    let third_lat = (b.lat - a.lat) / 3.0;
    let third_lon = (b.lon - a.lon) / 3.0;

    let p1 = GeoPoint::new(a.lat + third_lat, a.lon + third_lon);
    let p3 = GeoPoint::new(a.lat + 2.0 * third_lat, a.lon + 2.0 * third_lon);

    // Rotate the P1→P3 vector by +60°: (x, y) → (x·cos − y·sin, x·sin + y·cos)
    let cos60 = 0.5;
    let sin60 = 3.0_f64.sqrt() / 2.0;
    let apex_lon = third_lon * cos60 - third_lat * sin60;
    let apex_lat = third_lon * sin60 + third_lat * cos60;
    let p2 = GeoPoint::new(p1.lat + apex_lat, p1.lon + apex_lon);

    [a, p1, p2, p3]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::polyline_length;

    fn contains_subsequence(haystack: &[GeoPoint], needle: &[GeoPoint]) -> bool {
        let mut it = haystack.iter();
        needle.iter().all(|p| it.any(|q| q == p))
    }

    #[test]
    fn level_zero_is_identity() {
        let base = vec![GeoPoint::new(46.48, 30.73), GeoPoint::new(41.65, 41.63)];
        assert_eq!(koch_curve(&base, 0), base);
    }

    #[test]
    fn degenerate_base_passes_through() {
        assert!(koch_curve(&[], 3).is_empty());
        let single = [GeoPoint::new(1.0, 2.0)];
        assert_eq!(koch_curve(&single, 3), single);
    }

    #[test]
    fn single_segment_construction() {
        // Equatorial segment (lat 0, lon 0..3), thin enough that the flat
        // approximation is near-exact
        let base = [GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 3.0)];
        let curve = koch_curve(&base, 1);

        assert_eq!(curve.len(), 5);
        assert_eq!(curve[0], base[0]);
        assert_eq!(curve[4], base[1]);

        // Thirds at lon 1 and 2, apex raised by sqrt(3)/2 over the middle
        assert!((curve[1].lon - 1.0).abs() < 1e-12);
        assert!(curve[1].lat.abs() < 1e-12);
        assert!((curve[2].lon - 1.5).abs() < 1e-12);
        assert!((curve[2].lat - 3.0_f64.sqrt() / 2.0).abs() < 1e-12);
        assert!((curve[3].lon - 2.0).abs() < 1e-12);
        assert!(curve[3].lat.abs() < 1e-12);

        // Each pass multiplies length by 4/3 (up to spherical distortion)
        let ratio = polyline_length(&curve) / polyline_length(&base);
        assert!((ratio - 4.0 / 3.0).abs() < 1e-3, "ratio was {ratio}");
    }

    #[test]
    fn point_count_follows_power_law() {
        // One segment: 4^n segments, 4^n + 1 points
        let base = [GeoPoint::new(43.5, 33.0), GeoPoint::new(43.5, 37.0)];
        for level in 0..=5 {
            let curve = koch_curve(&base, level);
            assert_eq!(curve.len(), 4_usize.pow(level as u32) + 1);
        }
    }

    #[test]
    fn base_vertices_are_preserved_in_order() {
        let base = vec![
            GeoPoint::new(46.48, 30.73),
            GeoPoint::new(44.62, 33.53),
            GeoPoint::new(43.59, 39.73),
            GeoPoint::new(41.65, 41.63),
        ];
        for level in 1..=3 {
            let curve = koch_curve(&base, level);
            assert!(contains_subsequence(&curve, &base));
        }
    }

    #[test]
    fn output_is_deterministic() {
        let base = [GeoPoint::new(44.0, 33.0), GeoPoint::new(42.0, 39.0)];
        assert_eq!(koch_curve(&base, 4), koch_curve(&base, 4));
    }

    #[test]
    fn excessive_iterations_are_clamped() {
        let base = [GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0)];
        let clamped = koch_curve(&base, MAX_ITERATIONS + 5);
        let capped = koch_curve(&base, MAX_ITERATIONS);
        assert_eq!(clamped.len(), capped.len());
    }
}
