//! Stochastic midpoint-displacement refinement.
//!
//! Models the coastline paradox: each pass inserts one randomly displaced
//! midpoint into every segment, and the displacement amplitude halves per
//! pass so the curve roughens toward a fixed envelope instead of diverging.
//! The random source is always caller-supplied, never global, so runs are
//! reproducible by seed and concurrent refinements never share state.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::geo::GeoPoint;

/// Hard cap on refinement passes (point count doubles per pass)
pub const MAX_LEVELS: usize = 10;

/// Segments shorter than this (in degrees) keep their exact midpoint
const MIN_SEGMENT: f64 = 1e-9;

/// Apply `levels` midpoint-displacement passes to `base`.
///
/// Level 0 returns a copy of the input. `initial_deviation` is the full
/// perpendicular offset range (degrees) of the first pass, halved after
/// every pass. Requests above [`MAX_LEVELS`] are clamped with a warning.
pub fn refine(
    base: &[GeoPoint],
    levels: usize,
    initial_deviation: f64,
    rng: &mut ChaCha8Rng,
) -> Vec<GeoPoint> {
    let levels = if levels > MAX_LEVELS {
        eprintln!(
            "Warning: {} refinement levels requested, clamping to {}",
            levels, MAX_LEVELS
        );
        MAX_LEVELS
    } else {
        levels
    };

    let mut points = base.to_vec();
    let mut deviation = initial_deviation;
    for _ in 0..levels {
        points = displace_pass(&points, deviation, rng);
        deviation *= 0.5;
    }
    points
}

/// One pass: original points interleaved with displaced midpoints.
/// Doubles the segment count; polylines with fewer than 2 points pass
/// through unchanged.
fn displace_pass(points: &[GeoPoint], deviation: f64, rng: &mut ChaCha8Rng) -> Vec<GeoPoint> {
    if points.len() < 2 {
        return points.to_vec();
    }

    let mut out = Vec::with_capacity(points.len() * 2);
    out.push(points[0]);
    for w in points.windows(2) {
        out.push(displaced_midpoint(w[0], w[1], deviation, rng));
        out.push(w[1]);
    }
    out
}

/// Segment midpoint pushed perpendicular to a→b by a uniform offset in
/// [-deviation/2, +deviation/2]. Near-zero segments get the exact midpoint.
fn displaced_midpoint(a: GeoPoint, b: GeoPoint, deviation: f64, rng: &mut ChaCha8Rng) -> GeoPoint {
    let mid = GeoPoint::new((a.lat + b.lat) / 2.0, (a.lon + b.lon) / 2.0);

    let d_lat = b.lat - a.lat;
    let d_lon = b.lon - a.lon;
    let len = d_lat.hypot(d_lon);
    if len < MIN_SEGMENT {
        return mid;
    }

    // Unit perpendicular in flat lat/lon coordinates
    let perp_lat = -d_lon / len;
    let perp_lon = d_lat / len;
    let offset = (rng.gen::<f64>() - 0.5) * deviation;

    GeoPoint::new(mid.lat + perp_lat * offset, mid.lon + perp_lon * offset)
}
