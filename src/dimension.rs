//! Box-counting fractal dimension estimation.
//!
//! Points are projected to local planar meters, covered by grids at a fixed
//! ladder of scales (1/8 down to 1/256 of the bounding box), and the
//! dimension is recovered as the least-squares slope of log N(ε) against
//! log(1/ε). Deliberately coarse: single-reference projection, fixed scale
//! ladder. Degenerate inputs yield the neutral sentinel 1.0, never an error.

use std::collections::HashSet;

use crate::geo::GeoPoint;
use crate::projection::{self, BoundingBox, ProjectedPoint};

/// Grid divisors applied to the bounding-box size, doubling per scale
const SCALE_DIVISORS: [f64; 6] = [8.0, 16.0, 32.0, 64.0, 128.0, 256.0];

/// Estimates outside this band are measurement artifacts
const MIN_PLAUSIBLE: f64 = 0.5;
const MAX_PLAUSIBLE: f64 = 3.0;

/// Theoretical dimension of the Koch curve, log 4 / log 3 ≈ 1.26186
pub fn koch_dimension() -> f64 {
    4.0_f64.ln() / 3.0_f64.ln()
}

/// Estimate the box-counting dimension of a point set.
///
/// Returns 1.0 for fewer than 10 points, for extents under one meter, when
/// fewer than 3 grid scales carry information, or when the regression slope
/// falls outside [0.5, 3.0].
pub fn fractal_dimension(points: &[GeoPoint]) -> f64 {
    if points.len() < 10 {
        return 1.0;
    }

    let projected: Vec<ProjectedPoint> = points.iter().map(|&p| projection::to_planar(p)).collect();
    let bbox = BoundingBox::of(&projected);
    let size = bbox.size();
    if size < 1.0 {
        return 1.0;
    }

    // One (log 1/ε, log N) sample per scale that covers more than one cell
    let mut samples = Vec::with_capacity(SCALE_DIVISORS.len());
    for divisor in SCALE_DIVISORS {
        let eps = size / divisor;
        let n = occupied_cells(&projected, eps, bbox.min_x, bbox.min_y);
        if n > 1 {
            samples.push(((1.0 / eps).ln(), (n as f64).ln()));
        }
    }
    if samples.len() < 3 {
        return 1.0;
    }

    let slope = regression_slope(&samples);
    if !(MIN_PLAUSIBLE..=MAX_PLAUSIBLE).contains(&slope) {
        return 1.0;
    }
    slope
}

/// Number of distinct grid cells of edge `eps` containing at least one point
fn occupied_cells(points: &[ProjectedPoint], eps: f64, min_x: f64, min_y: f64) -> usize {
    let mut covered: HashSet<(i64, i64)> = HashSet::new();
    for p in points {
        let col = ((p.x - min_x) / eps).floor() as i64;
        let row = ((p.y - min_y) / eps).floor() as i64;
        covered.insert((row, col));
    }
    covered.len()
}

/// Ordinary least-squares slope over (x, y) samples
pub fn regression_slope(samples: &[(f64, f64)]) -> f64 {
    let n = samples.len() as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;
    for &(x, y) in samples {
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
    }
    (n * sum_xy - sum_x * sum_y) / (n * sum_x2 - sum_x * sum_x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::koch::koch_curve;

    #[test]
    fn koch_dimension_value() {
        assert!((koch_dimension() - 1.26186).abs() < 1e-5);
    }

    #[test]
    fn too_few_points_returns_sentinel() {
        let points: Vec<GeoPoint> = (0..9)
            .map(|i| GeoPoint::new(43.5, 33.0 + i as f64 * 0.1))
            .collect();
        assert_eq!(fractal_dimension(&points), 1.0);
    }

    #[test]
    fn sub_meter_extent_returns_sentinel() {
        // 10 points within a few centimeters of each other
        let points: Vec<GeoPoint> = (0..10)
            .map(|i| GeoPoint::new(43.5, 35.0 + i as f64 * 1e-9))
            .collect();
        assert_eq!(fractal_dimension(&points), 1.0);
    }

    #[test]
    fn regression_slope_recovers_linear_data() {
        let samples: Vec<(f64, f64)> = (1..=6).map(|i| (i as f64, 2.0 * i as f64 + 1.0)).collect();
        assert!((regression_slope(&samples) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn dense_straight_line_is_one_dimensional() {
        let points: Vec<GeoPoint> = (0..=1000)
            .map(|i| GeoPoint::new(43.5, 33.0 + i as f64 * 4.0 / 1000.0))
            .collect();
        let d = fractal_dimension(&points);
        assert!((d - 1.0).abs() < 0.1, "straight line gave D = {d}");
    }

    #[test]
    fn koch_curve_approaches_theoretical_dimension() {
        let base = [GeoPoint::new(43.5, 33.0), GeoPoint::new(43.5, 37.0)];

        // The gap to log(4)/log(3) shrinks as refinement adds detail below
        // the grid scales; grid discretization keeps this non-strict, so
        // allow a little slack between levels
        let gap = |level: usize| {
            let curve = koch_curve(&base, level);
            (fractal_dimension(&curve) - koch_dimension()).abs()
        };

        let gap4 = gap(4);
        let gap6 = gap(6);
        assert!(gap6 < 0.2, "level-6 Koch curve gap was {gap6}");
        assert!(
            gap6 <= gap4 + 0.05,
            "gap grew with refinement: level 4 = {gap4}, level 6 = {gap6}"
        );
    }

    #[test]
    fn estimate_is_deterministic() {
        let base = [GeoPoint::new(43.5, 33.0), GeoPoint::new(43.5, 37.0)];
        let curve = koch_curve(&base, 4);
        assert_eq!(fractal_dimension(&curve), fractal_dimension(&curve));
    }
}
