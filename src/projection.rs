//! Local planar projection used by box-counting.
//!
//! Single-reference-point equirectangular approximation tuned for the Black
//! Sea region. Accuracy degrades with distance from the reference point;
//! nothing here enforces the regional extent, callers stay responsible.

use crate::geo::GeoPoint;

/// Reference latitude (mid-Black Sea)
pub const REF_LAT: f64 = 43.5;
/// Reference longitude
pub const REF_LON: f64 = 35.0;
/// Meters per degree of latitude
pub const METERS_PER_DEG_LAT: f64 = 111_194.9;
/// Meters per degree of longitude at the reference latitude
pub const METERS_PER_DEG_LON: f64 = 87_300.0;
/// Degree offset from the reference past which the projection is advisory only
pub const EXTENT_WARN_DEGREES: f64 = 15.0;

/// A point in local planar coordinates (meters)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
}

/// Project a geographic point to local planar meters
pub fn to_planar(p: GeoPoint) -> ProjectedPoint {
    ProjectedPoint {
        x: (p.lon - REF_LON) * METERS_PER_DEG_LON,
        y: (p.lat - REF_LAT) * METERS_PER_DEG_LAT,
    }
}

/// Euclidean distance between two projected points in meters
pub fn planar_distance(a: ProjectedPoint, b: ProjectedPoint) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Total planar length of a projected polyline in meters.
///
/// Sequences with fewer than 2 points have length 0.
pub fn projected_length(points: &[ProjectedPoint]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }
    points.windows(2).map(|w| planar_distance(w[0], w[1])).sum()
}

/// Axis-aligned bounding box in meters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Tight box over a point set; the degenerate (0,0,0,0) box when empty
    pub fn of(points: &[ProjectedPoint]) -> Self {
        let mut bbox = BoundingBox {
            min_x: 0.0,
            max_x: 0.0,
            min_y: 0.0,
            max_y: 0.0,
        };
        let Some(first) = points.first() else {
            return bbox;
        };
        bbox.min_x = first.x;
        bbox.max_x = first.x;
        bbox.min_y = first.y;
        bbox.max_y = first.y;
        for p in points {
            bbox.min_x = bbox.min_x.min(p.x);
            bbox.max_x = bbox.max_x.max(p.x);
            bbox.min_y = bbox.min_y.min(p.y);
            bbox.max_y = bbox.max_y.max(p.y);
        }
        bbox
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Larger of width/height, the base scale for box-counting grids
    pub fn size(&self) -> f64 {
        self.width().max(self.height())
    }
}

/// Largest absolute degree offset of any point from the projection reference.
///
/// Used by callers to warn when a point set drifts outside the regional
/// extent the projection constants were tuned for.
pub fn degrees_from_reference(points: &[GeoPoint]) -> f64 {
    points
        .iter()
        .map(|p| (p.lat - REF_LAT).abs().max((p.lon - REF_LON).abs()))
        .fold(0.0, f64::max)
}
