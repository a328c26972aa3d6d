//! Console reports and JSON export for coastline measurements.

use std::io;

use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::data::Landmark;
use crate::dimension::{fractal_dimension, koch_dimension};
use crate::geo::{haversine, polyline_length, GeoPoint};
use crate::koch::koch_curve;
use crate::midpoint::refine;

/// One measured refinement level
#[derive(Clone, Debug, Serialize)]
pub struct MeasurementRow {
    pub level: usize,
    pub points: usize,
    pub length_km: f64,
    pub dimension: f64,
}

/// Measure the deterministic Koch refinement of `base` at levels 0..=max_level
pub fn koch_rows(base: &[GeoPoint], max_level: usize) -> Vec<MeasurementRow> {
    (0..=max_level)
        .map(|level| {
            let curve = koch_curve(base, level);
            MeasurementRow {
                level,
                points: curve.len(),
                length_km: polyline_length(&curve),
                dimension: fractal_dimension(&curve),
            }
        })
        .collect()
}

/// Measure the stochastic refinement of `base` at levels 0..=max_level.
///
/// Each level is refined from the base with its own run of the supplied
/// generator, so rows share a seed lineage but levels stay independent.
pub fn paradox_rows(
    base: &[GeoPoint],
    max_level: usize,
    deviation: f64,
    rng: &mut ChaCha8Rng,
) -> Vec<MeasurementRow> {
    (0..=max_level)
        .map(|level| {
            let curve = refine(base, level, deviation, rng);
            MeasurementRow {
                level,
                points: curve.len(),
                length_km: polyline_length(&curve),
                dimension: fractal_dimension(&curve),
            }
        })
        .collect()
}

/// Print the base coastline summary: totals, sinuosity, landmark table
pub fn print_coastline_summary(landmarks: &[Landmark]) {
    let points: Vec<GeoPoint> = landmarks.iter().map(|l| l.point).collect();
    let total = polyline_length(&points);

    println!("{}", "═".repeat(80));
    println!("\tBLACK SEA COASTLINE");
    println!("{}", "═".repeat(80));
    println!();
    println!("Geographic points in the polyline:   {}", points.len());

    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        let straight = haversine(*first, *last);
        println!("Straight-line distance:              {:.0} km", straight);
        println!("Coastline length (polyline):         {:.0} km", total);
        if straight > 0.0 {
            println!("Sinuosity ratio:                     {:.2}×", total / straight);
        }
        if points.len() > 1 {
            println!(
                "Mean segment length:                 {:.1} km",
                total / (points.len() - 1) as f64
            );
        }
    }

    println!();
    println!("Key coastline landmarks:");
    println!("{}", "─".repeat(80));
    println!("{:<4} {:<11} {:<11} {:<25}", "No", "Latitude", "Longitude", "Landmark");
    println!("{}", "─".repeat(80));
    for (i, l) in landmarks.iter().enumerate() {
        println!(
            "{:<4} {:<11.4} {:<11.4} {:<25}",
            i + 1,
            l.point.lat,
            l.point.lon,
            l.name
        );
    }
    println!("{}", "═".repeat(80));
}

/// Print the Koch refinement table with the (4/3)^n theoretical length and
/// the estimated dimension against log(4)/log(3)
pub fn print_koch_table(rows: &[MeasurementRow], base_length: f64) {
    println!("{}", "═".repeat(80));
    println!("\tKOCH REFINEMENT — LENGTH AND BOX-COUNTING DIMENSION");
    println!("{}", "═".repeat(80));
    println!(
        "Theoretical Koch dimension: D = log(4)/log(3) ≈ {:.5}",
        koch_dimension()
    );
    println!();
    println!(
        "{:<6} {:<10} {:<12} {:<14} {:<12} {:<12}",
        "Level", "Points", "Length, km", "Theory, km", "D (est.)", "ΔD"
    );
    println!("{}", "─".repeat(80));

    for row in rows {
        let theory = base_length * (4.0 / 3.0_f64).powi(row.level as i32);
        // The estimate is too coarse to compare on the first levels
        let delta = if row.level >= 2 {
            format!("{:+.5}", row.dimension - koch_dimension())
        } else {
            "—".to_string()
        };
        println!(
            "{:<6} {:<10} {:<12.0} {:<14.0} {:<12.5} {:<12}",
            row.level, row.points, row.length_km, theory, row.dimension, delta
        );
    }

    println!("{}", "─".repeat(80));
    println!("Lₙ = L₀ × (4/3)ⁿ: length diverges while the curve stays bounded");
}

/// Print the stochastic refinement table (the coastline paradox demo)
pub fn print_paradox_table(rows: &[MeasurementRow]) {
    println!("{}", "═".repeat(80));
    println!("\tCOASTLINE PARADOX — MIDPOINT DISPLACEMENT");
    println!("{}", "═".repeat(80));
    println!(
        "{:<8} {:<10} {:<12} {:<16}",
        "Level", "Points", "Length, km", "Growth"
    );
    println!("{}", "─".repeat(80));

    let mut prev_length = 0.0;
    for row in rows {
        let growth = if row.level > 0 && prev_length > 0.0 {
            format!(
                "+{:.0} km ({:.2}×)",
                row.length_km - prev_length,
                row.length_km / prev_length
            )
        } else {
            "—".to_string()
        };
        println!(
            "{:<8} {:<10} {:<12.0} {:<16}",
            row.level, row.points, row.length_km, growth
        );
        prev_length = row.length_km;
    }

    println!("{}", "─".repeat(80));
    println!("The finer the measurement, the longer the coast");
}

/// Write measurement rows as pretty-printed JSON
pub fn write_json(rows: &[MeasurementRow], path: &str) -> io::Result<()> {
    let json = serde_json::to_string_pretty(rows)?;
    std::fs::write(path, json)
}
