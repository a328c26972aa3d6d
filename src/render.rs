//! PNG rendering of refined curves.
//!
//! Fits a lat/lon polyline into a margin-padded canvas and strokes its
//! segments, stroke color keyed by iteration index (cool to hot).

use image::{ImageBuffer, Rgb, RgbImage};

use crate::geo::{polyline_length, GeoPoint};
use crate::koch::koch_curve;

const WIDTH: u32 = 1200;
const HEIGHT: u32 = 800;
const MARGIN: u32 = 80;

/// Canvas background (dark slate)
const BACKGROUND: Rgb<u8> = Rgb([15, 23, 42]);

/// Stroke colors per iteration, last entry reused past index 6
const PALETTE: [[u8; 3]; 7] = [
    [96, 165, 250],
    [147, 197, 253],
    [219, 238, 254],
    [253, 224, 71],
    [251, 191, 36],
    [249, 115, 22],
    [239, 68, 68],
];

/// Render a polyline to a PNG file.
///
/// Degenerate inputs (fewer than 2 points, or a near-zero lat/lon range)
/// are skipped with a warning rather than treated as errors.
pub fn render_polyline(
    points: &[GeoPoint],
    iteration: usize,
    path: &str,
) -> Result<(), image::ImageError> {
    if points.len() < 2 {
        eprintln!("Warning: not enough points to render {path}, skipping");
        return Ok(());
    }

    let (min_lat, max_lat, min_lon, max_lon) = lat_lon_bounds(points);
    let lat_range = max_lat - min_lat;
    let lon_range = max_lon - min_lon;
    if lat_range < 1e-9 || lon_range < 1e-9 {
        eprintln!("Warning: degenerate extent, skipping render of {path}");
        return Ok(());
    }

    let mut img: RgbImage = ImageBuffer::from_pixel(WIDTH, HEIGHT, BACKGROUND);

    let inner_w = (WIDTH - 2 * MARGIN) as f64;
    let inner_h = (HEIGHT - 2 * MARGIN) as f64;
    let to_pixel = |p: &GeoPoint| -> (f64, f64) {
        let x = MARGIN as f64 + (p.lon - min_lon) / lon_range * inner_w;
        // Latitude grows northward, pixel rows grow downward
        let y = MARGIN as f64 + (max_lat - p.lat) / lat_range * inner_h;
        (x, y)
    };

    let color = Rgb(PALETTE[iteration.min(PALETTE.len() - 1)]);
    for w in points.windows(2) {
        let (x0, y0) = to_pixel(&w[0]);
        let (x1, y1) = to_pixel(&w[1]);
        draw_line(&mut img, x0, y0, x1, y1, color);
    }

    img.save(path)
}

/// Render `koch_00.png` .. `koch_NN.png` for iterations 0..=max_iter of the
/// Koch refinement of `base`
pub fn render_iterations(
    base: &[GeoPoint],
    max_iter: usize,
    dir: &str,
) -> Result<(), image::ImageError> {
    std::fs::create_dir_all(dir)?;

    for iter in 0..=max_iter {
        let curve = koch_curve(base, iter);
        let path = format!("{dir}/koch_{iter:02}.png");
        render_polyline(&curve, iter, &path)?;
        println!(
            "Saved {} (iteration {}, {} points, {:.0} km)",
            path,
            iter,
            curve.len(),
            polyline_length(&curve)
        );
    }
    Ok(())
}

fn lat_lon_bounds(points: &[GeoPoint]) -> (f64, f64, f64, f64) {
    let mut min_lat = points[0].lat;
    let mut max_lat = points[0].lat;
    let mut min_lon = points[0].lon;
    let mut max_lon = points[0].lon;
    for p in points {
        min_lat = min_lat.min(p.lat);
        max_lat = max_lat.max(p.lat);
        min_lon = min_lon.min(p.lon);
        max_lon = max_lon.max(p.lon);
    }
    (min_lat, max_lat, min_lon, max_lon)
}

/// Stroke a segment by stepping one pixel at a time along its longer axis
fn draw_line(img: &mut RgbImage, x0: f64, y0: f64, x1: f64, y1: f64, color: Rgb<u8>) {
    let dx = x1 - x0;
    let dy = y1 - y0;
    let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as u32;

    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let x = (x0 + dx * t).round();
        let y = (y0 + dy * t).round();
        if x >= 0.0 && y >= 0.0 && (x as u32) < WIDTH && (y as u32) < HEIGHT {
            img.put_pixel(x as u32, y as u32, color);
        }
    }
}
