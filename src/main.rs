use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use coastal_fractal::{data, projection, render, report};

#[derive(Parser, Debug)]
#[command(name = "coastal-fractal")]
#[command(about = "Measure the coastline paradox and box-counting fractal dimension")]
struct Args {
    /// Random seed for midpoint displacement (random if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Koch refinement levels for the deterministic table
    #[arg(short = 'k', long, default_value = "6")]
    koch_levels: usize,

    /// Midpoint-displacement levels for the paradox table
    #[arg(short = 'r', long, default_value = "6")]
    refine_levels: usize,

    /// Initial perpendicular deviation for midpoint displacement (degrees)
    #[arg(short = 'd', long, default_value = "0.15")]
    deviation: f64,

    /// Export per-iteration Koch curves as PNGs into this directory
    #[arg(long)]
    export_png: Option<String>,

    /// Export the Koch measurement table as JSON to this path
    #[arg(long)]
    export_json: Option<String>,

    /// Suppress the report tables (exports still run)
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let landmarks = data::sorted_landmarks();
    let base = data::base_polyline();

    if !args.quiet {
        println!("Measuring coastline with seed: {}", seed);
    }

    let drift = projection::degrees_from_reference(&base);
    if drift > projection::EXTENT_WARN_DEGREES {
        eprintln!(
            "Warning: points drift {:.1}° from the projection reference ({:.1}° advised); \
             dimension estimates degrade outside the tuned region",
            drift,
            projection::EXTENT_WARN_DEGREES
        );
    }

    let paradox = report::paradox_rows(&base, args.refine_levels, args.deviation, &mut rng);
    let koch = report::koch_rows(&base, args.koch_levels);

    if !args.quiet {
        report::print_coastline_summary(&landmarks);
        report::print_paradox_table(&paradox);
        let base_length = koch.first().map(|r| r.length_km).unwrap_or(0.0);
        report::print_koch_table(&koch, base_length);
    }

    if let Some(dir) = &args.export_png {
        println!("Rendering Koch iterations to {dir}...");
        if let Err(err) = render::render_iterations(&base, args.koch_levels, dir) {
            eprintln!("Warning: failed to render {dir}: {err}");
        }
    }

    if let Some(path) = &args.export_json {
        match report::write_json(&koch, path) {
            Ok(()) => println!("Saved measurement table to {path}"),
            Err(err) => eprintln!("Warning: failed to write {path}: {err}"),
        }
    }
}
