//! Coastline paradox measurement library
//!
//! Measures an irregular curve at multiple refinement levels and estimates
//! its box-counting fractal dimension. Re-exports modules for use by the
//! demo binary and tests.

pub mod data;
pub mod dimension;
pub mod geo;
pub mod koch;
pub mod midpoint;
pub mod projection;
pub mod render;
pub mod report;
