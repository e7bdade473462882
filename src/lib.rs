//! Noise explorer library - fractal simplex noise sampled onto a pannable tile grid

pub mod bench;
pub mod cli;
pub mod error;
pub mod explorer;
pub mod fractal;
pub mod grid;
pub mod noise;
pub mod params;
pub mod raster;
pub mod viewport;
