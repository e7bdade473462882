//! Timing of a single representative fractal sample.

use std::time::Instant;

use crate::fractal::FractalSampler;
use crate::noise::NoiseKernel;
use crate::params::Parameters;

/// The benchmarked call: `sample(amplitude, amplitude, ...)`
///
/// Uses the same clamped amplitude and persistence as the grid renderer.
pub fn representative_sample<K: NoiseKernel>(
    sampler: &FractalSampler<K>,
    params: &Parameters,
) -> f64 {
    let params = params.sanitized();
    sampler.sample(
        params.amplitude,
        params.amplitude,
        params.octaves,
        params.persistence,
        params.lacunarity,
    )
}

/// Time one [`representative_sample`] call
///
/// Returns elapsed wall time in microseconds.
pub fn measure<K: NoiseKernel>(sampler: &FractalSampler<K>, params: &Parameters) -> f64 {
    let start = Instant::now();
    let n = representative_sample(sampler, params);
    let elapsed = start.elapsed();

    // Keep the call from being optimized away
    std::hint::black_box(n);

    elapsed.as_secs_f64() * 1_000_000.0
}

/// Label text shown next to the controls
pub fn format_micros(micros: f64) -> String {
    format!("Computed in {:.2}µs", micros)
}
