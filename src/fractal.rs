//! Fractal (multi-octave) noise synthesis.

use crate::noise::NoiseKernel;

/// How the weighted octave sum is scaled before it is returned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    /// Plain weighted sum; range grows with octaves and persistence
    #[default]
    Raw,

    /// Sum divided by the total octave weight, always within [-1, 1]
    ByAmplitude,
}

/// Sums a kernel over octaves of increasing frequency and decaying weight
pub struct FractalSampler<K> {
    kernel: K,
    normalization: Normalization,
}

impl<K: NoiseKernel> FractalSampler<K> {
    /// Create sampler returning the raw octave sum
    pub fn new(kernel: K) -> Self {
        Self {
            kernel,
            normalization: Normalization::Raw,
        }
    }

    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    pub fn normalization(&self) -> Normalization {
        self.normalization
    }

    /// Sample fractal noise at (x, y)
    ///
    /// Octave `i` samples the kernel at `lacunarity^i` times the input
    /// frequency and weights it by `persistence^i`. Out-of-range
    /// persistence or lacunarity is the caller's concern.
    pub fn sample(&self, x: f64, y: f64, octaves: u32, persistence: f64, lacunarity: f64) -> f64 {
        if octaves == 1 {
            return self.kernel.sample_2d(x, y);
        }

        let mut total = 0.0;
        let mut total_weight = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;

        for _ in 0..octaves {
            total += amplitude * self.kernel.sample_2d(x * frequency, y * frequency);
            total_weight += amplitude;
            amplitude *= persistence;
            frequency *= lacunarity;
        }

        self.finish(total, total_weight)
    }

    /// Sample with a precomputed octave table
    ///
    /// Returns exactly what [`FractalSampler::sample`] returns for the
    /// parameters the table was built from.
    pub fn sample_with(&self, x: f64, y: f64, table: &OctaveTable) -> f64 {
        if table.len() == 1 {
            return self.kernel.sample_2d(x, y);
        }

        let total = table.octaves.iter().fold(0.0, |total, &(weight, frequency)| {
            total + weight * self.kernel.sample_2d(x * frequency, y * frequency)
        });

        self.finish(total, table.total_weight)
    }

    fn finish(&self, total: f64, total_weight: f64) -> f64 {
        match self.normalization {
            Normalization::Raw => total,
            Normalization::ByAmplitude if total_weight > 0.0 => total / total_weight,
            Normalization::ByAmplitude => 0.0,
        }
    }
}

/// Octave weights and frequencies, built once per frame and shared by every cell
#[derive(Debug, Clone, PartialEq)]
pub struct OctaveTable {
    /// `(weight, frequency)` per octave
    octaves: Vec<(f64, f64)>,
    total_weight: f64,
}

impl OctaveTable {
    pub fn new(octaves: u32, persistence: f64, lacunarity: f64) -> Self {
        let mut table = Vec::with_capacity(octaves as usize);
        let mut total_weight = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;

        for _ in 0..octaves {
            table.push((amplitude, frequency));
            total_weight += amplitude;
            amplitude *= persistence;
            frequency *= lacunarity;
        }

        Self {
            octaves: table,
            total_weight,
        }
    }

    /// Per-octave weights: `[1, p, p^2, ...]`
    pub fn weights(&self) -> impl Iterator<Item = f64> + '_ {
        self.octaves.iter().map(|&(weight, _)| weight)
    }

    /// Per-octave frequencies: `[1, l, l^2, ...]`
    pub fn frequencies(&self) -> impl Iterator<Item = f64> + '_ {
        self.octaves.iter().map(|&(_, frequency)| frequency)
    }

    pub fn len(&self) -> usize {
        self.octaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.octaves.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::SimplexKernel;

    /// Kernel returning a fixed value everywhere, exposing the weight sum
    struct Constant(f64);

    impl NoiseKernel for Constant {
        fn sample_2d(&self, _x: f64, _y: f64) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_single_octave_matches_kernel() {
        let sampler = FractalSampler::new(SimplexKernel::default());
        for k in 0..200 {
            let (x, y) = (k as f64 * 0.173 - 12.0, k as f64 * -0.091 + 4.0);
            for &(p, l) in &[(0.5, 2.0), (1.0, 0.001), (0.001, 10.0)] {
                assert_eq!(sampler.sample(x, y, 1, p, l), sampler.kernel().sample_2d(x, y));
            }
        }
    }

    #[test]
    fn test_octave_weights_decay() {
        let table = OctaveTable::new(3, 0.5, 2.0);
        assert_eq!(table.weights().collect::<Vec<_>>(), vec![1.0, 0.5, 0.25]);
        assert_eq!(table.frequencies().collect::<Vec<_>>(), vec![1.0, 2.0, 4.0]);

        assert_eq!(OctaveTable::new(1, 0.9, 3.0).weights().collect::<Vec<_>>(), vec![1.0]);
        assert!(OctaveTable::new(0, 0.5, 2.0).is_empty());
    }

    #[test]
    fn test_table_sampling_matches_direct() {
        for normalization in [Normalization::Raw, Normalization::ByAmplitude] {
            let sampler =
                FractalSampler::new(SimplexKernel::new(11)).with_normalization(normalization);
            for octaves in 1..=5 {
                let table = OctaveTable::new(octaves, 0.6, 2.3);
                for k in 0..100 {
                    let (x, y) = (k as f64 * 0.41 - 9.0, k as f64 * 0.17 + 2.0);
                    assert_eq!(
                        sampler.sample_with(x, y, &table),
                        sampler.sample(x, y, octaves, 0.6, 2.3)
                    );
                }
            }
        }
    }

    #[test]
    fn test_raw_sum_is_unnormalized() {
        let sampler = FractalSampler::new(Constant(1.0));
        assert_eq!(sampler.sample(0.3, 0.7, 3, 0.5, 2.0), 1.75);
        assert_eq!(sampler.sample(0.3, 0.7, 5, 1.0, 2.0), 5.0);
    }

    #[test]
    fn test_normalized_sum() {
        let sampler =
            FractalSampler::new(Constant(-1.0)).with_normalization(Normalization::ByAmplitude);
        assert_eq!(sampler.sample(0.0, 0.0, 4, 0.5, 2.0), -1.0);

        let sampler =
            FractalSampler::new(SimplexKernel::new(3)).with_normalization(Normalization::ByAmplitude);
        for k in 0..500 {
            let n = sampler.sample(k as f64 * 0.21, k as f64 * 0.13, 5, 1.0, 2.0);
            assert!((-1.0..=1.0).contains(&n));
        }
    }

    #[test]
    fn test_octaves_sample_scaled_frequencies() {
        let kernel = SimplexKernel::default();
        let sampler = FractalSampler::new(kernel.clone());
        let (x, y) = (0.37, 1.91);

        let expected = kernel.sample_2d(x, y)
            + 0.5 * kernel.sample_2d(x * 2.0, y * 2.0)
            + 0.25 * kernel.sample_2d(x * 4.0, y * 4.0);
        assert_eq!(sampler.sample(x, y, 3, 0.5, 2.0), expected);
    }
}
