//! 2D gradient noise kernels.
//!
//! A kernel is a pure function of its coordinates: the permutation table is
//! built once from a seed and never touched again, so a kernel can be shared
//! across threads and sampled in any order.

use noise::{NoiseFn, OpenSimplex};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Single-octave 2D gradient noise
pub trait NoiseKernel: Send + Sync {
    /// Sample noise at continuous coordinates
    ///
    /// Returns value in range [-1, 1]
    fn sample_2d(&self, x: f64, y: f64) -> f64;
}

impl<K: NoiseKernel + ?Sized> NoiseKernel for Box<K> {
    fn sample_2d(&self, x: f64, y: f64) -> f64 {
        (**self).sample_2d(x, y)
    }
}

/// Ken Perlin's reference permutation, used for seed 0
const PERLIN_PERMUTATION: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209, 76,
    132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173,
    186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212, 207, 206,
    59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44, 154, 163,
    70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232,
    178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162,
    241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157, 184, 84, 204,
    176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29, 24, 72, 243, 141,
    128, 195, 78, 66, 215, 61, 156, 180,
];

/// Gradient directions (xy projection of the 12 cube-edge gradients)
const GRADIENTS: [(f64, f64); 12] = [
    (1.0, 1.0),
    (-1.0, 1.0),
    (1.0, -1.0),
    (-1.0, -1.0),
    (1.0, 0.0),
    (-1.0, 0.0),
    (1.0, 0.0),
    (-1.0, 0.0),
    (0.0, 1.0),
    (0.0, -1.0),
    (0.0, 1.0),
    (0.0, -1.0),
];

/// Skew factor: (sqrt(3) - 1) / 2
const F2: f64 = 0.366_025_403_784_438_6;

/// Unskew factor: (3 - sqrt(3)) / 6
const G2: f64 = 0.211_324_865_405_187_1;

/// Output scale that maps the summed corner contributions onto [-1, 1]
const SCALE: f64 = 70.0;

/// Classic 2D simplex noise over a triangular lattice
#[derive(Clone)]
pub struct SimplexKernel {
    /// Permutation doubled to 512 entries so lookups never wrap
    perm: [u8; 512],
}

impl SimplexKernel {
    /// Create new kernel with seed
    ///
    /// Seed 0 uses the reference permutation; any other seed shuffles it.
    pub fn new(seed: u32) -> Self {
        let mut table = PERLIN_PERMUTATION;
        if seed != 0 {
            shuffle(&mut table, &mut ChaCha8Rng::seed_from_u64(u64::from(seed)));
        }

        let mut perm = [0u8; 512];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = table[i & 255];
        }

        Self { perm }
    }

    #[inline]
    fn gradient_index(&self, i: usize, j: usize) -> usize {
        self.perm[i + self.perm[j] as usize] as usize % GRADIENTS.len()
    }

    /// Contribution of one simplex corner at offset (x, y)
    #[inline]
    fn corner(gradient: usize, x: f64, y: f64) -> f64 {
        let t = 0.5 - x * x - y * y;
        if t <= 0.0 {
            return 0.0;
        }
        let (gx, gy) = GRADIENTS[gradient];
        let t2 = t * t;
        t2 * t2 * (gx * x + gy * y)
    }
}

/// Fisher-Yates over the raw ChaCha stream, so a seed maps to one table forever
fn shuffle(table: &mut [u8; 256], rng: &mut impl RngCore) {
    for i in (1..table.len()).rev() {
        let j = ((u64::from(rng.next_u32()) * (i as u64 + 1)) >> 32) as usize;
        table.swap(i, j);
    }
}

impl Default for SimplexKernel {
    fn default() -> Self {
        Self::new(0)
    }
}

impl NoiseKernel for SimplexKernel {
    fn sample_2d(&self, x: f64, y: f64) -> f64 {
        // Skew input space to find the containing rhombus cell
        let s = (x + y) * F2;
        let i = (x + s).floor();
        let j = (y + s).floor();

        // Unskew back to find the first corner offset
        let t = (i + j) * G2;
        let x0 = x - (i - t);
        let y0 = y - (j - t);

        // Lower or upper triangle of the cell
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - i1 as f64 + G2;
        let y1 = y0 - j1 as f64 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = (i as i64 & 255) as usize;
        let jj = (j as i64 & 255) as usize;

        let g0 = self.gradient_index(ii, jj);
        let g1 = self.gradient_index(ii + i1, jj + j1);
        let g2 = self.gradient_index(ii + 1, jj + 1);

        let n = Self::corner(g0, x0, y0) + Self::corner(g1, x1, y1) + Self::corner(g2, x2, y2);

        (SCALE * n).clamp(-1.0, 1.0)
    }
}

/// OpenSimplex noise from the `noise` crate, behind the kernel interface
#[derive(Clone)]
pub struct OpenSimplexKernel {
    simplex: OpenSimplex,
}

impl OpenSimplexKernel {
    /// Create new kernel with seed
    pub fn new(seed: u32) -> Self {
        Self {
            simplex: OpenSimplex::new(seed),
        }
    }
}

impl NoiseKernel for OpenSimplexKernel {
    fn sample_2d(&self, x: f64, y: f64) -> f64 {
        self.simplex.get([x, y]).clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> impl Iterator<Item = (f64, f64)> {
        (0..2000).map(|k| {
            let k = k as f64;
            ((k * 0.37).sin() * 300.0 + k * 0.013, (k * 0.71).cos() * 300.0 - k * 0.029)
        })
    }

    #[test]
    fn test_simplex_is_deterministic() {
        let a = SimplexKernel::new(0);
        let b = SimplexKernel::new(0);

        for (x, y) in sample_points() {
            assert_eq!(a.sample_2d(x, y), a.sample_2d(x, y));
            assert_eq!(a.sample_2d(x, y), b.sample_2d(x, y));
        }
    }

    fn assert_golden(kernel: &SimplexKernel, golden: &[((f64, f64), f64)]) {
        for &((x, y), expected) in golden {
            let n = kernel.sample_2d(x, y);
            assert!(
                (n - expected).abs() < 1e-12,
                "noise at ({}, {}) was {}, expected {}",
                x,
                y,
                n,
                expected
            );
        }
    }

    #[test]
    fn test_reference_table_values() {
        assert_golden(
            &SimplexKernel::new(0),
            &[
                ((0.1, 0.1), -0.37171750323696723),
                ((0.5, 0.25), -0.6471486502994074),
                ((1.3, -2.7), -0.42041934958012817),
                ((-7.25, 3.5), 0.6798060616602823),
                ((12.34, 56.78), -0.37312088920704284),
            ],
        );
    }

    #[test]
    fn test_seeded_table_values() {
        assert_golden(
            &SimplexKernel::new(42),
            &[
                ((0.5, 0.25), -0.1994244184842159),
                ((1.3, -2.7), -0.41685636191659314),
                ((-7.25, 3.5), 0.6340228846765331),
                ((12.34, 56.78), -0.6147206302882716),
            ],
        );
    }

    #[test]
    fn test_seeded_permutation_prefix() {
        let kernel = SimplexKernel::new(42);
        assert_eq!(kernel.perm[..8], [11, 148, 127, 46, 189, 219, 160, 81]);
        assert_eq!(kernel.perm[256..264], kernel.perm[..8]);
    }

    #[test]
    fn test_simplex_range() {
        let kernel = SimplexKernel::new(7);
        for (x, y) in sample_points() {
            let n = kernel.sample_2d(x, y);
            assert!(
                (-1.0 - 1e-6..=1.0 + 1e-6).contains(&n),
                "noise {} out of range at ({}, {})",
                n,
                x,
                y
            );
        }
    }

    #[test]
    fn test_simplex_is_zero_on_lattice_origin() {
        // All corner contributions vanish or cancel at a lattice point
        let kernel = SimplexKernel::default();
        assert_eq!(kernel.sample_2d(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_simplex_is_continuous() {
        let kernel = SimplexKernel::default();
        let step = 1e-4;

        // Walk across several cell boundaries; neighbours must stay close
        let mut prev = kernel.sample_2d(-3.0, 1.5);
        let mut x = -3.0;
        while x < 3.0 {
            x += step;
            let n = kernel.sample_2d(x, 1.5);
            assert!((n - prev).abs() < 0.01, "jump of {} at x={}", n - prev, x);
            prev = n;
        }
    }

    #[test]
    fn test_seeds_produce_different_fields() {
        let a = SimplexKernel::new(1);
        let b = SimplexKernel::new(2);

        let differs = sample_points().any(|(x, y)| a.sample_2d(x, y) != b.sample_2d(x, y));
        assert!(differs);
    }

    #[test]
    fn test_open_simplex_range() {
        let kernel = OpenSimplexKernel::new(42);
        for (x, y) in sample_points() {
            let n = kernel.sample_2d(x, y);
            assert!((-1.0..=1.0).contains(&n));
            assert_eq!(n, kernel.sample_2d(x, y));
        }
    }
}
