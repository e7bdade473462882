//! Tile grid sampling: fractal noise per cell, remapped to grayscale.

use glam::IVec2;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::fractal::{FractalSampler, OctaveTable};
use crate::noise::NoiseKernel;
use crate::params::{CanvasLayout, Parameters};

/// Pixel rectangle of one cell in window coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// One rendered cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub rect: CellRect,
    /// Grayscale value for all three colour channels
    pub intensity: u8,
}

/// Row-major cells for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntensityGrid {
    /// Cells per side
    pub size: u32,
    pub cells: Vec<Cell>,
}

impl IntensityGrid {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at grid position (x, y)
    pub fn get(&self, x: u32, y: u32) -> Option<&Cell> {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.cells.get((y * self.size + x) as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
}

/// Map fractal noise onto a byte: nominal [-1, 1] lands on [0, 254]
///
/// Sums outside the nominal range saturate instead of wrapping.
pub fn remap(n: f64) -> u8 {
    ((n + 1.0) * 127.0).clamp(0.0, 255.0) as u8
}

/// Samples a fractal field over the canvas grid
pub struct GridRenderer<K> {
    sampler: FractalSampler<K>,
    layout: CanvasLayout,
}

impl<K: NoiseKernel> GridRenderer<K> {
    pub fn new(sampler: FractalSampler<K>, layout: CanvasLayout) -> Self {
        Self { sampler, layout }
    }

    pub fn sampler(&self) -> &FractalSampler<K> {
        &self.sampler
    }

    pub fn layout(&self) -> &CanvasLayout {
        &self.layout
    }

    /// Render every cell of the canvas, row by row
    pub fn render(&self, params: &Parameters, offset: IVec2) -> IntensityGrid {
        let params = params.sanitized();
        let size = params.canvas_size;

        let table = OctaveTable::new(params.octaves, params.persistence, params.lacunarity);

        let mut cells = Vec::with_capacity(size as usize * size as usize);
        for y in 0..size {
            self.render_row(&params, &table, offset, y, &mut cells);
        }

        IntensityGrid { size, cells }
    }

    /// Render with rows spread over the rayon pool
    ///
    /// Parameters and offset are copied before fan-out; the result is
    /// identical to [`GridRenderer::render`].
    #[cfg(feature = "parallel")]
    pub fn render_parallel(&self, params: &Parameters, offset: IVec2) -> IntensityGrid {
        let params = params.sanitized();
        let size = params.canvas_size;
        let table = OctaveTable::new(params.octaves, params.persistence, params.lacunarity);

        let rows: Vec<Vec<Cell>> = (0..size)
            .into_par_iter()
            .map(|y| {
                let mut row = Vec::with_capacity(size as usize);
                self.render_row(&params, &table, offset, y, &mut row);
                row
            })
            .collect();

        IntensityGrid {
            size,
            cells: rows.into_iter().flatten().collect(),
        }
    }

    fn render_row(
        &self,
        params: &Parameters,
        table: &OctaveTable,
        offset: IVec2,
        y: u32,
        out: &mut Vec<Cell>,
    ) {
        let tile = params.tile_size;
        let wy = (y as f64 + offset.y as f64) * params.amplitude;
        let cell_y = self.layout.origin.y + (y * tile) as i32;

        for x in 0..params.canvas_size {
            let wx = (x as f64 + offset.x as f64) * params.amplitude;
            let n = self.sampler.sample_with(wx, wy, table);

            out.push(Cell {
                rect: CellRect {
                    x: self.layout.origin.x + (x * tile) as i32,
                    y: cell_y,
                    width: tile,
                    height: tile,
                },
                intensity: remap(n),
            });
        }
    }
}
