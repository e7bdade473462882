//! Command-line argument parsing.

use clap::{Parser, ValueEnum};
use glam::IVec2;

use crate::error::ExplorerError;
use crate::fractal::Normalization;
use crate::noise::{NoiseKernel, OpenSimplexKernel, SimplexKernel};
use crate::params::{Parameters, RenderConfig};
use crate::viewport::{CanvasRect, PointerInput};

/// Noise kernel selection
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum KernelChoice {
    /// Classic 2D simplex noise
    Simplex,
    /// OpenSimplex from the noise crate
    OpenSimplex,
}

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "noise-explorer")]
#[command(about = "Render fractal simplex noise onto a pannable tile grid", long_about = None)]
pub struct Args {
    /// Grid cells per side [1, 320]
    #[arg(long, value_name = "CELLS", default_value_t = 110)]
    pub canvas_size: u32,

    /// Cell edge length in pixels [1, 64]
    #[arg(long, value_name = "PIXELS", default_value_t = 6)]
    pub tile_size: u32,

    /// Spatial scale of grid coordinates [0.0001, 1.0]
    #[arg(long, default_value_t = 0.1)]
    pub amplitude: f64,

    /// Number of noise layers [1, 5]
    #[arg(long, default_value_t = 1)]
    pub octaves: u32,

    /// Per-octave amplitude decay [0.001, 1.0]
    #[arg(long, default_value_t = 0.5)]
    pub persistence: f64,

    /// Per-octave frequency growth [0.001, 10.0]
    #[arg(long, default_value_t = 2.0)]
    pub lacunarity: f64,

    /// Permutation seed (0 = reference table)
    #[arg(long, default_value_t = 0)]
    pub seed: u32,

    /// Noise kernel
    #[arg(long, value_enum, default_value_t = KernelChoice::Simplex)]
    pub kernel: KernelChoice,

    /// Divide the octave sum by its total weight
    #[arg(long)]
    pub normalize: bool,

    /// Pan gesture replayed as one frame (repeatable)
    #[arg(
        long = "drag",
        value_name = "DX,DY",
        value_parser = parse_drag,
        allow_hyphen_values = true
    )]
    pub drags: Vec<IVec2>,

    /// Frames to run (at least one per drag)
    #[arg(long, default_value_t = 1)]
    pub frames: u32,

    /// Render rows in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Output PNG path
    #[arg(long, value_name = "PATH", default_value = "noise.png")]
    pub output: String,
}

impl Args {
    /// Parameter set as given on the command line (not yet clamped)
    pub fn parameters(&self) -> Parameters {
        Parameters {
            amplitude: self.amplitude,
            octaves: self.octaves,
            persistence: self.persistence,
            lacunarity: self.lacunarity,
            canvas_size: self.canvas_size,
            tile_size: self.tile_size,
        }
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            output_path: self.output.clone(),
            ..RenderConfig::default()
        }
    }

    pub fn normalization(&self) -> Normalization {
        if self.normalize {
            Normalization::ByAmplitude
        } else {
            Normalization::Raw
        }
    }

    pub fn build_kernel(&self) -> Box<dyn NoiseKernel> {
        match self.kernel {
            KernelChoice::Simplex => Box::new(SimplexKernel::new(self.seed)),
            KernelChoice::OpenSimplex => Box::new(OpenSimplexKernel::new(self.seed)),
        }
    }

    /// Pointer input for every frame
    ///
    /// Drags are performed with the button held at the canvas centre; the
    /// remaining frames are idle.
    pub fn pointer_script(&self, canvas: &CanvasRect) -> Vec<PointerInput> {
        let total = (self.frames as usize).max(self.drags.len()).max(1);
        let centre = canvas.origin + IVec2::splat((canvas.size / 2) as i32);

        (0..total)
            .map(|frame| match self.drags.get(frame) {
                Some(&delta) => PointerInput {
                    position: centre,
                    delta,
                    button_held: true,
                },
                None => PointerInput {
                    position: centre,
                    ..PointerInput::default()
                },
            })
            .collect()
    }
}

/// Parse "DX,DY" into a drag delta
pub fn parse_drag(value: &str) -> Result<IVec2, ExplorerError> {
    let invalid = || ExplorerError::InvalidDrag(value.to_string());

    let (dx, dy) = value.split_once(',').ok_or_else(invalid)?;
    let dx = dx.trim().parse::<i32>().map_err(|_| invalid())?;
    let dy = dy.trim().parse::<i32>().map_err(|_| invalid())?;
    Ok(IVec2::new(dx, dy))
}
