//! Per-frame orchestration: input, pan, render, benchmark.

use std::time::Instant;

use log::{debug, trace, warn};

use crate::bench;
use crate::grid::{GridRenderer, IntensityGrid};
use crate::noise::NoiseKernel;
use crate::params::Parameters;
use crate::viewport::{CanvasRect, PointerInput, ViewportState};

/// Everything the collaborator needs to draw one frame
#[derive(Debug, Clone)]
pub struct FrameOutput {
    pub grid: IntensityGrid,

    /// Single-sample benchmark (microseconds)
    pub compute_us: f64,

    /// Wall time of the full grid render (microseconds)
    pub render_us: f64,

    /// A pan gesture moved the view this frame
    pub panning: bool,
}

/// Explorer state owned by the frame loop
pub struct Explorer<K> {
    renderer: GridRenderer<K>,
    params: Parameters,
    viewport: ViewportState,
    parallel: bool,
    frame_count: u64,
}

impl<K: NoiseKernel> Explorer<K> {
    /// Create explorer with default parameters and the view at the origin
    pub fn new(renderer: GridRenderer<K>) -> Self {
        Self {
            renderer,
            params: Parameters::default(),
            viewport: ViewportState::new(),
            parallel: false,
            frame_count: 0,
        }
    }

    /// Spread grid rows across threads (no effect without the `parallel` feature)
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Replace the parameter set, clamping out-of-range fields
    pub fn set_parameters(&mut self, params: Parameters) {
        let clamped = params.clamped();
        if clamped != params {
            warn!("Parameters out of range, clamped: {:?} -> {:?}", params, clamped);
        }
        self.params = clamped;
    }

    /// Current pan hit area
    pub fn canvas_rect(&self) -> CanvasRect {
        CanvasRect::new(&self.params, self.renderer.layout())
    }

    /// Advance one frame
    ///
    /// Applies the drag (if the gesture is active), renders the full grid at
    /// the resulting offset and times one representative sample.
    pub fn frame(&mut self, input: &PointerInput) -> FrameOutput {
        let params = self.params;

        let drag = input.drag_delta(&self.canvas_rect());
        if let Some(delta) = drag {
            self.viewport.apply_drag(delta.x, delta.y);
            trace!("Pan by {:?}, offset now {:?}", delta, self.viewport.offset());
        }
        let offset = self.viewport.offset();

        let start = Instant::now();
        let grid = self.render(&params, offset);
        let render_us = start.elapsed().as_secs_f64() * 1_000_000.0;

        let compute_us = bench::measure(self.renderer.sampler(), &params);

        self.frame_count += 1;
        debug!(
            "Frame {}: {} cells in {:.0}µs, offset {:?}, {}",
            self.frame_count,
            grid.len(),
            render_us,
            offset,
            bench::format_micros(compute_us)
        );

        FrameOutput {
            grid,
            compute_us,
            render_us,
            panning: drag.is_some(),
        }
    }

    #[cfg(feature = "parallel")]
    fn render(&self, params: &Parameters, offset: glam::IVec2) -> IntensityGrid {
        if self.parallel {
            self.renderer.render_parallel(params, offset)
        } else {
            self.renderer.render(params, offset)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn render(&self, params: &Parameters, offset: glam::IVec2) -> IntensityGrid {
        self.renderer.render(params, offset)
    }
}
