//! Pan offset and drag gesture handling.

use glam::IVec2;

use crate::params::{CanvasLayout, Parameters};

/// World-space pan offset of the canvas (cells)
///
/// Tracks the world coordinate shown at the canvas top-left, moving opposite
/// to pointer motion while a pan gesture is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewportState {
    offset: IVec2,
}

impl ViewportState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> IVec2 {
        self.offset
    }

    /// Apply one drag step: content follows the pointer, offset moves against it
    ///
    /// The offset saturates at the `i32` bounds.
    pub fn apply_drag(&mut self, delta_x: i32, delta_y: i32) {
        self.offset = self.offset.saturating_sub(IVec2::new(delta_x, delta_y));
    }
}

/// Pixel rectangle covered by the canvas (hit area for pan gestures)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasRect {
    pub origin: IVec2,
    pub size: u32,
}

impl CanvasRect {
    /// Canvas square for the given parameters and layout
    pub fn new(params: &Parameters, layout: &CanvasLayout) -> Self {
        Self {
            origin: layout.origin,
            size: params.canvas_extent_px(),
        }
    }

    /// True if the rectangle covers no pixels
    pub fn is_degenerate(&self) -> bool {
        self.size == 0
    }

    /// Half-open containment test; a degenerate rect contains nothing
    pub fn contains(&self, point: IVec2) -> bool {
        if self.is_degenerate() {
            return false;
        }
        let rel = point.as_i64vec2() - self.origin.as_i64vec2();
        let size = i64::from(self.size);
        (0..size).contains(&rel.x) && (0..size).contains(&rel.y)
    }
}

/// Pointer state sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerInput {
    /// Pointer position in window pixels
    pub position: IVec2,

    /// Motion since the previous frame (pixels)
    pub delta: IVec2,

    /// Primary button held
    pub button_held: bool,
}

impl PointerInput {
    /// A pan gesture is active while the button is held over the canvas
    pub fn is_panning(&self, canvas: &CanvasRect) -> bool {
        self.button_held && canvas.contains(self.position)
    }

    /// Drag delta to apply this frame, if the gesture is active
    pub fn drag_delta(&self, canvas: &CanvasRect) -> Option<IVec2> {
        self.is_panning(canvas).then_some(self.delta)
    }
}
