//! Window layout and output configuration.

use glam::IVec2;

/// Frame buffer configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Clear colour behind the canvas and controls (RGB)
    pub background: [u8; 3],

    /// Frame rate the collaborator paces frames at (FPS)
    pub target_fps: u32,

    /// Output PNG path
    pub output_path: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            background: [24, 25, 38],
            target_fps: 60,
            output_path: "noise.png".to_string(),
        }
    }
}

impl RenderConfig {
    /// Frame budget at the target rate (microseconds)
    pub fn frame_budget_us(&self) -> f64 {
        1_000_000.0 / self.target_fps.max(1) as f64
    }
}

/// Screen placement of the tile canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasLayout {
    /// Top-left corner of cell (0, 0) in window pixels
    pub origin: IVec2,
}

impl Default for CanvasLayout {
    fn default() -> Self {
        Self {
            origin: IVec2::new(400, 25),
        }
    }
}
