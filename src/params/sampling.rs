//! Fractal noise parameters with documented ranges.

use std::fmt;
use std::ops::RangeInclusive;

/// Live-tunable parameter set, snapshotted once per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    /// Spatial scale applied to integer grid coordinates before sampling
    /// Range: [0.0001, 1.0], smaller = smoother / more zoomed in
    pub amplitude: f64,

    /// Number of summed noise layers
    /// Range: [1, 5]
    pub octaves: u32,

    /// Per-octave amplitude decay (dimensionless)
    /// Range: [0.001, 1.0]
    pub persistence: f64,

    /// Per-octave frequency growth (dimensionless)
    /// Range: [0.001, 10.0]
    pub lacunarity: f64,

    /// Grid cells per side
    /// Range: [1, 320]
    pub canvas_size: u32,

    /// Cell edge length (pixels)
    /// Range: [1, 64]
    pub tile_size: u32,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            amplitude: 0.1,
            octaves: 1,
            persistence: 0.5,
            lacunarity: 2.0,
            canvas_size: 110,
            tile_size: 6,
        }
    }
}

impl Parameters {
    /// Copy with every field clamped to its documented range
    pub fn clamped(&self) -> Self {
        Self {
            amplitude: clamp_float(ParamKind::Amplitude, self.amplitude),
            octaves: clamp_int(ParamKind::Octaves, self.octaves),
            persistence: clamp_float(ParamKind::Persistence, self.persistence),
            lacunarity: clamp_float(ParamKind::Lacunarity, self.lacunarity),
            canvas_size: clamp_int(ParamKind::CanvasSize, self.canvas_size),
            tile_size: clamp_int(ParamKind::TileSize, self.tile_size),
        }
    }

    /// Copy with amplitude and persistence clamped so the octave sum cannot
    /// diverge; the other fields pass through untouched
    pub fn sanitized(&self) -> Self {
        let clamped = self.clamped();
        Self {
            amplitude: clamped.amplitude,
            persistence: clamped.persistence,
            ..*self
        }
    }

    /// True if every field already lies within its range
    pub fn is_in_range(&self) -> bool {
        *self == self.clamped()
    }

    /// Canvas edge length (pixels)
    pub fn canvas_extent_px(&self) -> u32 {
        self.canvas_size.saturating_mul(self.tile_size)
    }

    /// Display labels in control-panel order, e.g. "Amplitude: 0.1000"
    pub fn labels(&self) -> Vec<String> {
        ParamKind::ALL
            .iter()
            .map(|&kind| format!("{}: {}", kind, self.formatted(kind)))
            .collect()
    }

    /// Format one field the way its control displays it
    pub fn formatted(&self, kind: ParamKind) -> String {
        match kind {
            ParamKind::CanvasSize => self.canvas_size.format_value(),
            ParamKind::TileSize => self.tile_size.format_value(),
            ParamKind::Amplitude => self.amplitude.format_value(),
            ParamKind::Octaves => self.octaves.format_value(),
            ParamKind::Persistence => self.persistence.format_value(),
            ParamKind::Lacunarity => self.lacunarity.format_value(),
        }
    }
}

/// Identifies one tunable field, in control-panel order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    CanvasSize,
    TileSize,
    Amplitude,
    Octaves,
    Persistence,
    Lacunarity,
}

impl ParamKind {
    pub const ALL: [ParamKind; 6] = [
        ParamKind::CanvasSize,
        ParamKind::TileSize,
        ParamKind::Amplitude,
        ParamKind::Octaves,
        ParamKind::Persistence,
        ParamKind::Lacunarity,
    ];

    /// Inclusive bounds of the control
    pub fn range(self) -> RangeInclusive<f64> {
        match self {
            ParamKind::CanvasSize => 1.0..=320.0,
            ParamKind::TileSize => 1.0..=64.0,
            ParamKind::Amplitude => 0.0001..=1.0,
            ParamKind::Octaves => 1.0..=5.0,
            ParamKind::Persistence => 0.001..=1.0,
            ParamKind::Lacunarity => 0.001..=10.0,
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParamKind::CanvasSize => "Canvas Size",
            ParamKind::TileSize => "Tile Size",
            ParamKind::Amplitude => "Amplitude",
            ParamKind::Octaves => "Octaves",
            ParamKind::Persistence => "Persistence",
            ParamKind::Lacunarity => "Lacunarity",
        };
        f.write_str(name)
    }
}

/// How a parameter value is rendered in its label
pub trait ParamValue {
    fn format_value(&self) -> String;
}

impl ParamValue for u32 {
    fn format_value(&self) -> String {
        self.to_string()
    }
}

impl ParamValue for f64 {
    fn format_value(&self) -> String {
        format!("{:.4}", self)
    }
}

fn clamp_float(kind: ParamKind, value: f64) -> f64 {
    let range = kind.range();
    if value.is_nan() {
        return *range.start();
    }
    value.clamp(*range.start(), *range.end())
}

fn clamp_int(kind: ParamKind, value: u32) -> u32 {
    let range = kind.range();
    value.clamp(*range.start() as u32, *range.end() as u32)
}
