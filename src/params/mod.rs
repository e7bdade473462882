//! Parameter definitions with units and documented ranges.
//!
//! All magic numbers live here:
//! - Units (pixels, cells, dimensionless factors)
//! - Documented ranges and defaults
//! - Type safety where possible

mod render;
mod sampling;

pub use render::{CanvasLayout, RenderConfig};
pub use sampling::{ParamKind, ParamValue, Parameters};
