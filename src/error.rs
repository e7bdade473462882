//! Errors raised at the frontend edge (argument parsing, image output).
//!
//! Sampling and rendering are infallible.

#[derive(Debug, thiserror::Error)]
pub enum ExplorerError {
    #[error("failed to write frame: {0}")]
    Image(#[from] image::ImageError),

    #[error("invalid drag '{0}': expected DX,DY")]
    InvalidDrag(String),
}
