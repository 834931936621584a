//! Error types for the render crate.

use thiserror::Error;

/// Errors that can occur while drawing a menu.
#[derive(Error, Debug)]
pub enum RenderError {
    /// An image referenced by a widget is unknown to the image service.
    #[error("image not found: {0}")]
    ImageNotFound(String),

    /// Invalid surface dimensions (zero or negative width or height).
    #[error("invalid surface dimensions: {width}x{height}")]
    InvalidDimensions { width: f32, height: f32 },

    /// Clip stack misuse (pop without push).
    #[error("clip stack underflow")]
    ClipUnderflow,

    /// The backend failed to draw.
    #[error("surface error: {0}")]
    Surface(String),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
