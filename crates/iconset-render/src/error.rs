//! Error types for the render crate.

use thiserror::Error;

/// Errors that can occur while rasterizing or encoding an icon.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The vector source is not a valid SVG document.
    #[error("failed to parse SVG: {0}")]
    Parse(String),

    /// A pixmap of the requested size could not be allocated.
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNG encoding failed.
    #[error("failed to encode PNG: {0}")]
    Encode(String),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
