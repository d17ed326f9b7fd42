//! Error types for the core crate.

use thiserror::Error;

/// Errors raised while packing or reading an ICO container.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IcoError {
    /// No images were supplied to the encoder.
    #[error("an ICO container needs at least one image")]
    Empty,

    /// An image declared a size that cannot be stored in the directory table.
    #[error("image {index} has size {size}px; ICO entries must be between 1 and 256 pixels")]
    SizeOutOfRange { index: usize, size: u32 },

    /// More images than the 16-bit header count can describe.
    #[error("too many images for one ICO container: {0}")]
    TooManyImages(usize),

    /// The container would exceed the 32-bit offsets used by the directory table.
    #[error("ICO container exceeds 4 GiB at image {index}")]
    TooLarge { index: usize },

    /// The header is not an icon header.
    #[error("invalid ICO header: reserved={reserved}, type={kind}")]
    InvalidHeader { reserved: u16, kind: u16 },

    /// The buffer ends before a declared structure does.
    #[error("truncated ICO data: needed {needed} bytes, found {actual}")]
    Truncated { needed: usize, actual: usize },
}

/// Result type for ICO operations.
pub type IcoResult<T> = Result<T, IcoError>;
