//! Error types for iconset.

use std::path::PathBuf;

use iconset_core::IcoError;
use iconset_render::RenderError;
use thiserror::Error;

use crate::emit::EmitError;
use crate::file::FileError;

/// A configuration value that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No source path was given.
    #[error("no source SVG given")]
    MissingSource,

    /// The source path does not name an SVG file.
    #[error("source must be an .svg file: {0}")]
    NotSvg(PathBuf),

    /// The output directory path is empty.
    #[error("output directory must not be empty")]
    EmptyOutputDir,

    /// The icon list is empty.
    #[error("at least one icon size must be configured")]
    NoIcons,

    /// An icon entry has a zero size.
    #[error("icon {index} ({name:?}) has size 0; sizes must be positive")]
    ZeroSize { index: usize, name: String },

    /// An icon entry has no file name.
    #[error("icon {index} ({size}px) has no output name")]
    MissingName { index: usize, size: u32 },

    /// Quality is outside 1..=100.
    #[error("quality must be between 1 and 100, got {0}")]
    Quality(u8),

    /// Compression level is outside 0..=9.
    #[error("compression level must be between 0 and 9, got {0}")]
    CompressionLevel(u8),

    /// Favicon generation is on but no favicon sizes are set.
    #[error("favicon generation is enabled but no favicon sizes are configured")]
    NoFaviconSizes,

    /// A favicon size is zero.
    #[error("favicon sizes must be positive")]
    ZeroFaviconSize,

    /// The root favicon PNG size is zero.
    #[error("root favicon PNG size must be positive")]
    ZeroRootFaviconSize,
}

/// The main error type for a generation run.
#[derive(Error, Debug)]
pub enum IconsetError {
    /// The configuration was rejected before any I/O happened.
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigError),

    /// The source SVG does not exist.
    #[error("source SVG not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// Creating the output directory or writing a file failed.
    #[error("file system error: {0}")]
    FileSystem(#[from] FileError),

    /// The ICO container could not be built.
    #[error("ICO encoding failed: {0}")]
    Encoding(#[from] IcoError),

    /// The SVG could not be parsed or rendered.
    #[error("rendering failed: {0}")]
    Render(#[from] RenderError),

    /// A metadata document could not be serialized.
    #[error("metadata output failed: {0}")]
    Emit(#[from] EmitError),
}

/// Result type for iconset operations.
pub type IconsetResult<T> = Result<T, IconsetError>;
