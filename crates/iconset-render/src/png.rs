//! PNG encoding for rendered icons.

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};
use iconset_core::logging::targets;
use tracing::trace;

use crate::error::{RenderError, RenderResult};

/// Default PNG quality.
pub const DEFAULT_QUALITY: u8 = 100;

/// Default zlib compression level.
pub const DEFAULT_COMPRESSION_LEVEL: u8 = 9;

/// Largest accepted compression level.
pub const MAX_COMPRESSION_LEVEL: u8 = 9;

/// PNG output settings.
///
/// PNG is lossless, so `quality` is carried for callers that report it but
/// does not change pixel data. `compression_level` follows zlib's 0-9 scale
/// and is mapped onto the encoder's presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngOptions {
    /// Quality, 1 through 100.
    pub quality: u8,
    /// Compression level, 0 through 9.
    pub compression_level: u8,
}

impl Default for PngOptions {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
            compression_level: DEFAULT_COMPRESSION_LEVEL,
        }
    }
}

impl PngOptions {
    /// Create options with the given quality and compression level.
    pub fn new(quality: u8, compression_level: u8) -> Self {
        Self {
            quality,
            compression_level,
        }
    }

    /// The encoder preset for this compression level.
    pub fn compression_type(&self) -> CompressionType {
        match self.compression_level {
            0..=3 => CompressionType::Fast,
            4..=6 => CompressionType::Default,
            _ => CompressionType::Best,
        }
    }
}

/// Encode a straight-alpha RGBA buffer of `size`×`size` pixels as PNG.
///
/// # Errors
///
/// Returns [`RenderError::Encode`] if the buffer length does not match the
/// dimensions or the encoder fails.
pub fn encode_png(rgba: &[u8], size: u32, options: &PngOptions) -> RenderResult<Vec<u8>> {
    // The encoder panics on a length mismatch.
    let expected = size as usize * size as usize * 4;
    if rgba.len() != expected {
        return Err(RenderError::Encode(format!(
            "expected {expected} bytes of RGBA for {size}x{size}, got {}",
            rgba.len()
        )));
    }

    let mut buffer = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut buffer, options.compression_type(), FilterType::Adaptive);
    encoder
        .write_image(rgba, size, size, ExtendedColorType::Rgba8)
        .map_err(|e| RenderError::Encode(e.to_string()))?;

    trace!(
        target: targets::PNG,
        size,
        bytes = buffer.len(),
        quality = options.quality,
        compression_level = options.compression_level,
        "encoded PNG"
    );

    Ok(buffer)
}
