//! SVG loading and rasterization.
//!
//! This module provides [`SvgImage`], which parses an SVG document once and
//! renders it into square RGBA buffers of any edge length.
//!
//! # Usage
//!
//! ```ignore
//! use iconset_core::BackgroundMode;
//! use iconset_render::SvgImage;
//!
//! let svg = SvgImage::from_bytes(&std::fs::read("logo.svg")?)?;
//! let rgba = svg.render_rgba(192, BackgroundMode::OpaqueWhite)?;
//! assert_eq!(rgba.len(), 192 * 192 * 4);
//! ```
//!
//! Art that is not square is scaled uniformly to fit and centred, so the
//! output is always exactly the requested size.

use std::sync::Arc;

use iconset_core::logging::targets;
use iconset_core::BackgroundMode;
use resvg::tiny_skia;
use resvg::usvg;
use tracing::trace;

use crate::error::{RenderError, RenderResult};

/// A parsed SVG document that can be rendered at any resolution.
///
/// The tree is held in an `Arc`, so clones are cheap and can be handed to
/// worker threads.
#[derive(Clone)]
pub struct SvgImage {
    /// The parsed SVG tree.
    tree: Arc<usvg::Tree>,
    /// Natural width from the `width` attribute or `viewBox`.
    width: f32,
    /// Natural height from the `height` attribute or `viewBox`.
    height: f32,
}

impl SvgImage {
    /// Load an SVG from bytes in memory.
    ///
    /// # Errors
    ///
    /// Returns an error if the SVG is invalid or malformed.
    pub fn from_bytes(data: &[u8]) -> RenderResult<Self> {
        let options = usvg::Options::default();

        let tree = usvg::Tree::from_data(data, &options)
            .map_err(|e| RenderError::Parse(e.to_string()))?;

        let size = tree.size();
        Ok(Self {
            width: size.width(),
            height: size.height(),
            tree: Arc::new(tree),
        })
    }

    /// Natural `(width, height)` of the document.
    pub fn natural_size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Render into a straight-alpha RGBA buffer of `size`×`size` pixels.
    ///
    /// The background is painted first; the art is then scaled to fit and
    /// centred on top of it.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidDimensions`] when `size` is zero or too
    /// large to allocate.
    pub fn render_rgba(&self, size: u32, background: BackgroundMode) -> RenderResult<Vec<u8>> {
        let mut pixmap = tiny_skia::Pixmap::new(size, size).ok_or(
            RenderError::InvalidDimensions {
                width: size,
                height: size,
            },
        )?;

        if let Some([r, g, b, a]) = background.fill_rgba() {
            pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
        }

        let target = size as f32;
        let scale = (target / self.width).min(target / self.height);
        let dx = (target - self.width * scale) / 2.0;
        let dy = (target - self.height * scale) / 2.0;
        let transform = tiny_skia::Transform::from_row(scale, 0.0, 0.0, scale, dx, dy);

        resvg::render(&self.tree, transform, &mut pixmap.as_mut());

        trace!(
            target: targets::RENDER,
            size,
            ?background,
            scale,
            "rasterized SVG"
        );

        Ok(unpremultiply(pixmap.data()))
    }
}

/// Convert premultiplied RGBA (tiny-skia's storage) to straight RGBA.
fn unpremultiply(data: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(data.len());

    for chunk in data.chunks_exact(4) {
        match chunk[3] {
            0 => result.extend_from_slice(&[0, 0, 0, 0]),
            255 => result.extend_from_slice(chunk),
            alpha => {
                let a = alpha as f32 / 255.0;
                result.push((chunk[0] as f32 / a).round().min(255.0) as u8);
                result.push((chunk[1] as f32 / a).round().min(255.0) as u8);
                result.push((chunk[2] as f32 / a).round().min(255.0) as u8);
                result.push(alpha);
            }
        }
    }

    result
}

impl std::fmt::Debug for SvgImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SvgImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE_SVG: &[u8] = br#"
        <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24">
            <circle cx="12" cy="12" r="10" fill="red"/>
        </svg>
    "#;

    const WIDE_SVG: &[u8] = br#"
        <svg xmlns="http://www.w3.org/2000/svg" width="40" height="20" viewBox="0 0 40 20">
            <rect x="0" y="0" width="40" height="20" fill="blue"/>
        </svg>
    "#;

    fn pixel(rgba: &[u8], size: u32, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y * size + x) * 4) as usize;
        [rgba[idx], rgba[idx + 1], rgba[idx + 2], rgba[idx + 3]]
    }

    #[test]
    fn test_svg_from_bytes() {
        let svg = SvgImage::from_bytes(SIMPLE_SVG).expect("Should parse valid SVG");
        assert_eq!(svg.natural_size(), (24.0, 24.0));
    }

    #[test]
    fn test_render_transparent() {
        let svg = SvgImage::from_bytes(SIMPLE_SVG).unwrap();
        let rgba = svg.render_rgba(48, BackgroundMode::Transparent).unwrap();
        assert_eq!(rgba.len(), 48 * 48 * 4);

        let center = pixel(&rgba, 48, 24, 24);
        assert!(center[0] > 200, "Red channel should be high");
        assert!(center[1] < 50, "Green channel should be low");
        assert!(center[3] > 200, "Alpha should be opaque");

        // Corners lie outside the circle.
        assert_eq!(pixel(&rgba, 48, 0, 0)[3], 0);
    }

    #[test]
    fn test_render_opaque_white() {
        let svg = SvgImage::from_bytes(SIMPLE_SVG).unwrap();
        let rgba = svg.render_rgba(48, BackgroundMode::OpaqueWhite).unwrap();
        assert_eq!(pixel(&rgba, 48, 0, 0), [255, 255, 255, 255]);
        assert!(rgba.chunks_exact(4).all(|p| p[3] == 255));
    }

    #[test]
    fn test_render_opaque_black() {
        let svg = SvgImage::from_bytes(SIMPLE_SVG).unwrap();
        let rgba = svg.render_rgba(16, BackgroundMode::OpaqueBlack).unwrap();
        assert_eq!(pixel(&rgba, 16, 0, 0), [0, 0, 0, 255]);
    }

    #[test]
    fn test_wide_art_is_centered() {
        let svg = SvgImage::from_bytes(WIDE_SVG).unwrap();
        let rgba = svg.render_rgba(40, BackgroundMode::Transparent).unwrap();
        // Art occupies rows 10..30.
        assert_eq!(pixel(&rgba, 40, 20, 2)[3], 0);
        assert_eq!(pixel(&rgba, 40, 20, 20)[3], 255);
        assert_eq!(pixel(&rgba, 40, 20, 37)[3], 0);
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let svg = SvgImage::from_bytes(SIMPLE_SVG).unwrap();
        assert!(matches!(
            svg.render_rgba(0, BackgroundMode::Transparent),
            Err(RenderError::InvalidDimensions { width: 0, height: 0 })
        ));
    }

    #[test]
    fn test_svg_invalid_data() {
        let result = SvgImage::from_bytes(b"not valid svg");
        assert!(matches!(result, Err(RenderError::Parse(_))));
    }

    #[test]
    fn test_unpremultiply() {
        assert_eq!(unpremultiply(&[0, 0, 0, 0]), vec![0, 0, 0, 0]);
        assert_eq!(unpremultiply(&[10, 20, 30, 255]), vec![10, 20, 30, 255]);
        assert_eq!(unpremultiply(&[64, 0, 0, 128]), vec![128, 0, 0, 128]);
    }
}
