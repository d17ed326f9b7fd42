//! The raster renderer seam.
//!
//! The generation pipeline only needs "turn this request into PNG bytes".
//! [`RasterRenderer`] captures that, and [`SvgRasterizer`] is the
//! implementation backed by resvg and the `image` PNG encoder.

use iconset_core::logging::{span_names, targets};
use iconset_core::{RasterImage, RenderRequest};
use tracing::debug_span;

use crate::error::RenderResult;
use crate::png::{encode_png, PngOptions};
use crate::svg::SvgImage;

/// Produces square PNG rasters for render requests.
///
/// Implementations must be pure with respect to the request: the pipeline
/// calls `render` from several threads at once and in no particular order.
pub trait RasterRenderer: Send + Sync {
    /// Render one request into an encoded PNG of exactly
    /// `request.pixel_size` pixels square.
    fn render(&self, request: &RenderRequest) -> RenderResult<RasterImage>;
}

/// Renders a parsed SVG document to PNG.
#[derive(Debug, Clone)]
pub struct SvgRasterizer {
    svg: SvgImage,
    options: PngOptions,
}

impl SvgRasterizer {
    /// Create a rasterizer for an already parsed document.
    pub fn new(svg: SvgImage, options: PngOptions) -> Self {
        Self { svg, options }
    }

    /// Parse `data` as SVG and create a rasterizer for it.
    pub fn from_bytes(data: &[u8], options: PngOptions) -> RenderResult<Self> {
        Ok(Self::new(SvgImage::from_bytes(data)?, options))
    }
}

impl RasterRenderer for SvgRasterizer {
    fn render(&self, request: &RenderRequest) -> RenderResult<RasterImage> {
        let _span = debug_span!(
            target: targets::RENDER,
            span_names::RENDER,
            name = %request.output_name,
            size = request.pixel_size
        )
        .entered();

        let rgba = self.svg.render_rgba(request.pixel_size, request.background)?;
        let png = encode_png(&rgba, request.pixel_size, &self.options)?;
        Ok(RasterImage::new(request.pixel_size, png))
    }
}

impl<R: RasterRenderer + ?Sized> RasterRenderer for &R {
    fn render(&self, request: &RenderRequest) -> RenderResult<RasterImage> {
        (**self).render(request)
    }
}

impl<R: RasterRenderer + ?Sized> RasterRenderer for Box<R> {
    fn render(&self, request: &RenderRequest) -> RenderResult<RasterImage> {
        (**self).render(request)
    }
}
