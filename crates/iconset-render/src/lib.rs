//! Raster rendering for iconset.
//!
//! This crate turns the source SVG into square PNG icons. It wraps
//! [resvg](https://docs.rs/resvg) for rasterization and the `image` crate's
//! PNG encoder for output.
//!
//! # Example
//!
//! ```no_run
//! use iconset_core::{BackgroundMode, RenderRequest};
//! use iconset_render::{PngOptions, RasterRenderer, SvgRasterizer};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source = std::fs::read("logo.svg")?;
//! let rasterizer = SvgRasterizer::from_bytes(&source, PngOptions::default())?;
//!
//! let request = RenderRequest::new(192, "icon-192x192.png", BackgroundMode::OpaqueWhite);
//! let image = rasterizer.render(&request)?;
//! std::fs::write(&request.output_name, image.png())?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod png;
pub mod rasterizer;
pub mod svg;

pub use error::{RenderError, RenderResult};
pub use png::{encode_png, PngOptions};
pub use rasterizer::{RasterRenderer, SvgRasterizer};
pub use svg::SvgImage;
