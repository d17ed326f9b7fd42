//! Generate favicon, Apple touch icon and PWA icon sets from one SVG.
//!
//! A run takes an [`IconsetConfig`], renders every configured size,
//! packs `favicon.ico`, and writes `meta-tags.html`, `manifest.json` and
//! `browserconfig.xml` next to the images. The returned
//! [`GenerationManifest`] lists everything that was written.
//!
//! # Example
//!
//! ```no_run
//! use iconset::{generate, IconsetConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = IconsetConfig::new("logo.svg", "public/icons")
//!         .with_compression_level(6)
//!         .with_verbose(true);
//!     let manifest = generate(&config)?;
//!     println!("wrote {} icons", manifest.icons.len());
//!     Ok(())
//! }
//! ```
//!
//! The ICO encoder lives in [`iconset_core`] and the rasterizer in
//! [`iconset_render`]; both crates are re-exported.

pub mod config;
pub mod emit;
pub mod error;
pub mod file;
pub mod generate;
pub mod manifest;
pub mod planner;

pub use config::{ConfigOverrides, IconSpec, IconsetConfig, WebAppInfo};
pub use error::{ConfigError, IconsetError, IconsetResult};
pub use generate::{generate, generate_with};
pub use manifest::{FaviconManifestEntry, GenerationManifest, IconManifestEntry, RootFaviconSet};
pub use planner::{plan, RenderPlan};

pub use iconset_core;
pub use iconset_render;
