//! Shared data model for a generation run.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Smallest edge length at which home-screen icons get an opaque fill.
pub const OPAQUE_HOME_SCREEN_MIN_SIZE: u32 = 192;

/// Background fill applied beneath the rendered vector art.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundMode {
    /// Leave uncovered pixels fully transparent.
    #[default]
    Transparent,
    /// Fill with opaque white.
    OpaqueWhite,
    /// Fill with opaque black. Available, but never chosen by the planner.
    OpaqueBlack,
}

impl BackgroundMode {
    /// Straight RGBA fill color, or `None` for transparent.
    pub fn fill_rgba(self) -> Option<[u8; 4]> {
        match self {
            BackgroundMode::Transparent => None,
            BackgroundMode::OpaqueWhite => Some([255, 255, 255, 255]),
            BackgroundMode::OpaqueBlack => Some([0, 0, 0, 255]),
        }
    }

    /// Background for an icon of the given purpose and size.
    ///
    /// Home-screen icons of 192px and up are filled with white because some
    /// launchers ignore alpha; everything else stays transparent.
    pub fn for_icon(purpose: IconPurpose, size: u32) -> Self {
        if purpose == IconPurpose::HomeScreen && size >= OPAQUE_HOME_SCREEN_MIN_SIZE {
            BackgroundMode::OpaqueWhite
        } else {
            BackgroundMode::Transparent
        }
    }
}

/// What an icon is used for on the target platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconPurpose {
    /// PWA / Android home-screen and Windows tile icons (`icon-*`).
    HomeScreen,
    /// Apple touch icons.
    Touch,
    /// Browser tab favicons.
    Favicon,
}

impl IconPurpose {
    /// Derive a purpose from a file name that carries no explicit tag.
    ///
    /// `apple*` names are touch icons, other names containing `icon-` are
    /// home-screen icons, and anything else is treated as a favicon.
    pub fn infer(name: &str) -> Self {
        if name.starts_with("apple") {
            IconPurpose::Touch
        } else if name.contains("icon-") {
            IconPurpose::HomeScreen
        } else {
            IconPurpose::Favicon
        }
    }
}

impl fmt::Display for IconPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconPurpose::HomeScreen => write!(f, "home-screen"),
            IconPurpose::Touch => write!(f, "touch"),
            IconPurpose::Favicon => write!(f, "favicon"),
        }
    }
}

/// One raster render to perform.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderRequest {
    /// Square edge length in pixels.
    pub pixel_size: u32,
    /// File name the result is written to, relative to the output directory.
    pub output_name: String,
    /// Fill beneath the vector art.
    pub background: BackgroundMode,
}

impl RenderRequest {
    /// Create a render request.
    pub fn new(pixel_size: u32, output_name: impl Into<String>, background: BackgroundMode) -> Self {
        Self {
            pixel_size,
            output_name: output_name.into(),
            background,
        }
    }

    /// A transparent render, as used for favicons.
    pub fn transparent(pixel_size: u32, output_name: impl Into<String>) -> Self {
        Self::new(pixel_size, output_name, BackgroundMode::Transparent)
    }
}

/// An encoded PNG image, square with edge `pixel_size`.
///
/// The bytes are shared and immutable so a render can feed both a file
/// write and the ICO encoder without copying.
#[derive(Clone, PartialEq, Eq)]
pub struct RasterImage {
    pixel_size: u32,
    png: Arc<[u8]>,
}

impl RasterImage {
    /// Wrap encoded PNG bytes.
    pub fn new(pixel_size: u32, png: impl Into<Arc<[u8]>>) -> Self {
        Self {
            pixel_size,
            png: png.into(),
        }
    }

    /// Edge length in pixels.
    pub fn pixel_size(&self) -> u32 {
        self.pixel_size
    }

    /// The encoded PNG file.
    pub fn png(&self) -> &[u8] {
        &self.png
    }

    /// Length of the encoded PNG in bytes.
    pub fn len(&self) -> usize {
        self.png.len()
    }

    /// Whether the encoded buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.png.is_empty()
    }
}

impl fmt::Debug for RasterImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RasterImage")
            .field("pixel_size", &self.pixel_size)
            .field("bytes", &self.png.len())
            .finish()
    }
}
