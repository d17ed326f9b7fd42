//! Core types for iconset.
//!
//! This crate holds the pieces every other iconset crate shares:
//!
//! - **ICO encoding**: [`ico::encode_ico`] packs PNG buffers into a Windows
//!   icon container, and [`ico::read_ico`] parses one back
//! - **Data model**: [`RenderRequest`], [`RasterImage`], [`BackgroundMode`]
//!   and [`IconPurpose`]
//! - **Format detection**: [`ImageFormat`]
//! - **Logging**: target names under [`logging::targets`]
//!
//! # Example
//!
//! ```
//! use iconset_core::{BackgroundMode, IconPurpose};
//!
//! let purpose = IconPurpose::infer("icon-512x512.png");
//! assert_eq!(BackgroundMode::for_icon(purpose, 512), BackgroundMode::OpaqueWhite);
//! ```

pub mod error;
pub mod format;
pub mod ico;
pub mod logging;
pub mod types;

pub use error::{IcoError, IcoResult};
pub use format::ImageFormat;
pub use ico::{encode_ico, read_ico, IcoDirEntry, IcoFile, IcoImage};
pub use types::{BackgroundMode, IconPurpose, RasterImage, RenderRequest, OPAQUE_HOME_SCREEN_MIN_SIZE};
