//! Companion metadata files.
//!
//! Each emitter is a pure function of the [`GenerationManifest`] and the
//! app details; the pipeline writes their output next to the icons.
//!
//! - [`html`]: `<link>` and `<meta>` tags for the page `<head>`
//! - [`web_manifest`]: the PWA `manifest.json`
//! - [`browserconfig`]: the Windows tile `browserconfig.xml`
//!
//! [`GenerationManifest`]: crate::manifest::GenerationManifest

pub mod browserconfig;
pub mod html;
pub mod web_manifest;

use thiserror::Error;

/// Errors raised while serializing a metadata document.
#[derive(Error, Debug)]
pub enum EmitError {
    /// JSON serialization failed.
    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// XML writing failed.
    #[error("failed to write XML: {0}")]
    Xml(String),
}

/// Result type for emitters.
pub type EmitResult<T> = Result<T, EmitError>;
