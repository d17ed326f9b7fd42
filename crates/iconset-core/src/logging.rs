//! Logging conventions for iconset.
//!
//! iconset uses the `tracing` crate for instrumentation. The library never
//! installs a subscriber; the `iconset` binary does that, and embedding
//! applications can install their own:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("iconset=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// ICO container encoding.
    pub const ICO: &str = "iconset_core::ico";
    /// SVG parsing and rasterization.
    pub const RENDER: &str = "iconset_render::svg";
    /// PNG encoding.
    pub const PNG: &str = "iconset_render::png";
    /// Configuration loading and validation.
    pub const CONFIG: &str = "iconset::config";
    /// The generation pipeline.
    pub const GENERATE: &str = "iconset::generate";
    /// Companion metadata files.
    pub const EMIT: &str = "iconset::emit";
}

/// Span names used for the generation pipeline.
pub mod span_names {
    /// One full generation run.
    pub const GENERATE: &str = "iconset::generate";
    /// Rendering a single artifact.
    pub const RENDER: &str = "iconset::render";
}
