//! The record of what a generation run wrote.

use std::path::{Path, PathBuf};

use iconset_core::IconPurpose;
use serde::Serialize;

/// One written icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IconManifestEntry {
    /// Edge length in pixels.
    pub pixel_size: u32,
    /// File name relative to the output directory.
    pub output_name: String,
    /// Full path of the written file.
    pub file_path: PathBuf,
    /// Where the icon is used.
    pub purpose: IconPurpose,
}

/// One written supplementary favicon PNG.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaviconManifestEntry {
    /// Full path of the written file.
    pub file_path: PathBuf,
    /// Edge length in pixels.
    pub pixel_size: u32,
}

impl FaviconManifestEntry {
    /// File name relative to the output directory.
    pub fn file_name(&self) -> String {
        file_name(&self.file_path)
    }
}

/// The root favicon files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RootFaviconSet {
    /// `favicon.png`.
    pub png_path: PathBuf,
    /// `favicon.svg`.
    pub svg_path: PathBuf,
    /// `favicon.ico`.
    pub ico_path: PathBuf,
}

impl RootFaviconSet {
    /// The three paths, PNG first.
    pub fn paths(&self) -> [&Path; 3] {
        [
            self.png_path.as_path(),
            self.svg_path.as_path(),
            self.ico_path.as_path(),
        ]
    }
}

/// Everything written by one run, in generation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationManifest {
    /// Directory all files were written to.
    pub output_dir: PathBuf,
    /// Configured icons, in configuration order (not sorted by size).
    pub icons: Vec<IconManifestEntry>,
    /// Supplementary favicon PNGs.
    pub favicons: Vec<FaviconManifestEntry>,
    /// Root favicon files, when enabled.
    pub root_favicons: Option<RootFaviconSet>,
    /// `meta-tags.html`.
    pub meta_tags: PathBuf,
    /// `manifest.json`.
    pub web_manifest: PathBuf,
    /// `browserconfig.xml`.
    pub browserconfig: PathBuf,
}

impl GenerationManifest {
    /// The first icon with exactly this size.
    pub fn icon_with_size(&self, size: u32) -> Option<&IconManifestEntry> {
        self.icons.iter().find(|icon| icon.pixel_size == size)
    }

    /// Every file path in the manifest.
    pub fn all_paths(&self) -> Vec<&Path> {
        let mut paths: Vec<&Path> = self.icons.iter().map(|i| i.file_path.as_path()).collect();
        paths.extend(self.favicons.iter().map(|f| f.file_path.as_path()));
        if let Some(root) = &self.root_favicons {
            paths.extend(root.paths());
        }
        paths.extend([
            self.meta_tags.as_path(),
            self.web_manifest.as_path(),
            self.browserconfig.as_path(),
        ]);
        paths
    }
}

/// Final path component as a string.
pub(crate) fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
