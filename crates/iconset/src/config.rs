//! Generation settings.
//!
//! [`IconsetConfig::new`] starts from the built-in defaults; `with_*`
//! methods and [`IconsetConfig::merge`] derive new values from it. Nothing
//! is shared or mutated globally. A config is checked once, by
//! [`IconsetConfig::validate`], before a run touches the file system.
//!
//! ```
//! use iconset::IconsetConfig;
//!
//! let config = IconsetConfig::new("logo.svg", "public/icons")
//!     .with_quality(90)
//!     .with_root_favicons(false);
//! assert!(config.validate().is_ok());
//! ```
//!
//! Overrides can also come from a TOML file:
//!
//! ```toml
//! output_dir = "dist/icons"
//! compression_level = 6
//! favicon_sizes = [16, 32, 48]
//!
//! [[icons]]
//! size = 192
//! name = "icon-192x192.png"
//!
//! [web_app]
//! name = "Example"
//! theme_color = "#0f172a"
//! ```

use std::path::{Path, PathBuf};

use iconset_core::logging::targets;
use iconset_core::{BackgroundMode, IconPurpose, ImageFormat};
use iconset_render::png::MAX_COMPRESSION_LEVEL;
use iconset_render::PngOptions;
use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;
use crate::file::{self, FileError, FileResult};

/// Default output directory for the command line.
pub const DEFAULT_OUTPUT_DIR: &str = "./icons";

/// Default sizes of the supplementary `favicon-{size}.png` files.
pub const DEFAULT_FAVICON_SIZES: &[u32] = &[16, 32];

/// Default edge length of the root `favicon.png`.
pub const DEFAULT_ROOT_FAVICON_PNG_SIZE: u32 = 32;

/// The standard Apple touch and PWA icon table.
pub const DEFAULT_ICONS: &[(u32, &str, IconPurpose)] = &[
    (57, "apple-touch-icon-57x57.png", IconPurpose::Touch),
    (60, "apple-touch-icon-60x60.png", IconPurpose::Touch),
    (72, "apple-touch-icon-72x72.png", IconPurpose::Touch),
    (76, "apple-touch-icon-76x76.png", IconPurpose::Touch),
    (114, "apple-touch-icon-114x114.png", IconPurpose::Touch),
    (120, "apple-touch-icon-120x120.png", IconPurpose::Touch),
    (144, "apple-touch-icon-144x144.png", IconPurpose::Touch),
    (152, "apple-touch-icon-152x152.png", IconPurpose::Touch),
    (180, "apple-touch-icon-180x180.png", IconPurpose::Touch),
    (150, "icon-150x150.png", IconPurpose::HomeScreen),
    (192, "icon-192x192.png", IconPurpose::HomeScreen),
    (310, "icon-310x310.png", IconPurpose::HomeScreen),
    (512, "icon-512x512.png", IconPurpose::HomeScreen),
];

/// One icon to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSpec {
    /// Square edge length in pixels.
    pub size: u32,
    /// Output file name, relative to the output directory.
    pub name: String,
    /// Where the icon is used.
    pub purpose: IconPurpose,
}

impl IconSpec {
    /// An icon whose purpose is inferred from its name.
    pub fn new(size: u32, name: impl Into<String>) -> Self {
        let name = name.into();
        let purpose = IconPurpose::infer(&name);
        Self {
            size,
            name,
            purpose,
        }
    }

    /// An icon with an explicit purpose.
    pub fn with_purpose(size: u32, name: impl Into<String>, purpose: IconPurpose) -> Self {
        Self {
            size,
            name: name.into(),
            purpose,
        }
    }

    /// Background this icon is rendered with.
    pub fn background(&self) -> BackgroundMode {
        BackgroundMode::for_icon(self.purpose, self.size)
    }
}

/// The [`DEFAULT_ICONS`] table as owned specs.
pub fn default_icons() -> Vec<IconSpec> {
    DEFAULT_ICONS
        .iter()
        .map(|&(size, name, purpose)| IconSpec::with_purpose(size, name, purpose))
        .collect()
}

/// Supplementary favicon PNGs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaviconOptions {
    /// Whether `favicon-{size}.png` files are written.
    pub enabled: bool,
    /// Sizes to write.
    pub sizes: Vec<u32>,
}

impl Default for FaviconOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            sizes: DEFAULT_FAVICON_SIZES.to_vec(),
        }
    }
}

/// Root `favicon.png`, `favicon.svg` and `favicon.ico`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootFaviconOptions {
    /// Whether the root favicon files are written.
    pub enabled: bool,
    /// Edge length of `favicon.png`.
    pub png_size: u32,
}

impl Default for RootFaviconOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            png_size: DEFAULT_ROOT_FAVICON_PNG_SIZE,
        }
    }
}

/// Application details written into the companion metadata files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebAppInfo {
    /// Full application name.
    pub name: String,
    /// Name shown under home-screen icons.
    pub short_name: String,
    /// One-line description.
    pub description: String,
    /// URL opened when the app is launched.
    pub start_url: String,
    /// Display mode (`standalone`, `fullscreen`, ...).
    pub display: String,
    /// Splash screen background color.
    pub background_color: String,
    /// Browser UI theme color.
    pub theme_color: String,
    /// Default orientation.
    pub orientation: String,
    /// Windows tile background color.
    pub tile_color: String,
    /// Prefix for icon URLs in the generated files.
    pub base_url: String,
}

impl Default for WebAppInfo {
    fn default() -> Self {
        Self {
            name: "Web App".to_string(),
            short_name: "App".to_string(),
            description: String::new(),
            start_url: "/".to_string(),
            display: "standalone".to_string(),
            background_color: "#ffffff".to_string(),
            theme_color: "#ffffff".to_string(),
            orientation: "any".to_string(),
            tile_color: "#ffffff".to_string(),
            base_url: "/".to_string(),
        }
    }
}

impl WebAppInfo {
    /// URL of a generated file, as referenced from HTML and manifests.
    pub fn href(&self, file_name: &str) -> String {
        if self.base_url.is_empty() || self.base_url.ends_with('/') {
            format!("{}{}", self.base_url, file_name)
        } else {
            format!("{}/{}", self.base_url, file_name)
        }
    }
}

/// Everything a generation run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconsetConfig {
    /// Source SVG.
    pub source: PathBuf,
    /// Directory all artifacts are written to; created if absent.
    pub output_dir: PathBuf,
    /// Icons to render, in output order.
    pub icons: Vec<IconSpec>,
    /// Supplementary favicon PNGs.
    pub favicon: FaviconOptions,
    /// Root favicon files.
    pub root_favicons: RootFaviconOptions,
    /// PNG output settings.
    pub encoding: PngOptions,
    /// Details for the metadata files.
    pub web_app: WebAppInfo,
    /// Report per-file progress at `info` level.
    pub verbose: bool,
}

impl IconsetConfig {
    /// A config with every default applied.
    pub fn new(source: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output_dir: output_dir.into(),
            icons: default_icons(),
            favicon: FaviconOptions::default(),
            root_favicons: RootFaviconOptions::default(),
            encoding: PngOptions::default(),
            web_app: WebAppInfo::default(),
            verbose: false,
        }
    }

    /// Replace the icon list.
    pub fn with_icons(mut self, icons: Vec<IconSpec>) -> Self {
        self.icons = icons;
        self
    }

    /// Turn supplementary favicon PNGs on or off.
    pub fn with_favicons(mut self, enabled: bool) -> Self {
        self.favicon.enabled = enabled;
        self
    }

    /// Set the supplementary favicon sizes.
    pub fn with_favicon_sizes(mut self, sizes: Vec<u32>) -> Self {
        self.favicon.sizes = sizes;
        self
    }

    /// Turn the root favicon files on or off.
    pub fn with_root_favicons(mut self, enabled: bool) -> Self {
        self.root_favicons.enabled = enabled;
        self
    }

    /// Set the edge length of the root `favicon.png`.
    pub fn with_root_favicon_png_size(mut self, size: u32) -> Self {
        self.root_favicons.png_size = size;
        self
    }

    /// Set the PNG quality.
    pub fn with_quality(mut self, quality: u8) -> Self {
        self.encoding.quality = quality;
        self
    }

    /// Set the PNG compression level.
    pub fn with_compression_level(mut self, level: u8) -> Self {
        self.encoding.compression_level = level;
        self
    }

    /// Replace the metadata details.
    pub fn with_web_app(mut self, web_app: WebAppInfo) -> Self {
        self.web_app = web_app;
        self
    }

    /// Turn per-file progress reporting on or off.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Apply every field set in `overrides`, keeping the rest.
    pub fn merge(self, overrides: ConfigOverrides) -> Self {
        let ConfigOverrides {
            source,
            output_dir,
            icons,
            favicon,
            favicon_sizes,
            root_favicons,
            favicon_png_size,
            quality,
            compression_level,
            verbose,
            web_app,
        } = overrides;

        Self {
            source: source.unwrap_or(self.source),
            output_dir: output_dir.unwrap_or(self.output_dir),
            icons: icons
                .map(|entries| entries.into_iter().map(IconEntry::into_spec).collect())
                .unwrap_or(self.icons),
            favicon: FaviconOptions {
                enabled: favicon.unwrap_or(self.favicon.enabled),
                sizes: favicon_sizes.unwrap_or(self.favicon.sizes),
            },
            root_favicons: RootFaviconOptions {
                enabled: root_favicons.unwrap_or(self.root_favicons.enabled),
                png_size: favicon_png_size.unwrap_or(self.root_favicons.png_size),
            },
            encoding: PngOptions {
                quality: quality.unwrap_or(self.encoding.quality),
                compression_level: compression_level.unwrap_or(self.encoding.compression_level),
            },
            web_app: web_app.apply(self.web_app),
            verbose: verbose.unwrap_or(self.verbose),
        }
    }

    /// Check every setting, returning the first problem found.
    ///
    /// This performs no I/O; whether the source exists is checked when the
    /// run starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source.as_os_str().is_empty() {
            return Err(ConfigError::MissingSource);
        }
        if ImageFormat::from_path(&self.source) != ImageFormat::Svg {
            return Err(ConfigError::NotSvg(self.source.clone()));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyOutputDir);
        }
        if self.icons.is_empty() {
            return Err(ConfigError::NoIcons);
        }
        for (index, icon) in self.icons.iter().enumerate() {
            if icon.size == 0 {
                return Err(ConfigError::ZeroSize {
                    index,
                    name: icon.name.clone(),
                });
            }
            if icon.name.trim().is_empty() {
                return Err(ConfigError::MissingName {
                    index,
                    size: icon.size,
                });
            }
        }
        if !(1..=100).contains(&self.encoding.quality) {
            return Err(ConfigError::Quality(self.encoding.quality));
        }
        if self.encoding.compression_level > MAX_COMPRESSION_LEVEL {
            return Err(ConfigError::CompressionLevel(self.encoding.compression_level));
        }
        if self.favicon.enabled {
            if self.favicon.sizes.is_empty() {
                return Err(ConfigError::NoFaviconSizes);
            }
            if self.favicon.sizes.contains(&0) {
                return Err(ConfigError::ZeroFaviconSize);
            }
        }
        if self.root_favicons.enabled && self.root_favicons.png_size == 0 {
            return Err(ConfigError::ZeroRootFaviconSize);
        }

        debug!(
            target: targets::CONFIG,
            source = %self.source.display(),
            output_dir = %self.output_dir.display(),
            icons = self.icons.len(),
            "configuration validated"
        );
        Ok(())
    }
}

/// An icon entry as written in a config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IconEntry {
    /// Edge length in pixels.
    pub size: u32,
    /// Output file name.
    pub name: String,
    /// Explicit purpose; inferred from `name` when absent.
    #[serde(default)]
    pub purpose: Option<IconPurpose>,
}

impl IconEntry {
    fn into_spec(self) -> IconSpec {
        match self.purpose {
            Some(purpose) => IconSpec::with_purpose(self.size, self.name, purpose),
            None => IconSpec::new(self.size, self.name),
        }
    }
}

/// Optional overrides for [`WebAppInfo`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WebAppOverrides {
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub description: Option<String>,
    pub start_url: Option<String>,
    pub display: Option<String>,
    pub background_color: Option<String>,
    pub theme_color: Option<String>,
    pub orientation: Option<String>,
    pub tile_color: Option<String>,
    pub base_url: Option<String>,
}

impl WebAppOverrides {
    fn apply(self, base: WebAppInfo) -> WebAppInfo {
        WebAppInfo {
            name: self.name.unwrap_or(base.name),
            short_name: self.short_name.unwrap_or(base.short_name),
            description: self.description.unwrap_or(base.description),
            start_url: self.start_url.unwrap_or(base.start_url),
            display: self.display.unwrap_or(base.display),
            background_color: self.background_color.unwrap_or(base.background_color),
            theme_color: self.theme_color.unwrap_or(base.theme_color),
            orientation: self.orientation.unwrap_or(base.orientation),
            tile_color: self.tile_color.unwrap_or(base.tile_color),
            base_url: self.base_url.unwrap_or(base.base_url),
        }
    }
}

/// Caller-supplied settings layered over the defaults.
///
/// Every field is optional; unknown keys are rejected so typos in a config
/// file surface as errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOverrides {
    pub source: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub icons: Option<Vec<IconEntry>>,
    pub favicon: Option<bool>,
    pub favicon_sizes: Option<Vec<u32>>,
    pub root_favicons: Option<bool>,
    pub favicon_png_size: Option<u32>,
    pub quality: Option<u8>,
    pub compression_level: Option<u8>,
    pub verbose: Option<bool>,
    pub web_app: WebAppOverrides,
}

impl ConfigOverrides {
    /// Parse overrides from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Read overrides from a TOML file.
    ///
    /// Relative `source` and `output_dir` values are resolved against the
    /// file's directory.
    pub fn from_toml_file(path: impl AsRef<Path>) -> FileResult<Self> {
        let path = path.as_ref();
        let content = file::read_text(path)?;
        let mut overrides =
            Self::from_toml_str(&content).map_err(|e| FileError::invalid_data(path, e))?;

        if let Some(base) = path.parent() {
            overrides.source = overrides.source.map(|p| base.join(p));
            overrides.output_dir = overrides.output_dir.map(|p| base.join(p));
        }
        Ok(overrides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> IconsetConfig {
        IconsetConfig::new("logo.svg", "out")
    }

    #[test]
    fn test_defaults() {
        let config = valid();
        assert_eq!(config.icons.len(), 13);
        assert!(config.favicon.enabled);
        assert_eq!(config.favicon.sizes, vec![16, 32]);
        assert!(config.root_favicons.enabled);
        assert_eq!(config.root_favicons.png_size, 32);
        assert_eq!(config.encoding, PngOptions::new(100, 9));
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_table_backgrounds() {
        let icons = default_icons();
        let opaque: Vec<&str> = icons
            .iter()
            .filter(|icon| icon.background() == BackgroundMode::OpaqueWhite)
            .map(|icon| icon.name.as_str())
            .collect();
        assert_eq!(
            opaque,
            vec!["icon-192x192.png", "icon-310x310.png", "icon-512x512.png"]
        );
    }

    #[test]
    fn test_default_table_matches_inferred_purpose() {
        for icon in default_icons() {
            assert_eq!(IconPurpose::infer(&icon.name), icon.purpose, "{}", icon.name);
        }
    }

    #[test]
    fn test_custom_apple_names_stay_transparent() {
        let inferred = IconSpec::new(192, "apple-touch-icon-192x192.png");
        assert_eq!(inferred.purpose, IconPurpose::Touch);
        assert_eq!(inferred.background(), BackgroundMode::Transparent);

        let explicit =
            IconSpec::with_purpose(192, "apple-touch-icon-192x192.png", IconPurpose::HomeScreen);
        assert_eq!(explicit.background(), BackgroundMode::OpaqueWhite);
    }

    #[test]
    fn test_source_must_be_svg() {
        assert_eq!(
            IconsetConfig::new("logo.png", "out").validate(),
            Err(ConfigError::NotSvg(PathBuf::from("logo.png")))
        );
        assert_eq!(
            IconsetConfig::new("", "out").validate(),
            Err(ConfigError::MissingSource)
        );
        assert!(IconsetConfig::new("LOGO.SVG", "out").validate().is_ok());
    }

    #[test]
    fn test_empty_output_dir() {
        assert_eq!(
            IconsetConfig::new("logo.svg", "").validate(),
            Err(ConfigError::EmptyOutputDir)
        );
    }

    #[test]
    fn test_icon_list_checks() {
        assert_eq!(
            valid().with_icons(Vec::new()).validate(),
            Err(ConfigError::NoIcons)
        );
        assert_eq!(
            valid()
                .with_icons(vec![IconSpec::new(16, "a.png"), IconSpec::new(0, "b.png")])
                .validate(),
            Err(ConfigError::ZeroSize {
                index: 1,
                name: "b.png".to_string()
            })
        );
        assert_eq!(
            valid().with_icons(vec![IconSpec::new(48, "  ")]).validate(),
            Err(ConfigError::MissingName { index: 0, size: 48 })
        );
    }

    #[test]
    fn test_encoding_ranges() {
        assert_eq!(valid().with_quality(0).validate(), Err(ConfigError::Quality(0)));
        assert_eq!(valid().with_quality(101).validate(), Err(ConfigError::Quality(101)));
        assert!(valid().with_quality(1).validate().is_ok());
        assert!(valid().with_compression_level(0).validate().is_ok());
        assert_eq!(
            valid().with_compression_level(10).validate(),
            Err(ConfigError::CompressionLevel(10))
        );
    }

    #[test]
    fn test_favicon_checks() {
        assert_eq!(
            valid().with_favicon_sizes(Vec::new()).validate(),
            Err(ConfigError::NoFaviconSizes)
        );
        assert!(valid()
            .with_favicons(false)
            .with_favicon_sizes(Vec::new())
            .validate()
            .is_ok());
        assert_eq!(
            valid().with_favicon_sizes(vec![16, 0]).validate(),
            Err(ConfigError::ZeroFaviconSize)
        );
        assert_eq!(
            valid().with_root_favicon_png_size(0).validate(),
            Err(ConfigError::ZeroRootFaviconSize)
        );
    }

    #[test]
    fn test_merge_keeps_unset_fields() {
        let merged = valid().with_quality(80).merge(ConfigOverrides {
            compression_level: Some(3),
            ..Default::default()
        });
        assert_eq!(merged.encoding, PngOptions::new(80, 3));
        assert_eq!(merged.source, PathBuf::from("logo.svg"));
        assert_eq!(merged.icons.len(), 13);
    }

    #[test]
    fn test_overrides_from_toml() {
        let overrides = ConfigOverrides::from_toml_str(
            r##"
            output_dir = "dist"
            favicon = false
            quality = 75

            [[icons]]
            size = 256
            name = "icon-256x256.png"

            [[icons]]
            size = 200
            name = "launcher.png"
            purpose = "home-screen"

            [web_app]
            name = "Example"
            theme_color = "#123456"
            "##,
        )
        .unwrap();

        let config = valid().merge(overrides);
        assert_eq!(config.output_dir, PathBuf::from("dist"));
        assert!(!config.favicon.enabled);
        assert_eq!(config.encoding.quality, 75);
        assert_eq!(
            config.icons,
            vec![
                IconSpec::with_purpose(256, "icon-256x256.png", IconPurpose::HomeScreen),
                IconSpec::with_purpose(200, "launcher.png", IconPurpose::HomeScreen),
            ]
        );
        assert_eq!(config.web_app.name, "Example");
        assert_eq!(config.web_app.theme_color, "#123456");
        assert_eq!(config.web_app.short_name, "App");
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(ConfigOverrides::from_toml_str("qualty = 10").is_err());
    }

    #[test]
    fn test_href() {
        let mut info = WebAppInfo::default();
        assert_eq!(info.href("favicon.ico"), "/favicon.ico");
        info.base_url = "https://cdn.example.com/icons".to_string();
        assert_eq!(info.href("favicon.ico"), "https://cdn.example.com/icons/favicon.ico");
        info.base_url = String::new();
        assert_eq!(info.href("favicon.ico"), "favicon.ico");
    }
}
