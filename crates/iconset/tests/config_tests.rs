//! Loading and layering settings from TOML files.

use iconset::config::{ConfigOverrides, DEFAULT_OUTPUT_DIR};
use iconset::file::FileErrorKind;
use iconset::IconsetConfig;
use iconset_core::{BackgroundMode, IconPurpose};
use tempfile::tempdir;

#[test]
fn test_file_paths_are_relative_to_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("iconset.toml");
    std::fs::write(
        &path,
        r#"
source = "assets/logo.svg"
output_dir = "public/icons"
"#,
    )
    .unwrap();

    let overrides = ConfigOverrides::from_toml_file(&path).unwrap();
    assert_eq!(overrides.source, Some(dir.path().join("assets/logo.svg")));
    assert_eq!(overrides.output_dir, Some(dir.path().join("public/icons")));
}

#[test]
fn test_flags_override_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("iconset.toml");
    std::fs::write(
        &path,
        r##"
quality = 70
compression_level = 2
favicon = false

[[icons]]
size = 256
name = "tile-256.png"
purpose = "home-screen"

[web_app]
name = "From File"
theme_color = "#111111"
"##,
    )
    .unwrap();

    let flags = ConfigOverrides {
        compression_level: Some(8),
        ..ConfigOverrides::default()
    };
    let config = IconsetConfig::new("logo.svg", DEFAULT_OUTPUT_DIR)
        .merge(ConfigOverrides::from_toml_file(&path).unwrap())
        .merge(flags);

    assert_eq!(config.encoding.quality, 70);
    assert_eq!(config.encoding.compression_level, 8);
    assert!(!config.favicon.enabled);
    assert_eq!(config.web_app.name, "From File");
    assert_eq!(config.web_app.short_name, "App");

    assert_eq!(config.icons.len(), 1);
    assert_eq!(config.icons[0].purpose, IconPurpose::HomeScreen);
    assert_eq!(config.icons[0].background(), BackgroundMode::OpaqueWhite);
    assert!(config.validate().is_ok());
}

#[test]
fn test_bad_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("iconset.toml");
    std::fs::write(&path, "qualty = 70\n").unwrap();

    let err = ConfigOverrides::from_toml_file(&path).unwrap_err();
    assert_eq!(err.kind(), FileErrorKind::InvalidData);
    assert_eq!(err.path(), path);

    let missing = ConfigOverrides::from_toml_file(dir.path().join("missing.toml")).unwrap_err();
    assert!(missing.is_not_found());
}
