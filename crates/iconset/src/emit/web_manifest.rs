//! The PWA web app manifest (`manifest.json`).

use iconset_core::logging::targets;
use serde::Serialize;
use tracing::debug;

use super::EmitResult;
use crate::config::WebAppInfo;
use crate::manifest::{GenerationManifest, IconManifestEntry};

/// Icon sizes declared as both `any` and `maskable`.
const MASKABLE_SIZES: [u32; 2] = [192, 512];

/// A serialized `manifest.json` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebManifest {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub start_url: String,
    pub display: String,
    pub background_color: String,
    pub theme_color: String,
    pub orientation: String,
    pub icons: Vec<WebManifestIcon>,
}

/// One entry of the manifest `icons` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub purpose: String,
}

impl WebManifestIcon {
    fn from_entry(icon: &IconManifestEntry, app: &WebAppInfo) -> Self {
        let purpose = if MASKABLE_SIZES.contains(&icon.pixel_size) {
            "any maskable"
        } else {
            "any"
        };
        Self {
            src: app.href(&icon.output_name),
            sizes: format!("{0}x{0}", icon.pixel_size),
            mime_type: "image/png".to_string(),
            purpose: purpose.to_string(),
        }
    }
}

/// Whether an icon belongs in the web app manifest.
///
/// Only `icon-*` files are listed; Apple touch icons never are.
fn is_manifest_icon(icon: &IconManifestEntry) -> bool {
    icon.output_name.starts_with("icon-") && !icon.output_name.contains("apple")
}

/// Build the manifest document, icons sorted by ascending size.
pub fn build(manifest: &GenerationManifest, app: &WebAppInfo) -> WebManifest {
    let mut icons: Vec<&IconManifestEntry> =
        manifest.icons.iter().filter(|icon| is_manifest_icon(icon)).collect();
    icons.sort_by_key(|icon| icon.pixel_size);
    debug!(target: targets::EMIT, icons = icons.len(), "building web manifest");

    WebManifest {
        name: app.name.clone(),
        short_name: app.short_name.clone(),
        description: app.description.clone(),
        start_url: app.start_url.clone(),
        display: app.display.clone(),
        background_color: app.background_color.clone(),
        theme_color: app.theme_color.clone(),
        orientation: app.orientation.clone(),
        icons: icons
            .into_iter()
            .map(|icon| WebManifestIcon::from_entry(icon, app))
            .collect(),
    }
}

/// Pretty-printed JSON for `document`.
pub fn to_json(document: &WebManifest) -> EmitResult<String> {
    let mut json = serde_json::to_string_pretty(document)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use iconset_core::IconPurpose;
    use std::path::PathBuf;

    fn manifest(names: &[(u32, &str)]) -> GenerationManifest {
        GenerationManifest {
            output_dir: PathBuf::from("out"),
            icons: names
                .iter()
                .map(|&(size, name)| IconManifestEntry {
                    pixel_size: size,
                    output_name: name.to_string(),
                    file_path: PathBuf::from("out").join(name),
                    purpose: IconPurpose::infer(name),
                })
                .collect(),
            favicons: Vec::new(),
            root_favicons: None,
            meta_tags: PathBuf::from("out/meta-tags.html"),
            web_manifest: PathBuf::from("out/manifest.json"),
            browserconfig: PathBuf::from("out/browserconfig.xml"),
        }
    }

    #[test]
    fn test_filters_and_sorts_icons() {
        let manifest = manifest(&[
            (512, "icon-512x512.png"),
            (180, "apple-touch-icon-180x180.png"),
            (150, "icon-150x150.png"),
            (192, "icon-192x192.png"),
            (64, "logo-64.png"),
        ]);
        let document = build(&manifest, &WebAppInfo::default());

        let sizes: Vec<&str> = document.icons.iter().map(|i| i.sizes.as_str()).collect();
        assert_eq!(sizes, ["150x150", "192x192", "512x512"]);
        assert_eq!(document.icons[0].purpose, "any");
        assert_eq!(document.icons[1].purpose, "any maskable");
        assert_eq!(document.icons[2].purpose, "any maskable");
        assert_eq!(document.icons[0].src, "/icon-150x150.png");
    }

    #[test]
    fn test_json_shape() {
        let manifest = manifest(&[(192, "icon-192x192.png")]);
        let app = WebAppInfo {
            name: "Example".to_string(),
            base_url: "/static".to_string(),
            ..WebAppInfo::default()
        };
        let json = to_json(&build(&manifest, &app)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["name"], "Example");
        assert_eq!(value["display"], "standalone");
        assert_eq!(value["icons"][0]["type"], "image/png");
        assert_eq!(value["icons"][0]["src"], "/static/icon-192x192.png");
    }

    #[test]
    fn test_no_matching_icons() {
        let manifest = manifest(&[(180, "apple-touch-icon-180x180.png")]);
        let document = build(&manifest, &WebAppInfo::default());
        assert!(document.icons.is_empty());
    }
}
