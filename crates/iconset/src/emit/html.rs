//! HTML head tags for favicons, touch icons and app metadata.

use iconset_core::IconPurpose;
use quick_xml::escape::escape;

use crate::config::WebAppInfo;
use crate::manifest::{GenerationManifest, IconManifestEntry};
use crate::planner::{BROWSERCONFIG_FILE, WEB_MANIFEST_FILE};

/// Tile image size referenced by `msapplication-TileImage`.
const TILE_IMAGE_SIZE: u32 = 144;

/// Render the `<head>` snippet for a generated icon set.
///
/// Favicons and Apple touch icons are listed largest first.
pub fn render_meta_tags(manifest: &GenerationManifest, app: &WebAppInfo) -> String {
    let mut out = String::new();

    out.push_str("<!-- Favicons -->\n");
    if let Some(root) = &manifest.root_favicons {
        let ico = href(app, &root.ico_path);
        let svg = href(app, &root.svg_path);
        link(&mut out, &[("rel", "icon"), ("href", ico.as_str()), ("sizes", "any")]);
        link(
            &mut out,
            &[("rel", "icon"), ("type", "image/svg+xml"), ("href", svg.as_str())],
        );
    }
    let mut favicons: Vec<_> = manifest.favicons.iter().collect();
    favicons.sort_by(|a, b| b.pixel_size.cmp(&a.pixel_size));
    for favicon in favicons {
        let sizes = sizes_attr(favicon.pixel_size);
        let file = app.href(&favicon.file_name());
        link(
            &mut out,
            &[
                ("rel", "icon"),
                ("type", "image/png"),
                ("sizes", sizes.as_str()),
                ("href", file.as_str()),
            ],
        );
    }

    let mut touch: Vec<&IconManifestEntry> = manifest
        .icons
        .iter()
        .filter(|icon| icon.purpose == IconPurpose::Touch)
        .collect();
    if !touch.is_empty() {
        out.push_str("\n<!-- Apple Touch Icons -->\n");
        touch.sort_by(|a, b| b.pixel_size.cmp(&a.pixel_size));
        for icon in touch {
            let sizes = sizes_attr(icon.pixel_size);
            let file = app.href(&icon.output_name);
            link(
                &mut out,
                &[
                    ("rel", "apple-touch-icon"),
                    ("sizes", sizes.as_str()),
                    ("href", file.as_str()),
                ],
            );
        }
    }

    out.push_str("\n<!-- Web App Manifest -->\n");
    let manifest_href = app.href(WEB_MANIFEST_FILE);
    link(&mut out, &[("rel", "manifest"), ("href", manifest_href.as_str())]);
    meta(&mut out, "theme-color", &app.theme_color);
    meta(&mut out, "mobile-web-app-capable", "yes");

    out.push_str("\n<!-- iOS -->\n");
    meta(&mut out, "apple-mobile-web-app-capable", "yes");
    meta(&mut out, "apple-mobile-web-app-status-bar-style", "default");
    meta(&mut out, "apple-mobile-web-app-title", &app.short_name);

    out.push_str("\n<!-- Windows -->\n");
    meta(&mut out, "msapplication-TileColor", &app.tile_color);
    if let Some(tile) = manifest.icon_with_size(TILE_IMAGE_SIZE) {
        meta(&mut out, "msapplication-TileImage", &app.href(&tile.output_name));
    }
    meta(&mut out, "msapplication-config", &app.href(BROWSERCONFIG_FILE));

    out
}

fn href(app: &WebAppInfo, path: &std::path::Path) -> String {
    app.href(&crate::manifest::file_name(path))
}

fn sizes_attr(size: u32) -> String {
    format!("{size}x{size}")
}

fn link(out: &mut String, attributes: &[(&str, &str)]) {
    out.push_str("<link");
    for (name, value) in attributes {
        out.push_str(&format!(" {}=\"{}\"", name, escape(*value)));
    }
    out.push_str(">\n");
}

fn meta(out: &mut String, name: &str, content: &str) {
    out.push_str(&format!(
        "<meta name=\"{}\" content=\"{}\">\n",
        name,
        escape(content)
    ));
}
