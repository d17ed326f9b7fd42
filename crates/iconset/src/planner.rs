//! Expands a configuration into the renders a run performs.
//!
//! Planning is pure: it reads the config and returns a [`RenderPlan`]
//! without touching the file system. Ordering always follows the config.

use iconset_core::{IconPurpose, RenderRequest};

use crate::config::IconsetConfig;

/// Sizes packed into `favicon.ico`, in directory order.
pub const ICO_FRAME_SIZES: [u32; 2] = [16, 32];

/// Root favicon PNG file name.
pub const ROOT_FAVICON_PNG: &str = "favicon.png";
/// Root favicon SVG file name (a byte copy of the source).
pub const ROOT_FAVICON_SVG: &str = "favicon.svg";
/// Root favicon ICO file name.
pub const ROOT_FAVICON_ICO: &str = "favicon.ico";

/// HTML snippet file name.
pub const META_TAGS_FILE: &str = "meta-tags.html";
/// Web app manifest file name.
pub const WEB_MANIFEST_FILE: &str = "manifest.json";
/// Windows tile configuration file name.
pub const BROWSERCONFIG_FILE: &str = "browserconfig.xml";

/// File name of a supplementary favicon PNG.
pub fn favicon_file_name(size: u32) -> String {
    format!("favicon-{size}.png")
}

/// A configured icon and the render that produces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedIcon {
    /// The render to perform.
    pub request: RenderRequest,
    /// Where the icon is used.
    pub purpose: IconPurpose,
}

/// Renders for the root favicon files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootFaviconPlan {
    /// The `favicon.png` render.
    pub png: RenderRequest,
    /// Renders packed into `favicon.ico`, in [`ICO_FRAME_SIZES`] order.
    pub ico_frames: Vec<RenderRequest>,
}

/// Every render a run performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    /// Configured icons, in configuration order.
    pub icons: Vec<PlannedIcon>,
    /// Supplementary favicon PNGs.
    pub favicons: Vec<RenderRequest>,
    /// Root favicon renders, when enabled.
    pub root: Option<RootFaviconPlan>,
}

impl RenderPlan {
    /// Total number of raster renders in the plan.
    pub fn render_count(&self) -> usize {
        let root = self
            .root
            .as_ref()
            .map_or(0, |root| 1 + root.ico_frames.len());
        self.icons.len() + self.favicons.len() + root
    }

    /// All render requests in execution order.
    pub fn requests(&self) -> impl Iterator<Item = &RenderRequest> {
        let root = self
            .root
            .iter()
            .flat_map(|root| std::iter::once(&root.png).chain(&root.ico_frames));
        self.icons
            .iter()
            .map(|icon| &icon.request)
            .chain(&self.favicons)
            .chain(root)
    }
}

/// Build the render plan for `config`.
///
/// Home-screen icons of 192px and larger get an opaque white background;
/// every other render, favicons included, is transparent.
pub fn plan(config: &IconsetConfig) -> RenderPlan {
    let icons = config
        .icons
        .iter()
        .map(|icon| PlannedIcon {
            request: RenderRequest::new(icon.size, icon.name.clone(), icon.background()),
            purpose: icon.purpose,
        })
        .collect();

    let favicons = if config.favicon.enabled {
        config
            .favicon
            .sizes
            .iter()
            .map(|&size| RenderRequest::transparent(size, favicon_file_name(size)))
            .collect()
    } else {
        Vec::new()
    };

    let root = config.root_favicons.enabled.then(|| RootFaviconPlan {
        png: RenderRequest::transparent(config.root_favicons.png_size, ROOT_FAVICON_PNG),
        ico_frames: ICO_FRAME_SIZES
            .iter()
            .map(|&size| RenderRequest::transparent(size, ROOT_FAVICON_ICO))
            .collect(),
    });

    RenderPlan {
        icons,
        favicons,
        root,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IconSpec;
    use iconset_core::BackgroundMode;

    fn background_of(plan: &RenderPlan, name: &str) -> BackgroundMode {
        plan.icons
            .iter()
            .find(|icon| icon.request.output_name == name)
            .map(|icon| icon.request.background)
            .unwrap()
    }

    #[test]
    fn test_default_plan() {
        let plan = plan(&IconsetConfig::new("logo.svg", "out"));
        assert_eq!(plan.icons.len(), 13);
        assert_eq!(plan.favicons.len(), 2);
        assert_eq!(plan.render_count(), 13 + 2 + 3);
        assert_eq!(plan.requests().count(), plan.render_count());
    }

    #[test]
    fn test_background_policy() {
        let plan = plan(&IconsetConfig::new("logo.svg", "out"));
        assert_eq!(background_of(&plan, "icon-192x192.png"), BackgroundMode::OpaqueWhite);
        assert_eq!(background_of(&plan, "icon-512x512.png"), BackgroundMode::OpaqueWhite);
        assert_eq!(
            background_of(&plan, "apple-touch-icon-180x180.png"),
            BackgroundMode::Transparent
        );
        assert_eq!(background_of(&plan, "icon-150x150.png"), BackgroundMode::Transparent);
        assert!(plan
            .favicons
            .iter()
            .all(|request| request.background == BackgroundMode::Transparent));
    }

    #[test]
    fn test_order_follows_config() {
        let config = IconsetConfig::new("logo.svg", "out").with_icons(vec![
            IconSpec::new(512, "icon-512x512.png"),
            IconSpec::new(16, "tiny.png"),
            IconSpec::new(192, "icon-192x192.png"),
        ]);
        let planned = plan(&config);
        let names: Vec<&str> = planned
            .icons
            .iter()
            .map(|icon| icon.request.output_name.as_str())
            .collect();
        assert_eq!(names, vec!["icon-512x512.png", "tiny.png", "icon-192x192.png"]);
    }

    #[test]
    fn test_favicon_names() {
        let config = IconsetConfig::new("logo.svg", "out").with_favicon_sizes(vec![48, 16]);
        let names: Vec<String> = plan(&config)
            .favicons
            .into_iter()
            .map(|request| request.output_name)
            .collect();
        assert_eq!(names, vec!["favicon-48.png", "favicon-16.png"]);
    }

    #[test]
    fn test_root_favicon_plan() {
        let config = IconsetConfig::new("logo.svg", "out").with_root_favicon_png_size(48);
        let root = plan(&config).root.unwrap();
        assert_eq!(root.png, RenderRequest::transparent(48, "favicon.png"));
        let sizes: Vec<u32> = root.ico_frames.iter().map(|r| r.pixel_size).collect();
        assert_eq!(sizes, vec![16, 32]);
    }

    #[test]
    fn test_disabled_extras() {
        let config = IconsetConfig::new("logo.svg", "out")
            .with_favicons(false)
            .with_root_favicons(false);
        let plan = plan(&config);
        assert!(plan.favicons.is_empty());
        assert!(plan.root.is_none());
        assert_eq!(plan.render_count(), 13);
    }
}
