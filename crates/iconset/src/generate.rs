//! The generation pipeline.
//!
//! A run validates the configuration, renders every planned artifact in
//! parallel, packs the ICO, then writes the companion metadata files. All
//! validation happens before the first write. Any error aborts the run;
//! files written before the failure stay on disk.

use std::path::Path;

use iconset_core::logging::{span_names, targets};
use iconset_core::{encode_ico, IcoImage, RasterImage, RenderRequest};
use iconset_render::{RasterRenderer, RenderResult, SvgRasterizer};
use rayon::prelude::*;
use tracing::{debug, info, info_span};

use crate::config::IconsetConfig;
use crate::emit::{browserconfig, html, web_manifest};
use crate::error::{IconsetError, IconsetResult};
use crate::file;
use crate::manifest::{FaviconManifestEntry, GenerationManifest, IconManifestEntry, RootFaviconSet};
use crate::planner::{
    self, RootFaviconPlan, BROWSERCONFIG_FILE, META_TAGS_FILE, ROOT_FAVICON_ICO, ROOT_FAVICON_PNG,
    ROOT_FAVICON_SVG, WEB_MANIFEST_FILE,
};

/// Generate the full icon set described by `config`.
///
/// Renders with [`SvgRasterizer`] using the configured PNG options.
///
/// # Errors
///
/// - [`IconsetError::Configuration`] if `config` fails validation
/// - [`IconsetError::SourceNotFound`] if the source SVG is missing
/// - [`IconsetError::Render`] if the source cannot be parsed or rendered
/// - [`IconsetError::FileSystem`] if a directory or file cannot be written
pub fn generate(config: &IconsetConfig) -> IconsetResult<GenerationManifest> {
    generate_with(config, |svg| SvgRasterizer::from_bytes(svg, config.encoding))
}

/// Generate with a custom renderer.
///
/// `make_renderer` receives the source file contents once the source has
/// been found and read.
pub fn generate_with<R, F>(config: &IconsetConfig, make_renderer: F) -> IconsetResult<GenerationManifest>
where
    R: RasterRenderer,
    F: FnOnce(&[u8]) -> RenderResult<R>,
{
    config.validate()?;
    if !file::is_file(&config.source) {
        return Err(IconsetError::SourceNotFound(config.source.clone()));
    }

    let _span = info_span!(
        target: targets::GENERATE,
        span_names::GENERATE,
        source = %config.source.display(),
        output = %config.output_dir.display()
    )
    .entered();

    let source = file::read_bytes(&config.source)?;
    let renderer = make_renderer(&source)?;
    let plan = planner::plan(config);
    let progress = Progress {
        verbose: config.verbose,
    };

    file::create_dir_all(&config.output_dir)?;
    progress.report(
        format_args!("rendering {} images", plan.render_count()),
        &config.output_dir,
    );

    let out = config.output_dir.as_path();
    let (icons, favicons) = rayon::join(
        || {
            plan.icons
                .par_iter()
                .map(|icon| {
                    let file_path = out.join(&icon.request.output_name);
                    render_to_file(&renderer, &icon.request, &file_path, progress)?;
                    Ok(IconManifestEntry {
                        pixel_size: icon.request.pixel_size,
                        output_name: icon.request.output_name.clone(),
                        file_path,
                        purpose: icon.purpose,
                    })
                })
                .collect::<IconsetResult<Vec<_>>>()
        },
        || {
            plan.favicons
                .par_iter()
                .map(|request| {
                    let file_path = out.join(&request.output_name);
                    render_to_file(&renderer, request, &file_path, progress)?;
                    Ok(FaviconManifestEntry {
                        file_path,
                        pixel_size: request.pixel_size,
                    })
                })
                .collect::<IconsetResult<Vec<_>>>()
        },
    );
    let icons = icons?;
    let favicons = favicons?;

    let root_favicons = plan
        .root
        .as_ref()
        .map(|root| write_root_favicons(&renderer, root, &config.source, out, progress))
        .transpose()?;

    let manifest = GenerationManifest {
        output_dir: config.output_dir.clone(),
        icons,
        favicons,
        root_favicons,
        meta_tags: out.join(META_TAGS_FILE),
        web_manifest: out.join(WEB_MANIFEST_FILE),
        browserconfig: out.join(BROWSERCONFIG_FILE),
    };
    write_metadata(&manifest, config, progress)?;

    progress.report(
        format_args!("generated {} files", manifest.all_paths().len()),
        &config.output_dir,
    );
    Ok(manifest)
}

/// Per-file progress logging: `info` when verbose, `debug` otherwise.
#[derive(Debug, Clone, Copy)]
struct Progress {
    verbose: bool,
}

impl Progress {
    fn report(self, message: std::fmt::Arguments<'_>, path: &Path) {
        if self.verbose {
            info!(target: targets::GENERATE, path = %path.display(), "{}", message);
        } else {
            debug!(target: targets::GENERATE, path = %path.display(), "{}", message);
        }
    }
}

fn render<R: RasterRenderer>(renderer: &R, request: &RenderRequest) -> IconsetResult<RasterImage> {
    Ok(renderer.render(request)?)
}

fn render_to_file<R: RasterRenderer>(
    renderer: &R,
    request: &RenderRequest,
    path: &Path,
    progress: Progress,
) -> IconsetResult<()> {
    let image = render(renderer, request)?;
    file::write_bytes(path, image.png())?;
    progress.report(
        format_args!("wrote {0}x{0} ({1:?})", request.pixel_size, request.background),
        path,
    );
    Ok(())
}

/// Write `favicon.png`, `favicon.svg` and `favicon.ico`.
fn write_root_favicons<R: RasterRenderer>(
    renderer: &R,
    root: &RootFaviconPlan,
    source: &Path,
    out: &Path,
    progress: Progress,
) -> IconsetResult<RootFaviconSet> {
    let png_path = out.join(ROOT_FAVICON_PNG);
    let svg_path = out.join(ROOT_FAVICON_SVG);
    let ico_path = out.join(ROOT_FAVICON_ICO);

    let (png, frames) = rayon::join(
        || render(renderer, &root.png),
        || {
            root.ico_frames
                .par_iter()
                .map(|frame| render(renderer, frame))
                .collect::<IconsetResult<Vec<_>>>()
        },
    );

    file::write_bytes(&png_path, png?.png())?;
    progress.report(format_args!("wrote root favicon PNG"), &png_path);

    file::copy_file(source, &svg_path)?;
    progress.report(format_args!("copied source SVG"), &svg_path);

    let frames = frames?;
    let images: Vec<IcoImage<'_>> = frames
        .iter()
        .map(|frame| IcoImage::new(frame.pixel_size(), frame.png()))
        .collect();
    file::write_bytes(&ico_path, encode_ico(&images)?)?;
    progress.report(
        format_args!("wrote ICO with {} images", images.len()),
        &ico_path,
    );

    Ok(RootFaviconSet {
        png_path,
        svg_path,
        ico_path,
    })
}

fn write_metadata(
    manifest: &GenerationManifest,
    config: &IconsetConfig,
    progress: Progress,
) -> IconsetResult<()> {
    let app = &config.web_app;

    file::write_text(&manifest.meta_tags, html::render_meta_tags(manifest, app))?;
    progress.report(format_args!("wrote meta tags"), &manifest.meta_tags);

    let document = web_manifest::build(manifest, app);
    file::write_text(&manifest.web_manifest, web_manifest::to_json(&document)?)?;
    progress.report(
        format_args!("wrote web manifest with {} icons", document.icons.len()),
        &manifest.web_manifest,
    );

    file::write_text(&manifest.browserconfig, browserconfig::render(manifest, app)?)?;
    progress.report(format_args!("wrote browserconfig"), &manifest.browserconfig);

    Ok(())
}
