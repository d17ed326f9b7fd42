//! Windows tile configuration (`browserconfig.xml`).

use iconset_core::logging::targets;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use tracing::debug;

use super::{EmitError, EmitResult};
use crate::config::WebAppInfo;
use crate::manifest::GenerationManifest;

/// Tile elements and the icon size each one references.
const TILES: [(u32, &str); 4] = [
    (70, "square70x70logo"),
    (144, "TileImage"),
    (150, "square150x150logo"),
    (310, "square310x310logo"),
];

/// Render `browserconfig.xml`.
///
/// A tile element is written only when an icon of exactly its size was
/// generated. `TileColor` is always present.
pub fn render(manifest: &GenerationManifest, app: &WebAppInfo) -> EmitResult<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    write(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)),
    )?;
    write(&mut writer, Event::Start(BytesStart::new("browserconfig")))?;
    write(&mut writer, Event::Start(BytesStart::new("msapplication")))?;
    write(&mut writer, Event::Start(BytesStart::new("tile")))?;

    let mut tiles = 0;
    for (size, element) in TILES {
        if let Some(icon) = manifest.icon_with_size(size) {
            tiles += 1;
            let src = app.href(&icon.output_name);
            let mut tile = BytesStart::new(element);
            tile.push_attribute(("src", src.as_str()));
            write(&mut writer, Event::Empty(tile))?;
        }
    }

    write(&mut writer, Event::Start(BytesStart::new("TileColor")))?;
    write(&mut writer, Event::Text(BytesText::new(&app.tile_color)))?;
    write(&mut writer, Event::End(BytesEnd::new("TileColor")))?;

    write(&mut writer, Event::End(BytesEnd::new("tile")))?;
    write(&mut writer, Event::End(BytesEnd::new("msapplication")))?;
    write(&mut writer, Event::End(BytesEnd::new("browserconfig")))?;

    debug!(target: targets::EMIT, tiles, "rendered browserconfig");
    let mut xml = String::from_utf8(writer.into_inner())
        .map_err(|err| EmitError::Xml(err.to_string()))?;
    xml.push('\n');
    Ok(xml)
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> EmitResult<()> {
    writer
        .write_event(event)
        .map_err(|err| EmitError::Xml(err.to_string()))
}
