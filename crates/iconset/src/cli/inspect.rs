use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use iconset::file;
use iconset_core::{read_ico, ImageFormat};

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// ICO file to read
    #[arg(value_name = "ICO")]
    pub path: PathBuf,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let data = file::read_bytes(&args.path)?;
    let ico = read_ico(&data)
        .with_context(|| format!("'{}' is not a valid ICO file", args.path.display()))?;

    println!("{}: {} image(s)", args.path.display(), ico.len());
    for (index, (entry, bytes)) in ico.images().enumerate() {
        let format = ImageFormat::from_magic_bytes(bytes);
        println!(
            "  #{index}: {}x{}, {} bpp, {} bytes at offset {} ({})",
            entry.pixel_width(),
            entry.pixel_height(),
            entry.bits_per_pixel,
            entry.data_size,
            entry.data_offset,
            format.mime_type(),
        );
    }
    Ok(())
}
