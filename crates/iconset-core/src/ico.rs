//! Windows ICO container encoding.
//!
//! An ICO file is a small directory of images. Modern readers accept PNG
//! payloads directly, so the encoder here never decodes pixels: it lays out
//! a header, one directory entry per image, and then the PNG buffers
//! byte-for-byte.
//!
//! # Layout
//!
//! All integers are little-endian.
//!
//! | offset            | size    | field                                   |
//! |-------------------|---------|-----------------------------------------|
//! | 0                 | 2       | reserved, always 0                      |
//! | 2                 | 2       | type, 1 for icons                       |
//! | 4                 | 2       | image count `N`                         |
//! | 6 + 16·i          | 16      | directory entry `i`                     |
//! | 6 + 16·N          | ...     | image data, concatenated without gaps   |
//!
//! Width and height are single bytes; a 256 pixel image is stored as `0`.
//!
//! # Example
//!
//! ```
//! use iconset_core::ico::{encode_ico, read_ico, IcoImage};
//!
//! let small = b"\x89PNG small".to_vec();
//! let large = b"\x89PNG large".to_vec();
//! let ico = encode_ico(&[IcoImage::new(16, &small), IcoImage::new(256, &large)]).unwrap();
//!
//! assert_eq!(&ico[..4], &[0, 0, 1, 0]);
//! let parsed = read_ico(&ico).unwrap();
//! assert_eq!(parsed.entries()[1].width, 0);
//! assert_eq!(parsed.image_data(1), Some(&large[..]));
//! ```

use tracing::debug;

use crate::error::{IcoError, IcoResult};
use crate::logging::targets;

/// Size of the fixed ICO header in bytes.
pub const ICO_HEADER_SIZE: usize = 6;

/// Size of one directory entry in bytes.
pub const ICO_DIR_ENTRY_SIZE: usize = 16;

/// Resource type stored in the header for icons (cursors use 2).
pub const ICO_TYPE_ICON: u16 = 1;

/// Largest edge length an ICO directory entry can describe.
pub const MAX_ICO_DIMENSION: u32 = 256;

const COLOR_PLANES: u16 = 1;
const BITS_PER_PIXEL: u16 = 32;

/// One image to embed: its square edge length and its encoded PNG bytes.
#[derive(Debug, Clone, Copy)]
pub struct IcoImage<'a> {
    /// Edge length in pixels, 1 through 256.
    pub size: u32,
    /// A complete PNG file.
    pub png: &'a [u8],
}

impl<'a> IcoImage<'a> {
    /// Pair a size with its PNG payload.
    pub fn new(size: u32, png: &'a [u8]) -> Self {
        Self { size, png }
    }
}

/// A directory table record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IcoDirEntry {
    /// Width byte; `0` means 256.
    pub width: u8,
    /// Height byte; `0` means 256.
    pub height: u8,
    /// Palette size, `0` for true-color images.
    pub color_count: u8,
    /// Reserved, always `0`.
    pub reserved: u8,
    /// Color planes.
    pub planes: u16,
    /// Bits per pixel.
    pub bits_per_pixel: u16,
    /// Length of the embedded image in bytes.
    pub data_size: u32,
    /// Absolute offset of the embedded image from the start of the file.
    pub data_offset: u32,
}

impl IcoDirEntry {
    /// Build the entry for a square PNG image of `size` pixels.
    pub fn for_png(size: u32, data_size: u32, data_offset: u32) -> Option<Self> {
        let dimension = encode_dimension(size)?;
        Some(Self {
            width: dimension,
            height: dimension,
            color_count: 0,
            reserved: 0,
            planes: COLOR_PLANES,
            bits_per_pixel: BITS_PER_PIXEL,
            data_size,
            data_offset,
        })
    }

    /// Width in pixels, undoing the 0-means-256 rule.
    pub fn pixel_width(&self) -> u32 {
        decode_dimension(self.width)
    }

    /// Height in pixels, undoing the 0-means-256 rule.
    pub fn pixel_height(&self) -> u32 {
        decode_dimension(self.height)
    }

    /// Serialize into the 16-byte on-disk form.
    pub fn to_bytes(&self) -> [u8; ICO_DIR_ENTRY_SIZE] {
        let mut out = [0u8; ICO_DIR_ENTRY_SIZE];
        out[0] = self.width;
        out[1] = self.height;
        out[2] = self.color_count;
        out[3] = self.reserved;
        out[4..6].copy_from_slice(&self.planes.to_le_bytes());
        out[6..8].copy_from_slice(&self.bits_per_pixel.to_le_bytes());
        out[8..12].copy_from_slice(&self.data_size.to_le_bytes());
        out[12..16].copy_from_slice(&self.data_offset.to_le_bytes());
        out
    }

    /// Parse the 16-byte on-disk form.
    pub fn from_bytes(bytes: &[u8; ICO_DIR_ENTRY_SIZE]) -> Self {
        Self {
            width: bytes[0],
            height: bytes[1],
            color_count: bytes[2],
            reserved: bytes[3],
            planes: u16::from_le_bytes([bytes[4], bytes[5]]),
            bits_per_pixel: u16::from_le_bytes([bytes[6], bytes[7]]),
            data_size: u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]),
            data_offset: u32::from_le_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]),
        }
    }
}

/// Encode an edge length into the directory's single byte.
///
/// Returns `None` for 0 and for anything above 256.
pub fn encode_dimension(size: u32) -> Option<u8> {
    match size {
        MAX_ICO_DIMENSION => Some(0),
        1..=255 => Some(size as u8),
        _ => None,
    }
}

/// Decode a directory byte back into an edge length.
pub fn decode_dimension(byte: u8) -> u32 {
    if byte == 0 {
        MAX_ICO_DIMENSION
    } else {
        u32::from(byte)
    }
}

/// Pack PNG images into a single ICO container.
///
/// Entries keep the input order. The first image starts right after the
/// directory table and every following image starts where the previous one
/// ended.
///
/// # Errors
///
/// - [`IcoError::Empty`] for an empty slice
/// - [`IcoError::SizeOutOfRange`] for sizes outside `1..=256`
/// - [`IcoError::TooManyImages`] / [`IcoError::TooLarge`] when the counts or
///   offsets do not fit the header fields
pub fn encode_ico(images: &[IcoImage<'_>]) -> IcoResult<Vec<u8>> {
    if images.is_empty() {
        return Err(IcoError::Empty);
    }
    let count =
        u16::try_from(images.len()).map_err(|_| IcoError::TooManyImages(images.len()))?;

    let table_end = ICO_HEADER_SIZE + ICO_DIR_ENTRY_SIZE * images.len();
    let mut entries = Vec::with_capacity(images.len());
    let mut offset = table_end;

    for (index, image) in images.iter().enumerate() {
        let data_size =
            u32::try_from(image.png.len()).map_err(|_| IcoError::TooLarge { index })?;
        let data_offset = u32::try_from(offset).map_err(|_| IcoError::TooLarge { index })?;
        let entry = IcoDirEntry::for_png(image.size, data_size, data_offset).ok_or(
            IcoError::SizeOutOfRange {
                index,
                size: image.size,
            },
        )?;
        entries.push(entry);
        offset += image.png.len();
    }
    // The end of the last image must still be addressable.
    if u32::try_from(offset).is_err() {
        return Err(IcoError::TooLarge {
            index: images.len() - 1,
        });
    }

    let mut out = Vec::with_capacity(offset);
    out.extend_from_slice(&0u16.to_le_bytes());
    out.extend_from_slice(&ICO_TYPE_ICON.to_le_bytes());
    out.extend_from_slice(&count.to_le_bytes());
    for entry in &entries {
        out.extend_from_slice(&entry.to_bytes());
    }
    for image in images {
        out.extend_from_slice(image.png);
    }

    debug!(
        target: targets::ICO,
        images = images.len(),
        bytes = out.len(),
        "encoded ICO container"
    );

    Ok(out)
}

/// A parsed view over an ICO buffer.
#[derive(Debug, Clone)]
pub struct IcoFile<'a> {
    entries: Vec<IcoDirEntry>,
    data: &'a [u8],
}

impl<'a> IcoFile<'a> {
    /// Directory entries in file order.
    pub fn entries(&self) -> &[IcoDirEntry] {
        &self.entries
    }

    /// Number of images in the container.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the container declares no images.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The embedded bytes of entry `index`.
    pub fn image_data(&self, index: usize) -> Option<&'a [u8]> {
        let entry = self.entries.get(index)?;
        let start = entry.data_offset as usize;
        self.data.get(start..start + entry.data_size as usize)
    }

    /// Iterate over `(entry, bytes)` pairs.
    pub fn images(&self) -> impl Iterator<Item = (&IcoDirEntry, &'a [u8])> + '_ {
        self.entries.iter().enumerate().filter_map(move |(index, entry)| {
            self.image_data(index).map(|bytes| (entry, bytes))
        })
    }
}

/// Parse the header and directory table of an ICO buffer.
///
/// Every entry's data range is checked against the buffer length, so
/// [`IcoFile::image_data`] only returns `None` for an out-of-range index.
pub fn read_ico(data: &[u8]) -> IcoResult<IcoFile<'_>> {
    if data.len() < ICO_HEADER_SIZE {
        return Err(IcoError::Truncated {
            needed: ICO_HEADER_SIZE,
            actual: data.len(),
        });
    }
    let reserved = u16::from_le_bytes([data[0], data[1]]);
    let kind = u16::from_le_bytes([data[2], data[3]]);
    if reserved != 0 || kind != ICO_TYPE_ICON {
        return Err(IcoError::InvalidHeader { reserved, kind });
    }
    let count = u16::from_le_bytes([data[4], data[5]]) as usize;

    let table_end = ICO_HEADER_SIZE + ICO_DIR_ENTRY_SIZE * count;
    if data.len() < table_end {
        return Err(IcoError::Truncated {
            needed: table_end,
            actual: data.len(),
        });
    }

    let mut entries = Vec::with_capacity(count);
    for raw in data[ICO_HEADER_SIZE..table_end].chunks_exact(ICO_DIR_ENTRY_SIZE) {
        let mut bytes = [0u8; ICO_DIR_ENTRY_SIZE];
        bytes.copy_from_slice(raw);
        let entry = IcoDirEntry::from_bytes(&bytes);

        let end = entry.data_offset as usize + entry.data_size as usize;
        if data.len() < end {
            return Err(IcoError::Truncated {
                needed: end,
                actual: data.len(),
            });
        }
        entries.push(entry);
    }

    Ok(IcoFile { entries, data })
}
