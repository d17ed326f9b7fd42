//! Integration tests for the ICO container encoder.

use iconset_core::ico::{ICO_DIR_ENTRY_SIZE, ICO_HEADER_SIZE};
use iconset_core::{encode_ico, read_ico, IcoError, IcoImage, ImageFormat};

/// Deterministic pseudo-PNG payload: a PNG signature followed by filler.
fn payload(len: usize, seed: u8) -> Vec<u8> {
    let mut data = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    let mut value = seed;
    while data.len() < len {
        value = value.wrapping_mul(31).wrapping_add(7);
        data.push(value);
    }
    data
}

#[test]
fn test_header_declares_count() {
    for count in 1..=6usize {
        let buffers: Vec<Vec<u8>> = (0..count).map(|i| payload(20 + i, i as u8)).collect();
        let images: Vec<IcoImage<'_>> = buffers
            .iter()
            .enumerate()
            .map(|(i, png)| IcoImage::new(16 * (i as u32 + 1), png))
            .collect();

        let ico = encode_ico(&images).unwrap();
        assert_eq!(&ico[..4], &[0x00, 0x00, 0x01, 0x00]);
        assert_eq!(u16::from_le_bytes([ico[4], ico[5]]) as usize, count);
        assert_eq!(ImageFormat::from_magic_bytes(&ico), ImageFormat::Ico);
    }
}

#[test]
fn test_directory_roundtrip_preserves_order_sizes_and_bytes() {
    let sizes = [256u32, 16, 48, 1, 255, 32];
    let buffers: Vec<Vec<u8>> = sizes
        .iter()
        .enumerate()
        .map(|(i, _)| payload(9 + i * 37, i as u8))
        .collect();
    let images: Vec<IcoImage<'_>> = sizes
        .iter()
        .zip(&buffers)
        .map(|(&size, png)| IcoImage::new(size, png))
        .collect();

    let ico = encode_ico(&images).unwrap();
    let parsed = read_ico(&ico).unwrap();
    assert_eq!(parsed.len(), sizes.len());

    for (index, (entry, bytes)) in parsed.images().enumerate() {
        let expected_byte = if sizes[index] == 256 { 0 } else { sizes[index] as u8 };
        assert_eq!(entry.width, expected_byte);
        assert_eq!(entry.height, expected_byte);
        assert_eq!(entry.pixel_width(), sizes[index]);
        assert_eq!(entry.planes, 1);
        assert_eq!(entry.bits_per_pixel, 32);
        assert_eq!(entry.data_size as usize, buffers[index].len());
        assert_eq!(bytes, &buffers[index][..]);
    }
}

#[test]
fn test_offset_law() {
    let lengths = [100usize, 1, 4096, 33];
    let buffers: Vec<Vec<u8>> = lengths
        .iter()
        .enumerate()
        .map(|(i, &len)| payload(len, i as u8))
        .collect();
    let images: Vec<IcoImage<'_>> = buffers.iter().map(|png| IcoImage::new(64, png)).collect();

    let ico = encode_ico(&images).unwrap();
    let parsed = read_ico(&ico).unwrap();

    let n = buffers.len();
    for k in 0..n {
        let preceding: usize = buffers[..k].iter().map(Vec::len).sum();
        let expected = ICO_HEADER_SIZE + ICO_DIR_ENTRY_SIZE * n + preceding;
        assert_eq!(parsed.entries()[k].data_offset as usize, expected);
    }

    let total: usize = buffers.iter().map(Vec::len).sum();
    assert_eq!(ico.len(), ICO_HEADER_SIZE + ICO_DIR_ENTRY_SIZE * n + total);
}

#[test]
fn test_favicon_pair_layout() {
    let small = payload(120, 1);
    let large = payload(300, 2);
    let ico = encode_ico(&[IcoImage::new(16, &small), IcoImage::new(32, &large)]).unwrap();

    // Two entries: data starts at 6 + 2 * 16 = 38.
    assert_eq!(&ico[6 + 12..6 + 16], &38u32.to_le_bytes());
    assert_eq!(&ico[22 + 12..22 + 16], &(38u32 + 120).to_le_bytes());
    assert_eq!(&ico[38..38 + 120], &small[..]);
    assert_eq!(&ico[158..], &large[..]);
}

#[test]
fn test_oversized_entry_is_rejected() {
    let png = payload(16, 0);
    let err = encode_ico(&[IcoImage::new(512, &png)]).unwrap_err();
    assert_eq!(err, IcoError::SizeOutOfRange { index: 0, size: 512 });
    assert!(err.to_string().contains("512"));
}
