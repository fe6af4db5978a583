//! Per-format completeness markers.

use crate::error::ValidationError;
use image::ImageFormat;

/// IEND chunk type followed by its fixed CRC.
const PNG_IEND: &[u8] = b"IEND\xAE\x42\x60\x82";
const GIF_TRAILER: u8 = 0x3B;
const JPEG_EOI: [u8; 2] = [0xFF, 0xD9];
const ICO_HEADER_LEN: usize = 6;
const ICO_ENTRY_LEN: usize = 16;

fn le_u32(data: &[u8], at: usize) -> Option<usize> {
    let b = data.get(at..at + 4)?;
    Some(u32::from_le_bytes([b[0], b[1], b[2], b[3]]) as usize)
}

fn le_u16(data: &[u8], at: usize) -> Option<usize> {
    let b = data.get(at..at + 2)?;
    Some(u16::from_le_bytes([b[0], b[1]]) as usize)
}

/// `data` with trailing zero padding removed.
fn without_padding(data: &[u8]) -> &[u8] {
    match data.iter().rposition(|&b| b != 0) {
        Some(i) => &data[..=i],
        None => &[],
    }
}

/// Checks that `data` is not cut short. Every supported format except TIFF
/// has a marker or a declared size to check; TIFF's header read already
/// follows its directory offsets.
pub(super) fn check_complete(format: ImageFormat, data: &[u8]) -> Result<(), ValidationError> {
    let truncated = |detail: &'static str| -> Result<(), ValidationError> {
        Err(ValidationError::Truncated { format, detail })
    };
    match format {
        ImageFormat::Png => {
            if !data.windows(PNG_IEND.len()).any(|w| w == PNG_IEND) {
                return truncated("missing IEND chunk");
            }
        }
        ImageFormat::Gif => {
            if without_padding(data).last() != Some(&GIF_TRAILER) {
                return truncated("missing trailer");
            }
        }
        ImageFormat::Jpeg => {
            // An embedded thumbnail has its own EOI, so only the last one counts.
            let body = without_padding(data);
            if body.len() < 4 || !body.ends_with(&JPEG_EOI) {
                return truncated("missing end-of-image marker");
            }
        }
        ImageFormat::Bmp => {
            // 0 is allowed in the header and means "not recorded".
            if let Some(declared) = le_u32(data, 2) {
                if declared > data.len() {
                    return truncated("shorter than declared file size");
                }
            }
        }
        ImageFormat::WebP => {
            // RIFF size counts everything after the 8-byte RIFF header.
            match le_u32(data, 4) {
                Some(riff_len) if riff_len.saturating_add(8) <= data.len() => {}
                _ => return truncated("shorter than declared RIFF size"),
            }
        }
        ImageFormat::Ico => {
            let count = match le_u16(data, 4) {
                Some(n) => n,
                None => return truncated("missing icon directory"),
            };
            for i in 0..count {
                let entry = ICO_HEADER_LEN + i * ICO_ENTRY_LEN;
                match (le_u32(data, entry + 8), le_u32(data, entry + 12)) {
                    (Some(size), Some(offset)) if offset.saturating_add(size) <= data.len() => {}
                    _ => return truncated("icon image extends past end of data"),
                }
            }
        }
        _ => {}
    }
    Ok(())
}
