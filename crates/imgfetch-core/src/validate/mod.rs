//! Image validation of downloaded bytes.
//!
//! `Structural` mode recognizes the format from magic bytes, parses the header
//! for dimensions, and checks a per-format completeness marker so truncated
//! files are caught without decoding pixels. `Decode` mode decodes fully.

mod structure;

use crate::config::ValidationMode;
use crate::error::ValidationError;
use image::{ImageError, ImageFormat, ImageReader};
use std::io::Cursor;

/// Formats accepted as images.
pub const SUPPORTED_FORMATS: &[ImageFormat] = &[
    ImageFormat::Jpeg,
    ImageFormat::Png,
    ImageFormat::Gif,
    ImageFormat::Bmp,
    ImageFormat::WebP,
    ImageFormat::Tiff,
    ImageFormat::Ico,
];

/// What a successful validation learned about the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
}

/// Validates `data` as an image of one of [`SUPPORTED_FORMATS`].
pub fn validate_image(data: &[u8], mode: ValidationMode) -> Result<ImageInfo, ValidationError> {
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(ImageError::IoError)?;
    let format = reader.format().ok_or(ValidationError::UnrecognizedFormat)?;
    if !SUPPORTED_FORMATS.contains(&format) {
        return Err(ValidationError::UnsupportedFormat(format));
    }

    let (width, height) = match mode {
        ValidationMode::Structural => {
            let dims = reader.into_dimensions()?;
            structure::check_complete(format, data)?;
            dims
        }
        ValidationMode::Decode => {
            let img = reader.decode()?;
            (img.width(), img.height())
        }
    };

    if width == 0 || height == 0 {
        return Err(ValidationError::EmptyImage);
    }

    Ok(ImageInfo {
        format,
        width,
        height,
    })
}
