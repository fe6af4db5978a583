//! Closed error taxonomy for a single fetch.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a fetch did not produce a saved image.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The URL was unusable, unreachable, or answered with a non-2xx status.
    #[error(transparent)]
    Network(#[from] NetworkError),
    /// Bytes were retrieved and written but are not a well-formed image.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Any other environmental failure (directory creation, disk I/O).
    #[error(transparent)]
    Unexpected(#[from] UnexpectedError),
}

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("invalid URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("{0}")]
    Transfer(#[from] curl::Error),
    #[error("{status} response for url {url}")]
    HttpStatus { status: u32, url: String },
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("unrecognized image format")]
    UnrecognizedFormat,
    #[error("unsupported image format {0:?}")]
    UnsupportedFormat(image::ImageFormat),
    #[error("{0}")]
    Decode(#[from] image::ImageError),
    #[error("image has zero width or height")]
    EmptyImage,
    #[error("truncated {format:?} data: {detail}")]
    Truncated {
        format: image::ImageFormat,
        detail: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum UnexpectedError {
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to read back {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
}
