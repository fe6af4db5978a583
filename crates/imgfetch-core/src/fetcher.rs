//! Download-and-validate: the one operation of this crate.
//!
//! Sequence: ensure the output directory, GET the URL, derive the filename,
//! write the body, then validate the written file and remove it on failure.
//! A file left behind is always a validated image.

use crate::config::FetcherConfig;
use crate::downloader;
use crate::error::FetchError;
use crate::storage;
use crate::url_model;
use crate::validate;
use std::fmt;
use std::path::PathBuf;

/// Fetches the image at `url` into `cfg.output_dir` and returns the saved path.
pub fn fetch(url: &str, cfg: &FetcherConfig) -> Result<PathBuf, FetchError> {
    storage::ensure_dir(&cfg.output_dir)?;

    tracing::info!(url, "fetching image");
    let response = downloader::get(url, cfg)?;

    let path = url_model::destination_path(url, cfg);
    storage::write_body(&path, &response.body)?;
    tracing::debug!(
        status = response.status,
        bytes = response.body.len(),
        "wrote {}",
        path.display()
    );

    let written = match storage::read_back(&path) {
        Ok(data) => data,
        Err(e) => {
            storage::discard(&path);
            return Err(e.into());
        }
    };
    match validate::validate_image(&written, cfg.validation) {
        Ok(info) => {
            tracing::info!(
                format = ?info.format,
                width = info.width,
                height = info.height,
                "saved {}",
                path.display()
            );
            Ok(path)
        }
        Err(e) => {
            tracing::warn!("{} failed validation: {}", path.display(), e);
            storage::discard(&path);
            Err(e.into())
        }
    }
}

/// Human-facing result of one fetch.
#[derive(Debug)]
pub enum FetchOutcome {
    Success(PathBuf),
    NetworkFailure(String),
    ValidationFailure(String),
    UnexpectedFailure(String),
}

impl From<Result<PathBuf, FetchError>> for FetchOutcome {
    fn from(result: Result<PathBuf, FetchError>) -> Self {
        match result {
            Ok(path) => FetchOutcome::Success(path),
            Err(FetchError::Network(e)) => FetchOutcome::NetworkFailure(e.to_string()),
            Err(FetchError::Validation(e)) => FetchOutcome::ValidationFailure(e.to_string()),
            Err(FetchError::Unexpected(e)) => FetchOutcome::UnexpectedFailure(e.to_string()),
        }
    }
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success(_))
    }
}

impl fmt::Display for FetchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchOutcome::Success(path) => write!(
                f,
                "Image successfully downloaded and saved to {}",
                path.display()
            ),
            FetchOutcome::NetworkFailure(reason) => {
                write!(f, "Failed to download image. Error: {}", reason)
            }
            FetchOutcome::ValidationFailure(reason) => {
                write!(f, "Downloaded file is not a valid image. Error: {}", reason)
            }
            FetchOutcome::UnexpectedFailure(reason) => {
                write!(f, "An unexpected error occurred: {}", reason)
            }
        }
    }
}

/// [`fetch`] folded into a [`FetchOutcome`]; never fails.
pub fn fetch_outcome(url: &str, cfg: &FetcherConfig) -> FetchOutcome {
    fetch(url, cfg).into()
}
