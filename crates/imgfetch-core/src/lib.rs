//! imgfetch core: fetch one image over HTTP, save it, and keep it only if it
//! validates as an image.

pub mod config;
pub mod logging;

pub mod downloader;
pub mod error;
pub mod fetcher;
pub mod storage;
pub mod url_model;
pub mod validate;

pub use error::FetchError;
pub use fetcher::{fetch, fetch_outcome, FetchOutcome};
