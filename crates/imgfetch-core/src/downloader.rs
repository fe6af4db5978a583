//! Single non-retried HTTP GET.
//!
//! Uses the curl crate (libcurl). The whole body is buffered in memory; this
//! tool fetches one image, not large files.

use crate::config::FetcherConfig;
use crate::error::NetworkError;
use std::str;

/// Body and final status of a successful GET.
#[derive(Debug)]
pub struct Response {
    pub status: u32,
    pub body: Vec<u8>,
}

/// Checks that `url` parses and uses a scheme we fetch.
pub fn check_url(url: &str) -> Result<url::Url, NetworkError> {
    let parsed = url::Url::parse(url).map_err(|e| NetworkError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(NetworkError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme {:?}", other),
        }),
    }
}

/// Performs a GET and returns the body.
///
/// Transport failures and non-2xx final statuses are both `NetworkError`.
/// Runs in the current thread and blocks until the transfer ends or times out.
pub fn get(url: &str, cfg: &FetcherConfig) -> Result<Response, NetworkError> {
    let parsed = check_url(url)?;
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(parsed.as_str())?;
    easy.follow_location(cfg.follow_redirects)?;
    if cfg.follow_redirects {
        easy.max_redirections(cfg.max_redirections)?;
    }
    easy.connect_timeout(cfg.connect_timeout())?;
    easy.timeout(cfg.timeout())?;

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(line) = str::from_utf8(data) {
                let line = line.trim_end();
                if !line.is_empty() {
                    tracing::trace!(header = line, "response header");
                }
            }
            true
        })?;
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    if !(200..300).contains(&status) {
        return Err(NetworkError::HttpStatus {
            status,
            url: url.to_string(),
        });
    }

    tracing::debug!(url, status, bytes = body.len(), "GET complete");
    Ok(Response { status, body })
}
