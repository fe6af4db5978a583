//! URL modeling and filename derivation.
//!
//! Derives a safe local filename from the URL path, falling back to a default
//! base name and appending a default image extension when the name carries
//! none of the recognized ones. The extension check is a name heuristic only;
//! it never looks at the content.

mod path;
mod sanitize;

pub use path::filename_from_url_path;
pub use sanitize::{sanitize_filename, truncate_to, NAME_MAX};

use crate::config::FetcherConfig;
use std::path::PathBuf;

/// Returns true if `name` (case-insensitive) ends with `.<ext>` for one of `extensions`.
pub fn has_image_extension(name: &str, extensions: &[String]) -> bool {
    let lower = name.to_lowercase();
    extensions.iter().any(|ext| {
        let ext = ext.trim_start_matches('.').to_lowercase();
        !ext.is_empty() && lower.ends_with(&format!(".{}", ext))
    })
}

/// Derives the filename for saving the image fetched from `url`.
///
/// # Examples
///
/// - `http://example.com/pics/cat.png` → `cat.png`
/// - `http://example.com/` → `downloaded_image.jpg`
/// - `http://example.com/file` → `file.jpg`
pub fn derive_filename(url: &str, cfg: &FetcherConfig) -> String {
    let base = filename_from_url_path(url)
        .map(|raw| sanitize_filename(&raw))
        .filter(|s| !s.is_empty() && s != "." && s != "..")
        .unwrap_or_else(|| cfg.default_basename.clone());

    // The cap applies to the final name, so a recognized extension survives
    // and an appended one never pushes the name past NAME_MAX.
    let (stem, ext) = if has_image_extension(&base, &cfg.image_extensions) {
        let dot = base.rfind('.').unwrap_or(base.len());
        (&base[..dot], base[dot..].to_string())
    } else {
        (
            base.as_str(),
            format!(".{}", cfg.default_extension.trim_start_matches('.')),
        )
    };
    let stem = truncate_to(stem, NAME_MAX.saturating_sub(ext.len()));
    format!("{}{}", stem, ext)
}

/// Full destination path: `<output_dir>/<derived filename>`.
pub fn destination_path(url: &str, cfg: &FetcherConfig) -> PathBuf {
    cfg.output_dir.join(derive_filename(url, cfg))
}
