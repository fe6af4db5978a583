//! Filename extraction from URL path.

/// Extracts the text after the final `/` of the URL path for use as a filename hint.
///
/// Query and fragment are ignored. A path ending in `/` has no filename, so
/// `https://example.com/pics/` yields `None` rather than `pics`.
/// Returns `None` if the URL cannot be parsed.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().rsplit('/').next()?;
    if segment.is_empty() {
        return None;
    }
    Some(segment.to_string())
}
