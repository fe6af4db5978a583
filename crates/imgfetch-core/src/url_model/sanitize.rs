//! Filesystem-safe filename sanitization.

/// Byte limit for a single path component (Linux NAME_MAX).
pub const NAME_MAX: usize = 255;

/// Sanitizes a candidate filename for safe use as a single path component.
///
/// - Replaces each run of NUL, `/`, `\`, and control characters with one `_`
/// - Trims leading/trailing spaces and dots
///
/// Underscores already in the name are kept as they are. Length is not
/// limited here; see [`truncate_to`].
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_replaced = false;

    for c in name.chars() {
        if c == '\0' || c == '/' || c == '\\' || c.is_control() {
            if !prev_replaced {
                out.push('_');
            }
            prev_replaced = true;
        } else {
            out.push(c);
            prev_replaced = false;
        }
    }

    out.trim_matches(|c| c == ' ' || c == '.').to_string()
}

/// Longest prefix of `s` that fits in `max` bytes without splitting a char.
pub fn truncate_to(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut take = max;
    while take > 0 && !s.is_char_boundary(take) {
        take -= 1;
    }
    &s[..take]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_backslash_and_control_chars() {
        assert_eq!(sanitize_filename("a\\b\x00c.png"), "a_b_c.png");
    }

    #[test]
    fn keeps_inner_spaces() {
        assert_eq!(sanitize_filename("my photo.png"), "my photo.png");
    }

    #[test]
    fn trims_dots_and_spaces() {
        assert_eq!(sanitize_filename("  ..  cat.gif  ..  "), "cat.gif");
        assert_eq!(sanitize_filename(".."), "");
    }

    #[test]
    fn collapses_runs_of_replaced_chars() {
        assert_eq!(sanitize_filename("cat\x01\x02\x03.png"), "cat_.png");
    }

    #[test]
    fn keeps_real_underscores() {
        assert_eq!(sanitize_filename("my__cat.png"), "my__cat.png");
        assert_eq!(sanitize_filename("_x_.png"), "_x_.png");
    }

    #[test]
    fn truncate_to_respects_char_boundary() {
        let long = "é".repeat(200);
        let out = truncate_to(&long, NAME_MAX);
        assert_eq!(out.len(), 254);
        assert_eq!(out.chars().count(), 127);
        assert_eq!(truncate_to("short", NAME_MAX), "short");
    }
}
