//! Linux-safe filename sanitization.

/// Linux `NAME_MAX`.
const NAME_MAX: usize = 255;

/// Sanitizes a decoded path segment for use as a filename on Linux.
///
/// - Replaces NUL, `/`, `\`, and control characters with `_` (a run of them becomes one `_`)
/// - Trims leading/trailing spaces and dots
/// - Limits length to 255 bytes, cutting on a char boundary
///
/// Spaces inside the name are kept.
pub fn sanitize_filename_for_linux(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_replaced_run = false;

    for c in name.chars() {
        if c == '\0' || c == '/' || c == '\\' || c.is_control() {
            if !in_replaced_run {
                out.push('_');
            }
            in_replaced_run = true;
        } else {
            out.push(c);
            in_replaced_run = false;
        }
    }

    let trimmed = out.trim_matches(|c| c == ' ' || c == '.');

    if trimmed.len() > NAME_MAX {
        let mut take = NAME_MAX;
        while take > 0 && !trimmed.is_char_boundary(take) {
            take -= 1;
        }
        trimmed[..take].to_string()
    } else {
        trimmed.to_string()
    }
}
