//! Filename extraction from URL path.

use url::Url;

use super::percent::percent_decode;

/// Last non-empty path segment of `url`, percent-decoded.
///
/// Query and fragment are ignored; trailing slashes are skipped, so
/// `/files/2023/` yields `2023`. Returns `None` for an empty or root path.
pub fn last_path_segment(url: &Url) -> Option<String> {
    let segment = url.path().split('/').filter(|s| !s.is_empty()).last()?;
    let decoded = percent_decode(segment);
    if decoded.is_empty() || decoded == "." || decoded == ".." {
        return None;
    }
    Some(decoded)
}

/// Parses `url` and returns its last path segment as a filename hint.
///
/// Returns `None` if the URL cannot be parsed or the path is empty/root.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    last_path_segment(&parsed)
}
