//! URL modeling and output filename derivation.
//!
//! The output name comes from the last path segment of the *final* URL (after
//! redirects), percent-decoded, sanitized for Linux, and normalized to carry a
//! `.pdf` suffix.

mod path;
mod percent;
mod sanitize;

pub use path::{filename_from_url_path, last_path_segment};
pub use percent::percent_decode;
pub use sanitize::sanitize_filename_for_linux;

use url::Url;

/// Suffix every output file carries (compared case-insensitively).
pub const PDF_SUFFIX: &str = ".pdf";

/// Appends `.pdf` unless `name` already ends with it in any letter case.
pub fn ensure_pdf_suffix(name: &str) -> String {
    let has_suffix = name.len() >= PDF_SUFFIX.len()
        && name
            .get(name.len() - PDF_SUFFIX.len()..)
            .is_some_and(|tail| tail.eq_ignore_ascii_case(PDF_SUFFIX));
    if has_suffix {
        name.to_string()
    } else {
        format!("{}{}", name, PDF_SUFFIX)
    }
}

/// Derives the local filename for a download from its final URL.
///
/// Returns `None` when the path has no usable last segment (empty or root
/// path, or a segment that sanitizes to nothing).
///
/// # Examples
///
/// - `https://nypdonline.org/files/948580_01142022_2022007.pdf` → `948580_01142022_2022007.pdf`
/// - `https://example.com/report?id=7` → `report.pdf`
/// - `https://example.com/` → `None`
pub fn derive_filename(final_url: &Url) -> Option<String> {
    let segment = last_path_segment(final_url)?;
    let sanitized = sanitize_filename_for_linux(&segment);
    if sanitized.is_empty() || sanitized == "." || sanitized == ".." {
        return None;
    }
    Some(ensure_pdf_suffix(&sanitized))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive(s: &str) -> Option<String> {
        derive_filename(&Url::parse(s).unwrap())
    }

    #[test]
    fn keeps_pdf_names() {
        assert_eq!(
            derive("https://nypdonline.org/files/948580_01142022_2022007.pdf").as_deref(),
            Some("948580_01142022_2022007.pdf")
        );
        assert_eq!(
            derive("https://example.com/a/b/REPORT.PDF").as_deref(),
            Some("REPORT.PDF")
        );
    }

    #[test]
    fn appends_pdf_suffix() {
        assert_eq!(derive("https://example.com/report").as_deref(), Some("report.pdf"));
        assert_eq!(
            derive("https://example.com/files/doc.aspx?id=3").as_deref(),
            Some("doc.aspx.pdf")
        );
    }

    #[test]
    fn root_or_empty_path_has_no_name() {
        assert_eq!(derive("https://example.com/"), None);
        assert_eq!(derive("https://example.com"), None);
        assert_eq!(derive("https://example.com/?file=x.pdf"), None);
    }

    #[test]
    fn leading_underscore_is_kept() {
        assert_eq!(
            derive("https://example.com/files/_2023_report.pdf").as_deref(),
            Some("_2023_report.pdf")
        );
    }

    #[test]
    fn trailing_slash_uses_last_directory() {
        assert_eq!(derive("https://example.com/files/2023/").as_deref(), Some("2023.pdf"));
    }

    #[test]
    fn decoded_separator_cannot_escape_output_dir() {
        assert_eq!(
            derive("https://example.com/x/..%2F..%2Fetc%2Fpasswd").as_deref(),
            Some("_.._etc_passwd.pdf")
        );
    }

    #[test]
    fn ensure_pdf_suffix_is_case_insensitive() {
        assert_eq!(ensure_pdf_suffix("a.pdf"), "a.pdf");
        assert_eq!(ensure_pdf_suffix("a.Pdf"), "a.Pdf");
        assert_eq!(ensure_pdf_suffix("a.pdfx"), "a.pdfx.pdf");
        assert_eq!(ensure_pdf_suffix("pdf"), "pdf.pdf");
    }
}
