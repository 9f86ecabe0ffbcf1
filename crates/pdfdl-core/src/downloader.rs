//! Download one URL into the output directory.

use std::path::{Path, PathBuf};

use url::Url;

use crate::error::DownloadError;
use crate::fetch::{self, FetchOptions};
use crate::storage;
use crate::url_model;

/// A finished download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Downloaded {
    pub original_url: String,
    /// Where the request ended up after redirects.
    pub final_url: String,
    /// `<output_dir>/<derived filename>`.
    pub path: PathBuf,
    pub bytes: u64,
    /// `Content-Length` advertised by the final response, if any.
    pub content_length: Option<u64>,
}

impl Downloaded {
    pub fn was_redirected(&self) -> bool {
        self.original_url != self.final_url
    }
}

/// Fetches `raw_url`, following redirects, and writes the body to
/// `<output_dir>/<name>` where `<name>` is the last path segment of the final
/// URL (with `.pdf` appended if missing).
///
/// Steps short-circuit in order: URL syntax (no request is sent if it fails),
/// transfer, status (must be 200), final URL, filename, directory, file, copy.
/// Nothing is created in `output_dir` unless the status is 200 and a filename
/// could be derived.
pub fn download_pdf(
    raw_url: &str,
    output_dir: &Path,
    opts: &FetchOptions,
) -> Result<Downloaded, DownloadError> {
    download_pdf_with(raw_url, output_dir, opts, |_, _| {})
}

/// Like [`download_pdf`], calling `on_resolved(original_url, final_url)` once
/// the response status has been accepted and before the filename is derived.
pub fn download_pdf_with<F>(
    raw_url: &str,
    output_dir: &Path,
    opts: &FetchOptions,
    mut on_resolved: F,
) -> Result<Downloaded, DownloadError>
where
    F: FnMut(&str, &str),
{
    let parsed = Url::parse(raw_url).map_err(|source| DownloadError::InvalidUrl {
        url: raw_url.to_string(),
        source,
    })?;

    // Send the normalized form: libcurl rejects unescaped characters such as spaces.
    let fetched = fetch::fetch_to_staging(parsed.as_str(), opts)?;
    if fetched.status != 200 {
        return Err(DownloadError::BadStatus {
            url: raw_url.to_string(),
            status: fetched.status,
        });
    }

    let final_url = fetched.final_url.clone();
    tracing::info!(
        original_url = raw_url,
        final_url = %final_url,
        redirects = fetched.redirect_count,
        "resolved"
    );
    on_resolved(raw_url, &final_url);

    let final_parsed = Url::parse(&final_url).map_err(|source| DownloadError::InvalidFinalUrl {
        url: final_url.clone(),
        source,
    })?;
    let filename = url_model::derive_filename(&final_parsed).ok_or_else(|| {
        DownloadError::NoFilename {
            url: final_url.clone(),
        }
    })?;

    storage::ensure_output_dir(output_dir)?;

    let content_length = fetched.content_length;
    let mut body = fetched
        .into_reader()
        .map_err(|source| DownloadError::Staging { source })?;
    let (path, bytes) = storage::write_output(output_dir, &filename, &mut body)?;

    if let Some(expected) = content_length {
        if expected != bytes {
            tracing::warn!(
                path = %path.display(),
                expected,
                bytes,
                "body length differs from Content-Length"
            );
        }
    }
    tracing::debug!(path = %path.display(), bytes, "saved");

    Ok(Downloaded {
        original_url: raw_url.to_string(),
        final_url,
        path,
        bytes,
        content_length,
    })
}
