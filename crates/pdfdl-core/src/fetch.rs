//! Single HTTP GET with redirect following.
//!
//! The response body is streamed into an anonymous staging file while libcurl
//! follows redirects. Only after the transfer completes do we know the status
//! and the final URL, which decide whether and under what name the body is
//! stored.

use std::fs::File;
use std::io::{self, Seek, Write};
use std::time::Duration;

use crate::config::{PdfdlConfig, DEFAULT_MAX_REDIRECTS};
use crate::error::DownloadError;

/// Transfer settings for one GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    pub max_redirects: u32,
    pub connect_timeout: Option<Duration>,
    pub timeout: Option<Duration>,
    pub user_agent: Option<String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            max_redirects: DEFAULT_MAX_REDIRECTS,
            connect_timeout: None,
            timeout: None,
            user_agent: None,
        }
    }
}

impl From<&PdfdlConfig> for FetchOptions {
    fn from(cfg: &PdfdlConfig) -> Self {
        Self {
            max_redirects: cfg.max_redirects,
            connect_timeout: cfg.connect_timeout_secs.map(Duration::from_secs),
            timeout: cfg.timeout_secs.map(Duration::from_secs),
            user_agent: cfg.user_agent.clone(),
        }
    }
}

/// A completed GET: status, where it ended up, and the staged body.
///
/// The staging file is deleted when this value is dropped.
#[derive(Debug)]
pub struct FetchedBody {
    /// URL of the last response after following redirects.
    pub final_url: String,
    pub status: u32,
    pub redirect_count: u32,
    /// `Content-Length` of the final response, if the server sent one.
    pub content_length: Option<u64>,
    /// Bytes actually received.
    pub bytes: u64,
    body: File,
}

impl FetchedBody {
    /// Rewinds the staged body and hands it out for reading.
    pub fn into_reader(mut self) -> io::Result<File> {
        self.body.rewind()?;
        Ok(self.body)
    }
}

/// Performs a GET on `url`, following up to `opts.max_redirects` redirects.
///
/// Any status is returned as-is; the caller decides what counts as success.
/// Blocks until the whole body has been received.
pub fn fetch_to_staging(url: &str, opts: &FetchOptions) -> Result<FetchedBody, DownloadError> {
    let transport = |source: curl::Error| DownloadError::Transport {
        url: url.to_string(),
        source,
    };

    let mut staging = tempfile::tempfile().map_err(|source| DownloadError::Staging { source })?;
    let mut bytes = 0u64;
    let mut write_err: Option<io::Error> = None;

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(transport)?;
    easy.get(true).map_err(transport)?;
    easy.follow_location(true).map_err(transport)?;
    easy.max_redirections(opts.max_redirects).map_err(transport)?;
    if let Some(t) = opts.connect_timeout {
        easy.connect_timeout(t).map_err(transport)?;
    }
    if let Some(t) = opts.timeout {
        easy.timeout(t).map_err(transport)?;
    }
    if let Some(ua) = &opts.user_agent {
        easy.useragent(ua).map_err(transport)?;
    }

    let performed = {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| match staging.write_all(data) {
                Ok(()) => {
                    bytes += data.len() as u64;
                    Ok(data.len())
                }
                Err(e) => {
                    write_err = Some(e);
                    Ok(0) // abort transfer
                }
            })
            .map_err(transport)?;
        transfer.perform()
    };

    if let Some(source) = write_err {
        return Err(DownloadError::Staging { source });
    }
    performed.map_err(transport)?;

    let status = easy.response_code().map_err(transport)?;
    let redirect_count = easy.redirect_count().map_err(transport)?;
    let final_url = easy
        .effective_url()
        .map_err(transport)?
        .unwrap_or(url)
        .to_string();
    let content_length = easy
        .content_length_download()
        .ok()
        .filter(|len| *len >= 0.0)
        .map(|len| len as u64);

    tracing::debug!(
        url,
        final_url = %final_url,
        status,
        redirect_count,
        bytes,
        "GET finished"
    );

    Ok(FetchedBody {
        final_url,
        status,
        redirect_count,
        content_length,
        bytes,
        body: staging,
    })
}
