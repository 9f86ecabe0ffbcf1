//! Per-URL download failures.
//!
//! Every step of a single download fails with its own variant so the batch
//! runner can report exactly which step broke, with the URL or path involved
//! and the underlying cause.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DownloadError {
    /// The source URL is not valid URL syntax. No request was sent.
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// libcurl failed before a complete response arrived (DNS, connect, TLS, redirect loop, ...).
    #[error("failed to fetch {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },

    /// The local staging file for the response body could not be created or written.
    #[error("failed to stage response body: {source}")]
    Staging {
        #[source]
        source: io::Error,
    },

    #[error("bad status for {url}: HTTP {status}")]
    BadStatus { url: String, status: u32 },

    /// The URL curl ended up at after redirects does not parse.
    #[error("cannot parse final URL {url:?}: {source}")]
    InvalidFinalUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("could not determine file name from {url:?}")]
    NoFilename { url: String },

    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create file {}: {source}", .path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Copying the body into the output file failed. The file may be left truncated.
    #[error("failed to write to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
