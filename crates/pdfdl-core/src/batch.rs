//! Sequential batch over a URL list.
//!
//! Each URL is downloaded in list order. Failures are reported and the run
//! moves on; nothing in here aborts the batch.

use std::io::{self, Write};
use std::path::Path;

use crate::downloader::{self, Downloaded};
use crate::error::DownloadError;
use crate::fetch::FetchOptions;

/// Outcome of one URL in a batch.
#[derive(Debug)]
pub struct UrlOutcome {
    pub url: String,
    pub result: Result<Downloaded, DownloadError>,
}

/// Outcomes of a batch, in the order the URLs were given.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<UrlOutcome>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}

/// Downloads every URL into `output_dir`, printing progress to stdout and
/// errors to stderr.
pub fn run_batch<S: AsRef<str>>(urls: &[S], output_dir: &Path, opts: &FetchOptions) -> BatchReport {
    let stdout = io::stdout();
    let stderr = io::stderr();
    run_batch_to(urls, output_dir, opts, &mut stdout.lock(), &mut stderr.lock())
}

/// Like [`run_batch`] with explicit console sinks.
///
/// Per URL, `out` receives `Original URL:`/`Final URL:` once the response is
/// accepted and `Downloaded to <path>` on success; `err` receives
/// `Error: <cause>` on failure. Console write failures are ignored.
pub fn run_batch_to<S: AsRef<str>>(
    urls: &[S],
    output_dir: &Path,
    opts: &FetchOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> BatchReport {
    let mut report = BatchReport::default();

    for url in urls {
        let url = url.as_ref();
        tracing::debug!(url, "starting download");

        let result = downloader::download_pdf_with(url, output_dir, opts, |original, final_url| {
            let _ = writeln!(out, "Original URL: {}", original);
            let _ = writeln!(out, "Final URL:    {}", final_url);
        });

        match &result {
            Ok(done) => {
                let _ = writeln!(out, "Downloaded to {}\n", done.path.display());
                tracing::info!(
                    url,
                    path = %done.path.display(),
                    bytes = done.bytes,
                    "download complete"
                );
            }
            Err(e) => {
                let _ = writeln!(err, "Error: {}", e);
                tracing::error!(url, error = %e, "download failed");
            }
        }

        report.outcomes.push(UrlOutcome {
            url: url.to_string(),
            result,
        });
    }

    tracing::info!(
        total = report.outcomes.len(),
        succeeded = report.succeeded(),
        failed = report.failed(),
        "batch finished"
    );
    report
}
