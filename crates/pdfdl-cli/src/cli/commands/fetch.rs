//! `pdfdl fetch [URL]... [-o DIR]` – download sequentially.

use pdfdl_core::config::PdfdlConfig;
use pdfdl_core::{run_batch, FetchOptions};
use std::path::PathBuf;

/// URLs and output directory after applying CLI overrides on top of `cfg`.
pub fn effective_targets(
    cfg: &PdfdlConfig,
    urls: Vec<String>,
    output_dir: Option<PathBuf>,
) -> (Vec<String>, PathBuf) {
    let urls = if urls.is_empty() { cfg.urls.clone() } else { urls };
    let output_dir = output_dir.unwrap_or_else(|| cfg.output_dir.clone());
    (urls, output_dir)
}

/// Runs the batch. Individual failures are printed by the batch runner and do
/// not change the exit status.
pub fn run_fetch(cfg: &PdfdlConfig, urls: Vec<String>, output_dir: Option<PathBuf>) {
    let (urls, output_dir) = effective_targets(cfg, urls, output_dir);
    if urls.is_empty() {
        println!("No URLs to download.");
        return;
    }

    let opts = FetchOptions::from(cfg);
    let report = run_batch(&urls, &output_dir, &opts);
    if report.failed() > 0 {
        tracing::warn!(
            "{} of {} download(s) failed",
            report.failed(),
            report.outcomes.len()
        );
    }
}
