pub mod config;
pub mod logging;

pub mod batch;
pub mod downloader;
pub mod error;
pub mod fetch;
pub mod storage;
pub mod url_model;

pub use batch::{run_batch, BatchReport};
pub use downloader::{download_pdf, download_pdf_with, Downloaded};
pub use error::DownloadError;
pub use fetch::FetchOptions;
