use pdfdl_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible; fall back to stderr if the state dir is unusable.
    if let Err(e) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable, logging to stderr: {:#}", e);
    }

    // Per-URL failures never reach here; only `pdfdl config` rendering errors do.
    if let Err(err) = Cli::run_from_args() {
        eprintln!("pdfdl error: {:#}", err);
        std::process::exit(1);
    }
}
