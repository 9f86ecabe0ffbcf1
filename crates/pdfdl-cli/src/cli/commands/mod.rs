//! CLI command handlers.

mod config;
mod fetch;

pub use config::show_config;
#[cfg(test)]
pub use fetch::effective_targets;
pub use fetch::run_fetch;
