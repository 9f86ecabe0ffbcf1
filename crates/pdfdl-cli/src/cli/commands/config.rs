//! `pdfdl config` – show where settings come from and what they resolve to.

use anyhow::{Context, Result};
use pdfdl_core::config::{self, PdfdlConfig};

pub fn show_config(cfg: &PdfdlConfig) -> Result<()> {
    match config::config_path() {
        Ok(path) if path.exists() => println!("# config file: {}", path.display()),
        Ok(path) => println!("# config file: {} (not present, using defaults)", path.display()),
        Err(e) => println!("# config file: unavailable ({:#})", e),
    }
    let toml = toml::to_string_pretty(cfg).context("failed to render config")?;
    print!("{}", toml);
    Ok(())
}
