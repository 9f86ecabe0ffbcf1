use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// PDFs fetched when neither the command line nor the config file names any.
pub const DEFAULT_URLS: &[&str] = &[
    "https://nypdonline.org/files/948580_01142022_2022007.pdf",
    "https://nypdonline.org/files/965915_10102023_2023071.pdf",
];

/// Output directory used when none is configured (relative to the working directory).
pub const DEFAULT_OUTPUT_DIR: &str = "nypd_pdfs";

/// Redirect hop limit; matches the usual HTTP client default.
pub const DEFAULT_MAX_REDIRECTS: u32 = 10;

/// Settings loaded from `~/.config/pdfdl/config.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfdlConfig {
    /// Directory the downloads are written into; created (with parents) if absent.
    pub output_dir: PathBuf,
    /// URLs to download, processed in order.
    pub urls: Vec<String>,
    /// Maximum number of redirects followed per URL.
    pub max_redirects: u32,
    /// Connect timeout in seconds (None = wait indefinitely).
    pub connect_timeout_secs: Option<u64>,
    /// Whole-transfer timeout in seconds (None = wait indefinitely).
    pub timeout_secs: Option<u64>,
    /// Value sent as `User-Agent` (None = libcurl default, i.e. no header).
    pub user_agent: Option<String>,
}

impl Default for PdfdlConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            urls: DEFAULT_URLS.iter().map(|u| u.to_string()).collect(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            connect_timeout_secs: None,
            timeout_secs: None,
            user_agent: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pdfdl")?;
    Ok(xdg_dirs.get_config_home().join("config.toml"))
}

/// Parse a config file. Missing keys take their default values.
pub fn load_from_path(path: &Path) -> Result<PdfdlConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: PdfdlConfig =
        toml::from_str(&data).with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

/// Load the config file if it exists; otherwise, or if it cannot be read or
/// parsed, fall back to the built-in defaults. Never creates a file.
pub fn load_or_default() -> PdfdlConfig {
    let path = match config_path() {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!("cannot locate config dir, using defaults: {:#}", e);
            return PdfdlConfig::default();
        }
    };
    if !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return PdfdlConfig::default();
    }
    match load_from_path(&path) {
        Ok(cfg) => {
            tracing::debug!("loaded config from {}", path.display());
            cfg
        }
        Err(e) => {
            tracing::warn!("ignoring config: {:#}", e);
            PdfdlConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let cfg = PdfdlConfig::default();
        assert_eq!(cfg.output_dir, PathBuf::from("nypd_pdfs"));
        assert_eq!(cfg.urls.len(), 2);
        assert_eq!(
            cfg.urls[0],
            "https://nypdonline.org/files/948580_01142022_2022007.pdf"
        );
        assert_eq!(cfg.max_redirects, 10);
        assert!(cfg.connect_timeout_secs.is_none());
        assert!(cfg.timeout_secs.is_none());
        assert!(cfg.user_agent.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = PdfdlConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: PdfdlConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_partial_keeps_defaults() {
        let toml = r#"
            output_dir = "/srv/pdfs"
            timeout_secs = 600
        "#;
        let cfg: PdfdlConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.output_dir, PathBuf::from("/srv/pdfs"));
        assert_eq!(cfg.timeout_secs, Some(600));
        assert_eq!(cfg.urls, PdfdlConfig::default().urls);
        assert_eq!(cfg.max_redirects, 10);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            urls = ["https://example.com/a.pdf"]
            max_redirects = 3
            connect_timeout_secs = 5
            user_agent = "pdfdl-test"
        "#;
        let cfg: PdfdlConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.urls, vec!["https://example.com/a.pdf".to_string()]);
        assert_eq!(cfg.max_redirects, 3);
        assert_eq!(cfg.connect_timeout_secs, Some(5));
        assert_eq!(cfg.user_agent.as_deref(), Some("pdfdl-test"));
    }

    #[test]
    fn load_from_path_reports_bad_toml() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"max_redirects = \"many\"").unwrap();
        f.flush().unwrap();
        let err = load_from_path(f.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("invalid config"));
    }
}
