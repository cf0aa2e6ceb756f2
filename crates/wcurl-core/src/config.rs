use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides [`WcurlConfig::curl`].
pub const CURL_ENV: &str = "WCURL_CURL";

/// Optional configuration loaded from `~/.config/wcurl/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WcurlConfig {
    /// Downloader program name or path.
    pub curl: String,
    /// Value passed to `--retry` for every operation.
    pub retry: u32,
    /// Arguments placed before the command-line `--curl-options`, one argument per entry.
    pub curl_options: Vec<String>,
}

impl Default for WcurlConfig {
    fn default() -> Self {
        Self {
            curl: "curl".to_string(),
            retry: 5,
            curl_options: Vec::new(),
        }
    }
}

/// Location of an existing config file, if any.
pub fn config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("wcurl")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Load the config file, or built-in defaults when none exists. Never writes to disk.
pub fn load() -> Result<WcurlConfig> {
    let cfg = match config_path()? {
        Some(path) => load_from_path(&path)?,
        None => WcurlConfig::default(),
    };
    Ok(apply_env(cfg, std::env::var(CURL_ENV).ok()))
}

pub fn load_from_path(path: &Path) -> Result<WcurlConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: WcurlConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}

/// Apply the `WCURL_CURL` override; an empty value is ignored.
pub fn apply_env(mut cfg: WcurlConfig, curl: Option<String>) -> WcurlConfig {
    if let Some(curl) = curl.filter(|c| !c.is_empty()) {
        cfg.curl = curl;
    }
    cfg
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let cfg = WcurlConfig::default();
        assert_eq!(cfg.curl, "curl");
        assert_eq!(cfg.retry, 5);
        assert!(cfg.curl_options.is_empty());
    }

    #[test]
    fn config_toml_partial_uses_defaults() {
        let cfg: WcurlConfig = toml::from_str("retry = 2").unwrap();
        assert_eq!(cfg.retry, 2);
        assert_eq!(cfg.curl, "curl");
        assert!(cfg.curl_options.is_empty());
    }

    #[test]
    fn load_from_path_custom_values() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(
            br#"
                curl = "/opt/curl/bin/curl"
                retry = 10
                curl_options = ["--user-agent", "wcurl test"]
            "#,
        )
        .unwrap();
        f.flush().unwrap();
        let cfg = load_from_path(f.path()).unwrap();
        assert_eq!(cfg.curl, "/opt/curl/bin/curl");
        assert_eq!(cfg.retry, 10);
        assert_eq!(cfg.curl_options, vec!["--user-agent", "wcurl test"]);
    }

    #[test]
    fn load_from_path_invalid_names_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"retry = \"many\"").unwrap();
        f.flush().unwrap();
        let err = load_from_path(f.path()).unwrap_err();
        assert!(format!("{:#}", err).contains(&f.path().display().to_string()));
    }

    #[test]
    fn env_override() {
        let cfg = apply_env(WcurlConfig::default(), Some("curl-impersonate".into()));
        assert_eq!(cfg.curl, "curl-impersonate");
        let cfg = apply_env(WcurlConfig::default(), Some(String::new()));
        assert_eq!(cfg.curl, "curl");
        let cfg = apply_env(WcurlConfig::default(), None);
        assert_eq!(cfg.curl, "curl");
    }
}
