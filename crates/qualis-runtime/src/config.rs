use crate::error::FetchError;
use crate::source::{DEFAULT_REPORT_SOURCE, ReportSource};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. QUALIS_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory (recommended default)
/// 4. ~/.qualis/config.toml (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("QUALIS_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("qualis").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".qualis").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

fn default_report_source() -> String {
    DEFAULT_REPORT_SOURCE.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Endpoint or file holding the report document
    #[serde(default = "default_report_source")]
    pub report_source: String,

    /// Endpoint or file holding the dashboard document; the built-in
    /// sample catalog is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard_source: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report_source: default_report_source(),
            dashboard_source: None,
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Report source, with a command-line override taking precedence
    pub fn report_source(
        &self,
        override_source: Option<&str>,
    ) -> std::result::Result<ReportSource, FetchError> {
        ReportSource::parse(override_source.unwrap_or(&self.report_source))
    }

    /// Dashboard source, or `None` when the sample catalog should be used
    pub fn dashboard_source(
        &self,
        override_source: Option<&str>,
    ) -> std::result::Result<Option<ReportSource>, FetchError> {
        override_source
            .or(self.dashboard_source.as_deref())
            .map(ReportSource::parse)
            .transpose()
    }
}
