use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigViewModel {
    pub path: PathBuf,
    pub exists: bool,
    pub report_source: String,
    pub dashboard_source: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInitViewModel {
    pub path: PathBuf,
    pub report_source: String,
    pub overwritten: bool,
}

/// Shown when `qualis` runs without a subcommand.
#[derive(Debug, Clone, Serialize)]
pub struct GuidanceViewModel {
    pub config_path: PathBuf,
    pub config_exists: bool,
}
