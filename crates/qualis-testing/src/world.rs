//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated temp directory per test
//! - Writing report documents and a config file into it
//! - Configuring CLI commands to use that config and directory

use anyhow::Result;
use assert_cmd::Command;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use qualis_testing::{TestWorld, fixtures};
///
/// let world = TestWorld::new().with_report("output.json", &fixtures::failing_report());
/// let mut cmd = assert_cmd::Command::cargo_bin("qualis").unwrap();
/// world.configure_command(&mut cmd).arg("report");
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment. No config file exists yet.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("qualis").join("config.toml");

        Self {
            temp_dir,
            config_path,
            env_vars: HashMap::new(),
        }
    }

    /// Temp root; also the working directory of configured commands.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Write a JSON document below the temp root and return its path.
    pub fn write_document(&self, name: &str, document: &Value) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, serde_json::to_string_pretty(document)?)?;
        Ok(path)
    }

    /// Write a report document; builder form of `write_document`.
    pub fn with_report(self, name: &str, document: &Value) -> Self {
        self.write_document(name, document)
            .expect("Failed to write report document");
        self
    }

    /// Write the config file with the given sources.
    pub fn write_config(&self, report_source: &str, dashboard_source: Option<&str>) -> Result<()> {
        let mut content = format!("report_source = {:?}\n", report_source);
        if let Some(dashboard) = dashboard_source {
            content.push_str(&format!("dashboard_source = {:?}\n", dashboard));
        }

        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.config_path, content)?;
        Ok(())
    }

    /// Builder form of `write_config` for the report source only.
    pub fn with_report_source(self, report_source: &str) -> Self {
        self.write_config(report_source, None)
            .expect("Failed to write config");
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// The caller provides the base command (e.g. `Command::cargo_bin("qualis")`).
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config").arg(&self.config_path);

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("QUALIS_CONFIG");
        cmd.env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }
}
