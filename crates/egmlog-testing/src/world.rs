//! TestWorld pattern for CLI integration tests.
//!
//! Each world owns a temp directory holding:
//! - `logs/`: the folder handed to `egmlog parse`
//! - `config.toml`: passed via `--config` so the user's real config is never read

use anyhow::{Context, Result};
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::LogScript;

/// Isolated environment for running the CLI.
///
/// # Example
/// ```no_run
/// use egmlog_testing::{LogScript, TestWorld};
///
/// let world = TestWorld::new();
/// world
///     .write_log("terminal.txt", &LogScript::new().event("Cashout initiated."))
///     .unwrap();
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    logs_dir: PathBuf,
    config_path: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let logs_dir = temp_dir.path().join("logs");
        let config_path = temp_dir.path().join("config.toml");

        fs::create_dir_all(&logs_dir).expect("Failed to create logs dir");

        Self {
            temp_dir,
            logs_dir,
            config_path,
        }
    }

    /// Folder holding the log files.
    pub fn logs_dir(&self) -> &Path {
        &self.logs_dir
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a config file for the CLI to load.
    pub fn with_config(self, toml: &str) -> Self {
        fs::write(&self.config_path, toml).expect("Failed to write config");
        self
    }

    /// Write a scripted log into the logs folder.
    pub fn write_log(&self, file_name: &str, script: &LogScript) -> Result<PathBuf> {
        let path = self.logs_dir.join(file_name);
        script.write_to(&path)?;
        Ok(path)
    }

    /// Write arbitrary bytes into the logs folder.
    pub fn write_raw(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.logs_dir.join(file_name);
        fs::write(&path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Read an output file written next to the inputs.
    pub fn read_output(&self, file_name: &str) -> Result<String> {
        let path = self.logs_dir.join(file_name);
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
    }

    /// Configure a CLI command with this world's config file.
    ///
    /// The caller provides the base command (from `cargo_bin_cmd!("egmlog")`).
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config")
            .arg(&self.config_path)
            .current_dir(self.temp_dir.path())
            .env_remove("RUST_LOG")
    }
}
