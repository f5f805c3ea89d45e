use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_TIMEZONE: &str = "EST";
pub const DEFAULT_EXTENSION: &str = "txt";
pub const DEFAULT_RAW_SUFFIX: &str = "_Raw Extraction";
pub const DEFAULT_SUMMARY_SUFFIX: &str = "_GameSummary";

/// User configuration, read from `~/.egmlog/config.toml`.
///
/// Every field has a default, so a partial file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Label appended to displayed times; never used for conversion
    pub timezone: String,
    /// Extension of the log files picked up from a folder
    pub extension: String,
    /// Output folder; the input folder when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    pub raw_suffix: String,
    pub summary_suffix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            output_dir: None,
            raw_suffix: DEFAULT_RAW_SUFFIX.to_string(),
            summary_suffix: DEFAULT_SUMMARY_SUFFIX.to_string(),
        }
    }
}

impl Config {
    /// Load from `explicit` if given, otherwise from the default location.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => Self::load_from(&Self::default_path()?),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        std::fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write config {}", path.display()))?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".egmlog").join("config.toml"))
    }

    /// Apply command-line overrides on top of the file values.
    pub fn with_overrides(mut self, timezone: Option<String>, output_dir: Option<PathBuf>) -> Self {
        if let Some(timezone) = timezone {
            self.timezone = timezone;
        }
        if output_dir.is_some() {
            self.output_dir = output_dir;
        }
        self
    }
}
