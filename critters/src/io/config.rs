//! Critters configuration read from `critters.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Default location of the config file, relative to the working directory.
pub const CONFIG_FILE: &str = "critters.toml";

/// Critters configuration (TOML).
///
/// Missing fields fall back to defaults, so an empty file is valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CrittersConfig {
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_filter: String,

    /// Household description read by `critters household` without `--file`.
    pub household_path: PathBuf,
}

impl Default for CrittersConfig {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            household_path: PathBuf::from("household.toml"),
        }
    }
}

impl CrittersConfig {
    pub fn validate(&self) -> Result<()> {
        if self.log_filter.trim().is_empty() {
            return Err(anyhow!("log_filter must be non-empty"));
        }
        if self.household_path.as_os_str().is_empty() {
            return Err(anyhow!("household_path must be non-empty"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `CrittersConfig::default()`.
pub fn load_config(path: &Path) -> Result<CrittersConfig> {
    if !path.exists() {
        let cfg = CrittersConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: CrittersConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Write config to disk, creating the parent directory if needed.
pub fn write_config(path: &Path, cfg: &CrittersConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    fs::write(path, buf).with_context(|| format!("write config {}", path.display()))
}
