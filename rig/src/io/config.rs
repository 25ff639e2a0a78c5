//! Rig configuration stored under `.rig/config.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::types::{HardwareType, PowerState};

/// Rig configuration (TOML).
///
/// This file is intended to be edited by humans. Missing fields default to the
/// built-in catalog, power off, and stopping a plan at its first rejection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RigConfig {
    /// Catalog file, relative to the workspace root. Unset means the built-in catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Overrides the catalog's required-type list for completion checks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_types: Option<Vec<HardwareType>>,

    /// Power state a plan starts from.
    pub initial_power: PowerState,

    /// Stop replaying a plan at the first rejected step.
    pub stop_on_reject: bool,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            required_types: None,
            initial_power: PowerState::Off,
            stop_on_reject: true,
        }
    }
}

impl RigConfig {
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.catalog {
            if path.as_os_str().is_empty() {
                return Err(anyhow!("catalog must be a non-empty path"));
            }
        }
        if let Some(required) = &self.required_types {
            let mut seen = Vec::with_capacity(required.len());
            for kind in required {
                if seen.contains(kind) {
                    return Err(anyhow!("required_types lists {} more than once", kind));
                }
                seen.push(*kind);
            }
        }
        Ok(())
    }

    /// Resolve the configured catalog path against `root`.
    pub fn catalog_path(&self, root: &Path) -> Option<PathBuf> {
        self.catalog.as_ref().map(|path| root.join(path))
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `RigConfig::default()`.
pub fn load_config(path: &Path) -> Result<RigConfig> {
    if !path.exists() {
        let cfg = RigConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: RigConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &RigConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
