//! Build plans stored as TOML.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::plan::Plan;

/// Load a plan from a TOML file.
pub fn load_plan(path: &Path) -> Result<Plan> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read plan {}", path.display()))?;
    toml::from_str(&contents).with_context(|| format!("parse plan {}", path.display()))
}

/// Write a plan as TOML with a trailing newline.
pub fn write_plan(path: &Path, plan: &Plan) -> Result<()> {
    let mut buf = toml::to_string_pretty(plan).context("serialize plan toml")?;
    if !buf.ends_with('\n') {
        buf.push('\n');
    }
    fs::write(path, buf).with_context(|| format!("write plan {}", path.display()))
}
