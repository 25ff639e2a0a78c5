//! Initialization helpers for `.rig/` scaffolding.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use super::catalog_store::{CATALOG_SCHEMA, write_catalog};
use super::config::{RigConfig, write_config};
use super::plan_store::write_plan;
use crate::core::catalog::Catalog;
use crate::core::plan::{Plan, Step};

/// All canonical paths within `.rig/` for a project root.
#[derive(Debug, Clone)]
pub struct RigPaths {
    pub rig_dir: PathBuf,
    pub config_path: PathBuf,
    pub catalog_path: PathBuf,
    pub schema_path: PathBuf,
    pub plan_path: PathBuf,
}

impl RigPaths {
    pub fn new(root: &Path) -> Self {
        let rig_dir = root.join(".rig");
        Self {
            rig_dir: rig_dir.clone(),
            config_path: rig_dir.join("config.toml"),
            catalog_path: rig_dir.join("catalog.json"),
            schema_path: rig_dir.join("catalog.schema.json"),
            plan_path: rig_dir.join("plan.toml"),
        }
    }
}

/// Options for `init_workspace`.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// If true, overwrite existing rig-owned files.
    pub force: bool,
}

/// Create `.rig/` scaffolding in `root`.
///
/// Writes the built-in catalog, its schema, a config pointing at that catalog,
/// and an example plan. Fails if `.rig/` already exists unless
/// `options.force` is set.
pub fn init_workspace(root: &Path, options: &InitOptions) -> Result<RigPaths> {
    let paths = RigPaths::new(root);
    if paths.rig_dir.exists() && !options.force {
        return Err(anyhow!(
            "rig init: .rig already exists (use --force to overwrite)"
        ));
    }
    if paths.rig_dir.exists() && !paths.rig_dir.is_dir() {
        return Err(anyhow!("rig init: .rig exists but is not a directory"));
    }

    fs::create_dir_all(&paths.rig_dir)
        .with_context(|| format!("create directory {}", paths.rig_dir.display()))?;

    write_catalog(&paths.catalog_path, &Catalog::default())?;
    write_file(&paths.schema_path, CATALOG_SCHEMA)?;
    write_config(&paths.config_path, &default_config())?;
    write_plan(&paths.plan_path, &example_plan())?;

    Ok(paths)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("write file {}", path.display()))
}

fn default_config() -> RigConfig {
    RigConfig {
        catalog: Some(PathBuf::from(".rig/catalog.json")),
        ..RigConfig::default()
    }
}

/// A complete desktop build; replay with `rig run .rig/plan.toml`.
fn example_plan() -> Plan {
    let install = |slot: &str, hardware: &str| Step::Install {
        slot: slot.to_string(),
        hardware: hardware.to_string(),
    };
    Plan {
        name: Some("desktop".to_string()),
        steps: vec![
            install("socket", "cpu"),
            install("fan_mount", "cooler"),
            install("dimm_1", "ram"),
            install("atx_power", "psu"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::catalog_store::load_catalog;
    use crate::io::config::load_config;
    use crate::io::plan_store::load_plan;

    #[test]
    fn init_creates_expected_layout() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = init_workspace(temp.path(), &InitOptions { force: false }).expect("init");

        assert!(paths.rig_dir.is_dir());
        assert!(paths.schema_path.is_file());

        let cfg = load_config(&paths.config_path).expect("config");
        assert_eq!(
            cfg.catalog_path(temp.path()),
            Some(paths.catalog_path.clone())
        );

        let catalog = load_catalog(&paths.catalog_path).expect("catalog");
        assert_eq!(catalog.hardware().len(), 6);

        let plan = load_plan(&paths.plan_path).expect("plan");
        assert_eq!(plan, example_plan());
        assert_eq!(plan.name.as_deref(), Some("desktop"));
        assert_eq!(plan.steps.len(), 4);
    }

    #[test]
    fn init_without_force_refuses_existing_rig_dir() {
        let temp = tempfile::tempdir().expect("tempdir");
        init_workspace(temp.path(), &InitOptions { force: false }).expect("init");
        let err = init_workspace(temp.path(), &InitOptions { force: false }).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn init_with_force_restores_catalog() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = init_workspace(temp.path(), &InitOptions { force: false }).expect("init");
        fs::write(&paths.catalog_path, "{}").expect("clobber");

        init_workspace(temp.path(), &InitOptions { force: true }).expect("re-init");
        assert!(load_catalog(&paths.catalog_path).is_ok());
    }
}
