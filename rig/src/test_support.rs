//! Test-only helpers for building catalogs, assemblies, and workspaces.

use std::path::Path;

use anyhow::Result;
use tempfile::TempDir;

use crate::core::assembly::Assembly;
use crate::core::catalog::{Catalog, HardwareItem, Slot};
use crate::core::types::HardwareType;
use crate::io::init::{InitOptions, RigPaths, init_workspace};

/// Create a hardware item with no dependency.
pub fn hardware(id: &str, name: &str, kind: HardwareType) -> HardwareItem {
    HardwareItem {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        depends_on: None,
    }
}

/// Create a regular (non-overlay) slot.
pub fn slot(id: &str, accept: HardwareType, label: &str) -> Slot {
    Slot {
        id: id.to_string(),
        accept,
        label: label.to_string(),
        is_overlay: false,
    }
}

/// Look up an item from the built-in catalog. Panics on unknown ids.
pub fn default_item(id: &str) -> HardwareItem {
    Catalog::default()
        .hardware_by_id(id)
        .cloned()
        .unwrap_or_else(|| panic!("no built-in hardware '{id}'"))
}

/// Build an assembly directly from `(slot id, hardware id)` pairs, bypassing
/// the validator.
pub fn assembly_of(pairs: &[(&str, &str)]) -> Assembly {
    pairs
        .iter()
        .map(|(slot_id, hardware_id)| (slot_id.to_string(), default_item(hardware_id)))
        .collect()
}

/// Temporary directory with an initialized `.rig/` workspace.
pub struct TestWorkspace {
    dir: TempDir,
    paths: RigPaths,
}

impl TestWorkspace {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir()?;
        let paths = init_workspace(dir.path(), &InitOptions { force: false })?;
        Ok(Self { dir, paths })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn paths(&self) -> &RigPaths {
        &self.paths
    }

    /// Write `contents` to `name` under the workspace root and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> Result<std::path::PathBuf> {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}
