//! Read-only assembly snapshots for `rig check`.
//!
//! A snapshot is a JSON object mapping slot id to hardware id. Items are
//! resolved through the catalog; rule invariants are not re-checked.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::warn;

use crate::core::assembly::Assembly;
use crate::core::catalog::Catalog;

/// Load a snapshot from disk.
pub fn load_assembly(path: &Path, catalog: &Catalog) -> Result<Assembly> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read assembly {}", path.display()))?;
    parse_assembly(&contents, catalog).with_context(|| format!("load assembly {}", path.display()))
}

pub fn parse_assembly(contents: &str, catalog: &Catalog) -> Result<Assembly> {
    let raw: BTreeMap<String, String> =
        serde_json::from_str(contents).context("parse assembly json")?;
    let mut entries = Vec::with_capacity(raw.len());
    for (slot_id, hardware_id) in raw {
        let slot = catalog
            .slot_by_id(&slot_id)
            .ok_or_else(|| anyhow!("unknown slot '{slot_id}'"))?;
        let item = catalog
            .hardware_by_id(&hardware_id)
            .ok_or_else(|| anyhow!("unknown hardware '{hardware_id}' in slot '{slot_id}'"))?;
        if item.kind != slot.accept {
            warn!(
                slot = %slot_id,
                hardware = %hardware_id,
                "snapshot places {} in a {} slot",
                item.kind,
                slot.accept
            );
        }
        entries.push((slot_id, item.clone()));
    }
    Ok(entries.into_iter().collect())
}
