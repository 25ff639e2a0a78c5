//! Validation of `.rig/` layout, config, and catalog.

use std::path::Path;

use anyhow::{Result, anyhow};

use crate::workspace::{CatalogSource, load_workspace};

/// High-level validation outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidateOutcome {
    pub catalog_source: CatalogSource,
    pub hardware: usize,
    pub slots: usize,
    /// Catalog-level warnings that do not make the workspace invalid.
    pub warnings: Vec<String>,
}

/// Validate the workspace at `root`.
///
/// `.rig/`, when present, must be a directory. Config and catalog must load
/// (schema + invariants). Slot types with no matching hardware, and required
/// types with no slot, are reported as warnings.
pub fn validate_workspace(root: &Path) -> Result<ValidateOutcome> {
    let rig_dir = root.join(".rig");
    if rig_dir.exists() && !rig_dir.is_dir() {
        return Err(anyhow!("expected directory {}", rig_dir.display()));
    }

    let ws = load_workspace(root)?;
    let catalog = &ws.catalog;

    let mut warnings = Vec::new();
    for slot in catalog.slots() {
        let stocked = catalog.hardware().iter().any(|h| h.kind == slot.accept);
        if !stocked {
            warnings.push(format!(
                "slot '{}' accepts {} but no hardware of that type exists",
                slot.id, slot.accept
            ));
        }
    }
    for kind in catalog.required_types() {
        if !catalog.slots().iter().any(|slot| slot.accept == *kind) {
            warnings.push(format!("required type {kind} has no slot that accepts it"));
        }
    }

    Ok(ValidateOutcome {
        catalog_source: ws.catalog_source.clone(),
        hardware: catalog.hardware().len(),
        slots: catalog.slots().len(),
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestWorkspace;
    use std::fs;

    #[test]
    fn validate_ok_for_fresh_workspace() {
        let repo = TestWorkspace::new().expect("workspace");
        let outcome = validate_workspace(repo.root()).expect("validate");
        assert_eq!(outcome.hardware, 6);
        assert_eq!(outcome.slots, 6);
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn validate_errors_on_broken_catalog() {
        let repo = TestWorkspace::new().expect("workspace");
        fs::write(&repo.paths().catalog_path, r#"{"hardware": 3}"#).expect("write");
        let err = validate_workspace(repo.root()).expect_err("validate should fail");
        assert!(format!("{err:#}").contains("schema validation failed"));
    }

    #[test]
    fn validate_warns_on_unreachable_required_type() {
        let repo = TestWorkspace::new().expect("workspace");
        fs::write(
            &repo.paths().catalog_path,
            r#"{
                "hardware": [{"id": "cpu", "name": "CPU", "type": "CPU"}],
                "slots": [{"id": "socket", "accept": "CPU", "label": "Socket"}],
                "requiredTypes": ["CPU", "PSU"]
            }"#,
        )
        .expect("write");
        let outcome = validate_workspace(repo.root()).expect("validate");
        assert_eq!(
            outcome.warnings,
            vec!["required type PSU has no slot that accepts it".to_string()]
        );
    }

    #[test]
    fn validate_errors_when_rig_is_a_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::write(temp.path().join(".rig"), "").expect("write");
        let err = validate_workspace(temp.path()).expect_err("validate should fail");
        assert!(err.to_string().contains("expected directory"));
    }
}
