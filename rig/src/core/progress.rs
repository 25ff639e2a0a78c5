//! Completion queries over an assembly.

use serde::Serialize;

use crate::core::assembly::Assembly;
use crate::core::catalog::Catalog;
use crate::core::types::HardwareType;

/// Required types not represented by any installed item, in `required` order.
pub fn missing_required_types(assembly: &Assembly, required: &[HardwareType]) -> Vec<HardwareType> {
    let installed = assembly.installed_types();
    required
        .iter()
        .copied()
        .filter(|kind| !installed.contains(kind))
        .collect()
}

/// Percentage of catalog items installed: `100 * occupied slots / catalog items`.
///
/// Counts occupied slots, not required-type coverage. An empty catalog yields 0.
/// Catalogs with more slots than items can exceed 100 raw; the result is capped.
pub fn calculate_progress(catalog: &Catalog, assembly: &Assembly) -> f64 {
    let total = catalog.hardware().len();
    if total == 0 {
        return 0.0;
    }
    (assembly.len() as f64 / total as f64 * 100.0).min(100.0)
}

/// Snapshot of how far an assembly is from a finished build.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssemblyStatus {
    pub progress: f64,
    pub missing: Vec<HardwareType>,
    /// True when no required type is missing.
    pub complete: bool,
}

pub fn assembly_status(
    catalog: &Catalog,
    assembly: &Assembly,
    required: &[HardwareType],
) -> AssemblyStatus {
    let missing = missing_required_types(assembly, required);
    AssemblyStatus {
        progress: calculate_progress(catalog, assembly),
        complete: missing.is_empty(),
        missing,
    }
}
