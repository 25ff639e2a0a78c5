//! Install rules: may `hardware_id` go into `slot_id` right now?

use crate::core::assembly::Assembly;
use crate::core::catalog::Catalog;
use crate::core::types::{Decision, ReasonCode, RuleViolation};

/// Decide whether `hardware_id` may be installed into `slot_id`.
///
/// Checks run in a fixed order and the first failure wins:
/// unknown slot, unknown hardware, occupied slot, type mismatch, missing
/// dependency. The reason code and message are part of the output contract.
pub fn validate_install(
    catalog: &Catalog,
    assembly: &Assembly,
    slot_id: &str,
    hardware_id: &str,
) -> Decision {
    let Some(slot) = catalog.slot_by_id(slot_id) else {
        return Decision::deny(ReasonCode::InvalidSlot, "Unknown slot.");
    };
    let Some(hardware) = catalog.hardware_by_id(hardware_id) else {
        return Decision::deny(ReasonCode::InvalidHardware, "Unknown hardware.");
    };

    if let Some(current) = assembly.get(slot_id) {
        return Decision::deny(
            ReasonCode::SlotOccupied,
            format!("{} already has {} installed.", slot.label, current.name),
        );
    }

    if hardware.kind != slot.accept {
        return Decision::deny(
            ReasonCode::TypeMismatch,
            format!(
                "{} is not a compatible type for {}.",
                hardware.name, slot.label
            ),
        );
    }

    if let Some(dependency) = hardware.depends_on.as_deref() {
        if !assembly.contains_hardware(dependency) {
            let dependency_name = catalog
                .hardware_by_id(dependency)
                .map_or(dependency, |item| item.name.as_str());
            return Decision::deny(
                ReasonCode::DependencyMissing,
                format!(
                    "{} requires {} to be installed first.",
                    hardware.name, dependency_name
                ),
            );
        }
    }

    Decision::allow(format!(
        "{} can be installed in {}.",
        hardware.name, slot.label
    ))
}

/// Apply an install, returning the next assembly.
///
/// `assembly` is never modified. On rejection the error carries the same
/// reason and message that [`validate_install`] reports.
pub fn install_hardware(
    catalog: &Catalog,
    assembly: &Assembly,
    slot_id: &str,
    hardware_id: &str,
) -> Result<Assembly, RuleViolation> {
    validate_install(catalog, assembly, slot_id, hardware_id).into_result()?;
    let item = catalog
        .hardware_by_id(hardware_id)
        .cloned()
        .ok_or_else(|| RuleViolation {
            reason: ReasonCode::InvalidHardware,
            message: "Unknown hardware.".to_string(),
        })?;
    Ok(assembly.with_installed(slot_id, item))
}
