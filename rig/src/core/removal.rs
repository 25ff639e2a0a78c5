//! Removal rules: may the item in `slot_id` be taken out right now?

use crate::core::assembly::Assembly;
use crate::core::types::{Decision, PowerState, ReasonCode, RuleViolation};

/// Decide whether the item in `slot_id` may be removed.
///
/// Order: empty slot, powered system, installed dependents. The power check
/// precedes the dependency check. With several dependents the first one in
/// slot-id order is reported.
pub fn validate_removal(assembly: &Assembly, slot_id: &str, power: PowerState) -> Decision {
    let Some(target) = assembly.get(slot_id) else {
        return Decision::deny(
            ReasonCode::SlotEmpty,
            "No hardware is installed in this slot.",
        );
    };

    if power != PowerState::Off {
        return Decision::deny(
            ReasonCode::SystemActive,
            "Power off the system before removing hardware.",
        );
    }

    if let Some(dependent) = assembly.first_dependent_of(&target.id) {
        return Decision::deny(
            ReasonCode::DependencyBlocked,
            format!("{} must be removed first.", dependent.name),
        );
    }

    Decision::allow(format!("{} can be safely removed.", target.name))
}

/// Apply a removal, returning the next assembly without `slot_id`.
///
/// `assembly` is never modified.
pub fn remove_hardware(
    assembly: &Assembly,
    slot_id: &str,
    power: PowerState,
) -> Result<Assembly, RuleViolation> {
    validate_removal(assembly, slot_id, power).into_result()?;
    Ok(assembly.without(slot_id))
}
