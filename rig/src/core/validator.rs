//! The assembly validator: rule checks bound to one catalog.

use crate::core::assembly::Assembly;
use crate::core::catalog::Catalog;
use crate::core::install;
use crate::core::progress::{self, AssemblyStatus};
use crate::core::removal;
use crate::core::types::{Decision, HardwareType, PowerState, RuleViolation};

/// Stateless rule engine over a read-only [`Catalog`].
///
/// Holds no state between calls. Apply operations return a new [`Assembly`];
/// two applies from the same snapshot both validate against that snapshot, so
/// callers that share an assembly must serialize their writes.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    catalog: &'a Catalog,
}

impl<'a> Validator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn validate_install(
        &self,
        assembly: &Assembly,
        slot_id: &str,
        hardware_id: &str,
    ) -> Decision {
        install::validate_install(self.catalog, assembly, slot_id, hardware_id)
    }

    pub fn install_hardware(
        &self,
        assembly: &Assembly,
        slot_id: &str,
        hardware_id: &str,
    ) -> Result<Assembly, RuleViolation> {
        install::install_hardware(self.catalog, assembly, slot_id, hardware_id)
    }

    pub fn validate_removal(
        &self,
        assembly: &Assembly,
        slot_id: &str,
        power: PowerState,
    ) -> Decision {
        removal::validate_removal(assembly, slot_id, power)
    }

    pub fn remove_hardware(
        &self,
        assembly: &Assembly,
        slot_id: &str,
        power: PowerState,
    ) -> Result<Assembly, RuleViolation> {
        removal::remove_hardware(assembly, slot_id, power)
    }

    /// Missing types against the catalog's required-type list.
    pub fn missing_required_types(&self, assembly: &Assembly) -> Vec<HardwareType> {
        progress::missing_required_types(assembly, self.catalog.required_types())
    }

    pub fn missing_required_types_from(
        &self,
        assembly: &Assembly,
        required: &[HardwareType],
    ) -> Vec<HardwareType> {
        progress::missing_required_types(assembly, required)
    }

    pub fn calculate_progress(&self, assembly: &Assembly) -> f64 {
        progress::calculate_progress(self.catalog, assembly)
    }

    pub fn status(&self, assembly: &Assembly) -> AssemblyStatus {
        progress::assembly_status(self.catalog, assembly, self.catalog.required_types())
    }
}
