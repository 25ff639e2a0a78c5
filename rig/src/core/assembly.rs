//! The assembly: which hardware currently occupies which slot.

use std::collections::BTreeMap;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::catalog::HardwareItem;
use crate::core::types::HardwareType;

/// Mapping from slot id to the item installed in it.
///
/// A present key means the slot is occupied. Iteration is ordered by slot id,
/// so every scan over the assembly is deterministic for a given state.
///
/// The type itself performs no rule checks. Values built through
/// [`FromIterator`] are taken as-is; only states produced by the validator's
/// install/remove operations are guaranteed to satisfy the type and dependency
/// invariants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assembly {
    slots: BTreeMap<String, HardwareItem>,
}

impl Assembly {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot_id: &str) -> Option<&HardwareItem> {
        self.slots.get(slot_id)
    }

    pub fn is_occupied(&self, slot_id: &str) -> bool {
        self.slots.contains_key(slot_id)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &HardwareItem)> + '_ {
        self.slots.iter().map(|(slot, item)| (slot.as_str(), item))
    }

    /// True if any slot holds the item with `hardware_id`.
    pub fn contains_hardware(&self, hardware_id: &str) -> bool {
        self.slots.values().any(|item| item.id == hardware_id)
    }

    /// First installed item (in slot order) that declares a dependency on `hardware_id`.
    pub fn first_dependent_of(&self, hardware_id: &str) -> Option<&HardwareItem> {
        self.slots
            .values()
            .find(|item| item.depends_on.as_deref() == Some(hardware_id))
    }

    pub fn installed_types(&self) -> HashSet<HardwareType> {
        self.slots.values().map(|item| item.kind).collect()
    }

    /// Copy of `self` with `slot_id` bound to `item`.
    pub(crate) fn with_installed(&self, slot_id: &str, item: HardwareItem) -> Self {
        let mut next = self.clone();
        next.slots.insert(slot_id.to_string(), item);
        next
    }

    /// Copy of `self` with `slot_id` unbound.
    pub(crate) fn without(&self, slot_id: &str) -> Self {
        let mut next = self.clone();
        next.slots.remove(slot_id);
        next
    }
}

impl FromIterator<(String, HardwareItem)> for Assembly {
    fn from_iter<I: IntoIterator<Item = (String, HardwareItem)>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{assembly_of, default_item};

    #[test]
    fn with_installed_leaves_original_untouched() {
        let empty = Assembly::new();
        let next = empty.with_installed("socket", default_item("cpu"));
        assert!(empty.is_empty());
        assert_eq!(next.get("socket").map(|h| h.id.as_str()), Some("cpu"));
    }

    #[test]
    fn dependents_are_found_in_slot_order() {
        let assembly = assembly_of(&[("socket", "cpu"), ("fan_mount", "cooler")]);
        assert_eq!(
            assembly.first_dependent_of("cpu").map(|h| h.id.as_str()),
            Some("cooler")
        );
        assert!(assembly.first_dependent_of("cooler").is_none());
    }

    #[test]
    fn serializes_as_slot_keyed_object() {
        let assembly = assembly_of(&[("socket", "cpu")]);
        let value = serde_json::to_value(&assembly).expect("serialize");
        assert_eq!(value["socket"]["id"], "cpu");
        assert_eq!(value["socket"]["type"], "CPU");
    }
}
