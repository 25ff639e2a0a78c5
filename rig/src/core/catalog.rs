//! Static hardware and slot reference data with O(1) lookup indices.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::types::HardwareType;

/// Types every finished build must contain, in reporting order.
pub const REQUIRED_TYPES: [HardwareType; 4] = [
    HardwareType::Cpu,
    HardwareType::Ram,
    HardwareType::Psu,
    HardwareType::Cooler,
];

/// An installable component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: HardwareType,
    /// Id of another item that must already be installed somewhere.
    #[serde(rename = "dependsOn", default, skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<String>,
}

/// A mounting point that accepts exactly one hardware type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub id: String,
    pub accept: HardwareType,
    pub label: String,
    /// Presentation hint only; validation never reads it.
    #[serde(rename = "isOverlay", default, skip_serializing_if = "is_false")]
    pub is_overlay: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// On-disk shape of a catalog (`catalog.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub hardware: Vec<HardwareItem>,
    pub slots: Vec<Slot>,
    #[serde(
        rename = "requiredTypes",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub required_types: Option<Vec<HardwareType>>,
}

/// Immutable catalog plus derived id indices.
///
/// Built once at startup. When ids collide the first definition wins; use
/// [`crate::core::invariants::validate_catalog`] to reject such catalogs.
#[derive(Debug, Clone)]
pub struct Catalog {
    hardware: Vec<HardwareItem>,
    slots: Vec<Slot>,
    required_types: Vec<HardwareType>,
    hardware_index: HashMap<String, usize>,
    slot_index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(hardware: Vec<HardwareItem>, slots: Vec<Slot>) -> Self {
        Self::with_required_types(hardware, slots, REQUIRED_TYPES.to_vec())
    }

    pub fn with_required_types(
        hardware: Vec<HardwareItem>,
        slots: Vec<Slot>,
        required_types: Vec<HardwareType>,
    ) -> Self {
        let mut hardware_index = HashMap::with_capacity(hardware.len());
        for (idx, item) in hardware.iter().enumerate() {
            hardware_index.entry(item.id.clone()).or_insert(idx);
        }
        let mut slot_index = HashMap::with_capacity(slots.len());
        for (idx, slot) in slots.iter().enumerate() {
            slot_index.entry(slot.id.clone()).or_insert(idx);
        }
        Self {
            hardware,
            slots,
            required_types,
            hardware_index,
            slot_index,
        }
    }

    pub fn from_document(doc: CatalogDocument) -> Self {
        let required = doc
            .required_types
            .unwrap_or_else(|| REQUIRED_TYPES.to_vec());
        Self::with_required_types(doc.hardware, doc.slots, required)
    }

    /// Replace the required-type list, keeping items, slots, and indices.
    pub fn with_required(mut self, required_types: Vec<HardwareType>) -> Self {
        self.required_types = required_types;
        self
    }

    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            hardware: self.hardware.clone(),
            slots: self.slots.clone(),
            required_types: Some(self.required_types.clone()),
        }
    }

    pub fn hardware_by_id(&self, id: &str) -> Option<&HardwareItem> {
        self.hardware_index.get(id).map(|&idx| &self.hardware[idx])
    }

    pub fn slot_by_id(&self, id: &str) -> Option<&Slot> {
        self.slot_index.get(id).map(|&idx| &self.slots[idx])
    }

    pub fn hardware(&self) -> &[HardwareItem] {
        &self.hardware
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn required_types(&self) -> &[HardwareType] {
        &self.required_types
    }
}

impl Default for Catalog {
    /// The built-in desktop build catalog.
    fn default() -> Self {
        Self::new(default_hardware(), default_slots())
    }
}

fn item(id: &str, name: &str, kind: HardwareType, depends_on: Option<&str>) -> HardwareItem {
    HardwareItem {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        depends_on: depends_on.map(str::to_string),
    }
}

fn slot(id: &str, accept: HardwareType, label: &str, is_overlay: bool) -> Slot {
    Slot {
        id: id.to_string(),
        accept,
        label: label.to_string(),
        is_overlay,
    }
}

pub fn default_hardware() -> Vec<HardwareItem> {
    vec![
        item("cpu", "Intel Core i9", HardwareType::Cpu, None),
        item("ram", "DDR5 32GB", HardwareType::Ram, None),
        item("ssd", "NVMe SSD 2TB", HardwareType::Ssd, None),
        item("gpu", "RTX 4090", HardwareType::Gpu, None),
        item("psu", "1000W PSU", HardwareType::Psu, None),
        item("cooler", "Liquid Cooler", HardwareType::Cooler, Some("cpu")),
    ]
}

pub fn default_slots() -> Vec<Slot> {
    vec![
        slot("socket", HardwareType::Cpu, "LGA1700 Socket", false),
        slot("dimm_1", HardwareType::Ram, "DIMM Slot", false),
        slot("m2_slot", HardwareType::Ssd, "M.2 Slot", false),
        slot("pcie_x16", HardwareType::Gpu, "PCIe x16", false),
        slot("atx_power", HardwareType::Psu, "24-Pin Power", false),
        slot("fan_mount", HardwareType::Cooler, "CPU Fan Mount", true),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_resolve_known_ids_and_miss_unknown() {
        let catalog = Catalog::default();
        assert_eq!(
            catalog.hardware_by_id("cooler").map(|h| h.kind),
            Some(HardwareType::Cooler)
        );
        assert_eq!(
            catalog.slot_by_id("fan_mount").map(|s| s.label.as_str()),
            Some("CPU Fan Mount")
        );
        assert!(catalog.hardware_by_id("tpu").is_none());
        assert!(catalog.slot_by_id("sata_0").is_none());
    }

    #[test]
    fn duplicate_ids_resolve_to_first_definition() {
        let catalog = Catalog::new(
            vec![
                item("a", "First", HardwareType::Ram, None),
                item("a", "Second", HardwareType::Gpu, None),
            ],
            Vec::new(),
        );
        assert_eq!(
            catalog.hardware_by_id("a").map(|h| h.name.as_str()),
            Some("First")
        );
    }

    #[test]
    fn document_uses_camel_case_fields() {
        let doc = Catalog::default().to_document();
        let value = serde_json::to_value(&doc).expect("serialize");
        assert_eq!(value["hardware"][5]["dependsOn"], "cpu");
        assert_eq!(value["slots"][5]["isOverlay"], true);
        assert!(value["slots"][0].get("isOverlay").is_none());
        assert_eq!(value["requiredTypes"][3], "COOLER");
    }

    #[test]
    fn document_without_required_types_uses_defaults() {
        let doc: CatalogDocument =
            serde_json::from_str(r#"{"hardware": [], "slots": []}"#).expect("parse");
        let catalog = Catalog::from_document(doc);
        assert_eq!(catalog.required_types(), &REQUIRED_TYPES);
    }
}
