//! Semantic catalog invariants not expressible via JSON Schema.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::catalog::Catalog;

static ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9_-]*$").expect("id pattern is a valid regex"));

/// Check semantic invariants not expressible in JSON Schema:
/// - No duplicate hardware ids, no duplicate slot ids
/// - Ids are lowercase `[a-z0-9_-]` and start with a letter or digit
/// - No item depends on itself
///
/// A `dependsOn` that names an unknown id is allowed; install checks report
/// it by its raw id.
pub fn validate_catalog(catalog: &Catalog) -> Vec<String> {
    let mut errors = Vec::new();

    let mut seen = HashSet::new();
    for item in catalog.hardware() {
        if !seen.insert(item.id.as_str()) {
            errors.push(format!("duplicate hardware id '{}'", item.id));
        }
        check_id_format("hardware", &item.id, &mut errors);
        if item.depends_on.as_deref() == Some(item.id.as_str()) {
            errors.push(format!("hardware '{}' depends on itself", item.id));
        }
    }

    let mut seen = HashSet::new();
    for slot in catalog.slots() {
        if !seen.insert(slot.id.as_str()) {
            errors.push(format!("duplicate slot id '{}'", slot.id));
        }
        check_id_format("slot", &slot.id, &mut errors);
    }

    errors
}

fn check_id_format(kind: &str, id: &str, errors: &mut Vec<String>) {
    if !ID_PATTERN.is_match(id) {
        errors.push(format!(
            "{kind} id '{id}' must match {}",
            ID_PATTERN.as_str()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::HardwareType;
    use crate::test_support::{hardware, slot};

    #[test]
    fn default_catalog_is_valid() {
        assert!(validate_catalog(&Catalog::default()).is_empty());
    }

    #[test]
    fn reports_duplicates_bad_ids_and_self_dependency() {
        let mut looped = hardware("fan", "Fan", HardwareType::Cooler);
        looped.depends_on = Some("fan".to_string());
        let catalog = Catalog::new(
            vec![
                hardware("cpu", "A", HardwareType::Cpu),
                hardware("cpu", "B", HardwareType::Cpu),
                hardware("Bad Id", "C", HardwareType::Gpu),
                looped,
            ],
            vec![
                slot("socket", HardwareType::Cpu, "Socket"),
                slot("socket", HardwareType::Cpu, "Socket again"),
            ],
        );

        let errors = validate_catalog(&catalog);
        assert!(errors.contains(&"duplicate hardware id 'cpu'".to_string()));
        assert!(errors.contains(&"duplicate slot id 'socket'".to_string()));
        assert!(errors.contains(&"hardware 'fan' depends on itself".to_string()));
        assert!(errors.iter().any(|e| e.starts_with("hardware id 'Bad Id'")));
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn unknown_dependency_is_not_an_error() {
        let mut item = hardware("cooler", "Cooler", HardwareType::Cooler);
        item.depends_on = Some("socket-am5-cpu".to_string());
        let catalog = Catalog::new(vec![item], Vec::new());
        assert!(validate_catalog(&catalog).is_empty());
    }
}
