//! Catalog load/save helpers with schema + invariant validation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use jsonschema::validator_for;
use serde_json::Value;
use tracing::debug;

use crate::core::catalog::{Catalog, CatalogDocument};
use crate::core::invariants::validate_catalog;

/// JSON Schema every catalog file must satisfy.
pub const CATALOG_SCHEMA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../schemas/catalog/v1.schema.json"
));

/// Load and validate a catalog from disk (schema + invariants).
pub fn load_catalog(catalog_path: &Path) -> Result<Catalog> {
    let contents = fs::read_to_string(catalog_path)
        .with_context(|| format!("read catalog {}", catalog_path.display()))?;
    parse_catalog(&contents).with_context(|| format!("load catalog {}", catalog_path.display()))
}

/// Parse and validate a catalog from JSON text.
pub fn parse_catalog(contents: &str) -> Result<Catalog> {
    let value: Value = serde_json::from_str(contents).context("parse catalog json")?;
    validate_schema(&value)?;
    let doc: CatalogDocument = serde_json::from_value(value).context("deserialize catalog")?;
    let catalog = Catalog::from_document(doc);
    validate_catalog_invariants(&catalog)?;
    debug!(
        hardware = catalog.hardware().len(),
        slots = catalog.slots().len(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Write catalog to disk as pretty JSON with a trailing newline.
pub fn write_catalog(catalog_path: &Path, catalog: &Catalog) -> Result<()> {
    let mut buf = serde_json::to_string_pretty(&catalog.to_document())?;
    buf.push('\n');
    fs::write(catalog_path, buf)
        .with_context(|| format!("write catalog {}", catalog_path.display()))
}

fn validate_schema(catalog: &Value) -> Result<()> {
    let schema_value: Value =
        serde_json::from_str(CATALOG_SCHEMA).context("parse catalog schema")?;
    let compiled =
        validator_for(&schema_value).map_err(|err| anyhow!("invalid schema: {}", err))?;
    if !compiled.is_valid(catalog) {
        let messages = compiled
            .iter_errors(catalog)
            .map(|err| err.to_string())
            .collect::<Vec<_>>();
        return Err(anyhow!(
            "catalog schema validation failed: {}",
            messages.join("; ")
        ));
    }
    Ok(())
}

fn validate_catalog_invariants(catalog: &Catalog) -> Result<()> {
    let errors = validate_catalog(catalog);
    if errors.is_empty() {
        return Ok(());
    }
    Err(anyhow!("catalog invariants failed: {}", errors.join("; ")))
}
