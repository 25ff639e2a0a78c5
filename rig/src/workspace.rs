//! Loads config and catalog for a project root.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::catalog::Catalog;
use crate::io::catalog_store::load_catalog;
use crate::io::config::{RigConfig, load_config};
use crate::io::init::RigPaths;

/// Where the active catalog came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    BuiltIn,
    File(PathBuf),
}

/// Everything a command needs to evaluate rules: config plus the loaded catalog.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub config: RigConfig,
    pub catalog: Catalog,
    pub catalog_source: CatalogSource,
}

/// Load `.rig/config.toml` (defaults if missing) and the configured catalog.
///
/// Without a configured catalog the built-in one is used. A `required_types`
/// override in the config replaces the catalog's own list.
pub fn load_workspace(root: &Path) -> Result<Workspace> {
    let paths = RigPaths::new(root);
    let config = load_config(&paths.config_path).with_context(|| "load config.toml")?;

    let (catalog, catalog_source) = match config.catalog_path(root) {
        Some(path) => {
            let catalog = load_catalog(&path)?;
            (catalog, CatalogSource::File(path))
        }
        None => {
            debug!("no catalog configured, using built-in catalog");
            (Catalog::default(), CatalogSource::BuiltIn)
        }
    };

    let catalog = match &config.required_types {
        Some(required) => catalog.with_required(required.clone()),
        None => catalog,
    };

    info!(
        hardware = catalog.hardware().len(),
        slots = catalog.slots().len(),
        source = ?catalog_source,
        "workspace loaded"
    );

    Ok(Workspace {
        config,
        catalog,
        catalog_source,
    })
}
