//! Loading the initial catalog.

use anyhow::Context;

use stockbook_inventory::Product;
use stockbook_inventory::catalog::starter_catalog;

use crate::config::SeedSource;

/// Products to pre-populate the ledger with, before first interactive use.
pub fn load(source: &SeedSource) -> anyhow::Result<Vec<Product>> {
    match source {
        SeedSource::Starter => Ok(starter_catalog()?),
        SeedSource::Empty => Ok(Vec::new()),
        SeedSource::File(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read seed file at {}", path.display()))?;
            let products: Vec<Product> = serde_json::from_str(&raw)
                .with_context(|| format!("invalid seed file at {}", path.display()))?;
            tracing::info!(path = %path.display(), count = products.len(), "loaded seed file");
            Ok(products)
        }
    }
}
