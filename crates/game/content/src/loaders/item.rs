//! Item catalog loader.

use std::path::Path;

use descent_core::ItemTemplate;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, ensure_unique_keys, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<(String, ItemTemplate)>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    ///
    /// Returns `(template id, template)` pairs in file order.
    pub fn load(path: &Path) -> LoadResult<Vec<(String, ItemTemplate)>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<(String, ItemTemplate)>> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        ensure_unique_keys("item", catalog.items.iter().map(|(id, _)| id.as_str()))?;
        tracing::debug!(count = catalog.items.len(), "loaded item catalog");
        Ok(catalog.items)
    }
}
