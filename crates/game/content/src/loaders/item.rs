//! Item template catalog loader.

use std::path::Path;

use magic_core::ItemTemplate;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::oracles::ItemCatalog;

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalogFile {
    pub items: Vec<ItemTemplate>,
}

/// Loader for item templates from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load an item catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing `ItemCatalogFile`
    pub fn load(path: &Path) -> LoadResult<ItemCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse an item catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<ItemCatalog> {
        let file: ItemCatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        if let Some(id) = first_duplicate(&file.items) {
            anyhow::bail!("Duplicate item template id {} in catalog", id);
        }

        Ok(ItemCatalog::new(file.items))
    }
}

fn first_duplicate(items: &[ItemTemplate]) -> Option<i32> {
    let mut seen = std::collections::HashSet::new();
    items.iter().map(|t| t.id).find(|id| !seen.insert(*id))
}
