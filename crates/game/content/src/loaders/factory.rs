//! Content factory for building oracles from data files.

use std::path::{Path, PathBuf};

use magic_core::{EffectBroker, LevelScaledMagnitude, MagicConfig, PcgRng};

use crate::loaders::{ConfigLoader, ItemLoader, LoadResult, TextLoader};
use crate::oracles::{ItemCatalog, TextTable};

/// Content factory that loads all magic content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── items.ron
/// └── text.toml
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load magic configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<MagicConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load item templates from `items.ron`.
    pub fn load_items(&self) -> LoadResult<ItemCatalog> {
        let catalog = ItemLoader::load(&self.data_dir.join("items.ron"))?;
        tracing::debug!(templates = catalog.len(), "loaded item catalog");
        Ok(catalog)
    }

    /// Load localized text from `text.toml`.
    pub fn load_text(&self) -> LoadResult<TextTable> {
        let table = TextLoader::load(&self.data_dir.join("text.toml"))?;
        tracing::debug!(records = table.record_count(), "loaded text table");
        Ok(table)
    }

    /// Loads text and registers every built-in effect with it.
    pub fn load_broker(&self) -> LoadResult<EffectBroker> {
        let text = self.load_text()?;
        let broker = EffectBroker::with_classic_effects(&text)?;
        tracing::debug!(effects = broker.len(), "effect broker ready");
        Ok(broker)
    }

    /// Builds the level-scaled magnitude resolver seeded from `config.toml`.
    pub fn load_magnitude_resolver(&self) -> LoadResult<LevelScaledMagnitude<PcgRng>> {
        let config = self.load_config()?;
        Ok(LevelScaledMagnitude::new(PcgRng, config.rng_seed))
    }
}
