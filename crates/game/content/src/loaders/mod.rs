//! Content loaders for reading magic data from files.
//!
//! This module provides loaders that convert RON/TOML files into oracle implementations.

pub mod config;
pub mod factory;
pub mod item;
pub mod text;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use item::ItemLoader;
pub use text::{TextLoader, parse_record};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
