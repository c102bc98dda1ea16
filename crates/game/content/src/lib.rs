//! Data-driven magic content and loaders.
//!
//! This crate provides in-memory oracles and loaders for RON/TOML data files:
//! - Item templates (data-driven via RON)
//! - Localized strings and text records (data-driven via TOML)
//! - Magic configuration (data-driven via TOML)
//!
//! All loaders use magic-core types directly with serde for RON/TOML deserialization.

pub mod oracles;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use oracles::{ItemCatalog, TextTable};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, ItemLoader, TextLoader, parse_record};
