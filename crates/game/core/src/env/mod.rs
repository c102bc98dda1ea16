//! Traits describing the collaborators a magic effect talks to.
//!
//! Oracles expose localized text, item templates, deterministic randomness and
//! the entity that hosts an effect. They are always passed in explicitly:
//! registration receives a [`TextOracle`], recipe rendering an [`ItemOracle`],
//! and each effect round an [`EntityResolver`].
mod entities;
mod error;
mod items;
mod rng;
mod text;

pub use entities::{EffectTarget, EntityResolver};
pub use error::OracleError;
pub use items::{ItemCategory, ItemOracle, ItemTemplate};
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use text::{TextOracle, TextToken};
