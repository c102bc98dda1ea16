//! Magic effect definitions and potion recipes.
//!
//! `magic-core` defines the magic-effect rules (effect metadata, per-round
//! behavior, potion recipes) and exposes pure APIs over injected oracles.
//! Text, item templates, randomness and the entity hosting an effect are all
//! supplied by the caller; nothing here reaches for a global.
//!
//! Effects are registered with [`EffectBroker`], which also answers which
//! effect a potion recipe brews.
pub mod broker;
pub mod config;
pub mod effect;
pub mod env;
pub mod error;
pub mod recipe;
pub mod state;

pub use broker::{BrokerError, EffectBroker};
pub use config::MagicConfig;
pub use effect::{
    ClassicKey, CraftingStations, EffectCosts, EffectProperties, ElementFlags, EntityEffect,
    FixedMagnitude, HealHealth, LevelScaledMagnitude, MagicRound, MagicSkill, MagnitudeRequest,
    MagnitudeResolver, MagnitudeSettings, PotionProperties, RoundOutcome, TargetFlags,
};
pub use env::{
    EffectTarget, EntityResolver, ItemCategory, ItemOracle, ItemTemplate, OracleError, PcgRng,
    RngOracle, TextOracle, TextToken,
};
pub use error::{ErrorSeverity, GameError};
pub use recipe::{Ingredient, PotionRecipe};
pub use state::{Caster, EffectManagerId, EntitiesState, EntityId, EntityState, ResourceMeter};
