//! Entities that host active magic effects.
//!
//! The effect code never touches these structures directly: it resolves a
//! peered entity through [`crate::env::EntityResolver`] and mutates it through
//! [`crate::env::EffectTarget`]. [`EntitiesState`] is the in-memory
//! implementation of both seams.
mod common;
mod entities;

pub use common::{Caster, EffectManagerId, EntityId, ResourceMeter};
pub use entities::{EntitiesState, EntityState};
