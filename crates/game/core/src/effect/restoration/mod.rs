//! Restoration school effects.
mod heal_health;

pub use heal_health::HealHealth;
