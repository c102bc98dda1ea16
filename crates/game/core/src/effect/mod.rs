//! Entity effects: static descriptors plus a per-round behavior.
//!
//! An effect is built once, when it is registered with the
//! [`crate::broker::EffectBroker`]. Building it resolves display text and
//! fills in [`EffectProperties`]; after that the value never changes.
//!
//! While the effect is active on a target, the scheduler calls
//! [`EntityEffect::magic_round`] once per round with an explicit
//! [`MagicRound`] context. Nothing about the host, the caster or the round is
//! stored on the effect, so the same definition serves every target.

mod flags;
mod magnitude;
mod properties;
pub mod restoration;

pub use flags::{CraftingStations, ElementFlags, TargetFlags};
pub use magnitude::{
    FixedMagnitude, LevelScaledMagnitude, MagnitudeRequest, MagnitudeResolver, MagnitudeSettings,
};
pub use properties::{ClassicKey, EffectCosts, EffectProperties, MagicSkill, PotionProperties};
pub use restoration::HealHealth;

use crate::env::EntityResolver;
use crate::state::{Caster, EffectManagerId, EntityId};

/// Context handed to an effect for one round.
pub struct MagicRound<'a> {
    /// Manager running the effect; resolves to the host entity.
    pub manager: EffectManagerId,
    /// Snapshot of whoever cast the spell, if still known.
    pub caster: Option<Caster>,
    /// Magnitude range the spell was crafted with.
    pub settings: &'a MagnitudeSettings,
    /// Round counter, used to seed deterministic rolls.
    pub round: u64,
    pub entities: &'a mut dyn EntityResolver,
    pub magnitude: &'a dyn MagnitudeResolver,
}

impl<'a> MagicRound<'a> {
    pub fn new(
        manager: EffectManagerId,
        settings: &'a MagnitudeSettings,
        entities: &'a mut dyn EntityResolver,
        magnitude: &'a dyn MagnitudeResolver,
    ) -> Self {
        Self {
            manager,
            caster: None,
            settings,
            round: 0,
            entities,
            magnitude,
        }
    }

    /// Attaches the caster snapshot (builder pattern).
    #[must_use]
    pub fn with_caster(mut self, caster: Caster) -> Self {
        self.caster = Some(caster);
        self
    }

    /// Sets the round counter (builder pattern).
    #[must_use]
    pub fn with_round(mut self, round: u64) -> Self {
        self.round = round;
        self
    }
}

/// What a round did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    /// No live entity is peered with the manager.
    Skipped,
    /// Magnitude was handed to the entity.
    Applied { entity: EntityId, magnitude: i32 },
}

impl RoundOutcome {
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// A registered magic effect.
pub trait EntityEffect: Send + Sync {
    fn properties(&self) -> &EffectProperties;

    fn potion_properties(&self) -> &PotionProperties;

    /// Unique string key, e.g. `"Heal-Health"`.
    fn key(&self) -> &str {
        &self.properties().key
    }

    /// Runs one round against the entity hosting this effect.
    ///
    /// An orphaned effect (host despawned) is not an error; the round
    /// returns [`RoundOutcome::Skipped`].
    fn magic_round(&self, round: &mut MagicRound<'_>) -> RoundOutcome;
}
