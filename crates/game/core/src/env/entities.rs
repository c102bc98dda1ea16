use crate::state::{EffectManagerId, EntityId};

/// An entity an effect can act on.
///
/// Clamping and overflow policy belong to the implementor; effects only hand
/// over a signed delta.
pub trait EffectTarget {
    fn entity_id(&self) -> EntityId;

    fn increase_health(&mut self, amount: i32);
}

/// Resolves the entity peered with an effect manager.
pub trait EntityResolver {
    /// Returns `None` when the manager has no live entity (despawned target).
    fn peered_entity_mut(&mut self, manager: EffectManagerId) -> Option<&mut dyn EffectTarget>;
}
