use std::collections::BTreeMap;

use super::common::{Caster, EffectManagerId, EntityId, ResourceMeter};
use crate::env::{EffectTarget, EntityResolver};

/// An entity able to host effects: identity, level and a health pool.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityState {
    pub id: EntityId,
    pub level: u32,
    pub health: ResourceMeter,
}

impl EntityState {
    pub fn new(id: EntityId, level: u32, health: ResourceMeter) -> Self {
        Self { id, level, health }
    }

    /// Captures this entity as the caster of a spell.
    pub fn as_caster(&self) -> Caster {
        Caster::new(self.id, self.level)
    }
}

impl EffectTarget for EntityState {
    fn entity_id(&self) -> EntityId {
        self.id
    }

    fn increase_health(&mut self, amount: i32) {
        self.health.apply_delta(amount);
    }
}

/// All live entities plus the manager → entity peering table.
///
/// An effect manager may outlive its entity (despawn mid-spell). The peering
/// entry is kept in that case and resolution simply yields `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitiesState {
    entities: BTreeMap<EntityId, EntityState>,
    peers: BTreeMap<EffectManagerId, EntityId>,
}

impl EntitiesState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entity, returning the previous state under the same id.
    pub fn spawn(&mut self, entity: EntityState) -> Option<EntityState> {
        self.entities.insert(entity.id, entity)
    }

    /// Removes an entity. Managers peered with it become orphaned.
    pub fn despawn(&mut self, id: EntityId) -> Option<EntityState> {
        self.entities.remove(&id)
    }

    /// Peers an effect manager with the entity it runs effects on.
    pub fn attach(&mut self, manager: EffectManagerId, entity: EntityId) {
        self.peers.insert(manager, entity);
    }

    /// Drops the peering for a manager.
    pub fn detach(&mut self, manager: EffectManagerId) -> Option<EntityId> {
        self.peers.remove(&manager)
    }

    pub fn entity(&self, id: EntityId) -> Option<&EntityState> {
        self.entities.get(&id)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut EntityState> {
        self.entities.get_mut(&id)
    }

    /// Returns a caster snapshot for a live entity.
    pub fn caster(&self, id: EntityId) -> Option<Caster> {
        self.entity(id).map(EntityState::as_caster)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl EntityResolver for EntitiesState {
    fn peered_entity_mut(&mut self, manager: EffectManagerId) -> Option<&mut dyn EffectTarget> {
        let id = *self.peers.get(&manager)?;
        self.entities
            .get_mut(&id)
            .map(|entity| entity as &mut dyn EffectTarget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goblin() -> EntityState {
        EntityState::new(EntityId(7), 3, ResourceMeter::new(10, 40))
    }

    #[test]
    fn resolves_peered_entity() {
        let mut entities = EntitiesState::new();
        entities.spawn(goblin());
        entities.attach(EffectManagerId(1), EntityId(7));

        let target = entities
            .peered_entity_mut(EffectManagerId(1))
            .expect("entity should resolve");
        assert_eq!(target.entity_id(), EntityId(7));
        target.increase_health(5);

        assert_eq!(entities.entity(EntityId(7)).unwrap().health.current, 15);
    }

    #[test]
    fn despawned_entity_does_not_resolve() {
        let mut entities = EntitiesState::new();
        entities.spawn(goblin());
        entities.attach(EffectManagerId(1), EntityId(7));
        entities.despawn(EntityId(7));

        assert!(entities.peered_entity_mut(EffectManagerId(1)).is_none());
    }

    #[test]
    fn unknown_manager_does_not_resolve() {
        let mut entities = EntitiesState::new();
        entities.spawn(goblin());

        assert!(entities.peered_entity_mut(EffectManagerId(9)).is_none());
    }

    #[test]
    fn caster_snapshot_copies_level() {
        let mut entities = EntitiesState::new();
        entities.spawn(goblin());

        assert_eq!(
            entities.caster(EntityId(7)),
            Some(Caster::new(EntityId(7), 3))
        );
        assert_eq!(entities.caster(EntityId(8)), None);
    }
}
