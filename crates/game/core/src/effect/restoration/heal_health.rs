//! Heal - Health: restores health to the host every round.

use crate::effect::{
    ClassicKey, CraftingStations, EffectCosts, EffectProperties, ElementFlags, EntityEffect,
    MagicRound, MagicSkill, MagnitudeRequest, PotionProperties, RoundOutcome, TargetFlags,
};
use crate::env::{OracleError, TextOracle};
use crate::recipe::{Ingredient, PotionRecipe};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HealHealth {
    properties: EffectProperties,
    potion_properties: PotionProperties,
}

impl HealHealth {
    pub const KEY: &'static str = "Heal-Health";
    pub const CLASSIC_KEY: ClassicKey = ClassicKey::new(10, 8);

    const TEXT_CATEGORY: &'static str = "ClassicEffects";
    const SPELL_MAKER_DESCRIPTION: u16 = 1548;
    const SPELL_BOOK_DESCRIPTION: u16 = 1248;

    /// Builds the definition, resolving display text through `text`.
    ///
    /// # Errors
    ///
    /// Propagates any [`OracleError`] from the text provider.
    pub fn new<T>(text: &T) -> Result<Self, OracleError>
    where
        T: TextOracle + ?Sized,
    {
        let properties = EffectProperties {
            key: Self::KEY.to_string(),
            classic_key: Self::CLASSIC_KEY,
            group_name: text.text(Self::TEXT_CATEGORY, "heal")?,
            sub_group_name: text.text(Self::TEXT_CATEGORY, "health")?,
            spell_maker_description: text.rsc_tokens(Self::SPELL_MAKER_DESCRIPTION)?,
            spell_book_description: text.rsc_tokens(Self::SPELL_BOOK_DESCRIPTION)?,
            support_magnitude: true,
            allowed_targets: TargetFlags::ALL,
            allowed_elements: ElementFlags::MAGIC_ONLY,
            allowed_crafting_stations: CraftingStations::SPELL_MAKER
                | CraftingStations::POTION_MAKER,
            magic_skill: MagicSkill::Restoration,
            magnitude_costs: EffectCosts::new(20, 28),
        };

        let potion_properties = PotionProperties::with_recipe(Self::recipe());

        Ok(Self {
            properties,
            potion_properties,
        })
    }

    /// Ingredients that brew a potion of healing.
    pub fn recipe() -> PotionRecipe {
        PotionRecipe::from_ingredients([
            Ingredient::ELIXIR_VITAE,
            Ingredient::YELLOW_BERRIES,
            Ingredient::MERCURY,
            Ingredient::TROLL_BLOOD,
        ])
    }
}

impl EntityEffect for HealHealth {
    fn properties(&self) -> &EffectProperties {
        &self.properties
    }

    fn potion_properties(&self) -> &PotionProperties {
        &self.potion_properties
    }

    fn magic_round(&self, round: &mut MagicRound<'_>) -> RoundOutcome {
        let Some(entity) = round.entities.peered_entity_mut(round.manager) else {
            tracing::trace!(manager = %round.manager, "{} has no host; round skipped", Self::KEY);
            return RoundOutcome::Skipped;
        };

        let magnitude = round.magnitude.magnitude(&MagnitudeRequest {
            manager: round.manager,
            caster: round.caster,
            settings: round.settings,
            round: round.round,
        });
        entity.increase_health(magnitude);

        let id = entity.entity_id();
        tracing::trace!(entity = %id, magnitude, "{} applied", Self::KEY);
        RoundOutcome::Applied {
            entity: id,
            magnitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::{FixedMagnitude, MagnitudeResolver, MagnitudeSettings};
    use crate::env::TextToken;
    use crate::state::{EffectManagerId, EntitiesState, EntityId, EntityState, ResourceMeter};

    struct StubText;

    impl TextOracle for StubText {
        fn text(&self, category: &str, key: &str) -> Result<String, OracleError> {
            match (category, key) {
                ("ClassicEffects", "heal") => Ok("Heal".into()),
                ("ClassicEffects", "health") => Ok("Health".into()),
                _ => Err(OracleError::text_not_found(category, key)),
            }
        }

        fn rsc_tokens(&self, code: u16) -> Result<Vec<TextToken>, OracleError> {
            Ok(vec![TextToken::Text(format!("record {code}"))])
        }
    }

    struct NoText;

    impl TextOracle for NoText {
        fn text(&self, category: &str, key: &str) -> Result<String, OracleError> {
            Err(OracleError::text_not_found(category, key))
        }

        fn rsc_tokens(&self, code: u16) -> Result<Vec<TextToken>, OracleError> {
            Err(OracleError::TextRecordNotFound(code))
        }
    }

    const MANAGER: EffectManagerId = EffectManagerId(1);
    const HOST: EntityId = EntityId(5);

    fn world(current: u32, maximum: u32) -> EntitiesState {
        let mut entities = EntitiesState::new();
        entities.spawn(EntityState::new(HOST, 4, ResourceMeter::new(current, maximum)));
        entities.attach(MANAGER, HOST);
        entities
    }

    fn run(effect: &HealHealth, entities: &mut EntitiesState, magnitude: i32) -> RoundOutcome {
        let settings = MagnitudeSettings::default();
        let resolver = FixedMagnitude(magnitude);
        let mut round = MagicRound::new(MANAGER, &settings, entities, &resolver);
        effect.magic_round(&mut round)
    }

    #[test]
    fn registration_fills_properties() {
        let effect = HealHealth::new(&StubText).unwrap();
        let properties = effect.properties();

        assert_eq!(effect.key(), "Heal-Health");
        assert_eq!(properties.classic_key.packed(), 2568);
        assert_eq!(properties.group_name, "Heal");
        assert_eq!(properties.sub_group_name, "Health");
        assert_eq!(properties.display_name(), "Heal - Health");
        assert_eq!(
            properties.spell_maker_description,
            vec![TextToken::text("record 1548")]
        );
        assert_eq!(
            properties.spell_book_description,
            vec![TextToken::text("record 1248")]
        );
        assert!(properties.support_magnitude);
        assert_eq!(properties.allowed_targets, TargetFlags::ALL);
        assert_eq!(properties.allowed_elements, ElementFlags::MAGIC_ONLY);
        assert!(properties.allows_station(CraftingStations::SPELL_MAKER));
        assert!(properties.allows_station(CraftingStations::POTION_MAKER));
        assert!(!properties.allows_station(CraftingStations::ITEM_MAKER));
        assert_eq!(properties.magic_skill, MagicSkill::Restoration);
        assert_eq!(properties.magnitude_costs, EffectCosts::new(20, 28));
    }

    #[test]
    fn registration_attaches_recipe() {
        let effect = HealHealth::new(&StubText).unwrap();
        let recipe = effect.potion_properties().defined_recipe().unwrap();

        assert_eq!(
            recipe.ingredients(),
            &[
                Ingredient::ELIXIR_VITAE,
                Ingredient::YELLOW_BERRIES,
                Ingredient::MERCURY,
                Ingredient::TROLL_BLOOD,
            ]
        );
    }

    #[test]
    fn registration_propagates_text_errors() {
        assert_eq!(
            HealHealth::new(&NoText),
            Err(OracleError::text_not_found("ClassicEffects", "heal"))
        );
    }

    #[test]
    fn round_heals_host() {
        let effect = HealHealth::new(&StubText).unwrap();
        let mut entities = world(10, 50);

        let outcome = run(&effect, &mut entities, 15);

        assert_eq!(
            outcome,
            RoundOutcome::Applied {
                entity: HOST,
                magnitude: 15
            }
        );
        assert_eq!(entities.entity(HOST).unwrap().health.current, 25);
    }

    #[test]
    fn round_leaves_clamping_to_entity() {
        let effect = HealHealth::new(&StubText).unwrap();
        let mut entities = world(45, 50);

        let outcome = run(&effect, &mut entities, 30);

        assert!(outcome.is_applied());
        assert_eq!(entities.entity(HOST).unwrap().health.current, 50);
    }

    #[test]
    fn rounds_accumulate() {
        let effect = HealHealth::new(&StubText).unwrap();
        let mut entities = world(1, 100);

        for _ in 0..3 {
            run(&effect, &mut entities, 7);
        }

        assert_eq!(entities.entity(HOST).unwrap().health.current, 22);
    }

    #[test]
    fn orphaned_round_is_skipped() {
        let effect = HealHealth::new(&StubText).unwrap();
        let mut entities = world(10, 50);
        let snapshot = entities.entity(HOST).cloned().unwrap();
        entities.despawn(HOST);

        assert_eq!(run(&effect, &mut entities, 15), RoundOutcome::Skipped);

        entities.spawn(snapshot);
        entities.detach(MANAGER);
        assert_eq!(run(&effect, &mut entities, 15), RoundOutcome::Skipped);
        assert_eq!(entities.entity(HOST).unwrap().health.current, 10);
    }

    /// Heals by ten per manager id, so each host shows which manager rolled.
    struct PerManager;

    impl MagnitudeResolver for PerManager {
        fn magnitude(&self, request: &MagnitudeRequest<'_>) -> i32 {
            request.manager.0 as i32 * 10
        }
    }

    #[test]
    fn each_manager_resolves_its_own_magnitude() {
        let effect = HealHealth::new(&StubText).unwrap();
        let other = EffectManagerId(2);
        let second_host = EntityId(6);

        let mut entities = world(0, 100);
        entities.spawn(EntityState::new(second_host, 4, ResourceMeter::new(0, 100)));
        entities.attach(other, second_host);

        let settings = MagnitudeSettings::default();
        for manager in [MANAGER, other] {
            let mut round =
                MagicRound::new(manager, &settings, &mut entities, &PerManager).with_round(8);
            assert!(effect.magic_round(&mut round).is_applied());
        }

        assert_eq!(entities.entity(HOST).unwrap().health.current, 10);
        assert_eq!(entities.entity(second_host).unwrap().health.current, 20);
    }
}
