//! Effect registry.
//!
//! The broker owns every registered effect definition and indexes it three
//! ways: by string key, by classic key and by potion recipe. Crafting code asks
//! it which effect a set of ingredients brews; the round scheduler asks it to
//! run one round of a named effect.

use std::collections::{BTreeMap, HashMap};

use crate::effect::{
    ClassicKey, CraftingStations, EntityEffect, HealHealth, MagicRound, RoundOutcome,
};
use crate::env::{OracleError, TextOracle};
use crate::error::{ErrorSeverity, GameError};
use crate::recipe::PotionRecipe;

/// Errors raised while registering or dispatching effects.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BrokerError {
    #[error("effect '{0}' is already registered")]
    DuplicateKey(String),

    #[error("classic key {key:?} of '{effect}' is already used by '{existing}'")]
    DuplicateClassicKey {
        key: ClassicKey,
        effect: String,
        existing: String,
    },

    #[error("recipe of '{effect}' already brews '{existing}'")]
    DuplicateRecipe { effect: String, existing: String },

    #[error("effect '{0}' is not registered")]
    UnknownEffect(String),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl GameError for BrokerError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Oracle(err) => err.severity(),
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateKey(_) => "BROKER_DUPLICATE_KEY",
            Self::DuplicateClassicKey { .. } => "BROKER_DUPLICATE_CLASSIC_KEY",
            Self::DuplicateRecipe { .. } => "BROKER_DUPLICATE_RECIPE",
            Self::UnknownEffect(_) => "BROKER_UNKNOWN_EFFECT",
            Self::Oracle(err) => err.error_code(),
        }
    }
}

#[derive(Default)]
pub struct EffectBroker {
    effects: BTreeMap<String, Box<dyn EntityEffect>>,
    classic_keys: BTreeMap<ClassicKey, String>,
    recipes: HashMap<PotionRecipe, String>,
}

impl EffectBroker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a broker with every built-in effect registered.
    ///
    /// # Errors
    ///
    /// Fails if the text provider cannot resolve an effect's display text.
    pub fn with_classic_effects<T>(text: &T) -> Result<Self, BrokerError>
    where
        T: TextOracle + ?Sized,
    {
        let mut broker = Self::new();
        broker.register(Box::new(HealHealth::new(text)?))?;
        Ok(broker)
    }

    /// Registers an effect definition.
    ///
    /// # Errors
    ///
    /// Rejects an effect whose key, classic key or recipe is already taken.
    /// Nothing is registered on error.
    pub fn register(&mut self, effect: Box<dyn EntityEffect>) -> Result<(), BrokerError> {
        let key = effect.key().to_string();
        if self.effects.contains_key(&key) {
            return Err(BrokerError::DuplicateKey(key));
        }

        let classic_key = effect.properties().classic_key;
        if let Some(existing) = self.classic_keys.get(&classic_key) {
            return Err(BrokerError::DuplicateClassicKey {
                key: classic_key,
                effect: key,
                existing: existing.clone(),
            });
        }

        let recipe = effect.potion_properties().defined_recipe().cloned();
        if let Some(existing) = recipe.as_ref().and_then(|r| self.recipes.get(r)) {
            return Err(BrokerError::DuplicateRecipe {
                effect: key,
                existing: existing.clone(),
            });
        }

        tracing::debug!(
            effect = %key,
            classic_key = classic_key.packed(),
            has_recipe = recipe.is_some(),
            "registered effect"
        );

        self.classic_keys.insert(classic_key, key.clone());
        if let Some(recipe) = recipe {
            self.recipes.insert(recipe, key.clone());
        }
        self.effects.insert(key, effect);
        Ok(())
    }

    pub fn effect(&self, key: &str) -> Option<&dyn EntityEffect> {
        self.effects.get(key).map(|effect| &**effect)
    }

    pub fn effect_by_classic_key(&self, key: ClassicKey) -> Option<&dyn EntityEffect> {
        self.classic_keys
            .get(&key)
            .and_then(|name| self.effect(name))
    }

    /// Returns the effect brewed by exactly this ingredient sequence.
    pub fn potion_effect(&self, recipe: &PotionRecipe) -> Option<&dyn EntityEffect> {
        self.recipes.get(recipe).and_then(|name| self.effect(name))
    }

    /// All registered recipes with the key of the effect they brew.
    pub fn recipes(&self) -> impl Iterator<Item = (&PotionRecipe, &str)> {
        self.recipes.iter().map(|(recipe, key)| (recipe, key.as_str()))
    }

    /// Keys of effects that the given station may craft, in key order.
    pub fn keys_for_station(&self, station: CraftingStations) -> Vec<&str> {
        self.effects
            .values()
            .filter(|effect| effect.properties().allows_station(station))
            .map(|effect| effect.key())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Runs one round of the named effect.
    ///
    /// # Errors
    ///
    /// Returns `BrokerError::UnknownEffect` if no effect has that key. A
    /// skipped round (orphaned effect) is `Ok(RoundOutcome::Skipped)`.
    pub fn run_round(
        &self,
        key: &str,
        round: &mut MagicRound<'_>,
    ) -> Result<RoundOutcome, BrokerError> {
        let effect = self
            .effect(key)
            .ok_or_else(|| BrokerError::UnknownEffect(key.to_string()))?;
        Ok(effect.magic_round(round))
    }
}

impl std::fmt::Debug for EffectBroker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectBroker")
            .field("effects", &self.effects.keys().collect::<Vec<_>>())
            .field("recipes", &self.recipes.len())
            .finish()
    }
}
