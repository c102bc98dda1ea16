//! Magnitude resolution.
//!
//! The effect itself only consumes an integer magnitude. How that number is
//! produced is behind [`MagnitudeResolver`]; the stock implementation rolls a
//! base amount plus a per-level bonus scaled by the caster's level.

use crate::env::{RngOracle, compute_seed};
use crate::state::{Caster, EffectManagerId};

/// Per-spell magnitude range, chosen in the spell maker.
///
/// Final magnitude is `roll(base_min..=base_max) + roll(plus_min..=plus_max) * (level / plus_per_level)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MagnitudeSettings {
    pub base_min: u32,
    pub base_max: u32,
    pub plus_min: u32,
    pub plus_max: u32,
    pub plus_per_level: u32,
}

impl MagnitudeSettings {
    pub const fn new(
        base_min: u32,
        base_max: u32,
        plus_min: u32,
        plus_max: u32,
        plus_per_level: u32,
    ) -> Self {
        Self {
            base_min,
            base_max,
            plus_min,
            plus_max,
            plus_per_level,
        }
    }

    /// A range that always yields `value`, regardless of level.
    pub const fn fixed(value: u32) -> Self {
        Self::new(value, value, 0, 0, 1)
    }

    /// Number of bonus rolls a caster of `level` earns.
    pub fn level_multiplier(&self, level: u32) -> u32 {
        level.checked_div(self.plus_per_level).unwrap_or(0)
    }
}

impl Default for MagnitudeSettings {
    fn default() -> Self {
        Self::new(1, 1, 1, 1, 1)
    }
}

/// Everything a resolver may read for one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MagnitudeRequest<'a> {
    /// Manager running the round; every target rolls its own magnitude.
    pub manager: EffectManagerId,
    pub caster: Option<Caster>,
    pub settings: &'a MagnitudeSettings,
    pub round: u64,
}

/// Computes the magnitude of an effect for one round.
pub trait MagnitudeResolver: Send + Sync {
    fn magnitude(&self, request: &MagnitudeRequest<'_>) -> i32;
}

/// Always returns the same magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedMagnitude(pub i32);

impl MagnitudeResolver for FixedMagnitude {
    fn magnitude(&self, _request: &MagnitudeRequest<'_>) -> i32 {
        self.0
    }
}

/// Level-scaled magnitude with deterministic rolls.
///
/// Rolls are seeded by `(seed, round, manager, caster)`. A missing caster
/// (effect outlived the entity that cast it) counts as level 1.
#[derive(Clone, Copy, Debug)]
pub struct LevelScaledMagnitude<R> {
    rng: R,
    seed: u64,
}

impl<R: RngOracle> LevelScaledMagnitude<R> {
    const BASE_ROLL: u32 = 0;
    const PLUS_ROLL: u32 = 1;
    const DEFAULT_LEVEL: u32 = 1;

    pub fn new(rng: R, seed: u64) -> Self {
        Self { rng, seed }
    }
}

impl<R: RngOracle> MagnitudeResolver for LevelScaledMagnitude<R> {
    fn magnitude(&self, request: &MagnitudeRequest<'_>) -> i32 {
        let settings = request.settings;
        let manager = request.manager.0;
        let (entity, level) = request
            .caster
            .map_or((0, Self::DEFAULT_LEVEL), |c| (c.entity.0, c.level));

        let base = self.rng.range(
            compute_seed(self.seed, request.round, manager, entity, Self::BASE_ROLL),
            settings.base_min,
            settings.base_max,
        );
        let plus = self.rng.range(
            compute_seed(self.seed, request.round, manager, entity, Self::PLUS_ROLL),
            settings.plus_min,
            settings.plus_max,
        );

        let total = plus
            .saturating_mul(settings.level_multiplier(level))
            .saturating_add(base);
        i32::try_from(total).unwrap_or(i32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;
    use crate::state::EntityId;

    fn request(caster: Option<Caster>, settings: &MagnitudeSettings) -> MagnitudeRequest<'_> {
        MagnitudeRequest {
            manager: EffectManagerId(1),
            caster,
            settings,
            round: 3,
        }
    }

    #[test]
    fn fixed_settings_ignore_rng() {
        let resolver = LevelScaledMagnitude::new(PcgRng, 99);
        let settings = MagnitudeSettings::fixed(12);
        let caster = Some(Caster::new(EntityId(4), 30));
        assert_eq!(resolver.magnitude(&request(caster, &settings)), 12);
    }

    #[test]
    fn bonus_scales_with_level() {
        let resolver = LevelScaledMagnitude::new(PcgRng, 1);
        let settings = MagnitudeSettings::new(5, 5, 2, 2, 3);

        let novice = Some(Caster::new(EntityId(1), 2));
        let adept = Some(Caster::new(EntityId(1), 9));
        assert_eq!(resolver.magnitude(&request(novice, &settings)), 5);
        assert_eq!(resolver.magnitude(&request(adept, &settings)), 5 + 2 * 3);
    }

    #[test]
    fn missing_caster_counts_as_level_one() {
        let resolver = LevelScaledMagnitude::new(PcgRng, 1);
        let settings = MagnitudeSettings::new(4, 4, 10, 10, 1);
        assert_eq!(resolver.magnitude(&request(None, &settings)), 14);
    }

    #[test]
    fn rolls_stay_in_range_and_repeat() {
        let resolver = LevelScaledMagnitude::new(PcgRng, 7);
        let settings = MagnitudeSettings::new(1, 10, 0, 4, 2);
        let caster = Some(Caster::new(EntityId(2), 6));

        let first = resolver.magnitude(&request(caster, &settings));
        assert!((1..=10 + 4 * 3).contains(&first));
        assert_eq!(first, resolver.magnitude(&request(caster, &settings)));
    }

    #[test]
    fn managers_in_the_same_round_roll_apart() {
        let resolver = LevelScaledMagnitude::new(PcgRng, 1337);
        let settings = MagnitudeSettings::new(1, 1000, 0, 0, 1);
        let caster = Some(Caster::new(EntityId(2), 1));

        let differing = (0..50)
            .filter(|&round| {
                let first = MagnitudeRequest {
                    manager: EffectManagerId(1),
                    caster,
                    settings: &settings,
                    round,
                };
                let second = MagnitudeRequest {
                    manager: EffectManagerId(2),
                    ..first
                };
                resolver.magnitude(&first) != resolver.magnitude(&second)
            })
            .count();
        assert!(differing > 0);
    }

    #[test]
    fn zero_per_level_disables_bonus() {
        let settings = MagnitudeSettings::new(3, 3, 50, 50, 0);
        assert_eq!(settings.level_multiplier(20), 0);

        let resolver = LevelScaledMagnitude::new(PcgRng, 0);
        let caster = Some(Caster::new(EntityId(2), 20));
        assert_eq!(resolver.magnitude(&request(caster, &settings)), 3);
    }

    #[test]
    fn huge_values_saturate() {
        let resolver = LevelScaledMagnitude::new(PcgRng, 0);
        let settings = MagnitudeSettings::new(u32::MAX, u32::MAX, u32::MAX, u32::MAX, 1);
        let caster = Some(Caster::new(EntityId(2), 50));
        assert_eq!(resolver.magnitude(&request(caster, &settings)), i32::MAX);
    }
}
