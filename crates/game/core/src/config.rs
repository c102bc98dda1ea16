use crate::effect::MagnitudeSettings;

/// Magic system configuration and tunable defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MagicConfig {
    /// Base seed mixed into every magnitude roll.
    pub rng_seed: u64,
    /// Magnitude range used when a spell does not carry its own.
    pub default_magnitude: MagnitudeSettings,
}

impl MagicConfig {
    pub const DEFAULT_RNG_SEED: u64 = 0;

    pub fn new() -> Self {
        Self {
            rng_seed: Self::DEFAULT_RNG_SEED,
            default_magnitude: MagnitudeSettings::default(),
        }
    }

    pub fn with_rng_seed(mut self, rng_seed: u64) -> Self {
        self.rng_seed = rng_seed;
        self
    }
}

impl Default for MagicConfig {
    fn default() -> Self {
        Self::new()
    }
}
