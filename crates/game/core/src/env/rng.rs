//! Deterministic randomness for magnitude rolls.
//!
//! Given the same seed an [`RngOracle`] must return the same value, so a
//! replayed round heals by exactly the same amount.

/// RNG oracle for deterministic random number generation.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = u64::from(max - min) + 1;
        min + (u64::from(self.next_u32(seed)) % span) as u32
    }
}

/// PCG-XSH-RR generator: 64-bit state, 32-bit output, one step per seed.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }
}

/// Mixes a base seed with the round being processed.
///
/// * `base_seed` - seed from [`crate::MagicConfig`]
/// * `round` - effect round counter
/// * `manager` - effect manager running the round, so each target rolls apart
/// * `entity` - caster entity id
/// * `context` - distinguishes several rolls in the same round
///   (`0` base magnitude, `1` per-level bonus)
pub fn compute_seed(base_seed: u64, round: u64, manager: u32, entity: u32, context: u32) -> u64 {
    let mut hash = base_seed;
    hash ^= round.wrapping_mul(0x9e3779b97f4a7c15);
    hash = hash.rotate_left(23) ^ u64::from(manager).wrapping_mul(0xc2b2ae3d27d4eb4f);
    hash ^= u64::from(entity).wrapping_mul(0x517cc1b727220a95);
    hash ^= u64::from(context).wrapping_mul(0x85ebca6b);

    // SplitMix-style avalanche
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
