use std::fmt;

/// Unique identifier for any entity that can host or cast an effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle of the effect manager that runs a set of active effects.
///
/// Every entity able to carry effects owns exactly one manager; effects find
/// their host by asking which entity is peered with their manager.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectManagerId(pub u32);

impl fmt::Display for EffectManagerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "manager#{}", self.0)
    }
}

/// Snapshot of the caster attributes that magnitude resolution reads.
///
/// Captured when the spell is cast so the round does not need to borrow the
/// caster while the host entity is mutably borrowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Caster {
    pub entity: EntityId,
    pub level: u32,
}

impl Caster {
    pub fn new(entity: EntityId, level: u32) -> Self {
        Self { entity, level }
    }
}

/// Integer resource meter (e.g., health) tracked per entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self { current, maximum }
    }

    /// Applies a signed delta, clamping the result into `0..=maximum`.
    ///
    /// Returns the delta that was actually applied.
    pub fn apply_delta(&mut self, delta: i32) -> i32 {
        let before = i64::from(self.current);
        let after = (before + i64::from(delta)).clamp(0, i64::from(self.maximum));
        self.current = after as u32;
        (after - before) as i32
    }

    /// Returns true if the meter is at its maximum.
    pub fn is_full(&self) -> bool {
        self.current >= self.maximum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_delta_clamps_to_maximum() {
        let mut meter = ResourceMeter::new(90, 100);
        assert_eq!(meter.apply_delta(25), 10);
        assert_eq!(meter.current, 100);
        assert!(meter.is_full());
    }

    #[test]
    fn apply_delta_clamps_to_zero() {
        let mut meter = ResourceMeter::new(5, 100);
        assert_eq!(meter.apply_delta(-20), -5);
        assert_eq!(meter.current, 0);
    }

    #[test]
    fn apply_delta_handles_extreme_values() {
        let mut meter = ResourceMeter::new(u32::MAX - 1, u32::MAX);
        assert_eq!(meter.apply_delta(i32::MAX), 1);
        assert_eq!(meter.current, u32::MAX);
    }
}
