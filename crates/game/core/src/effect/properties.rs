//! Static metadata every effect declares once at registration.

use super::flags::{CraftingStations, ElementFlags, TargetFlags};
use crate::env::TextToken;
use crate::recipe::PotionRecipe;

/// Legacy numeric effect key: a (group, subgroup) pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassicKey {
    pub group: u8,
    pub subgroup: u8,
}

impl ClassicKey {
    pub const fn new(group: u8, subgroup: u8) -> Self {
        Self { group, subgroup }
    }

    /// Packed form: group in the high byte, subgroup in the low byte.
    pub const fn packed(self) -> u16 {
        ((self.group as u16) << 8) | self.subgroup as u16
    }

    pub const fn from_packed(value: u16) -> Self {
        Self {
            group: (value >> 8) as u8,
            subgroup: value as u8,
        }
    }
}

/// School of magic that governs an effect.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MagicSkill {
    #[default]
    None,
    Destruction,
    Restoration,
    Illusion,
    Alteration,
    Thaumaturgy,
    Mysticism,
}

/// Magnitude cost curve: two coefficients plus a flat gold offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectCosts {
    pub cost_a: u32,
    pub cost_b: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub offset_gold: u32,
}

impl EffectCosts {
    pub const fn new(cost_a: u32, cost_b: u32) -> Self {
        Self {
            cost_a,
            cost_b,
            offset_gold: 0,
        }
    }
}

/// Registration-time description of an effect.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EffectProperties {
    pub key: String,
    pub classic_key: ClassicKey,
    pub group_name: String,
    pub sub_group_name: String,
    pub spell_maker_description: Vec<TextToken>,
    pub spell_book_description: Vec<TextToken>,
    pub support_magnitude: bool,
    pub allowed_targets: TargetFlags,
    pub allowed_elements: ElementFlags,
    pub allowed_crafting_stations: CraftingStations,
    pub magic_skill: MagicSkill,
    pub magnitude_costs: EffectCosts,
}

impl EffectProperties {
    /// Display name shown in spell lists, e.g. `"Heal - Health"`.
    pub fn display_name(&self) -> String {
        if self.sub_group_name.is_empty() {
            self.group_name.clone()
        } else {
            format!("{} - {}", self.group_name, self.sub_group_name)
        }
    }

    pub fn allows_station(&self, station: CraftingStations) -> bool {
        self.allowed_crafting_stations.contains(station)
    }
}

/// Potion-maker data attached to an effect.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PotionProperties {
    pub recipe: Option<PotionRecipe>,
}

impl PotionProperties {
    pub fn with_recipe(recipe: PotionRecipe) -> Self {
        Self {
            recipe: Some(recipe),
        }
    }

    /// Returns the recipe only if it has at least one ingredient.
    pub fn defined_recipe(&self) -> Option<&PotionRecipe> {
        self.recipe.as_ref().filter(|recipe| recipe.has_recipe())
    }
}
