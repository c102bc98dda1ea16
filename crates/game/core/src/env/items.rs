use super::OracleError;

/// Read-only catalog of item templates.
pub trait ItemOracle: Send + Sync {
    fn template(&self, id: i32) -> Option<ItemTemplate>;

    /// Looks up a template, turning a miss into [`OracleError::ItemTemplateNotFound`].
    fn template_or_err(&self, id: i32) -> Result<ItemTemplate, OracleError> {
        self.template(id).ok_or(OracleError::ItemTemplateNotFound(id))
    }

    /// Returns every template known to this oracle.
    fn all_templates(&self) -> Vec<ItemTemplate>;
}

/// Item template descriptor.
///
/// Only the fields the magic system reads are modelled; the display name is
/// what recipe rendering needs.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemTemplate {
    pub id: i32,
    pub name: String,
    pub category: ItemCategory,
    /// Base value in gold pieces.
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: u32,
}

impl ItemTemplate {
    pub fn new(id: i32, name: impl Into<String>, category: ItemCategory, value: u32) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            value,
        }
    }
}

/// Broad item grouping.
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
pub enum ItemCategory {
    PlantIngredient,
    CreatureIngredient,
    MetalIngredient,
    MiscellaneousIngredient,
    Gem,
    #[default]
    Other,
}
