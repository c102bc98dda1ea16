//! Potion recipes: ordered ingredient lists with structural equality.
//!
//! A recipe is immutable once built. Equality and hashing are index-wise over
//! ingredient ids, so `[Mercury, Troll blood]` and `[Troll blood, Mercury]`
//! are different recipes, and a recipe is never equal to one of its prefixes.
//!
//! [`PotionRecipe::hash_code`] is the stable content hash
//! (`hash = hash * 23 + id`, seeded at 17, `0` for an empty recipe). The
//! [`Hash`] impl feeds that value to the hasher, which keeps `HashMap` keys
//! consistent with `Eq`.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::env::{ItemOracle, OracleError};

/// An item-template id used as a recipe ingredient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Ingredient(pub i32);

impl Ingredient {
    pub const ELIXIR_VITAE: Self = Self(539);
    pub const YELLOW_BERRIES: Self = Self(508);
    pub const MERCURY: Self = Self(563);
    pub const TROLL_BLOOD: Self = Self(578);

    #[inline]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn id(self) -> i32 {
        self.0
    }
}

impl From<i32> for Ingredient {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

const HASH_SEED: i32 = 17;
const HASH_FACTOR: i32 = 23;

/// Ordered list of ingredients associated with a potion effect.
#[derive(Clone, Debug, Default, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PotionRecipe {
    #[cfg_attr(feature = "serde", serde(default))]
    ingredients: Vec<Ingredient>,
}

impl PotionRecipe {
    /// Creates a recipe with no ingredients.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recipe from item-template ids, in order.
    pub fn from_ids(ids: &[i32]) -> Self {
        ids.iter().copied().collect()
    }

    /// Creates a recipe from an explicit ingredient sequence.
    pub fn from_ingredients(ingredients: impl Into<Vec<Ingredient>>) -> Self {
        Self {
            ingredients: ingredients.into(),
        }
    }

    /// Returns true if the recipe has at least one ingredient.
    pub fn has_recipe(&self) -> bool {
        !self.ingredients.is_empty()
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ingredient> {
        self.ingredients.iter()
    }

    /// Compares this recipe against a raw ingredient sequence.
    pub fn matches_ingredients(&self, other: &[Ingredient]) -> bool {
        ingredients_eq(&self.ingredients, other)
    }

    /// Stable content hash of the ingredient ids.
    ///
    /// Arithmetic wraps at 32 bits; `0` for an empty recipe.
    pub fn hash_code(&self) -> i32 {
        ingredients_hash(&self.ingredients)
    }

    /// Renders ingredient names as `"A, B, C."`, or `""` for an empty recipe.
    ///
    /// One template lookup is made per ingredient.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ItemTemplateNotFound` for the first id the
    /// catalog does not know.
    pub fn render<I>(&self, items: &I) -> Result<String, OracleError>
    where
        I: ItemOracle + ?Sized,
    {
        let names = self
            .ingredients
            .iter()
            .map(|ingredient| items.template_or_err(ingredient.0).map(|t| t.name))
            .collect::<Result<Vec<_>, _>>()?;

        if names.is_empty() {
            return Ok(String::new());
        }
        Ok(format!("{}.", names.join(", ")))
    }
}

/// Index-wise id comparison; sequences of different length are never equal.
pub fn ingredients_eq(a: &[Ingredient], b: &[Ingredient]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.0 == y.0)
}

/// Polynomial hash over ingredient ids (seed 17, factor 23).
pub fn ingredients_hash(ingredients: &[Ingredient]) -> i32 {
    if ingredients.is_empty() {
        return 0;
    }
    ingredients.iter().fold(HASH_SEED, |hash, ingredient| {
        hash.wrapping_mul(HASH_FACTOR).wrapping_add(ingredient.0)
    })
}

impl PartialEq for PotionRecipe {
    fn eq(&self, other: &Self) -> bool {
        ingredients_eq(&self.ingredients, &other.ingredients)
    }
}

impl Hash for PotionRecipe {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl FromIterator<Ingredient> for PotionRecipe {
    fn from_iter<T: IntoIterator<Item = Ingredient>>(iter: T) -> Self {
        Self {
            ingredients: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<i32> for PotionRecipe {
    fn from_iter<T: IntoIterator<Item = i32>>(iter: T) -> Self {
        iter.into_iter().map(Ingredient).collect()
    }
}

impl<'a> IntoIterator for &'a PotionRecipe {
    type Item = &'a Ingredient;
    type IntoIter = std::slice::Iter<'a, Ingredient>;

    fn into_iter(self) -> Self::IntoIter {
        self.ingredients.iter()
    }
}
