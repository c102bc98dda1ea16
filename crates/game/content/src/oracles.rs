//! In-memory oracle implementations backed by loaded content.

use std::collections::HashMap;

use magic_core::{ItemOracle, ItemTemplate, OracleError, TextOracle, TextToken};

/// Item templates indexed by id.
#[derive(Clone, Debug, Default)]
pub struct ItemCatalog {
    templates: HashMap<i32, ItemTemplate>,
}

impl ItemCatalog {
    /// Builds a catalog. Later templates replace earlier ones with the same id.
    pub fn new(templates: impl IntoIterator<Item = ItemTemplate>) -> Self {
        Self {
            templates: templates.into_iter().map(|t| (t.id, t)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl ItemOracle for ItemCatalog {
    fn template(&self, id: i32) -> Option<ItemTemplate> {
        self.templates.get(&id).cloned()
    }

    fn all_templates(&self) -> Vec<ItemTemplate> {
        let mut templates: Vec<_> = self.templates.values().cloned().collect();
        templates.sort_by_key(|t| t.id);
        templates
    }
}

/// Flat localized text: named strings per category plus numbered records.
#[derive(Clone, Debug, Default)]
pub struct TextTable {
    strings: HashMap<String, HashMap<String, String>>,
    records: HashMap<u16, Vec<TextToken>>,
}

impl TextTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_text(
        &mut self,
        category: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) {
        self.strings
            .entry(category.into())
            .or_default()
            .insert(key.into(), text.into());
    }

    pub fn insert_record(&mut self, code: u16, tokens: Vec<TextToken>) {
        self.records.insert(code, tokens);
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}

impl TextOracle for TextTable {
    fn text(&self, category: &str, key: &str) -> Result<String, OracleError> {
        self.strings
            .get(category)
            .and_then(|strings| strings.get(key))
            .cloned()
            .ok_or_else(|| OracleError::text_not_found(category, key))
    }

    fn rsc_tokens(&self, code: u16) -> Result<Vec<TextToken>, OracleError> {
        self.records
            .get(&code)
            .cloned()
            .ok_or(OracleError::TextRecordNotFound(code))
    }
}

#[cfg(test)]
mod tests {
    use magic_core::{ItemCategory, PotionRecipe};

    use super::*;

    #[test]
    fn catalog_renders_recipe() {
        let catalog = ItemCatalog::new([
            ItemTemplate::new(1, "Vial", ItemCategory::Other, 5),
            ItemTemplate::new(2, "Herb", ItemCategory::PlantIngredient, 2),
        ]);

        let recipe = PotionRecipe::from_ids(&[1, 2]);
        assert_eq!(recipe.render(&catalog).unwrap(), "Vial, Herb.");
        assert_eq!(catalog.all_templates().len(), 2);
    }

    #[test]
    fn text_lookup_misses_are_errors() {
        let mut table = TextTable::new();
        table.insert_text("ClassicEffects", "heal", "Heal");

        assert_eq!(table.text("ClassicEffects", "heal").unwrap(), "Heal");
        assert_eq!(
            table.text("ClassicEffects", "cure"),
            Err(OracleError::text_not_found("ClassicEffects", "cure"))
        );
        assert_eq!(
            table.rsc_tokens(1),
            Err(OracleError::TextRecordNotFound(1))
        );
    }
}
