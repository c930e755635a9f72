//! Catalog - the categories, their bins, and the items that belong to them
//!
//! The catalog is the only input the core takes from the outside world. How it
//! was produced (embedded defaults, a JSON file, a scanned asset directory) is
//! not the core's business.
//!
//! JSON shape:
//!
//! ```json
//! {
//!   "categories": [
//!     { "name": "Recyclable", "items": [ { "id": 0, "label": "Newspaper" } ] }
//!   ]
//! }
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tui_sort_types::{CategoryId, ItemId};

use crate::error::{CatalogError, ConfigError};
use crate::registry::Item;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSpec {
    pub id: ItemId,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySpec {
    pub name: String,
    /// Text shown on the bin. Falls back to `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bin_label: Option<String>,
    pub items: Vec<ItemSpec>,
}

impl CategorySpec {
    pub fn bin_label(&self) -> &str {
        self.bin_label.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<CategorySpec>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a category whose items get the next free sequential ids.
    pub fn push_category<I, S>(&mut self, name: impl Into<String>, labels: I) -> CategoryId
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut next_id = self.next_item_id();
        let items = labels
            .into_iter()
            .map(|label| {
                let spec = ItemSpec {
                    id: ItemId(next_id),
                    label: label.into(),
                };
                next_id += 1;
                spec
            })
            .collect();

        self.categories.push(CategorySpec {
            name: name.into(),
            bin_label: None,
            items,
        });
        CategoryId((self.categories.len() - 1) as u16)
    }

    fn next_item_id(&self) -> u32 {
        self.categories
            .iter()
            .flat_map(|c| c.items.iter())
            .map(|i| i.id.0 + 1)
            .max()
            .unwrap_or(0)
    }

    /// Parse and validate a JSON catalog.
    pub fn from_json_str(s: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(s)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn to_json_string(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Structural checks that do not depend on the game config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.categories.is_empty() {
            return Err(ConfigError::NoCategories);
        }
        if self.categories.len() > u16::MAX as usize + 1 {
            return Err(ConfigError::TooManyCategories(self.categories.len()));
        }

        let mut seen = HashSet::new();
        for category in &self.categories {
            if category.items.is_empty() {
                return Err(ConfigError::EmptyCategory(category.name.clone()));
            }
            for item in &category.items {
                if !seen.insert(item.id) {
                    return Err(ConfigError::DuplicateItemId(item.id));
                }
            }
        }
        Ok(())
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    pub fn category(&self, id: CategoryId) -> Option<&CategorySpec> {
        self.categories.get(id.index())
    }

    /// Flatten into items tagged with their category, in catalog order.
    pub fn items(&self) -> Vec<Item> {
        self.categories
            .iter()
            .enumerate()
            .flat_map(|(ci, category)| {
                category.items.iter().map(move |spec| Item {
                    id: spec.id,
                    category: CategoryId(ci as u16),
                    label: spec.label.clone(),
                })
            })
            .collect()
    }

    /// Household waste sorting set used when no catalog is supplied.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.push_category(
            "Recyclable",
            [
                "Newspaper",
                "Cardboard",
                "Glass bottle",
                "Soda can",
                "Plastic bottle",
                "Old clothes",
                "Magazine",
                "Tin can",
                "Milk carton",
                "Steel pot",
                "Book",
                "Paper bag",
                "Jam jar",
            ],
        );
        catalog.push_category(
            "Hazardous",
            [
                "Battery",
                "Light bulb",
                "Paint can",
                "Medicine",
                "Thermometer",
                "Pesticide",
                "Nail polish",
                "Bug spray",
                "Neon tube",
                "Old pills",
                "Bleach",
                "Motor oil",
                "Solvent",
            ],
        );
        catalog.push_category(
            "Kitchen",
            [
                "Banana peel",
                "Apple core",
                "Eggshell",
                "Fish bones",
                "Tea leaves",
                "Leftover rice",
                "Cabbage leaf",
                "Orange peel",
                "Coffee grounds",
                "Bread crust",
                "Melon rind",
                "Corn cob",
                "Chicken bones",
            ],
        );
        catalog.push_category(
            "Residual",
            [
                "Used tissue",
                "Cigarette butt",
                "Diaper",
                "Ceramic shard",
                "Dust",
                "Chopsticks",
                "Toothbrush",
                "Snack wrapper",
                "Cat litter",
                "Chewing gum",
                "Face mask",
                "Sponge",
                "Broken cup",
            ],
        );
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_category_assigns_sequential_ids() {
        let mut catalog = Catalog::new();
        let a = catalog.push_category("A", ["a1", "a2"]);
        let b = catalog.push_category("B", ["b1"]);
        assert_eq!(a, CategoryId(0));
        assert_eq!(b, CategoryId(1));

        let ids: Vec<u32> = catalog.items().iter().map(|i| i.id.0).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(catalog.items()[2].category, CategoryId(1));
    }

    #[test]
    fn builtin_catalog_fills_a_default_game() {
        let catalog = Catalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.category_count(), 4);
        assert!(catalog.item_count() >= 50);
    }

    #[test]
    fn validate_rejects_empty_catalog() {
        assert_eq!(Catalog::new().validate(), Err(ConfigError::NoCategories));
    }

    #[test]
    fn validate_rejects_empty_category() {
        let mut catalog = Catalog::new();
        catalog.push_category("A", ["a1"]);
        catalog.push_category("B", Vec::<String>::new());
        assert_eq!(
            catalog.validate(),
            Err(ConfigError::EmptyCategory("B".to_string()))
        );
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let json = r#"{
            "categories": [
                { "name": "A", "items": [ { "id": 7, "label": "x" } ] },
                { "name": "B", "items": [ { "id": 7, "label": "y" } ] }
            ]
        }"#;
        let err = Catalog::from_json_str(json).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Invalid(ConfigError::DuplicateItemId(ItemId(7)))
        ));
    }

    #[test]
    fn json_bin_label_falls_back_to_name() {
        let json = r#"{
            "categories": [
                { "name": "Glass", "bin_label": "GLASS ONLY", "items": [ { "id": 1, "label": "Jar" } ] },
                { "name": "Paper", "items": [ { "id": 2, "label": "Box" } ] }
            ]
        }"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.categories[0].bin_label(), "GLASS ONLY");
        assert_eq!(catalog.categories[1].bin_label(), "Paper");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Catalog::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn json_output_parses_back() {
        let catalog = Catalog::builtin();
        let text = catalog.to_json_string().unwrap();
        assert_eq!(Catalog::from_json_str(&text).unwrap(), catalog);
    }
}
