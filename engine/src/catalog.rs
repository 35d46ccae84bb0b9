//! The fixed ingredient shelf.
//!
//! Twelve entries, defined once at first use and never mutated. The state
//! machine treats the catalog as read-only input; it only ever clones
//! entries into the pan.

use std::sync::OnceLock;

use skillet_types::{Ingredient, IngredientCategory};

fn entry(
    id: &str,
    name: &str,
    emoji: &str,
    category: IngredientCategory,
    color: &str,
) -> Ingredient {
    Ingredient {
        id: id.to_string(),
        name: name.to_string(),
        emoji: emoji.to_string(),
        category,
        color: color.to_string(),
    }
}

/// The full shelf, in display order.
pub fn ingredients() -> &'static [Ingredient] {
    static CATALOG: OnceLock<Vec<Ingredient>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        use IngredientCategory::{Misc, Protein, Spice, Vegetable};
        vec![
            entry("1", "Steak", "🥩", Protein, "red"),
            entry("2", "Egg", "🥚", Protein, "cream"),
            entry("3", "Shrimp", "🍤", Protein, "pink"),
            entry("4", "Tomato", "🍅", Vegetable, "rose"),
            entry("5", "Broccoli", "🥦", Vegetable, "green"),
            entry("6", "Mushroom", "🍄", Vegetable, "amber"),
            entry("7", "Chili", "🌶️", Spice, "scarlet"),
            entry("8", "Garlic", "🧄", Spice, "gray"),
            entry("9", "Cheese", "🧀", Misc, "yellow"),
            entry("10", "Chocolate", "🍫", Misc, "brown"),
            entry("11", "Pineapple", "🍍", Misc, "gold"),
            entry("12", "Bread", "🍞", Misc, "orange"),
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::ingredients;

    #[test]
    fn catalog_has_twelve_unique_entries() {
        let catalog = ingredients();
        assert_eq!(catalog.len(), 12);
        let mut ids: Vec<&str> = catalog.iter().map(|i| i.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 12);
    }

    #[test]
    fn catalog_spans_all_categories() {
        use skillet_types::IngredientCategory;
        let catalog = ingredients();
        for category in [
            IngredientCategory::Protein,
            IngredientCategory::Vegetable,
            IngredientCategory::Spice,
            IngredientCategory::Misc,
        ] {
            assert!(catalog.iter().any(|i| i.category == category));
        }
    }
}
