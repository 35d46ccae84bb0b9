//! Core domain types for Skillet.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies. Everything here can be used from any layer of the
//! application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Ingredient Catalog Types
// ============================================================================

/// Broad grouping used by the shelf view to sort and tint ingredients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientCategory {
    Protein,
    Vegetable,
    Spice,
    Misc,
}

impl IngredientCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            IngredientCategory::Protein => "protein",
            IngredientCategory::Vegetable => "vegetable",
            IngredientCategory::Spice => "spice",
            IngredientCategory::Misc => "misc",
        }
    }
}

impl std::fmt::Display for IngredientCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable catalog entry.
///
/// Defined once at process start and never mutated; the session only ever
/// holds references-by-clone into the catalog, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Unique within the catalog.
    pub id: String,
    pub name: String,
    /// Display glyph shown in the pan and on the shelf.
    pub emoji: String,
    pub category: IngredientCategory,
    /// Display styling token consumed by the presentation layer.
    pub color: String,
}

// ============================================================================
// Heat Level
// ============================================================================

/// Stove heat setting. Totally ordered by intensity (`Low < Medium < High`);
/// the order is used only for display scaling, never by judging logic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum HeatLevel {
    Low,
    #[default]
    Medium,
    High,
}

pub const HEAT_LEVELS: [HeatLevel; 3] = [HeatLevel::Low, HeatLevel::Medium, HeatLevel::High];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid heat level '{0}'; expected one of: low, medium, high")]
pub struct HeatLevelParseError(String);

impl HeatLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            HeatLevel::Low => "low",
            HeatLevel::Medium => "medium",
            HeatLevel::High => "high",
        }
    }

    /// Stove dial label shown next to the burner.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            HeatLevel::Low => "Gentle Warmth",
            HeatLevel::Medium => "Steady Sizzle",
            HeatLevel::High => "Inferno Roast",
        }
    }

    /// Flame height scale for the presentation layer (1..=3).
    #[must_use]
    pub const fn intensity(self) -> u8 {
        match self {
            HeatLevel::Low => 1,
            HeatLevel::Medium => 2,
            HeatLevel::High => 3,
        }
    }

    pub fn parse(value: &str) -> Result<Self, HeatLevelParseError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(HeatLevel::Low),
            "medium" => Ok(HeatLevel::Medium),
            "high" => Ok(HeatLevel::High),
            _ => Err(HeatLevelParseError(value.to_string())),
        }
    }
}

impl std::fmt::Display for HeatLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Judging Types
// ============================================================================

/// The judge's verdict on a served dish.
///
/// On the wire this is the exact JSON object the judging service is asked to
/// produce: `dishName`, `critique`, `score`, `rating` and nothing else.
/// `deny_unknown_fields` makes any deviation from that shape a parse failure,
/// which the judging client converts into [`CookingResult::fallback`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CookingResult {
    pub dish_name: String,
    pub critique: String,
    /// Intended range 0-10, but not enforced locally; the judge owns scoring.
    pub score: f64,
    /// One-word rating like "Delicious", "Abomination", "Average".
    pub rating: String,
}

impl CookingResult {
    /// The fixed verdict used when the remote judge fails for any reason.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            dish_name: "The Mystery Platter".to_string(),
            critique: "The stove glitched out, but it smells like... something.".to_string(),
            score: 5.0,
            rating: "Mysterious".to_string(),
        }
    }
}

/// Immutable capture of the session at the instant the dish was served.
///
/// Taken on the Cooking -> Judging transition so that later mutation of the
/// selection can never affect an in-flight judgment.
#[derive(Debug, Clone, PartialEq)]
pub struct DishSnapshot {
    /// Insertion-ordered, unique by id.
    pub ingredients: Vec<Ingredient>,
    /// Seconds spent cooking.
    pub seconds: u64,
    pub heat: HeatLevel,
}

impl DishSnapshot {
    /// Ingredient names joined for the judge's prompt, e.g. "Steak, Chocolate".
    #[must_use]
    pub fn ingredient_names(&self) -> String {
        self.ingredients
            .iter()
            .map(|i| i.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::{CookingResult, DishSnapshot, HeatLevel, Ingredient, IngredientCategory};

    fn ingredient(id: &str, name: &str) -> Ingredient {
        Ingredient {
            id: id.to_string(),
            name: name.to_string(),
            emoji: "🍳".to_string(),
            category: IngredientCategory::Misc,
            color: "misc".to_string(),
        }
    }

    #[test]
    fn heat_level_ordered_by_intensity() {
        assert!(HeatLevel::Low < HeatLevel::Medium);
        assert!(HeatLevel::Medium < HeatLevel::High);
        assert_eq!(HeatLevel::default(), HeatLevel::Medium);
    }

    #[test]
    fn heat_level_parse_aliases() {
        assert_eq!(HeatLevel::parse("low").unwrap(), HeatLevel::Low);
        assert_eq!(HeatLevel::parse("MEDIUM").unwrap(), HeatLevel::Medium);
        assert_eq!(HeatLevel::parse(" high ").unwrap(), HeatLevel::High);
        assert!(HeatLevel::parse("nuclear").is_err());
        assert!(HeatLevel::parse("").is_err());
    }

    #[test]
    fn cooking_result_wire_shape_is_camel_case() {
        let json = r#"{"dishName":"Toast","critique":"Crunchy.","score":7,"rating":"Solid"}"#;
        let result: CookingResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.dish_name, "Toast");
        assert_eq!(result.score, 7.0);
    }

    #[test]
    fn cooking_result_rejects_extra_fields() {
        let json = r#"{"dishName":"Toast","critique":"c","score":7,"rating":"r","garnish":"x"}"#;
        assert!(serde_json::from_str::<CookingResult>(json).is_err());
    }

    #[test]
    fn cooking_result_rejects_missing_fields() {
        let json = r#"{"dishName":"Toast","critique":"c","score":7}"#;
        assert!(serde_json::from_str::<CookingResult>(json).is_err());
    }

    #[test]
    fn fallback_is_the_fixed_mystery_platter() {
        let fallback = CookingResult::fallback();
        assert_eq!(fallback.dish_name, "The Mystery Platter");
        assert_eq!(
            fallback.critique,
            "The stove glitched out, but it smells like... something."
        );
        assert_eq!(fallback.score, 5.0);
        assert_eq!(fallback.rating, "Mysterious");
    }

    #[test]
    fn snapshot_joins_names_in_insertion_order() {
        let snapshot = DishSnapshot {
            ingredients: vec![ingredient("1", "Steak"), ingredient("10", "Chocolate")],
            seconds: 2,
            heat: HeatLevel::Medium,
        };
        assert_eq!(snapshot.ingredient_names(), "Steak, Chocolate");
    }

    #[test]
    fn snapshot_single_ingredient_has_no_separator() {
        let snapshot = DishSnapshot {
            ingredients: vec![ingredient("12", "Bread")],
            seconds: 0,
            heat: HeatLevel::Low,
        };
        assert_eq!(snapshot.ingredient_names(), "Bread");
    }
}
