//! Pantry coverage of a recipe's ingredient list.

use super::config::MatchWeights;
use super::normalize::{contains_either, normalize_ingredient};
use crate::model::Pantry;

/// Result of matching a recipe's ingredients against the pantry.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryMatch {
    /// Points earned, `0..=weights.inventory`
    pub score: f64,
    /// Ingredients found in the pantry
    pub matched_count: usize,
    /// Ingredients in the recipe, duplicates included
    pub total_count: usize,
    /// Original text of the matched ingredients, in recipe order
    pub matched_items: Vec<String>,
}

impl InventoryMatch {
    /// Fraction of ingredients on hand. A recipe with no ingredients is fully covered.
    #[must_use]
    pub fn coverage(&self) -> f64 {
        if self.total_count == 0 {
            1.0
        } else {
            self.matched_count as f64 / self.total_count as f64
        }
    }
}

/// Score pantry coverage of `ingredients`.
///
/// An empty ingredient list earns the full inventory weight. Otherwise each
/// ingredient counts once if its normalized key and any normalized pantry
/// key contain one another, and the score is the rounded share of the
/// inventory weight.
#[must_use]
pub fn match_inventory(
    ingredients: &[String],
    pantry: &Pantry,
    weights: &MatchWeights,
) -> InventoryMatch {
    if ingredients.is_empty() {
        return InventoryMatch {
            score: weights.inventory,
            matched_count: 0,
            total_count: 0,
            matched_items: Vec::new(),
        };
    }

    let pantry_keys: Vec<String> = pantry.iter().map(normalize_ingredient).collect();

    let matched_items: Vec<String> = ingredients
        .iter()
        .filter(|ingredient| {
            let key = normalize_ingredient(ingredient);
            pantry_keys.iter().any(|p| contains_either(&key, p))
        })
        .cloned()
        .collect();

    let matched_count = matched_items.len();
    let total_count = ingredients.len();
    let score = (matched_count as f64 / total_count as f64 * weights.inventory).round();

    InventoryMatch {
        score,
        matched_count,
        total_count,
        matched_items,
    }
}
