//! Recipe match scoring engine.
//!
//! A match score is the sum of three independent dimensions:
//!
//! - **Inventory** (70 points): share of the recipe's ingredients found in
//!   the pantry, using normalized bidirectional substring matching
//! - **Preference** (15 points): cuisine or dietary alignment, all or nothing
//! - **Constraint** (15 points): time and calorie budgets, with partial
//!   credit for small overages
//!
//! The sum is clamped to `[0, 100]` and rounded. Scoring is pure and
//! infallible: missing fields degrade to neutral values instead of errors.
//!
//! # Architecture
//!
//! The engine is built on the [`RecipeScorer`] trait. [`RecipeMatcher`] is
//! the default implementation, configured by [`MatchWeights`] and
//! [`TierThresholds`]. [`rank_recipes`] scores a whole listing in parallel
//! through any scorer.
//!
//! # Example
//!
//! ```
//! use pantry_match::matching::{score_match, classify_score, MatchTier};
//! use pantry_match::model::{Pantry, Recipe, UserPreferences};
//!
//! let recipe = Recipe::new(["Pasta", "Tomato", "Basil"], "Italian", 20.0, 500.0);
//! let pantry = Pantry::new(["pasta", "tomatoes", "basil"]);
//! let prefs = UserPreferences::new().with_cuisines(["Italian"]);
//!
//! let score = score_match(&recipe, &pantry, &prefs);
//! assert_eq!(score, 100);
//! assert_eq!(classify_score(score), MatchTier::Great);
//! ```

mod breakdown;
mod config;
mod constraint;
mod inventory;
pub mod normalize;
mod preference;
mod rank;
mod scoring;
mod tier;
mod traits;

pub use breakdown::{
    format_points, DietaryBreakdown, InventoryBreakdown, MatchBreakdown, TimeCalorieBreakdown,
};
pub use config::{
    MatchWeights, TierThresholds, DEFAULT_CONSTRAINT_WEIGHT, DEFAULT_GOOD_THRESHOLD,
    DEFAULT_GREAT_THRESHOLD, DEFAULT_INVENTORY_WEIGHT, DEFAULT_OVERAGE_FACTOR,
    DEFAULT_PARTIAL_CREDIT, DEFAULT_PREFERENCE_WEIGHT,
};
pub use constraint::{match_constraints, BudgetCheck, ConstraintMatch};
pub use inventory::{match_inventory, InventoryMatch};
pub use normalize::{contains_either, normalize_ingredient};
pub use preference::{match_preferences, PreferenceMatch, PreferenceReason};
pub use rank::{rank_recipes, RankOptions, RankedRecipe};
pub use scoring::{aggregate_score, MAX_SCORE};
pub use tier::{classify_score, MatchTier};
pub use traits::RecipeScorer;

use crate::model::{Pantry, Recipe, UserPreferences};

/// Default recipe scorer.
#[derive(Debug, Clone, Default, PartialEq)]
#[must_use]
pub struct RecipeMatcher {
    weights: MatchWeights,
    tiers: TierThresholds,
}

impl RecipeMatcher {
    /// Create a matcher with custom weights and default tiers.
    pub fn new(weights: MatchWeights) -> Self {
        Self {
            weights,
            tiers: TierThresholds::default(),
        }
    }

    /// Create a matcher from a weights preset name.
    #[must_use]
    pub fn from_preset(name: &str) -> Option<Self> {
        MatchWeights::from_preset(name).map(Self::new)
    }

    /// Replace the tier thresholds.
    pub const fn with_tiers(mut self, tiers: TierThresholds) -> Self {
        self.tiers = tiers;
        self
    }

    /// Get the scoring weights.
    #[must_use]
    pub const fn weights(&self) -> &MatchWeights {
        &self.weights
    }

    /// Get the tier thresholds.
    #[must_use]
    pub const fn tiers(&self) -> &TierThresholds {
        &self.tiers
    }

    fn dimensions(
        &self,
        recipe: &Recipe,
        pantry: &Pantry,
        prefs: &UserPreferences,
    ) -> (InventoryMatch, PreferenceMatch, ConstraintMatch) {
        let inventory = match_inventory(&recipe.ingredients, pantry, &self.weights);
        let preference = match_preferences(
            &recipe.cuisine,
            &prefs.dietary_preferences,
            &prefs.cuisine_preferences,
            &self.weights,
        );
        let constraint = match_constraints(
            recipe.time,
            recipe.calories,
            prefs.max_cook_time,
            prefs.max_calories,
            &self.weights,
        );
        (inventory, preference, constraint)
    }
}

impl RecipeScorer for RecipeMatcher {
    fn score_match(&self, recipe: &Recipe, pantry: &Pantry, prefs: &UserPreferences) -> u8 {
        let (inventory, preference, constraint) = self.dimensions(recipe, pantry, prefs);
        aggregate_score(inventory.score, preference.score, constraint.score)
    }

    fn explain_match(
        &self,
        recipe: &Recipe,
        pantry: &Pantry,
        prefs: &UserPreferences,
    ) -> MatchBreakdown {
        let (inventory, preference, constraint) = self.dimensions(recipe, pantry, prefs);
        let total = aggregate_score(inventory.score, preference.score, constraint.score);

        MatchBreakdown {
            total,
            inventory: InventoryBreakdown::from_match(inventory, &self.weights),
            dietary: DietaryBreakdown::from_match(preference, &self.weights),
            time_calorie: TimeCalorieBreakdown::from_match(constraint, &self.weights),
        }
    }

    fn classify(&self, score: u8) -> MatchTier {
        MatchTier::from_score(score, &self.tiers)
    }

    fn name(&self) -> &'static str {
        "RecipeMatcher"
    }
}

/// Score a recipe with the default weights.
#[must_use]
pub fn score_match(recipe: &Recipe, pantry: &Pantry, prefs: &UserPreferences) -> u8 {
    RecipeMatcher::default().score_match(recipe, pantry, prefs)
}

/// Explain a recipe's score with the default weights.
#[must_use]
pub fn explain_match(recipe: &Recipe, pantry: &Pantry, prefs: &UserPreferences) -> MatchBreakdown {
    RecipeMatcher::default().explain_match(recipe, pantry, prefs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explain_total_matches_score() {
        let recipe = Recipe::new(["Chicken", "Rice", "Peas"], "Asian", 45.0, 700.0);
        let pantry = Pantry::new(["chicken", "rice"]);
        let prefs = UserPreferences::new()
            .with_cuisines(["Italian"])
            .with_max_cook_time(40.0)
            .with_max_calories(600.0);

        let matcher = RecipeMatcher::default();
        let breakdown = matcher.explain_match(&recipe, &pantry, &prefs);
        assert_eq!(breakdown.total, matcher.score_match(&recipe, &pantry, &prefs));
        // 47 + 0 + 3.75 + 3.75
        assert_eq!(breakdown.total, 55);
        assert!(!breakdown.time_calorie.time_ok);
    }

    #[test]
    fn test_strict_preset_drops_partial_credit() {
        let recipe = Recipe::new(Vec::<String>::new(), "", 45.0, 0.0);
        let prefs = UserPreferences::new().with_max_cook_time(40.0);
        let pantry = Pantry::empty();

        assert_eq!(score_match(&recipe, &pantry, &prefs), 96);
        let strict = RecipeMatcher::from_preset("strict").unwrap();
        assert_eq!(strict.score_match(&recipe, &pantry, &prefs), 93);
    }

    #[test]
    fn test_custom_tiers() {
        let matcher = RecipeMatcher::default().with_tiers(TierThresholds { great: 95, good: 90 });
        assert_eq!(matcher.classify(92), MatchTier::Good);
        assert_eq!(matcher.classify(80), MatchTier::Low);
        assert_eq!(matcher.name(), "RecipeMatcher");
    }

    #[test]
    fn test_unknown_preset() {
        assert!(RecipeMatcher::from_preset("extreme").is_none());
    }
}
