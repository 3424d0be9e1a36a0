//! Trait definitions for recipe scoring strategies.
//!
//! Ranking and reporting only depend on [`RecipeScorer`], so alternative
//! scorers (custom weights, test doubles) plug in without touching them.

use super::breakdown::MatchBreakdown;
use super::tier::{classify_score, MatchTier};
use crate::model::{Pantry, Recipe, UserPreferences};

/// Trait for recipe scoring strategies.
///
/// Implementations must be pure: identical inputs give identical outputs,
/// and none of the inputs is modified.
///
/// # Example
///
/// ```ignore
/// use pantry_match::matching::{RecipeMatcher, RecipeScorer};
///
/// fn best(scorer: &dyn RecipeScorer, recipes: &[Recipe]) -> Option<u8> {
///     recipes.iter().map(|r| scorer.score_match(r, &pantry, &prefs)).max()
/// }
/// ```
pub trait RecipeScorer: Send + Sync {
    /// Compute a 0-100 match score.
    fn score_match(&self, recipe: &Recipe, pantry: &Pantry, prefs: &UserPreferences) -> u8;

    /// Explain a match score dimension by dimension.
    ///
    /// The breakdown's `total` must equal [`Self::score_match`] for the
    /// same inputs.
    fn explain_match(
        &self,
        recipe: &Recipe,
        pantry: &Pantry,
        prefs: &UserPreferences,
    ) -> MatchBreakdown;

    /// Map a score to its presentation tier.
    fn classify(&self, score: u8) -> MatchTier {
        classify_score(score)
    }

    /// Get the name of this scorer for logging/debugging.
    fn name(&self) -> &'static str {
        "RecipeScorer"
    }
}
