//! Batch scoring and ordering of recipe listings.

use super::tier::MatchTier;
use super::traits::RecipeScorer;
use crate::model::{Pantry, Recipe, UserPreferences};
use rayon::prelude::*;
use serde::Serialize;

/// Filtering and truncation applied after ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankOptions {
    /// Drop recipes scoring below this
    pub min_score: Option<u8>,
    /// Keep at most this many recipes
    pub limit: Option<usize>,
}

impl RankOptions {
    #[must_use]
    pub const fn with_min_score(mut self, min_score: u8) -> Self {
        self.min_score = Some(min_score);
        self
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// One entry of a ranked listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedRecipe {
    /// Position in the input listing
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display label: name, else id, else `#<index + 1>`
    pub label: String,
    pub score: u8,
    pub tier: MatchTier,
}

/// Score every recipe in parallel and sort by score, best first.
///
/// Ties keep input order, so the result is deterministic regardless of
/// thread scheduling.
pub fn rank_recipes(
    scorer: &dyn RecipeScorer,
    recipes: &[Recipe],
    pantry: &Pantry,
    prefs: &UserPreferences,
    options: RankOptions,
) -> Vec<RankedRecipe> {
    let mut ranked: Vec<RankedRecipe> = recipes
        .par_iter()
        .enumerate()
        .map(|(index, recipe)| {
            let score = scorer.score_match(recipe, pantry, prefs);
            RankedRecipe {
                index,
                id: recipe.id.clone(),
                label: recipe.label_or(|| format!("#{}", index + 1)),
                score,
                tier: scorer.classify(score),
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score).then(a.index.cmp(&b.index)));

    if let Some(min_score) = options.min_score {
        ranked.retain(|r| r.score >= min_score);
    }
    if let Some(limit) = options.limit {
        ranked.truncate(limit);
    }

    tracing::debug!(
        "Ranked {} recipes with {}, {} kept",
        recipes.len(),
        scorer.name(),
        ranked.len()
    );

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::RecipeMatcher;

    fn listing() -> Vec<Recipe> {
        vec![
            Recipe::new(["Rice", "Beans"], "Mexican", 20.0, 400.0).with_name("Rice bowl"),
            Recipe::new(["Saffron", "Lobster"], "French", 90.0, 900.0).with_id("lob-1"),
            Recipe::new(["Rice", "Beans"], "Mexican", 20.0, 400.0),
            Recipe::new(["Rice"], "Asian", 10.0, 200.0),
        ]
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        let pantry = Pantry::new(["rice", "beans"]);
        let ranked = rank_recipes(
            &RecipeMatcher::default(),
            &listing(),
            &pantry,
            &UserPreferences::default(),
            RankOptions::default(),
        );
        let order: Vec<usize> = ranked.iter().map(|r| r.index).collect();
        assert_eq!(order, vec![0, 2, 3, 1]);
        assert_eq!(ranked[0].label, "Rice bowl");
        assert_eq!(ranked[1].label, "#3");
        assert_eq!(ranked[3].label, "lob-1");
        assert_eq!(ranked[0].tier, MatchTier::Great);
    }

    #[test]
    fn test_min_score_and_limit() {
        let pantry = Pantry::new(["rice", "beans"]);
        let options = RankOptions::default().with_min_score(50).with_limit(2);
        let ranked = rank_recipes(
            &RecipeMatcher::default(),
            &listing(),
            &pantry,
            &UserPreferences::default(),
            options,
        );
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|r| r.score >= 50));
    }

    #[test]
    fn test_empty_listing() {
        let ranked = rank_recipes(
            &RecipeMatcher::default(),
            &[],
            &Pantry::empty(),
            &UserPreferences::default(),
            RankOptions::default(),
        );
        assert!(ranked.is_empty());
    }
}
