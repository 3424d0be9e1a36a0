//! Property-based tests for the scoring engine.
//!
//! Scoring must be total: arbitrary strings and numbers, including NaN and
//! infinities, always produce a score in range and a consistent breakdown.

use pantry_match::matching::{
    explain_match, normalize_ingredient, rank_recipes, score_match, RankOptions, RecipeMatcher,
};
use pantry_match::model::{Pantry, Recipe, UserPreferences};
use proptest::prelude::*;

fn any_number() -> impl Strategy<Value = f64> {
    prop_oneof![
        4 => 0.0..2000.0f64,
        1 => any::<f64>(),
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
    ]
}

fn recipe_strategy() -> impl Strategy<Value = Recipe> {
    (
        prop::collection::vec("\\PC{0,24}", 0..8),
        "\\PC{0,16}",
        any_number(),
        any_number(),
    )
        .prop_map(|(ingredients, cuisine, time, calories)| {
            Recipe::new(ingredients, cuisine, time, calories)
        })
}

fn prefs_strategy() -> impl Strategy<Value = UserPreferences> {
    (
        prop::collection::vec("\\PC{0,12}", 0..3),
        prop::collection::vec("\\PC{0,12}", 0..3),
        prop::option::of(any_number()),
        prop::option::of(any_number()),
    )
        .prop_map(|(dietary, cuisines, time, calories)| UserPreferences {
            dietary_preferences: dietary,
            cuisine_preferences: cuisines,
            max_cook_time: time,
            max_calories: calories,
        })
}

fn pantry_strategy() -> impl Strategy<Value = Pantry> {
    prop::collection::vec("\\PC{0,24}", 0..10).prop_map(Pantry::new)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn score_is_always_in_range(
        recipe in recipe_strategy(),
        pantry in pantry_strategy(),
        prefs in prefs_strategy(),
    ) {
        prop_assert!(score_match(&recipe, &pantry, &prefs) <= 100);
    }

    #[test]
    fn explain_total_equals_score(
        recipe in recipe_strategy(),
        pantry in pantry_strategy(),
        prefs in prefs_strategy(),
    ) {
        let breakdown = explain_match(&recipe, &pantry, &prefs);
        prop_assert_eq!(breakdown.total, score_match(&recipe, &pantry, &prefs));
        prop_assert!(
            breakdown.inventory.matched_count <= breakdown.inventory.total_ingredient_count
        );
        prop_assert_eq!(
            breakdown.inventory.matched_items.len(),
            breakdown.inventory.matched_count
        );
        prop_assert!(breakdown.inventory.score >= 0.0 && breakdown.inventory.score <= 70.0);
        prop_assert!(breakdown.dietary.score == 0.0 || breakdown.dietary.score == 15.0);
        prop_assert!(breakdown.time_calorie.score >= 0.0 && breakdown.time_calorie.score <= 15.0);
    }

    #[test]
    fn adding_an_exact_ingredient_is_monotone(
        recipe in recipe_strategy(),
        pantry in pantry_strategy(),
        prefs in prefs_strategy(),
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!recipe.ingredients.is_empty());
        let item = recipe.ingredients[pick.index(recipe.ingredients.len())].clone();
        let before = score_match(&recipe, &pantry, &prefs);
        let after = score_match(&recipe, &pantry.clone().with_item(item), &prefs);
        prop_assert!(after >= before);
    }

    #[test]
    fn normalized_keys_are_lowercase_alphanumeric(s in "\\PC{0,64}") {
        let key = normalize_ingredient(&s);
        prop_assert!(key.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        prop_assert_eq!(normalize_ingredient(&key), key.clone());
    }

    #[test]
    fn ranking_is_sorted_and_complete(
        recipes in prop::collection::vec(recipe_strategy(), 0..12),
        pantry in pantry_strategy(),
        prefs in prefs_strategy(),
    ) {
        let ranked = rank_recipes(
            &RecipeMatcher::default(),
            &recipes,
            &pantry,
            &prefs,
            RankOptions::default(),
        );
        prop_assert_eq!(ranked.len(), recipes.len());
        for pair in ranked.windows(2) {
            prop_assert!(
                pair[0].score > pair[1].score
                    || (pair[0].score == pair[1].score && pair[0].index < pair[1].index)
            );
        }
    }
}
