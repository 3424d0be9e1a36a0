#![no_main]
use libfuzzer_sys::fuzz_target;
use pantry_match::matching::{explain_match, score_match};
use pantry_match::model::{Pantry, Recipe, UserPreferences};

/// Fuzz the scoring core with arbitrary names and raw f64 bit patterns.
///
/// Splits the input on NUL into ingredients and pantry items. Scores must
/// stay in range and agree with the breakdown total.
fuzz_target!(|data: &[u8]| {
    if data.len() < 16 {
        return;
    }
    let (numbers, text) = data.split_at(16);
    let time = f64::from_le_bytes(numbers[..8].try_into().unwrap());
    let limit = f64::from_le_bytes(numbers[8..].try_into().unwrap());

    let text = String::from_utf8_lossy(text);
    let (ingredients, pantry) = text.split_once('|').unwrap_or((text.as_ref(), ""));

    let recipe = Recipe::new(ingredients.split('\0'), "Fuzz", time, time * 2.0);
    let pantry: Pantry = pantry.split('\0').collect();
    let prefs = UserPreferences::new()
        .with_dietary(["fuzz"])
        .with_max_cook_time(limit)
        .with_max_calories(limit);

    let score = score_match(&recipe, &pantry, &prefs);
    assert!(score <= 100);
    assert_eq!(explain_match(&recipe, &pantry, &prefs).total, score);
});
