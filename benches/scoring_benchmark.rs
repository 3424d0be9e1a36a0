//! Benchmarks for the scoring engine.
//!
//! Run with: cargo bench --bench scoring_benchmark

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pantry_match::matching::{explain_match, rank_recipes, score_match, RankOptions, RecipeMatcher};
use pantry_match::model::{Pantry, Recipe, UserPreferences};
use std::hint::black_box;

const CUISINES: [&str; 5] = ["Italian", "Asian", "Mexican", "Indian", "French"];

/// Generate a listing of recipes with overlapping ingredient names.
fn generate_recipes(count: usize) -> Vec<Recipe> {
    (0..count)
        .map(|i| {
            let ingredients: Vec<String> = (0..8)
                .map(|j| {
                    let form = if j % 2 == 0 { "fresh" } else { "dried" };
                    format!("Ingredient {} {form}", (i + j) % 40)
                })
                .collect();
            Recipe::new(
                ingredients,
                CUISINES[i % CUISINES.len()],
                (i % 120) as f64,
                (200 + i % 900) as f64,
            )
            .with_id(format!("r{i}"))
        })
        .collect()
}

fn generate_pantry(count: usize) -> Pantry {
    (0..count).map(|i| format!("ingredient {i}")).collect()
}

fn prefs() -> UserPreferences {
    UserPreferences::new()
        .with_cuisines(["Italian", "Mexican"])
        .with_dietary(["vegetarian"])
        .with_max_cook_time(45.0)
        .with_max_calories(700.0)
}

fn bench_single(c: &mut Criterion) {
    let recipe = &generate_recipes(1)[0];
    let pantry = generate_pantry(30);
    let prefs = prefs();

    c.bench_function("score_match", |b| {
        b.iter(|| black_box(score_match(black_box(recipe), black_box(&pantry), black_box(&prefs))))
    });
    c.bench_function("explain_match", |b| {
        b.iter(|| {
            black_box(explain_match(
                black_box(recipe),
                black_box(&pantry),
                black_box(&prefs),
            ))
        })
    });
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_recipes");
    let matcher = RecipeMatcher::default();
    let pantry = generate_pantry(30);
    let prefs = prefs();

    for size in [100, 1_000, 10_000] {
        let recipes = generate_recipes(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &recipes, |b, recipes| {
            b.iter(|| {
                black_box(rank_recipes(
                    &matcher,
                    recipes,
                    &pantry,
                    &prefs,
                    RankOptions::default().with_limit(10),
                ))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single, bench_rank);
criterion_main!(benches);
