//! **A library for scoring how well recipes fit a user's kitchen.**
//!
//! `pantry-match` compares a recipe against what the user has on hand, their
//! cuisine and dietary preferences, and their time and calorie budgets, and
//! reduces that to a single score from 0 to 100 with an explainable
//! breakdown. It powers both a command-line interface (CLI) and a Rust
//! library for embedding the scoring in recipe recommendation services.
//!
//! ## Key Features
//!
//! - **Forgiving ingredient matching**: "Chicken Breast" in a recipe matches
//!   "chicken" in the pantry and vice versa, after lowercasing and stripping
//!   punctuation.
//! - **Explainable scores**: every score comes with a per-dimension
//!   [`MatchBreakdown`] suitable for display or JSON export.
//! - **Pure and infallible**: scoring never errors; missing or malformed
//!   fields degrade to neutral values.
//! - **Batch ranking**: [`rank_recipes`] scores listings in parallel with a
//!   deterministic order.
//! - **Flexible inputs and reports**: JSON, YAML or plain-text inputs;
//!   summary, table, JSON and CSV outputs.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`Recipe`], [`Pantry`] and [`UserPreferences`], the
//!   read-only snapshots the engine scores.
//! - **[`matching`]**: the scoring engine. [`score_match`], [`explain_match`]
//!   and [`classify_score`] are the entry points; [`RecipeMatcher`] carries
//!   custom weights and tiers.
//! - **[`parsers`]**: loading snapshots from files or strings.
//! - **[`reports`]**: rendering scored listings.
//! - **[`pipeline`]**: load, score and report in one pass, as the CLI does.
//!
//! ## Getting Started
//!
//! ```
//! use pantry_match::{explain_match, score_match, Pantry, Recipe, UserPreferences};
//!
//! let recipe = Recipe::new(
//!     ["Chicken Breast", "Soy Sauce", "Garlic", "Ginger"],
//!     "Asian",
//!     25.0,
//!     450.0,
//! );
//! let pantry = Pantry::new(["chicken", "garlic"]);
//! let prefs = UserPreferences::new()
//!     .with_cuisines(["Asian"])
//!     .with_max_cook_time(30.0);
//!
//! // 35 (2 of 4 ingredients) + 15 (cuisine) + 15 (budgets)
//! assert_eq!(score_match(&recipe, &pantry, &prefs), 65);
//!
//! let breakdown = explain_match(&recipe, &pantry, &prefs);
//! assert_eq!(breakdown.inventory.matched_count, 2);
//! assert!(breakdown.dietary.matched);
//! ```
//!
//! ### Ranking a listing
//!
//! ```
//! use pantry_match::matching::{rank_recipes, RankOptions, RecipeMatcher};
//! use pantry_match::{Pantry, Recipe, UserPreferences};
//!
//! let recipes = vec![
//!     Recipe::new(["Lobster"], "French", 60.0, 800.0).with_name("Lobster bisque"),
//!     Recipe::new(["Rice", "Egg"], "Asian", 15.0, 400.0).with_name("Fried rice"),
//! ];
//! let pantry = Pantry::new(["rice", "eggs"]);
//!
//! let ranked = rank_recipes(
//!     &RecipeMatcher::default(),
//!     &recipes,
//!     &pantry,
//!     &UserPreferences::default(),
//!     RankOptions::default().with_limit(1),
//! );
//! assert_eq!(ranked[0].label, "Fried rice");
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! This documentation is for the `pantry-match` library crate. The
//! `pantry-match` binary wraps it with `score`, `rank`, `explain` and
//! `classify` subcommands.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Score math moves between usize, f64 and u8; all values are bounded
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Config structs legitimately use many bools for toggle flags
    clippy::struct_excessive_bools,
    // Variable names like `min`/`max` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod matching;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigPreset};
pub use config::{BehaviorConfig, OutputConfig, ScoringConfig};
pub use config::{ConfigError, Validatable};
pub use error::{ErrorContext, PantryMatchError, Result};
pub use matching::{
    classify_score, explain_match, rank_recipes, score_match, MatchBreakdown, MatchTier,
    MatchWeights, RecipeMatcher, RecipeScorer, TierThresholds,
};
pub use model::{Pantry, Recipe, UserPreferences};
pub use parsers::{
    parse_pantry_file, parse_preferences_file, parse_recipes_file, parse_recipes_str, InputFormat,
};
pub use reports::{ReportFormat, ReportGenerator};
