//! Input loading stage.

use super::PipelineError;
use crate::config::MatchInputs;
use crate::model::{Pantry, Recipe, UserPreferences};
use crate::parsers::{parse_pantry_file, parse_preferences_file, parse_recipes_file};
use std::path::Path;

/// Parsed input snapshots for one scoring run
#[derive(Debug, Clone, Default)]
pub struct LoadedInputs {
    pub recipes: Vec<Recipe>,
    pub pantry: Pantry,
    pub preferences: UserPreferences,
}

fn load_failed(
    what: &'static str,
    path: &Path,
) -> impl FnOnce(crate::error::PantryMatchError) -> PipelineError {
    let path = path.display().to_string();
    move |source| PipelineError::LoadFailed { what, path, source }
}

/// Load recipes, pantry and preferences.
///
/// A missing pantry path means an empty pantry, and a missing preferences
/// path means no stated preferences.
pub fn load_inputs(paths: &MatchInputs, quiet: bool) -> Result<LoadedInputs, PipelineError> {
    if !quiet {
        tracing::info!("Loading recipes: {}", paths.recipes.display());
    }
    let recipes =
        parse_recipes_file(&paths.recipes).map_err(load_failed("recipes", &paths.recipes))?;

    let pantry = match &paths.pantry {
        Some(path) => parse_pantry_file(path).map_err(load_failed("pantry", path))?,
        None => Pantry::empty(),
    };

    let preferences = match &paths.preferences {
        Some(path) => parse_preferences_file(path).map_err(load_failed("preferences", path))?,
        None => UserPreferences::default(),
    };

    if !quiet {
        tracing::info!(
            "Loaded {} recipes and {} pantry items",
            recipes.len(),
            pantry.len()
        );
    }
    if preferences.has_no_taste_preferences() {
        tracing::debug!("No cuisine or dietary preferences stated");
    }

    Ok(LoadedInputs {
        recipes,
        pantry,
        preferences,
    })
}
