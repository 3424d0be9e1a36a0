//! Input snapshot parsers.
//!
//! Recipes, pantry lists and preferences are read from JSON or YAML
//! documents. Pantry lists may also be plain text with one item per line.
//!
//! ## Usage
//!
//! ```no_run
//! use pantry_match::parsers::{parse_pantry_file, parse_recipes_file};
//! use std::path::Path;
//!
//! let recipes = parse_recipes_file(Path::new("recipes.json")).unwrap();
//! let pantry = parse_pantry_file(Path::new("pantry.txt")).unwrap();
//! println!("{} recipes, {} pantry items", recipes.len(), pantry.len());
//! ```

mod detection;
mod documents;

pub use detection::InputFormat;

use crate::error::{ErrorContext, PantryMatchError, Result};
use crate::model::{Pantry, Recipe, UserPreferences};
use documents::{lines_to_names, PantryDocument, RecipeDocument};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Maximum input file size (64 MB).
const MAX_INPUT_FILE_SIZE: u64 = 64 * 1024 * 1024;

fn deserialize<T: DeserializeOwned>(content: &str, format: InputFormat, what: &str) -> Result<T> {
    match format {
        InputFormat::Json => Ok(serde_json::from_str(content)?),
        InputFormat::Yaml => Ok(serde_yaml::from_str(content)?),
        InputFormat::Lines => Err(PantryMatchError::invalid_shape(
            what,
            "expected a JSON or YAML document, not a line list",
        )),
    }
}

/// Parse a recipes document.
///
/// Accepts a single recipe object, an array of recipes, or an object with
/// a `recipes` array. Blank input is an error.
pub fn parse_recipes_str(content: &str, format: InputFormat) -> Result<Vec<Recipe>> {
    if content.trim().is_empty() {
        return Err(PantryMatchError::empty_input("recipes"));
    }
    let document: RecipeDocument = deserialize(content, format, "recipes")?;
    Ok(document.into_recipes())
}

/// Parse a pantry list. Blank input is an empty pantry.
pub fn parse_pantry_str(content: &str, format: InputFormat) -> Result<Pantry> {
    if content.trim().is_empty() {
        return Ok(Pantry::empty());
    }
    let names = match format {
        InputFormat::Lines => lines_to_names(content),
        InputFormat::Json | InputFormat::Yaml => {
            deserialize::<PantryDocument>(content, format, "pantry")?.into_names()
        }
    };
    Ok(Pantry::from(names))
}

/// Parse a preferences record. Blank input means no preferences.
pub fn parse_preferences_str(content: &str, format: InputFormat) -> Result<UserPreferences> {
    if content.trim().is_empty() {
        return Ok(UserPreferences::default());
    }
    deserialize(content, format, "preferences")
}

fn read_input(path: &Path) -> Result<(String, InputFormat)> {
    let metadata = std::fs::metadata(path).map_err(|e| PantryMatchError::io(path, e))?;
    if metadata.len() > MAX_INPUT_FILE_SIZE {
        return Err(PantryMatchError::validation(format!(
            "{} is {} MB, exceeding the {} MB limit",
            path.display(),
            metadata.len() / (1024 * 1024),
            MAX_INPUT_FILE_SIZE / (1024 * 1024),
        )));
    }
    let content = std::fs::read_to_string(path).map_err(|e| PantryMatchError::io(path, e))?;
    let format = InputFormat::detect(path, &content);
    Ok((content, format))
}

/// Read and parse a recipes file.
pub fn parse_recipes_file(path: &Path) -> Result<Vec<Recipe>> {
    let (content, format) = read_input(path)?;
    parse_recipes_str(&content, format)
        .with_context(|| format!("{} ({format})", path.display()))
}

/// Read and parse a pantry file.
pub fn parse_pantry_file(path: &Path) -> Result<Pantry> {
    let (content, format) = read_input(path)?;
    parse_pantry_str(&content, format).with_context(|| format!("{} ({format})", path.display()))
}

/// Read and parse a preferences file.
pub fn parse_preferences_file(path: &Path) -> Result<UserPreferences> {
    let (content, format) = read_input(path)?;
    parse_preferences_str(&content, format)
        .with_context(|| format!("{} ({format})", path.display()))
}
