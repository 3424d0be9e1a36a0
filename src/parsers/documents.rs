//! Accepted top-level document shapes.

use crate::model::{coerce, Recipe};
use serde::Deserialize;

/// A recipes document: `{ "recipes": [...] }`, a bare array, or one recipe.
#[derive(Deserialize)]
#[serde(untagged)]
pub(super) enum RecipeDocument {
    Wrapped { recipes: Vec<Recipe> },
    Many(Vec<Recipe>),
    One(Recipe),
}

impl RecipeDocument {
    pub(super) fn into_recipes(self) -> Vec<Recipe> {
        match self {
            Self::Wrapped { recipes } | Self::Many(recipes) => recipes,
            Self::One(recipe) => vec![recipe],
        }
    }
}

/// A pantry document: `{ "pantry": [...] }` (or `items`), or a bare list.
///
/// Entries may be names or `{ "name": ... }` objects.
#[derive(Deserialize)]
#[serde(untagged)]
pub(super) enum PantryDocument {
    Wrapped {
        #[serde(alias = "items", deserialize_with = "coerce::name_list")]
        pantry: Vec<String>,
    },
    List(#[serde(deserialize_with = "coerce::name_list")] Vec<String>),
}

impl PantryDocument {
    pub(super) fn into_names(self) -> Vec<String> {
        match self {
            Self::Wrapped { pantry } | Self::List(pantry) => pantry,
        }
    }
}

/// Names from a line list, skipping blanks and `#` comments.
pub(super) fn lines_to_names(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
