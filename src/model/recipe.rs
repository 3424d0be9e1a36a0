//! Recipe records as supplied by a recipe data provider.

use super::coerce;
use serde::{Deserialize, Serialize};

/// A recipe snapshot, read-only to the scoring engine.
///
/// Only `ingredients`, `cuisine`, `time` and `calories` take part in
/// scoring. `id` and `name` are carried so reports can label results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Identifier assigned by the recipe provider
    #[serde(
        default,
        deserialize_with = "coerce::optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// Display name
    #[serde(default, alias = "title", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-form ingredient lines, in recipe order
    #[serde(default, deserialize_with = "coerce::name_list")]
    pub ingredients: Vec<String>,
    /// Cuisine label such as "Italian"; may be empty
    #[serde(default, deserialize_with = "coerce::string_or_empty")]
    pub cuisine: String,
    /// Preparation time in minutes
    #[serde(
        default,
        alias = "cookTime",
        alias = "cook_time",
        deserialize_with = "coerce::number_or_zero"
    )]
    pub time: f64,
    /// Energy in kcal
    #[serde(default, deserialize_with = "coerce::number_or_zero")]
    pub calories: f64,
}

impl Recipe {
    /// Create a recipe from its scoring fields.
    pub fn new<I, S>(ingredients: I, cuisine: impl Into<String>, time: f64, calories: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: None,
            name: None,
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            cuisine: cuisine.into(),
            time,
            calories,
        }
    }

    /// Set the identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Label used in reports: the name, else the id, else the fallback.
    #[must_use]
    pub fn label_or(&self, fallback: impl FnOnce() -> String) -> String {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .or(self.id.as_deref())
            .map_or_else(fallback, str::to_string)
    }
}
