//! User preference records.

use super::coerce;
use serde::{Deserialize, Serialize};

/// A user's dietary, cuisine and budget preferences.
///
/// Every field is optional at the boundary. Empty preference lists mean
/// "no stated preference", and a missing limit means "unconstrained".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    /// Free-form dietary labels such as "seafood" or "gluten-free"
    #[serde(
        default,
        alias = "dietary_preferences",
        deserialize_with = "coerce::name_list"
    )]
    pub dietary_preferences: Vec<String>,
    /// Preferred cuisine labels
    #[serde(
        default,
        alias = "cuisine_preferences",
        deserialize_with = "coerce::name_list"
    )]
    pub cuisine_preferences: Vec<String>,
    /// Maximum preparation time in minutes
    #[serde(
        default,
        alias = "max_cook_time",
        deserialize_with = "coerce::positive_limit",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_cook_time: Option<f64>,
    /// Maximum energy in kcal
    #[serde(
        default,
        alias = "max_calories",
        deserialize_with = "coerce::positive_limit",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_calories: Option<f64>,
}

impl UserPreferences {
    /// Preferences with nothing stated.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dietary preferences.
    #[must_use]
    pub fn with_dietary<I, S>(mut self, prefs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dietary_preferences = prefs.into_iter().map(Into::into).collect();
        self
    }

    /// Set the cuisine preferences.
    #[must_use]
    pub fn with_cuisines<I, S>(mut self, prefs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cuisine_preferences = prefs.into_iter().map(Into::into).collect();
        self
    }

    /// Set the maximum cook time in minutes.
    #[must_use]
    pub const fn with_max_cook_time(mut self, minutes: f64) -> Self {
        self.max_cook_time = Some(minutes);
        self
    }

    /// Set the maximum calories.
    #[must_use]
    pub const fn with_max_calories(mut self, kcal: f64) -> Self {
        self.max_calories = Some(kcal);
        self
    }

    /// True when neither dietary nor cuisine preferences are stated.
    #[must_use]
    pub fn has_no_taste_preferences(&self) -> bool {
        self.dietary_preferences.is_empty() && self.cuisine_preferences.is_empty()
    }
}
