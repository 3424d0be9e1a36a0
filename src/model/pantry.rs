//! Pantry item names supplied by an inventory provider.

use serde::{Deserialize, Serialize};

/// The names of items a user currently holds.
///
/// Order does not matter and duplicates have no extra effect: matching is
/// existence based, not count based.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pantry {
    names: Vec<String>,
}

impl Pantry {
    /// Create a pantry from item names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().collect()
    }

    /// An empty pantry.
    #[must_use]
    pub const fn empty() -> Self {
        Self { names: Vec::new() }
    }

    /// Item names as supplied.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Iterate over item names.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of entries, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when the pantry holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Return a copy with one more item.
    #[must_use]
    pub fn with_item(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }
}

impl From<Vec<String>> for Pantry {
    fn from(names: Vec<String>) -> Self {
        Self { names }
    }
}

impl<S: Into<String>> FromIterator<S> for Pantry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
