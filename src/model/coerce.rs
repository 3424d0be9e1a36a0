//! Boundary coercion for loosely shaped input records.
//!
//! Recipe and preference records arrive from collaborators that are not
//! strict about types: numbers may be strings, lists may be `null`, and
//! ingredient entries may be objects instead of plain names. These serde
//! helpers fold all of that into the typed model so the scoring core only
//! ever sees well-formed values.

use serde::{Deserialize, Deserializer};

/// A number that may have been serialized as a string.
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Number(f64),
    Text(String),
}

impl LooseNumber {
    fn value(self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(n),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
        }
        .filter(|n| n.is_finite())
    }
}

/// A list entry that is either a bare name or an object with a `name` field.
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseItem {
    Name(String),
    Named { name: String },
}

impl LooseItem {
    fn into_name(self) -> String {
        match self {
            Self::Name(name) | Self::Named { name } => name,
        }
    }
}

/// A single name or a list of names.
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseList {
    One(String),
    Many(Vec<Option<LooseItem>>),
}

/// An identifier that may be numeric.
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseId {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// Deserialize a number, treating `null` and unparseable values as `0`.
pub fn number_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<LooseNumber> = Option::deserialize(deserializer)?;
    Ok(value.and_then(LooseNumber::value).unwrap_or(0.0))
}

/// Deserialize an optional limit. Only finite, strictly positive values are kept.
pub fn positive_limit<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<LooseNumber> = Option::deserialize(deserializer)?;
    Ok(value.and_then(LooseNumber::value).filter(|n| *n > 0.0))
}

/// Deserialize a string, treating `null` as empty.
pub fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Deserialize a list of names.
///
/// Accepts `null`, a single string, or an array whose entries are strings,
/// `{ "name": ... }` objects, or `null` (skipped).
pub fn name_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<LooseList> = Option::deserialize(deserializer)?;
    Ok(match value {
        None => Vec::new(),
        Some(LooseList::One(name)) => vec![name],
        Some(LooseList::Many(items)) => items
            .into_iter()
            .flatten()
            .map(LooseItem::into_name)
            .collect(),
    })
}

/// Deserialize an optional identifier, stringifying numbers.
pub fn optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<LooseId> = Option::deserialize(deserializer)?;
    Ok(value.map(|id| match id {
        LooseId::Text(s) => s,
        LooseId::Integer(n) => n.to_string(),
        LooseId::Float(f) => f.to_string(),
    }))
}
