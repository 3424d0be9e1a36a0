//! Input records consumed by the scoring engine.
//!
//! The engine treats every record as an immutable snapshot. Loose input
//! shapes (numeric strings, `null` lists, ingredient objects) are coerced
//! while deserializing, so the types here are always well formed by the
//! time they reach [`crate::matching`].

pub mod coerce;
mod pantry;
mod preferences;
mod recipe;

pub use pantry::Pantry;
pub use preferences::UserPreferences;
pub use recipe::Recipe;
