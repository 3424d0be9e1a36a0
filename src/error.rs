//! Error types for pantry-match.
//!
//! Scoring itself never fails. Errors only arise at the edges: reading and
//! parsing input snapshots, and loading configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for pantry-match operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PantryMatchError {
    /// Errors while parsing recipes, pantry lists or preferences
    #[error("Failed to parse input: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),

    #[error("Unexpected document shape: {0}")]
    InvalidShape(String),

    #[error("Input is empty")]
    EmptyInput,
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for pantry-match operations
pub type Result<T> = std::result::Result<T, PantryMatchError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl PantryMatchError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a parse error for a document with the wrong top-level shape
    pub fn invalid_shape(what: impl Into<String>, message: impl Into<String>) -> Self {
        Self::parse(what, ParseErrorKind::InvalidShape(message.into()))
    }

    /// Create a parse error for blank input
    pub fn empty_input(what: impl Into<String>) -> Self {
        Self::parse(what, ParseErrorKind::EmptyInput)
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for PantryMatchError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for PantryMatchError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(
            "JSON deserialization",
            ParseErrorKind::InvalidJson(err.to_string()),
        )
    }
}

impl From<serde_yaml::Error> for PantryMatchError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::parse(
            "YAML deserialization",
            ParseErrorKind::InvalidYaml(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// # Example
///
/// ```ignore
/// use pantry_match::error::ErrorContext;
///
/// fn load_recipes(path: &Path) -> Result<Vec<Recipe>> {
///     let content = std::fs::read_to_string(path).context("reading recipes")?;
///     parse_recipes_str(&content, InputFormat::Json)
///         .with_context(|| format!("parsing recipes from {}", path.display()))
/// }
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    ///
    /// The context string is prepended to the error's existing context.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<PantryMatchError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: PantryMatchError, new_ctx: &str) -> PantryMatchError {
    match err {
        PantryMatchError::Parse {
            context: existing,
            source,
        } => PantryMatchError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        PantryMatchError::Io {
            path,
            message,
            source,
        } => PantryMatchError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        PantryMatchError::Validation(msg) => {
            PantryMatchError::Validation(chain_context(new_ctx, &msg))
        }
    }
}

/// Join a new context in front of an existing one: "`new`: `existing`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PantryMatchError::invalid_shape("recipes", "expected an object or array");
        let display = err.to_string();
        assert!(display.contains("recipes"), "unexpected message: {display}");

        let err = PantryMatchError::empty_input("pantry.txt");
        assert!(err.to_string().contains("pantry.txt"));
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = PantryMatchError::io("/path/to/recipes.json", io_err);
        assert!(err.to_string().contains("/path/to/recipes.json"));
    }

    #[test]
    fn test_context_chaining_multiple_levels() {
        fn inner() -> Result<()> {
            Err(PantryMatchError::parse("base", ParseErrorKind::EmptyInput))
        }

        fn outer() -> Result<()> {
            inner().context("middle layer").context("outer layer")
        }

        match outer() {
            Err(PantryMatchError::Parse { context, .. }) => {
                assert_eq!(context, "outer layer: middle layer: base");
            }
            other => panic!("Expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_with_context_is_lazy() {
        let mut called = false;
        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called);

        let err_result: Result<i32> = Err(PantryMatchError::validation("error"));
        let _ = err_result.with_context(|| {
            called = true;
            "should be called"
        });
        assert!(called);
    }

    #[test]
    fn test_serde_errors_convert() {
        let json_err = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        assert!(matches!(
            PantryMatchError::from(json_err),
            PantryMatchError::Parse {
                source: ParseErrorKind::InvalidJson(_),
                ..
            }
        ));

        let yaml_err = serde_yaml::from_str::<Vec<String>>("a: [").unwrap_err();
        assert!(matches!(
            PantryMatchError::from(yaml_err),
            PantryMatchError::Parse {
                source: ParseErrorKind::InvalidYaml(_),
                ..
            }
        ));
    }
}
