//! Input format detection.
//!
//! The file extension wins when it is recognized. Otherwise the content is
//! sniffed: a leading `{` or `[` means JSON, YAML markers (`---`, `- item`,
//! `key:`) mean YAML, and anything else is treated as one name per line.

use std::fmt;
use std::path::Path;

/// Serialization of an input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
    /// One name per line; blank lines and `#` comments are skipped
    Lines,
}

impl InputFormat {
    /// Get the human-readable name for this format.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
            Self::Lines => "line list",
        }
    }

    /// Format implied by a file extension, if recognized.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "txt" | "list" | "lst" => Some(Self::Lines),
            _ => None,
        }
    }

    /// Guess the format from content alone.
    #[must_use]
    pub fn detect_from_content(content: &str) -> Self {
        let trimmed = content.trim_start();
        if trimmed.starts_with('{') || trimmed.starts_with('[') {
            return Self::Json;
        }

        let first_line = trimmed
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty() && !line.starts_with('#'));

        match first_line {
            Some(line) if looks_like_yaml(line) => Self::Yaml,
            _ => Self::Lines,
        }
    }

    /// Format for a file: its extension if recognized, else sniffed content.
    #[must_use]
    pub fn detect(path: &Path, content: &str) -> Self {
        Self::from_path(path).unwrap_or_else(|| Self::detect_from_content(content))
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn looks_like_yaml(line: &str) -> bool {
    if line.starts_with("---") || line.starts_with("- ") || line == "-" {
        return true;
    }
    // A bare `key:` mapping entry. Keys with spaces are more likely item names.
    line.split_once(':').is_some_and(|(key, _)| {
        !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    })
}
