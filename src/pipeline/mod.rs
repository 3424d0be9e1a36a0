//! Pipeline orchestration for scoring commands.
//!
//! Shared load → score → report logic for the CLI command handlers.

mod inputs;
mod output;
mod report_stage;

pub use inputs::{load_inputs, LoadedInputs};
pub use output::{auto_detect_format, should_use_color, write_output, OutputTarget};
pub use report_stage::{build_report, exit_code_for, output_report};

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to read or parse an input file
    #[error("Failed to load {what} from {path}: {source}")]
    LoadFailed {
        what: &'static str,
        path: String,
        #[source]
        source: crate::error::PantryMatchError,
    },

    /// Report generation or output failed
    #[error("Report failed: {source}")]
    ReportFailed {
        #[source]
        source: anyhow::Error,
    },
}

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// No recipe reached the requested minimum score
    pub const NO_MATCH: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 2;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_values() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::NO_MATCH, 1);
        assert_eq!(exit_codes::ERROR, 2);
    }
}
