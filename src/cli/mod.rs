//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod classify;
mod score;

pub use classify::run_classify;
pub use score::{run_explain, run_rank, run_score};

// Re-export config types used by handlers
pub use crate::config::{AppConfig, MatchInputs};
