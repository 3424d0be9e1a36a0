//! Score, rank and explain command handlers.
//!
//! All three load the same inputs and differ only in how the report is built.

use crate::config::{AppConfig, MatchInputs, Validatable};
use crate::matching::RankOptions;
use crate::pipeline::{build_report, exit_code_for, exit_codes, load_inputs, output_report};
use crate::reports::ReportKind;
use anyhow::{bail, Context, Result};

/// Run the `score` command, returning the desired exit code.
pub fn run_score(inputs: MatchInputs, config: AppConfig) -> Result<i32> {
    run_match(ReportKind::Score, &inputs, &config)
}

/// Run the `rank` command, returning the desired exit code.
pub fn run_rank(inputs: MatchInputs, config: AppConfig) -> Result<i32> {
    run_match(ReportKind::Rank, &inputs, &config)
}

/// Run the `explain` command, returning the desired exit code.
pub fn run_explain(inputs: MatchInputs, config: AppConfig) -> Result<i32> {
    run_match(ReportKind::Explain, &inputs, &config)
}

fn run_match(kind: ReportKind, inputs: &MatchInputs, config: &AppConfig) -> Result<i32> {
    let errors = config.validate();
    if !errors.is_empty() {
        let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
        bail!("Invalid configuration:\n  {}", details.join("\n  "));
    }

    let quiet = config.behavior.quiet;
    let matcher = config.scoring.to_matcher();
    let loaded = load_inputs(inputs, quiet)?;

    if !quiet {
        tracing::info!(
            "Scoring {} recipes with '{}' weights",
            loaded.recipes.len(),
            config.scoring.preset
        );
    }

    let options = RankOptions {
        min_score: config.behavior.min_score,
        limit: config.behavior.limit,
    };
    let report = build_report(
        kind,
        &matcher,
        &loaded,
        inputs,
        &config.scoring.preset,
        options,
    );

    output_report(&report, &config.output, quiet)
        .with_context(|| format!("Failed to write {} report", kind.title().to_lowercase()))?;

    let exit_code = exit_code_for(&report, config.behavior.min_score);
    if exit_code == exit_codes::NO_MATCH {
        if let Some(min_score) = config.behavior.min_score {
            tracing::warn!(
                "No recipe reached the minimum score of {min_score} (best: {})",
                report
                    .best_score()
                    .map_or_else(|| "none".to_string(), |s| s.to_string())
            );
        }
    }
    Ok(exit_code)
}
