//! Scoring and report output stage.

use super::{
    auto_detect_format, exit_codes, should_use_color, write_output, LoadedInputs, OutputTarget,
    PipelineError,
};
use crate::config::{MatchInputs, OutputConfig};
use crate::matching::{rank_recipes, RankOptions, RankedRecipe, RecipeScorer};
use crate::reports::{
    create_reporter_with_options, MatchReport, ReportEntry, ReportKind, ReportMetadata,
};
use rayon::prelude::*;

/// Score the inputs and assemble a report.
///
/// `Score` and `Explain` keep input order and ignore `options`; `Rank`
/// sorts best first and applies `options`.
pub fn build_report(
    kind: ReportKind,
    scorer: &dyn RecipeScorer,
    inputs: &LoadedInputs,
    paths: &MatchInputs,
    preset: &str,
    options: RankOptions,
) -> MatchReport {
    let LoadedInputs {
        recipes,
        pantry,
        preferences,
    } = inputs;

    let entries: Vec<ReportEntry> = match kind {
        ReportKind::Rank => rank_recipes(scorer, recipes, pantry, preferences, options)
            .into_iter()
            .map(ReportEntry::from)
            .collect(),
        ReportKind::Score => {
            let mut ranked =
                rank_recipes(scorer, recipes, pantry, preferences, RankOptions::default());
            ranked.sort_by_key(|r| r.index);
            ranked.into_iter().map(ReportEntry::from).collect()
        }
        ReportKind::Explain => recipes
            .par_iter()
            .enumerate()
            .map(|(index, recipe)| {
                let breakdown = scorer.explain_match(recipe, pantry, preferences);
                ReportEntry {
                    recipe: RankedRecipe {
                        index,
                        id: recipe.id.clone(),
                        label: recipe.label_or(|| format!("#{}", index + 1)),
                        score: breakdown.total,
                        tier: scorer.classify(breakdown.total),
                    },
                    breakdown: Some(breakdown),
                }
            })
            .collect(),
    };

    let metadata = ReportMetadata {
        recipes_path: Some(paths.recipes.display().to_string()),
        pantry_path: paths.pantry.as_ref().map(|p| p.display().to_string()),
        preferences_path: paths.preferences.as_ref().map(|p| p.display().to_string()),
        preset: preset.to_string(),
        pantry_size: pantry.len(),
    };

    MatchReport::new(kind, metadata, entries)
}

/// Exit code for a finished report.
///
/// With a minimum score, the run fails unless some recipe reaches it.
#[must_use]
pub fn exit_code_for(report: &MatchReport, min_score: Option<u8>) -> i32 {
    match (min_score, report.best_score()) {
        (Some(min), Some(best)) if best >= min => exit_codes::SUCCESS,
        (Some(_), _) => exit_codes::NO_MATCH,
        (None, _) => exit_codes::SUCCESS,
    }
}

/// Render a report and write it to the configured destination.
pub fn output_report(
    report: &MatchReport,
    output: &OutputConfig,
    quiet: bool,
) -> Result<(), PipelineError> {
    let target = OutputTarget::from_option(output.file.clone());
    let format = auto_detect_format(output.format, &target);
    // Files never get ANSI codes.
    let use_color = should_use_color(output.no_color) && matches!(target, OutputTarget::Stdout);

    let reporter = create_reporter_with_options(format, use_color);
    let rendered = reporter
        .generate(report)
        .map_err(|e| PipelineError::ReportFailed { source: e.into() })?;

    write_output(&rendered, &target, quiet).map_err(|source| PipelineError::ReportFailed { source })
}
