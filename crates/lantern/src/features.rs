// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `lantern features`: evaluate the feature registry against a library.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;

use lantern_config::LanternConfig;
use lantern_core::{FeatureStatus, LanternError};
use lantern_engine::{CoverageReport, Evaluator, FeatureMatrix};
use serde::Serialize;

use crate::library::load_library;
use crate::plugins::build_plugin_set;

#[derive(Serialize)]
struct FeaturesReport<'a> {
    matrix: &'a FeatureMatrix,
    coverage: &'a CoverageReport,
}

fn status_cell(status: FeatureStatus, use_color: bool) -> String {
    match (status, use_color) {
        (FeatureStatus::Present, true) => {
            use colored::Colorize;
            "yes".green().to_string()
        }
        (FeatureStatus::Errored, true) => {
            use colored::Colorize;
            "ERR".red().bold().to_string()
        }
        (FeatureStatus::Present, false) => "yes".to_string(),
        (FeatureStatus::Absent, _) => "no".to_string(),
        (FeatureStatus::Errored, false) => "ERR".to_string(),
    }
}

/// One block per fixture, then coverage and errors.
pub fn render_report(matrix: &FeatureMatrix, coverage: &CoverageReport, use_color: bool) -> String {
    let width = matrix
        .plugin_order()
        .iter()
        .map(String::len)
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for id in matrix.fixture_ids() {
        out.push_str(&format!("{id}\n"));
        for name in matrix.plugin_order() {
            if let Some(result) = matrix.get(&id.0, name) {
                out.push_str(&format!(
                    "  {name:<width$}  {}\n",
                    status_cell(result.status(), use_color)
                ));
            }
        }
    }

    out.push('\n');
    for feature in &coverage.features {
        out.push_str(&format!(
            "{:<width$}  {} of {} fixtures\n",
            feature.name,
            feature.fixtures.len(),
            matrix.len()
        ));
    }

    let uncovered = coverage.uncovered();
    if !uncovered.is_empty() {
        out.push_str(&format!("\nnot covered: {}\n", uncovered.join(", ")));
    }
    let undetermined = coverage.undetermined();
    if !undetermined.is_empty() {
        out.push_str(&format!("undetermined: {}\n", undetermined.join(", ")));
    }

    let errors = matrix.errors();
    if !errors.is_empty() {
        out.push_str(&format!("\n{} errors:\n", errors.len()));
        for error in errors {
            out.push_str(&format!("  {error}\n"));
        }
    }
    out
}

pub async fn run_features(
    config: &LanternConfig,
    files: &[PathBuf],
    json: bool,
    plain: bool,
) -> Result<(), LanternError> {
    let library = load_library(files)?;
    let plugins = build_plugin_set(config)?;

    let mut evaluator = Evaluator::new();
    if let Some(budget) = config.features.time_budget() {
        evaluator = evaluator.with_time_budget(budget);
    }

    let registry = Arc::new(plugins.features);
    let matrix = if config.features.concurrent {
        evaluator
            .evaluate_concurrent(Arc::from(library), Arc::clone(&registry))
            .await?
    } else {
        evaluator.evaluate(&library, &registry)
    };
    let coverage = CoverageReport::build(&matrix, &registry);

    if json {
        let report = FeaturesReport {
            matrix: &matrix,
            coverage: &coverage,
        };
        let out = serde_json::to_string_pretty(&report)
            .map_err(|e| LanternError::Internal(format!("failed to serialize report: {e}")))?;
        println!("{out}");
    } else {
        let use_color = !plain && std::io::stdout().is_terminal();
        print!("{}", render_report(&matrix, &coverage, use_color));
    }
    Ok(())
}
