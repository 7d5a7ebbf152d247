// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-feature coverage derived from a feature matrix.
//!
//! This is the data behind the capability table shown by reporting layers:
//! which fixtures exhibit each feature, which pairs errored, and which
//! features no fixture in the library exercises.

use lantern_core::FixtureId;
use lantern_plugin::FeatureRegistry;
use serde::Serialize;

use crate::matrix::FeatureMatrix;

/// Coverage of one feature across the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureCoverage {
    pub name: String,
    pub description: Option<String>,
    /// Fixtures where the feature is present.
    pub fixtures: Vec<FixtureId>,
    /// Fixtures where evaluation errored.
    pub errored: Vec<FixtureId>,
}

/// Coverage of every feature, in registry order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    pub features: Vec<FeatureCoverage>,
}

impl CoverageReport {
    pub fn build(matrix: &FeatureMatrix, registry: &FeatureRegistry) -> Self {
        let features = matrix
            .plugin_order()
            .iter()
            .map(|name| {
                let mut fixtures = Vec::new();
                let mut errored = Vec::new();
                for id in matrix.fixture_ids() {
                    match matrix.get(&id.0, name) {
                        Some(r) if r.error.is_some() => errored.push(id.clone()),
                        Some(r) if r.matched => fixtures.push(id.clone()),
                        _ => {}
                    }
                }
                FeatureCoverage {
                    name: name.clone(),
                    description: registry
                        .get(name)
                        .and_then(|f| f.plugin.description())
                        .map(str::to_string),
                    fixtures,
                    errored,
                }
            })
            .collect();
        Self { features }
    }

    /// Features every fixture definitely lacks.
    ///
    /// A feature with any errored pair is not listed: an error is not a
    /// negative result. See [`CoverageReport::undetermined`].
    pub fn uncovered(&self) -> Vec<&str> {
        self.features
            .iter()
            .filter(|f| f.fixtures.is_empty() && f.errored.is_empty())
            .map(|f| f.name.as_str())
            .collect()
    }

    /// Features no fixture exhibits where at least one pair errored.
    pub fn undetermined(&self) -> Vec<&str> {
        self.features
            .iter()
            .filter(|f| f.fixtures.is_empty() && !f.errored.is_empty())
            .map(|f| f.name.as_str())
            .collect()
    }

    /// Whether any pair errored.
    pub fn has_errors(&self) -> bool {
        self.features.iter().any(|f| !f.errored.is_empty())
    }
}
