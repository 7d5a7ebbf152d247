// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Feature evaluation: every registered plugin against every fixture.
//!
//! Each (fixture, plugin) pair is isolated. A plugin that returns an error,
//! panics, or overruns its time budget yields a result with `matched = false`
//! and an attached [`lantern_core::ErrorInfo`]; the remaining pairs are still
//! evaluated. The fine-channel index is built exactly once per fixture and
//! shared by all plugins of that fixture.
//!
//! Plugins are assumed pure. Under that assumption repeated runs over the same
//! library and registry produce equal matrices. A time budget makes results
//! depend on wall-clock timing and so weakens that guarantee.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use lantern_core::guard::contain;
use lantern_core::{
    DefaultFineChannelIndexer, ErrorKind, FeatureResult, FineChannelIndexer, FineChannels,
    Fixture, FixtureId, LanternError,
};
use lantern_plugin::{FeatureRegistry, RegisteredFeature};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::matrix::FeatureMatrix;

/// Configurable evaluation engine.
#[derive(Clone)]
pub struct Evaluator {
    indexer: Arc<dyn FineChannelIndexer>,
    time_budget: Option<Duration>,
}

impl std::fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Evaluator")
            .field("time_budget", &self.time_budget)
            .finish_non_exhaustive()
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Evaluator with the default fine-channel indexer and no time budget.
    pub fn new() -> Self {
        Self {
            indexer: Arc::new(DefaultFineChannelIndexer),
            time_budget: None,
        }
    }

    /// Replaces the fine-channel indexer.
    pub fn with_indexer(mut self, indexer: Arc<dyn FineChannelIndexer>) -> Self {
        self.indexer = indexer;
        self
    }

    /// Marks any plugin call slower than `budget` as timed out.
    ///
    /// Predicates are synchronous and cannot be interrupted, so the budget is
    /// checked after the call returns.
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }

    /// Evaluates the library sequentially. This is the reference semantics.
    ///
    /// Fixtures sharing an id are evaluated once; later duplicates are skipped.
    pub fn evaluate(&self, library: &[Fixture], registry: &FeatureRegistry) -> FeatureMatrix {
        let mut matrix = FeatureMatrix::new(plugin_order(registry));

        for fixture in library {
            let id = fixture.id();
            if matrix.contains_fixture(&id.0) {
                warn!(fixture = %id, "duplicate fixture id skipped");
                continue;
            }
            let row = self.evaluate_fixture(fixture, registry);
            matrix.insert_row(id, row);
        }

        log_summary(&matrix);
        matrix
    }

    /// Evaluates fixtures on the blocking thread pool, one task per fixture.
    ///
    /// The returned matrix equals the one [`Evaluator::evaluate`] produces.
    pub async fn evaluate_concurrent(
        &self,
        library: Arc<[Fixture]>,
        registry: Arc<FeatureRegistry>,
    ) -> Result<FeatureMatrix, LanternError> {
        let mut matrix = FeatureMatrix::new(plugin_order(&registry));

        let mut tasks = JoinSet::new();
        let mut first_index: BTreeMap<FixtureId, usize> = BTreeMap::new();
        for (index, fixture) in library.iter().enumerate() {
            let id = fixture.id();
            if first_index.contains_key(&id) {
                warn!(fixture = %id, "duplicate fixture id skipped");
                continue;
            }
            first_index.insert(id.clone(), index);

            let evaluator = self.clone();
            let library = Arc::clone(&library);
            let registry = Arc::clone(&registry);
            tasks.spawn_blocking(move || {
                let row = evaluator.evaluate_fixture(&library[index], &registry);
                (id, row)
            });
        }

        while let Some(joined) = tasks.join_next().await {
            let (id, row) = joined
                .map_err(|e| LanternError::Internal(format!("evaluation task failed: {e}")))?;
            matrix.insert_row(id, row);
        }

        log_summary(&matrix);
        Ok(matrix)
    }

    /// Evaluates every registered plugin against one fixture.
    pub fn evaluate_fixture(
        &self,
        fixture: &Fixture,
        registry: &FeatureRegistry,
    ) -> BTreeMap<String, FeatureResult> {
        let id = fixture.id();
        let fine_channels = self.indexer.build(fixture);
        debug!(
            fixture = %id,
            fine_channels = fine_channels.len(),
            plugins = registry.len(),
            "evaluating fixture"
        );

        registry
            .iter()
            .map(|feature| {
                let result = self.evaluate_pair(feature, fixture, &id, &fine_channels);
                (feature.name().to_string(), result)
            })
            .collect()
    }

    fn evaluate_pair(
        &self,
        feature: &RegisteredFeature,
        fixture: &Fixture,
        id: &FixtureId,
        fine_channels: &FineChannels,
    ) -> FeatureResult {
        let name = feature.name();
        let started = Instant::now();
        let outcome = contain(|| feature.plugin.has_feature(fixture, fine_channels));
        let elapsed = started.elapsed();

        let result = match outcome {
            Ok(Ok(matched)) => match self.time_budget {
                Some(budget) if elapsed > budget => FeatureResult::errored(
                    name,
                    id,
                    ErrorKind::TimedOut,
                    LanternError::Timeout { duration: budget }.to_string(),
                ),
                _ => FeatureResult::matched(name, id, matched),
            },
            Ok(Err(err)) => FeatureResult::errored(name, id, ErrorKind::Failed, err.to_string()),
            Err(panic) => FeatureResult::errored(name, id, ErrorKind::Panicked, panic),
        };

        if let Some(error) = &result.error {
            warn!(
                plugin = %name,
                fixture = %id,
                kind = %error.kind,
                error = %error.message,
                "feature evaluation failed"
            );
        }
        result
    }
}

/// Evaluates `library` against `registry` with default settings.
pub fn evaluate(library: &[Fixture], registry: &FeatureRegistry) -> FeatureMatrix {
    Evaluator::new().evaluate(library, registry)
}

fn plugin_order(registry: &FeatureRegistry) -> Vec<String> {
    registry.names().into_iter().map(str::to_string).collect()
}

fn log_summary(matrix: &FeatureMatrix) {
    info!(
        fixtures = matrix.len(),
        features = matrix.plugin_order().len(),
        errors = matrix.errors().len(),
        "feature evaluation complete"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use lantern_core::FeatureStatus;
    use lantern_plugin::PluginSource;
    use lantern_test_utils::{
        ConstFeature, CountingIndexer, FailingFeature, FixtureBuilder, PanickingFeature,
        SlowFeature,
    };

    fn library() -> Vec<Fixture> {
        vec![
            FixtureBuilder::new("acme", "one").build(),
            FixtureBuilder::new("acme", "two").build(),
            FixtureBuilder::new("beta", "three").build(),
        ]
    }

    fn registry(sources: Vec<PluginSource>) -> FeatureRegistry {
        FeatureRegistry::load(sources).unwrap()
    }

    #[test]
    fn every_pair_gets_a_result() {
        let reg = registry(vec![
            PluginSource::single("yes", ConstFeature::new("yes", true)),
            PluginSource::single("no", ConstFeature::new("no", false)),
        ]);
        let matrix = evaluate(&library(), &reg);
        assert_eq!(matrix.len(), 3);
        for id in ["acme/one", "acme/two", "beta/three"] {
            assert!(matrix.get(id, "yes").unwrap().matched);
            assert!(!matrix.get(id, "no").unwrap().matched);
        }
        assert_eq!(matrix.plugin_order(), ["yes", "no"]);
    }

    #[test]
    fn failing_plugin_is_isolated() {
        let reg = registry(vec![
            PluginSource::single("before", ConstFeature::new("before", true)),
            PluginSource::single("broken", FailingFeature::new("broken").only_for("acme/two")),
            PluginSource::single("after", ConstFeature::new("after", true)),
        ]);
        let matrix = evaluate(&library(), &reg);

        let failed = matrix.get("acme/two", "broken").unwrap();
        assert!(!failed.matched);
        assert_eq!(failed.status(), FeatureStatus::Errored);
        let info = failed.error.as_ref().unwrap();
        assert_eq!(info.plugin, "broken");
        assert_eq!(info.fixture.0, "acme/two");
        assert_eq!(info.kind, ErrorKind::Failed);

        assert!(matrix.get("acme/one", "broken").unwrap().matched);
        assert!(matrix.get("acme/two", "after").unwrap().matched);
        assert!(matrix.get("beta/three", "before").unwrap().matched);
        assert_eq!(matrix.errors().len(), 1);
    }

    #[test]
    fn panicking_plugin_is_isolated() {
        let reg = registry(vec![
            PluginSource::single("panics", PanickingFeature::new("panics")),
            PluginSource::single("fine", ConstFeature::new("fine", true)),
        ]);
        let matrix = evaluate(&library(), &reg);
        for id in ["acme/one", "acme/two", "beta/three"] {
            let result = matrix.get(id, "panics").unwrap();
            assert!(!result.matched);
            let info = result.error.as_ref().unwrap();
            assert_eq!(info.kind, ErrorKind::Panicked);
            assert!(info.message.contains("index out of range"));
            assert!(matrix.get(id, "fine").unwrap().matched);
        }
    }

    #[test]
    fn fine_index_built_once_per_fixture() {
        let counter = Arc::new(CountingIndexer::new());
        let reg = registry(vec![
            PluginSource::single("a", ConstFeature::new("a", true)),
            PluginSource::single("b", ConstFeature::new("b", false)),
            PluginSource::single("c", PanickingFeature::new("c")),
        ]);
        let evaluator = Evaluator::new().with_indexer(counter.clone());

        evaluator.evaluate(&library(), &reg);
        assert_eq!(counter.total(), 3);
        assert_eq!(counter.count_for("acme/one"), 1);

        evaluator.evaluate(&library(), &reg);
        assert_eq!(counter.total(), 6);
    }

    #[test]
    fn slow_plugin_over_budget_times_out() {
        let reg = registry(vec![
            PluginSource::single("slow", SlowFeature::new("slow", Duration::from_millis(30))),
            PluginSource::single("quick", ConstFeature::new("quick", true)),
        ]);
        let evaluator = Evaluator::new().with_time_budget(Duration::from_millis(5));
        let library = vec![FixtureBuilder::new("acme", "one").build()];
        let matrix = evaluator.evaluate(&library, &reg);

        let slow = matrix.get("acme/one", "slow").unwrap();
        assert!(!slow.matched);
        assert_eq!(slow.error.as_ref().unwrap().kind, ErrorKind::TimedOut);
        assert!(matrix.get("acme/one", "quick").unwrap().matched);
    }

    #[test]
    fn duplicate_fixture_ids_are_evaluated_once() {
        let counter = Arc::new(CountingIndexer::new());
        let reg = registry(vec![PluginSource::single("a", ConstFeature::new("a", true))]);
        let library = vec![
            FixtureBuilder::new("acme", "one").build(),
            FixtureBuilder::new("acme", "one").name("Shadow").build(),
        ];
        let matrix = Evaluator::new()
            .with_indexer(counter.clone())
            .evaluate(&library, &reg);
        assert_eq!(matrix.len(), 1);
        assert_eq!(counter.total(), 1);
    }

    #[test]
    fn empty_registry_yields_empty_rows() {
        let matrix = evaluate(&library(), &FeatureRegistry::new());
        assert_eq!(matrix.len(), 3);
        assert!(matrix.row("acme/one").unwrap().is_empty());
    }

    #[test]
    #[tracing_test::traced_test]
    fn failures_are_logged_with_pair() {
        let reg = registry(vec![PluginSource::single("broken", FailingFeature::new("broken"))]);
        evaluate(&library()[..1], &reg);
        assert!(logs_contain("feature evaluation failed"));
        assert!(logs_contain("acme/one"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn concurrent_matches_sequential() {
        let reg = Arc::new(registry(vec![
            PluginSource::single("yes", ConstFeature::new("yes", true)),
            PluginSource::single("broken", FailingFeature::new("broken").only_for("beta/three")),
            PluginSource::single("panics", PanickingFeature::new("panics")),
        ]));
        let library: Arc<[Fixture]> = library().into();

        let sequential = Evaluator::new().evaluate(&library, &reg);
        let concurrent = Evaluator::new()
            .evaluate_concurrent(Arc::clone(&library), Arc::clone(&reg))
            .await
            .unwrap();

        assert_eq!(sequential, concurrent);
        assert_eq!(concurrent.plugin_order(), ["yes", "broken", "panics"]);
    }
}
