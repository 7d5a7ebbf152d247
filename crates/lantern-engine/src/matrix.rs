// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The feature matrix: fixture × feature plugin → result.

use std::collections::BTreeMap;

use lantern_core::{ErrorInfo, FeatureResult, FixtureId};
use serde::Serialize;

/// Results of one evaluation run.
///
/// Rows are keyed by fixture id in sorted order; `plugin_order` carries the
/// registry order for callers that render columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FeatureMatrix {
    plugin_order: Vec<String>,
    rows: BTreeMap<FixtureId, BTreeMap<String, FeatureResult>>,
}

impl FeatureMatrix {
    pub fn new(plugin_order: Vec<String>) -> Self {
        Self {
            plugin_order,
            rows: BTreeMap::new(),
        }
    }

    pub(crate) fn insert_row(&mut self, fixture: FixtureId, row: BTreeMap<String, FeatureResult>) {
        self.rows.insert(fixture, row);
    }

    pub(crate) fn contains_fixture(&self, fixture: &str) -> bool {
        self.rows.contains_key(fixture)
    }

    /// Feature names in registry order.
    pub fn plugin_order(&self) -> &[String] {
        &self.plugin_order
    }

    pub fn fixture_ids(&self) -> impl Iterator<Item = &FixtureId> {
        self.rows.keys()
    }

    pub fn row(&self, fixture: &str) -> Option<&BTreeMap<String, FeatureResult>> {
        self.rows.get(fixture)
    }

    pub fn get(&self, fixture: &str, plugin: &str) -> Option<&FeatureResult> {
        self.rows.get(fixture).and_then(|row| row.get(plugin))
    }

    /// Fixtures for which `plugin` matched without error.
    pub fn fixtures_with(&self, plugin: &str) -> Vec<&FixtureId> {
        self.rows
            .iter()
            .filter(|(_, row)| row.get(plugin).is_some_and(|r| r.matched && r.error.is_none()))
            .map(|(id, _)| id)
            .collect()
    }

    /// Every recorded error, by fixture then plugin name.
    pub fn errors(&self) -> Vec<&ErrorInfo> {
        self.rows
            .values()
            .flat_map(|row| row.values())
            .filter_map(|r| r.error.as_ref())
            .collect()
    }

    /// Number of fixtures.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lantern_core::ErrorKind;

    fn matrix() -> FeatureMatrix {
        let a = FixtureId("acme/a".into());
        let b = FixtureId("acme/b".into());
        let mut m = FeatureMatrix::new(vec!["x".into(), "y".into()]);
        m.insert_row(
            a.clone(),
            BTreeMap::from([
                ("x".to_string(), FeatureResult::matched("x", &a, true)),
                (
                    "y".to_string(),
                    FeatureResult::errored("y", &a, ErrorKind::Failed, "bad".into()),
                ),
            ]),
        );
        m.insert_row(
            b.clone(),
            BTreeMap::from([
                ("x".to_string(), FeatureResult::matched("x", &b, false)),
                ("y".to_string(), FeatureResult::matched("y", &b, true)),
            ]),
        );
        m
    }

    #[test]
    fn lookups_by_str() {
        let m = matrix();
        assert_eq!(m.len(), 2);
        assert!(m.get("acme/a", "x").unwrap().matched);
        assert!(m.get("acme/a", "missing").is_none());
        assert!(m.row("acme/zzz").is_none());
    }

    #[test]
    fn fixtures_with_skips_errors_and_negatives() {
        let m = matrix();
        let with_x: Vec<&str> = m.fixtures_with("x").iter().map(|id| id.0.as_str()).collect();
        assert_eq!(with_x, vec!["acme/a"]);
        let with_y: Vec<&str> = m.fixtures_with("y").iter().map(|id| id.0.as_str()).collect();
        assert_eq!(with_y, vec!["acme/b"]);
    }

    #[test]
    fn errors_are_collected() {
        let m = matrix();
        let errors = m.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].plugin, "y");
        assert_eq!(errors[0].kind, ErrorKind::Failed);
    }
}
