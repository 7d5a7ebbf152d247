// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Flat listing of every loaded plugin, for `lantern plugins` and UIs.

use serde::Serialize;
use strum::Display;

use crate::hot::PluginSet;

/// Which registry a catalog entry comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PluginKind {
    Feature,
    Export,
}

/// Display data for one plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub kind: PluginKind,
    /// Feature name or export key.
    pub id: String,
    pub description: String,
    /// Effective order for features, version for exports.
    pub detail: String,
}

/// Lists features in registry order, then exports sorted by key.
pub fn catalog(plugins: &PluginSet) -> Vec<CatalogEntry> {
    let features = plugins.features.iter().map(|f| CatalogEntry {
        kind: PluginKind::Feature,
        id: f.name().to_string(),
        description: f.plugin.description().unwrap_or_default().to_string(),
        detail: format!("order {}", f.order),
    });
    let exports = plugins.exports.iter().map(|e| CatalogEntry {
        kind: PluginKind::Export,
        id: e.key().to_string(),
        description: e.name().to_string(),
        detail: format!("v{}", e.version()),
    });
    features.chain(exports).collect()
}

/// Filters the catalog by a case-insensitive substring of id or description.
///
/// An empty query returns everything.
pub fn search_catalog(plugins: &PluginSet, query: &str) -> Vec<CatalogEntry> {
    if query.is_empty() {
        return catalog(plugins);
    }
    let query_lower = query.to_lowercase();
    catalog(plugins)
        .into_iter()
        .filter(|e| {
            e.id.to_lowercase().contains(&query_lower)
                || e.description.to_lowercase().contains(&query_lower)
        })
        .collect()
}
