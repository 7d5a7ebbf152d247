// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `lantern plugins` and plugin set construction shared by the commands.

use lantern_config::LanternConfig;
use lantern_core::LanternError;
use lantern_features::BuiltinDiscovery;
use lantern_plugin::{search_catalog, CatalogEntry, FeatureRegistry, FilteredDiscovery, PluginSet};

/// Built-in features minus `features.disabled`, plus the built-in exporters.
pub fn build_plugin_set(config: &LanternConfig) -> Result<PluginSet, LanternError> {
    let discovery = FilteredDiscovery::new(BuiltinDiscovery, config.features.disabled.clone());
    Ok(PluginSet {
        features: FeatureRegistry::from_discovery(&discovery)?,
        exports: lantern_export::builtin_registry()?,
    })
}

fn render(entries: &[CatalogEntry]) -> String {
    let mut out = String::new();
    for e in entries {
        out.push_str(&format!(
            "{:<8} {:<28} {:<10} {}\n",
            e.kind.to_string(),
            e.id,
            e.detail,
            e.description
        ));
    }
    out
}

pub fn run_plugins(
    config: &LanternConfig,
    query: Option<&str>,
    json: bool,
) -> Result<(), LanternError> {
    let plugins = build_plugin_set(config)?;
    let entries = search_catalog(&plugins, query.unwrap_or_default());

    if json {
        let out = serde_json::to_string_pretty(&entries)
            .map_err(|e| LanternError::Internal(format!("failed to serialize catalog: {e}")))?;
        println!("{out}");
    } else if entries.is_empty() {
        println!("no plugins match");
    } else {
        print!("{}", render(&entries));
    }
    Ok(())
}
