// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Feature registry: the validated, ordered set of feature plugins.
//!
//! The registry is built once at startup from a list of [`PluginSource`]s and
//! is read-only afterwards. Construction fails on the first malformed or
//! duplicate plugin, since a partially valid plugin set cannot be trusted.
//!
//! Ordering contract: plugins with an explicit `order` come first, ascending,
//! ties broken by discovery order. Plugins without one follow in discovery
//! order and receive effective orders `max_explicit + 1`, `+ 2`, ... Names are
//! never used for ordering.

use std::collections::HashMap;
use std::sync::Arc;

use lantern_core::{FeaturePlugin, LanternError};
use tracing::{debug, info};

use crate::source::{PluginDiscovery, PluginSource};

/// A plugin together with the bookkeeping the registry assigned to it.
#[derive(Debug, Clone)]
pub struct RegisteredFeature {
    pub plugin: Arc<dyn FeaturePlugin>,
    /// Id of the source that provided the plugin.
    pub origin: String,
    /// Effective order after defaults were assigned.
    pub order: i64,
    /// Whether `order` came from the plugin itself.
    pub explicit_order: bool,
}

impl RegisteredFeature {
    pub fn name(&self) -> &str {
        self.plugin.name()
    }
}

/// Ordered, validated collection of feature plugins.
#[derive(Debug, Clone, Default)]
pub struct FeatureRegistry {
    features: Vec<RegisteredFeature>,
    by_name: HashMap<String, usize>,
}

impl FeatureRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and orders the plugins exported by `sources`.
    pub fn load(sources: impl IntoIterator<Item = PluginSource>) -> Result<Self, LanternError> {
        let mut seen: HashMap<String, String> = HashMap::new();
        let mut ordered: Vec<(i64, Arc<dyn FeaturePlugin>, String)> = Vec::new();
        let mut unordered: Vec<(Arc<dyn FeaturePlugin>, String)> = Vec::new();

        for source in sources {
            let origin = source.id.clone();
            for item in source.into_items() {
                let plugin = item.into_plugin(&origin)?;
                let name = plugin.name();

                if name.trim().is_empty() {
                    return Err(LanternError::plugin_shape(
                        &origin,
                        "name",
                        "must not be empty",
                    ));
                }
                if let Some(previous) = seen.get(name) {
                    return Err(LanternError::plugin_shape(
                        &origin,
                        "name",
                        format!("`{name}` is already registered by source `{previous}`"),
                    ));
                }
                seen.insert(name.to_string(), origin.clone());

                match plugin.order() {
                    Some(order) => ordered.push((order, plugin, origin.clone())),
                    None => unordered.push((plugin, origin.clone())),
                }
            }
        }

        // Stable sort keeps discovery order among equal explicit orders.
        ordered.sort_by_key(|(order, _, _)| *order);
        let first_default = ordered.last().map_or(0, |(order, _, _)| order.saturating_add(1));

        let mut features = Vec::with_capacity(ordered.len() + unordered.len());
        features.extend(ordered.into_iter().map(|(order, plugin, origin)| RegisteredFeature {
            plugin,
            origin,
            order,
            explicit_order: true,
        }));
        features.extend(unordered.into_iter().enumerate().map(|(k, (plugin, origin))| {
            RegisteredFeature {
                plugin,
                origin,
                order: first_default.saturating_add(k as i64),
                explicit_order: false,
            }
        }));

        let by_name = features
            .iter()
            .enumerate()
            .map(|(i, f)| (f.name().to_string(), i))
            .collect();

        for feature in &features {
            debug!(
                plugin = %feature.name(),
                origin = %feature.origin,
                order = feature.order,
                "feature plugin registered"
            );
        }
        info!(count = features.len(), "feature registry loaded");

        Ok(Self { features, by_name })
    }

    /// Runs `discovery` and loads whatever it yields.
    pub fn from_discovery(discovery: &dyn PluginDiscovery) -> Result<Self, LanternError> {
        Self::load(discovery.discover()?)
    }

    /// Get a feature by name.
    pub fn get(&self, name: &str) -> Option<&RegisteredFeature> {
        self.by_name.get(name).map(|&i| &self.features[i])
    }

    /// Features in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredFeature> {
        self.features.iter()
    }

    /// Plugin names in registry order.
    pub fn names(&self) -> Vec<&str> {
        self.features.iter().map(RegisteredFeature::name).collect()
    }

    /// Returns the number of registered plugins.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns true if no plugins are registered.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
