// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin sources, untyped descriptors, and discovery strategies.
//!
//! A [`PluginSource`] is whatever unit the discovery mechanism yields (a
//! built-in module, a config entry, an explicit list). Each source exports one
//! plugin or a batch of related plugins. How sources are found is a
//! [`PluginDiscovery`] strategy; the registry only sees the resulting list.

use std::collections::BTreeSet;
use std::sync::Arc;

use lantern_core::{FeaturePlugin, FineChannels, Fixture, LanternError};

/// Predicate signature carried by a [`FeatureDescriptor`].
pub type FeaturePredicate =
    Arc<dyn Fn(&Fixture, &FineChannels) -> Result<bool, LanternError> + Send + Sync>;

/// Loosely-filled plugin description, checked when the registry is built.
///
/// Useful for plugins assembled from configuration or closures rather than a
/// dedicated type. Missing fields are reported as
/// [`LanternError::PluginShape`] at load time, before any fixture is seen.
#[derive(Clone, Default)]
pub struct FeatureDescriptor {
    pub name: Option<String>,
    pub description: Option<String>,
    pub order: Option<i64>,
    pub has_feature: Option<FeaturePredicate>,
}

impl FeatureDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }

    pub fn predicate<F>(mut self, f: F) -> Self
    where
        F: Fn(&Fixture, &FineChannels) -> Result<bool, LanternError> + Send + Sync + 'static,
    {
        self.has_feature = Some(Arc::new(f));
        self
    }

    /// Checks required fields and turns the descriptor into a plugin.
    pub fn validate(self, origin: &str) -> Result<Arc<dyn FeaturePlugin>, LanternError> {
        let name = self
            .name
            .ok_or_else(|| LanternError::plugin_shape(origin, "name", "is missing"))?;
        let has_feature = self.has_feature.ok_or_else(|| {
            LanternError::plugin_shape(origin, "has_feature", "is missing a predicate")
        })?;
        Ok(Arc::new(DescriptorPlugin {
            name,
            description: self.description,
            order: self.order,
            has_feature,
        }))
    }
}

impl std::fmt::Debug for FeatureDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureDescriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("order", &self.order)
            .field("has_feature", &self.has_feature.is_some())
            .finish()
    }
}

/// A validated descriptor.
struct DescriptorPlugin {
    name: String,
    description: Option<String>,
    order: Option<i64>,
    has_feature: FeaturePredicate,
}

impl FeaturePlugin for DescriptorPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn order(&self) -> Option<i64> {
        self.order
    }

    fn has_feature(
        &self,
        fixture: &Fixture,
        fine_channels: &FineChannels,
    ) -> Result<bool, LanternError> {
        (self.has_feature)(fixture, fine_channels)
    }
}

/// One plugin as yielded by a source: a typed plugin or an unchecked descriptor.
#[derive(Clone)]
pub enum PluginItem {
    Plugin(Arc<dyn FeaturePlugin>),
    Descriptor(FeatureDescriptor),
}

impl PluginItem {
    /// The declared name, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            PluginItem::Plugin(p) => Some(p.name()),
            PluginItem::Descriptor(d) => d.name.as_deref(),
        }
    }

    pub(crate) fn into_plugin(self, origin: &str) -> Result<Arc<dyn FeaturePlugin>, LanternError> {
        match self {
            PluginItem::Plugin(p) => Ok(p),
            PluginItem::Descriptor(d) => d.validate(origin),
        }
    }
}

impl std::fmt::Debug for PluginItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PluginItem::Plugin(p) => f.debug_tuple("Plugin").field(&p.name()).finish(),
            PluginItem::Descriptor(d) => f.debug_tuple("Descriptor").field(d).finish(),
        }
    }
}

/// What a source exports.
#[derive(Debug, Clone)]
pub enum SourceExport {
    Single(PluginItem),
    /// Several related checks grouped in one source.
    Batch(Vec<PluginItem>),
}

/// A unit of plugin discovery with a stable identifier used in error messages.
#[derive(Debug, Clone)]
pub struct PluginSource {
    pub id: String,
    pub export: SourceExport,
}

impl PluginSource {
    pub fn single(id: impl Into<String>, plugin: impl FeaturePlugin + 'static) -> Self {
        Self {
            id: id.into(),
            export: SourceExport::Single(PluginItem::Plugin(Arc::new(plugin))),
        }
    }

    pub fn batch(id: impl Into<String>, plugins: Vec<Arc<dyn FeaturePlugin>>) -> Self {
        Self {
            id: id.into(),
            export: SourceExport::Batch(plugins.into_iter().map(PluginItem::Plugin).collect()),
        }
    }

    pub fn descriptor(id: impl Into<String>, descriptor: FeatureDescriptor) -> Self {
        Self {
            id: id.into(),
            export: SourceExport::Single(PluginItem::Descriptor(descriptor)),
        }
    }

    /// Items in declaration order.
    pub fn into_items(self) -> Vec<PluginItem> {
        match self.export {
            SourceExport::Single(item) => vec![item],
            SourceExport::Batch(items) => items,
        }
    }
}

/// Strategy that locates plugin sources.
pub trait PluginDiscovery {
    fn discover(&self) -> Result<Vec<PluginSource>, LanternError>;
}

/// Discovery over an explicit, in-memory list of sources.
#[derive(Debug, Clone, Default)]
pub struct StaticDiscovery {
    sources: Vec<PluginSource>,
}

impl StaticDiscovery {
    pub fn new(sources: Vec<PluginSource>) -> Self {
        Self { sources }
    }

    pub fn push(&mut self, source: PluginSource) {
        self.sources.push(source);
    }
}

impl PluginDiscovery for StaticDiscovery {
    fn discover(&self) -> Result<Vec<PluginSource>, LanternError> {
        Ok(self.sources.clone())
    }
}

/// Wraps another discovery and drops plugins disabled by name.
///
/// Unnamed descriptors are kept so the registry can reject them.
#[derive(Debug)]
pub struct FilteredDiscovery<D> {
    inner: D,
    disabled: BTreeSet<String>,
}

impl<D: PluginDiscovery> FilteredDiscovery<D> {
    pub fn new(inner: D, disabled: impl IntoIterator<Item = String>) -> Self {
        Self {
            inner,
            disabled: disabled.into_iter().collect(),
        }
    }
}

impl<D: PluginDiscovery> PluginDiscovery for FilteredDiscovery<D> {
    fn discover(&self) -> Result<Vec<PluginSource>, LanternError> {
        let keep = |item: &PluginItem| match item.name() {
            Some(name) => !self.disabled.contains(name),
            None => true,
        };

        let discovered = self.inner.discover()?;
        {
            let seen: BTreeSet<&str> = discovered
                .iter()
                .flat_map(|source| match &source.export {
                    SourceExport::Single(item) => std::slice::from_ref(item),
                    SourceExport::Batch(items) => items.as_slice(),
                })
                .filter_map(PluginItem::name)
                .collect();
            for name in self.disabled.iter().filter(|n| !seen.contains(n.as_str())) {
                tracing::warn!(plugin = %name, "disabled plugin name matches no discovered plugin");
            }
        }

        let mut sources = Vec::new();
        for source in discovered {
            let export = match source.export {
                SourceExport::Single(item) if keep(&item) => SourceExport::Single(item),
                SourceExport::Single(item) => {
                    tracing::debug!(source = %source.id, plugin = ?item.name(), "plugin disabled");
                    continue;
                }
                SourceExport::Batch(items) => {
                    SourceExport::Batch(items.into_iter().filter(|i| keep(i)).collect())
                }
            };
            sources.push(PluginSource {
                id: source.id,
                export,
            });
        }
        Ok(sources)
    }
}
