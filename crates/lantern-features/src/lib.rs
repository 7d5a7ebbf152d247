// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in feature plugins.
//!
//! Each module is one plugin source. Most export a single plugin; some group
//! related checks into a batch (fine-channel depth, switching channels).

pub mod categories;
pub mod fine_channels;
pub mod heads;
pub mod links;
pub mod null_channels;
pub mod physical;
pub mod rdm;
pub mod switching;
pub mod unused;

use std::sync::Arc;

use lantern_core::{FeaturePlugin, LanternError};
use lantern_plugin::{PluginDiscovery, PluginSource};

pub use categories::MultipleCategories;
pub use fine_channels::FineChannelDepth;
pub use heads::Heads;
pub use links::ManualLink;
pub use null_channels::NullChannels;
pub use physical::PhysicalOverride;
pub use rdm::RdmModel;
pub use switching::{SwitchingChannels, SwitchingToFineChannel};
pub use unused::UnusedChannels;

/// Plugin sources for every built-in feature, in discovery order.
pub fn builtin_sources() -> Vec<PluginSource> {
    vec![
        PluginSource::single("categories", MultipleCategories),
        PluginSource::single("null-channels", NullChannels),
        PluginSource::batch("fine-channels", fine_channels::batch()),
        PluginSource::batch("switching", switching::batch()),
        PluginSource::single("physical", PhysicalOverride),
        PluginSource::single("rdm", RdmModel),
        PluginSource::single("heads", Heads),
        PluginSource::single("unused", UnusedChannels),
        PluginSource::single("links", ManualLink),
    ]
}

/// Discovery strategy yielding [`builtin_sources`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinDiscovery;

impl PluginDiscovery for BuiltinDiscovery {
    fn discover(&self) -> Result<Vec<PluginSource>, LanternError> {
        Ok(builtin_sources())
    }
}

pub(crate) fn arc<P: FeaturePlugin + 'static>(plugin: P) -> Arc<dyn FeaturePlugin> {
    Arc::new(plugin)
}
