// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin registries, discovery, export dispatch, and the plugin catalog.
//!
//! Feature plugins are collected from [`PluginSource`]s into a validated,
//! ordered [`FeatureRegistry`]. Export plugins live in an [`ExportRegistry`]
//! and are invoked through [`dispatch`]. Both registries are read-only once
//! built and can be replaced atomically through [`HotSwap`].

pub mod catalog;
pub mod export;
pub mod hot;
pub mod registry;
pub mod source;

pub use catalog::{catalog, search_catalog, CatalogEntry, PluginKind};
pub use export::{dispatch, is_safe_output_name, validate_output_files, ExportRegistry};
pub use hot::{HotSwap, PluginSet};
pub use registry::{FeatureRegistry, RegisteredFeature};
pub use source::{
    FeatureDescriptor, FeaturePredicate, FilteredDiscovery, PluginDiscovery, PluginItem,
    PluginSource, SourceExport, StaticDiscovery,
};
