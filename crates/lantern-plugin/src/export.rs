// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Export plugin registry and dispatch.
//!
//! Dispatch picks exactly one export plugin by key and runs it over the whole
//! library. It never writes files; the returned [`OutputFile`]s belong to the
//! caller. An unknown key is an error, never a fallback to another target.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use lantern_core::guard::contain;
use lantern_core::{ExportOptions, ExportPlugin, Fixture, LanternError, OutputFile};
use tracing::{info, warn};

/// Registry of export plugins keyed by [`ExportPlugin::key`].
#[derive(Debug, Clone, Default)]
pub struct ExportRegistry {
    plugins: BTreeMap<String, Arc<dyn ExportPlugin>>,
}

impl ExportRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a plugin. Keys must be non-empty and unique.
    pub fn register(&mut self, plugin: Arc<dyn ExportPlugin>) -> Result<(), LanternError> {
        let key = plugin.key();
        let origin = format!("export/{key}");
        if key.trim().is_empty() {
            return Err(LanternError::plugin_shape(origin, "key", "must not be empty"));
        }
        if key.contains(['/', '\\']) {
            return Err(LanternError::plugin_shape(
                origin,
                "key",
                "must not contain path separators",
            ));
        }
        if self.plugins.contains_key(key) {
            return Err(LanternError::plugin_shape(origin, "key", "is already registered"));
        }
        self.plugins.insert(key.to_string(), plugin);
        Ok(())
    }

    /// Get a plugin by key.
    pub fn get(&self, key: &str) -> Option<&Arc<dyn ExportPlugin>> {
        self.plugins.get(key)
    }

    /// Registered keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        self.plugins.keys().map(String::as_str).collect()
    }

    /// Plugins sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn ExportPlugin>> {
        self.plugins.values()
    }

    /// Runs the plugin registered under `key` with default options.
    pub fn dispatch(
        &self,
        key: &str,
        library: &[Fixture],
    ) -> Result<Vec<OutputFile>, LanternError> {
        self.dispatch_with_options(key, library, &ExportOptions::default())
    }

    /// Runs the plugin registered under `key`.
    ///
    /// A plugin error or panic yields [`LanternError::Export`] and no files.
    pub fn dispatch_with_options(
        &self,
        key: &str,
        library: &[Fixture],
        options: &ExportOptions,
    ) -> Result<Vec<OutputFile>, LanternError> {
        let plugin = self
            .plugins
            .get(key)
            .ok_or_else(|| LanternError::UnknownExportTarget { key: key.to_string() })?;

        let files = match contain(|| plugin.export(library, options)) {
            Ok(Ok(files)) => files,
            Ok(Err(err)) => {
                warn!(plugin = %key, error = %err, "export failed");
                return Err(match err {
                    LanternError::Export { .. } => err,
                    other => LanternError::Export {
                        plugin: key.to_string(),
                        message: other.to_string(),
                    },
                });
            }
            Err(panic) => {
                warn!(plugin = %key, panic = %panic, "export plugin panicked");
                return Err(LanternError::Export {
                    plugin: key.to_string(),
                    message: format!("panicked: {panic}"),
                });
            }
        };

        info!(
            plugin = %key,
            fixtures = library.len(),
            files = files.len(),
            "export complete"
        );
        Ok(files)
    }

    /// Dispatches and then checks names with [`validate_output_files`].
    pub fn dispatch_validated(
        &self,
        key: &str,
        library: &[Fixture],
        options: &ExportOptions,
    ) -> Result<Vec<OutputFile>, LanternError> {
        let files = self.dispatch_with_options(key, library, options)?;
        validate_output_files(key, &files)?;
        Ok(files)
    }

    /// Returns the number of registered plugins.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Returns true if no plugins are registered.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

/// Runs the export plugin `key` from `registry` over `library`.
pub fn dispatch(
    key: &str,
    library: &[Fixture],
    registry: &ExportRegistry,
) -> Result<Vec<OutputFile>, LanternError> {
    registry.dispatch(key, library)
}

/// Whether `name` is a relative path that stays inside the output directory.
pub fn is_safe_output_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('/')
        && !name.contains(['\\', '\0', ':'])
        && name
            .split('/')
            .all(|part| !part.is_empty() && part != "." && part != "..")
}

/// Rejects unsafe or duplicate output names.
///
/// Dispatch itself does not call this; callers that want to treat duplicates
/// as plugin bugs do.
pub fn validate_output_files(plugin: &str, files: &[OutputFile]) -> Result<(), LanternError> {
    let mut seen = HashSet::with_capacity(files.len());
    for file in files {
        if !is_safe_output_name(&file.name) {
            return Err(LanternError::UnsafeOutputName {
                plugin: plugin.to_string(),
                name: file.name.clone(),
            });
        }
        if !seen.insert(file.name.as_str()) {
            return Err(LanternError::DuplicateOutputName {
                plugin: plugin.to_string(),
                name: file.name.clone(),
            });
        }
    }
    Ok(())
}
