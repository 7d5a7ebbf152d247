// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `lantern export`: dispatch one exporter and write its files.

use std::path::{Path, PathBuf};

use lantern_config::LanternConfig;
use lantern_core::{LanternError, OutputFile};
use lantern_plugin::is_safe_output_name;
use tracing::info;

use crate::library::load_library;
use crate::plugins::build_plugin_set;

/// Writes `files` under `out_dir`, creating parent directories.
///
/// Every name is checked before anything is written, so an unsafe name
/// leaves the output directory untouched.
pub fn write_outputs(
    plugin: &str,
    files: &[OutputFile],
    out_dir: &Path,
) -> Result<Vec<PathBuf>, LanternError> {
    if let Some(bad) = files.iter().find(|f| !is_safe_output_name(&f.name)) {
        return Err(LanternError::UnsafeOutputName {
            plugin: plugin.to_string(),
            name: bad.name.clone(),
        });
    }

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = out_dir.join(&file.name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, file.content.as_bytes())?;
        written.push(path);
    }
    Ok(written)
}

pub fn run_export(
    config: &LanternConfig,
    key: &str,
    files: &[PathBuf],
    out: Option<PathBuf>,
) -> Result<(), LanternError> {
    let library = load_library(files)?;
    let plugins = build_plugin_set(config)?;
    let options = config.export.options();

    let outputs = if config.export.validate_names {
        plugins.exports.dispatch_validated(key, &library, &options)?
    } else {
        plugins.exports.dispatch_with_options(key, &library, &options)?
    };

    let out_dir = out.unwrap_or_else(|| PathBuf::from(&config.export.output_dir));
    let written = write_outputs(key, &outputs, &out_dir)?;
    info!(plugin = %key, files = written.len(), dir = %out_dir.display(), "export written");
    for path in &written {
        println!("{}", path.display());
    }
    Ok(())
}
