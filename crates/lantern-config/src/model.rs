// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so typos are reported at
//! startup instead of being silently ignored.

use std::time::Duration;

use lantern_core::ExportOptions;
use serde::{Deserialize, Serialize};

/// Top-level Lantern configuration. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LanternConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Feature evaluation settings.
    #[serde(default)]
    pub features: FeaturesConfig,

    /// Export settings.
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FeaturesConfig {
    /// Feature plugin names to leave out of the registry.
    #[serde(default)]
    pub disabled: Vec<String>,

    /// Per-call budget in milliseconds. Calls exceeding it are recorded as
    /// timed out.
    #[serde(default)]
    pub time_budget_ms: Option<u64>,

    /// Evaluate fixtures in parallel.
    #[serde(default)]
    pub concurrent: bool,
}

impl FeaturesConfig {
    pub fn time_budget(&self) -> Option<Duration> {
        self.time_budget_ms.map(Duration::from_millis)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ExportConfig {
    /// Directory output files are written under.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Creator name recorded in exported files.
    #[serde(default = "default_creator")]
    pub creator: String,

    /// Fixed export date (ISO-8601) for reproducible output.
    #[serde(default)]
    pub date: Option<String>,

    /// Reject duplicate or unsafe output file names before writing.
    #[serde(default = "default_true")]
    pub validate_names: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            creator: default_creator(),
            date: None,
            validate_names: true,
        }
    }
}

impl ExportConfig {
    pub fn options(&self) -> ExportOptions {
        ExportOptions {
            creator: self.creator.clone(),
            date: self.date.clone(),
            ..ExportOptions::default()
        }
    }
}

fn default_output_dir() -> String {
    "out".to_string()
}

fn default_creator() -> String {
    "Lantern".to_string()
}

fn default_true() -> bool {
    true
}
