// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Lookup order: `./lantern.toml` > `~/.config/lantern/lantern.toml` >
//! `/etc/lantern/lantern.toml`, with `LANTERN_` environment overrides on top.

#![allow(clippy::result_large_err)] // figment::Error is external

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::LanternConfig;

pub const SYSTEM_CONFIG: &str = "/etc/lantern/lantern.toml";
pub const LOCAL_CONFIG: &str = "lantern.toml";

const SECTIONS: &[&str] = &["logging", "features", "export"];

pub(crate) fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("lantern/lantern.toml"))
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/lantern/lantern.toml`
/// 3. `~/.config/lantern/lantern.toml`
/// 4. `./lantern.toml`
/// 5. `LANTERN_*` environment variables
pub fn load_config() -> Result<LanternConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no files, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<LanternConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LanternConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<LanternConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LanternConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// The full layered Figment, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(LanternConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG))
        .merge(env_provider())
}

/// Maps `LANTERN_FEATURES_TIME_BUDGET_MS` to `features.time_budget_ms`.
///
/// Only the first underscore after a known section name becomes a dot, so
/// keys containing underscores survive intact.
pub fn env_key(key: &str) -> String {
    for section in SECTIONS {
        if let Some(rest) = key.strip_prefix(section).and_then(|r| r.strip_prefix('_')) {
            return format!("{section}.{rest}");
        }
    }
    key.to_string()
}

fn env_provider() -> Env {
    Env::prefixed("LANTERN_").map(|key| env_key(key.as_str()).into())
}
