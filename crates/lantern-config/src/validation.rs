// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use std::collections::HashSet;

use crate::diagnostic::ConfigError;
use crate::model::LanternConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration.
///
/// Collects every problem instead of stopping at the first.
pub fn validate_config(config: &LanternConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if !LOG_LEVELS.contains(&config.logging.level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "logging.level `{}` must be one of {}",
                config.logging.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if config.features.time_budget_ms == Some(0) {
        errors.push(ConfigError::Validation {
            message: "features.time_budget_ms must be greater than zero".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for name in &config.features.disabled {
        if name.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: "features.disabled entries must not be empty".to_string(),
            });
        } else if !seen.insert(name) {
            errors.push(ConfigError::Validation {
                message: format!("duplicate feature `{name}` in features.disabled"),
            });
        }
    }

    if config.export.output_dir.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "export.output_dir must not be empty".to_string(),
        });
    }

    if config.export.creator.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "export.creator must not be empty".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass() {
        assert!(validate_config(&LanternConfig::default()).is_ok());
    }

    #[test]
    fn all_errors_are_collected() {
        let mut config = LanternConfig::default();
        config.logging.level = "loud".into();
        config.features.time_budget_ms = Some(0);
        config.features.disabled = vec!["RDM".into(), "RDM".into()];
        config.export.output_dir = "  ".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
    }
}
