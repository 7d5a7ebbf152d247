// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Lantern engine.

use thiserror::Error;

/// The primary error type used across plugin traits, registries and the engine.
#[derive(Debug, Error)]
pub enum LanternError {
    /// A plugin descriptor is malformed (missing name, duplicate name,
    /// missing predicate). Fatal at registry construction.
    #[error("invalid plugin from source `{origin}`: `{field}` {reason}")]
    PluginShape {
        /// Identifier of the plugin source that produced the descriptor.
        origin: String,
        /// The offending descriptor field.
        field: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Export dispatch was asked for a key that is not registered.
    #[error("unknown export target `{key}`")]
    UnknownExportTarget { key: String },

    /// An export plugin returned two files with the same name.
    #[error("export plugin `{plugin}` produced duplicate output file `{name}`")]
    DuplicateOutputName { plugin: String, name: String },

    /// An export plugin returned a file name that is not filesystem-safe.
    #[error("export plugin `{plugin}` produced unsafe output file name `{name}`")]
    UnsafeOutputName { plugin: String, name: String },

    /// A feature plugin failed while inspecting a fixture.
    #[error("feature `{plugin}` failed on fixture `{fixture}`: {message}")]
    Feature {
        plugin: String,
        fixture: String,
        message: String,
    },

    /// An export plugin failed; no output is produced.
    #[error("export plugin `{plugin}` failed: {message}")]
    Export { plugin: String, message: String },

    /// A fixture references something that does not exist (e.g. a mode
    /// channel key missing from the available channels).
    #[error("invalid fixture `{fixture}`: {message}")]
    InvalidFixture { fixture: String, message: String },

    /// A plugin exceeded its time budget.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Configuration errors.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O errors raised by the glue layers (fixture reading, output writing).
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl LanternError {
    /// Shorthand for a [`LanternError::PluginShape`] error.
    pub fn plugin_shape(
        origin: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        LanternError::PluginShape {
            origin: origin.into(),
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugin_shape_message_names_source_and_field() {
        let err = LanternError::plugin_shape("features/rdm", "name", "must not be empty");
        let msg = err.to_string();
        assert!(msg.contains("features/rdm"));
        assert!(msg.contains("`name`"));
        assert!(msg.contains("must not be empty"));
    }

    #[test]
    fn unknown_export_target_names_key() {
        let err = LanternError::UnknownExportTarget {
            key: "does-not-exist".into(),
        };
        assert_eq!(err.to_string(), "unknown export target `does-not-exist`");
    }

    #[test]
    fn io_errors_convert() {
        let err: LanternError = std::io::Error::other("disk gone").into();
        assert!(matches!(err, LanternError::Io(_)));
    }
}
