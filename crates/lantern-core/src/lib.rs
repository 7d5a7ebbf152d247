// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Lantern fixture engine.
//!
//! This crate provides the read-only fixture model, the fine-channel index,
//! the feature and export plugin traits, and the error and result types shared
//! by every other crate in the workspace.

pub mod error;
pub mod fine;
pub mod fixture;
pub mod guard;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::LanternError;
pub use fine::{
    index_fine_channels, DefaultFineChannelIndexer, FineChannel, FineChannelIndexer, FineChannels,
};
pub use fixture::{
    Channel, ChannelKind, ChannelRef, Fixture, FixtureId, Mode, NullChannel, Physical,
    SwitchingChannel,
};
pub use traits::{ExportPlugin, FeaturePlugin};
pub use types::{
    ErrorInfo, ErrorKind, ExportOptions, FeatureResult, FeatureStatus, FileContent, OutputFile,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lantern_error_has_all_variants() {
        let _shape = LanternError::plugin_shape("src", "name", "must not be empty");
        let _unknown = LanternError::UnknownExportTarget { key: "x".into() };
        let _dup = LanternError::DuplicateOutputName {
            plugin: "x".into(),
            name: "a".into(),
        };
        let _unsafe = LanternError::UnsafeOutputName {
            plugin: "x".into(),
            name: "../a".into(),
        };
        let _feature = LanternError::Feature {
            plugin: "x".into(),
            fixture: "a/b".into(),
            message: "m".into(),
        };
        let _export = LanternError::Export {
            plugin: "x".into(),
            message: "m".into(),
        };
        let _invalid = LanternError::InvalidFixture {
            fixture: "a/b".into(),
            message: "m".into(),
        };
        let _timeout = LanternError::Timeout {
            duration: std::time::Duration::from_millis(5),
        };
        let _config = LanternError::Config("test".into());
        let _io = LanternError::Io(std::io::Error::other("test"));
        let _internal = LanternError::Internal("test".into());
    }

    #[test]
    fn channel_kind_round_trips_through_strings() {
        use std::str::FromStr;

        for kind in [
            ChannelKind::Intensity,
            ChannelKind::ColorIntensity,
            ChannelKind::Pan,
            ChannelKind::Nothing,
        ] {
            let parsed = ChannelKind::from_str(&kind.to_string()).expect("should parse back");
            assert_eq!(kind, parsed);
        }
    }

    #[test]
    fn plugin_traits_are_object_safe() {
        fn _assert_feature(_: &dyn FeaturePlugin) {}
        fn _assert_export(_: &dyn ExportPlugin) {}
        fn _assert_indexer(_: &dyn FineChannelIndexer) {}
    }
}
