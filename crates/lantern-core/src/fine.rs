// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fine-channel index derived from a fixture.
//!
//! The index is built once per fixture before any feature plugin runs and is
//! shared read-only by every plugin inspecting that fixture.

use std::collections::BTreeMap;

use crate::fixture::Fixture;

/// Where a fine-channel alias points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FineChannel {
    /// Key of the coarse channel in `available_channels`.
    pub coarse_channel: String,
    /// 1 for the 16-bit byte, 2 for the 24-bit byte, ...
    pub fine_index: usize,
}

/// Mapping from fine-channel alias to its coarse channel.
///
/// An empty index is valid and means the fixture has no fine channels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FineChannels {
    entries: BTreeMap<String, FineChannel>,
}

impl FineChannels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, alias: &str) -> Option<&FineChannel> {
        self.entries.get(alias)
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.entries.contains_key(alias)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FineChannel)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Highest fine index present, 0 when there are no fine channels.
    pub fn max_fine_index(&self) -> usize {
        self.entries.values().map(|f| f.fine_index).max().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Strategy for building the fine-channel index of a fixture.
///
/// The engine calls [`FineChannelIndexer::build`] exactly once per fixture per
/// evaluation run.
pub trait FineChannelIndexer: Send + Sync {
    fn build(&self, fixture: &Fixture) -> FineChannels;
}

/// Indexes the `fine_channel_aliases` of every available channel.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFineChannelIndexer;

impl FineChannelIndexer for DefaultFineChannelIndexer {
    fn build(&self, fixture: &Fixture) -> FineChannels {
        index_fine_channels(fixture)
    }
}

/// Builds the fine-channel index for `fixture`.
///
/// If two channels claim the same alias the first one (by channel key) wins;
/// the loader is expected to reject such fixtures before they get here.
pub fn index_fine_channels(fixture: &Fixture) -> FineChannels {
    let mut entries = BTreeMap::new();
    for (key, channel) in &fixture.available_channels {
        for (pos, alias) in channel.fine_channel_aliases.iter().enumerate() {
            if entries.contains_key(alias) {
                tracing::warn!(
                    fixture = %fixture.id(),
                    alias = %alias,
                    "duplicate fine channel alias ignored"
                );
                continue;
            }
            entries.insert(
                alias.clone(),
                FineChannel {
                    coarse_channel: key.clone(),
                    fine_index: pos + 1,
                },
            );
        }
    }
    FineChannels { entries }
}
