// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fine-channel indexer that records how often it runs.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use lantern_core::{index_fine_channels, FineChannelIndexer, FineChannels, Fixture};

/// Delegates to the default indexer while counting builds per fixture id.
#[derive(Debug, Default)]
pub struct CountingIndexer {
    total: AtomicUsize,
    per_fixture: Mutex<BTreeMap<String, usize>>,
}

impl CountingIndexer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of builds.
    pub fn total(&self) -> usize {
        self.total.load(Ordering::SeqCst)
    }

    /// Number of builds for `fixture_id`.
    pub fn count_for(&self, fixture_id: &str) -> usize {
        self.per_fixture
            .lock()
            .map(|m| m.get(fixture_id).copied().unwrap_or(0))
            .unwrap_or(0)
    }
}

impl FineChannelIndexer for CountingIndexer {
    fn build(&self, fixture: &Fixture) -> FineChannels {
        self.total.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut per_fixture) = self.per_fixture.lock() {
            *per_fixture.entry(fixture.id().0).or_insert(0) += 1;
        }
        index_fine_channels(fixture)
    }
}
