// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Atomic hot-swap of read-only plugin registries.
//!
//! Readers take a snapshot with [`HotSwap::load`] and keep using it for the
//! whole run. A reload builds a complete new value and swaps the reference in
//! one step, so nobody ever observes a half-updated plugin set.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::export::ExportRegistry;
use crate::registry::FeatureRegistry;

/// Shared handle to a value that is replaced wholesale, never mutated.
#[derive(Debug)]
pub struct HotSwap<T> {
    current: ArcSwap<T>,
}

impl<T> HotSwap<T> {
    pub fn new(value: T) -> Self {
        Self {
            current: ArcSwap::from_pointee(value),
        }
    }

    /// Snapshot of the current value.
    pub fn load(&self) -> Arc<T> {
        self.current.load_full()
    }

    /// Replaces the value, returning the previous one.
    pub fn swap(&self, value: T) -> Arc<T> {
        let previous = self.current.swap(Arc::new(value));
        tracing::info!("plugin set reloaded");
        previous
    }
}

/// Both registries a host process needs, swapped together.
#[derive(Debug, Clone, Default)]
pub struct PluginSet {
    pub features: FeatureRegistry,
    pub exports: ExportRegistry,
}
