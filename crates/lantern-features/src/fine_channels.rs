// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fine channel resolution, one plugin per bit depth.

use std::sync::Arc;

use lantern_core::{FeaturePlugin, FineChannels, Fixture, LanternError};

use crate::arc;

/// At least one channel offers `bits` of resolution through fine aliases.
#[derive(Debug, Clone)]
pub struct FineChannelDepth {
    name: String,
    description: String,
    fine_index: usize,
    order: i64,
}

impl FineChannelDepth {
    /// `bits` is rounded down to a multiple of 8; anything below 16 bit
    /// requires the first fine byte, like 16 bit.
    pub fn new(bits: usize, order: i64) -> Self {
        Self {
            name: format!("Fine channels ({bits} bit)"),
            description: format!("A channel resolves to {bits} bit through fine channel aliases"),
            fine_index: (bits / 8).saturating_sub(1).max(1),
            order,
        }
    }
}

impl FeaturePlugin for FineChannelDepth {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        Some(&self.description)
    }

    fn order(&self) -> Option<i64> {
        Some(self.order)
    }

    fn has_feature(&self, _fixture: &Fixture, fine: &FineChannels) -> Result<bool, LanternError> {
        Ok(fine.max_fine_index() >= self.fine_index)
    }
}

/// 16, 24 and 32 bit variants.
pub fn batch() -> Vec<Arc<dyn FeaturePlugin>> {
    vec![
        arc(FineChannelDepth::new(16, 30)),
        arc(FineChannelDepth::new(24, 31)),
        arc(FineChannelDepth::new(32, 32)),
    ]
}
