// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Null channels.

use lantern_core::{FeaturePlugin, FineChannels, Fixture, LanternError};

/// At least one mode has an unused DMX slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullChannels;

impl FeaturePlugin for NullChannels {
    fn name(&self) -> &str {
        "Null channels"
    }

    fn description(&self) -> Option<&str> {
        Some("A mode leaves a DMX slot unused")
    }

    fn order(&self) -> Option<i64> {
        Some(20)
    }

    fn has_feature(&self, fixture: &Fixture, _fine: &FineChannels) -> Result<bool, LanternError> {
        Ok(fixture
            .modes
            .iter()
            .any(|mode| mode.channels.iter().any(Option::is_none)))
    }
}
