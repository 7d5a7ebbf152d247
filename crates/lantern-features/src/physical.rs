// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use lantern_core::{FeaturePlugin, FineChannels, Fixture, LanternError};

/// A mode overrides the fixture's physical data.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhysicalOverride;

impl FeaturePlugin for PhysicalOverride {
    fn name(&self) -> &str {
        "Physical override"
    }

    fn description(&self) -> Option<&str> {
        Some("A mode defines its own physical properties")
    }

    fn order(&self) -> Option<i64> {
        Some(50)
    }

    fn has_feature(&self, fixture: &Fixture, _fine: &FineChannels) -> Result<bool, LanternError> {
        Ok(fixture.modes.iter().any(|m| m.physical_override.is_some()))
    }
}
