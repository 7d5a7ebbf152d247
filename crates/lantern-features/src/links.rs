// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use lantern_core::{FeaturePlugin, FineChannels, Fixture, LanternError};

/// Fixture links to at least one manual.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualLink;

impl FeaturePlugin for ManualLink {
    fn name(&self) -> &str {
        "Manual link"
    }

    fn has_feature(&self, fixture: &Fixture, _fine: &FineChannels) -> Result<bool, LanternError> {
        Ok(!fixture.links.manual.is_empty())
    }
}
