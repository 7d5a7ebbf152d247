// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use lantern_core::{FeaturePlugin, FineChannels, Fixture, LanternError};

/// Fixture publishes an RDM model id.
#[derive(Debug, Clone, Copy, Default)]
pub struct RdmModel;

impl FeaturePlugin for RdmModel {
    fn name(&self) -> &str {
        "RDM"
    }

    fn has_feature(&self, fixture: &Fixture, _fine: &FineChannels) -> Result<bool, LanternError> {
        Ok(fixture.rdm.is_some())
    }
}
