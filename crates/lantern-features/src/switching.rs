// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Switching channels.

use std::sync::Arc;

use lantern_core::{FeaturePlugin, FineChannels, Fixture, LanternError};

use crate::arc;

/// Fixture declares at least one switching channel.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwitchingChannels;

impl FeaturePlugin for SwitchingChannels {
    fn name(&self) -> &str {
        "Switching channels"
    }

    fn description(&self) -> Option<&str> {
        Some("A channel changes function depending on a trigger channel")
    }

    fn order(&self) -> Option<i64> {
        Some(40)
    }

    fn has_feature(&self, fixture: &Fixture, _fine: &FineChannels) -> Result<bool, LanternError> {
        Ok(!fixture.switching_channels.is_empty())
    }
}

/// A switching channel can resolve to a fine channel alias.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwitchingToFineChannel;

impl FeaturePlugin for SwitchingToFineChannel {
    fn name(&self) -> &str {
        "Switching to fine channel"
    }

    fn order(&self) -> Option<i64> {
        Some(41)
    }

    fn has_feature(&self, fixture: &Fixture, fine: &FineChannels) -> Result<bool, LanternError> {
        Ok(fixture.switching_channels.iter().any(|sw| {
            std::iter::once(&sw.default_channel)
                .chain(sw.switch_to.values())
                .any(|target| fine.contains(target))
        }))
    }
}

pub fn batch() -> Vec<Arc<dyn FeaturePlugin>> {
    vec![arc(SwitchingChannels), arc(SwitchingToFineChannel)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use lantern_core::index_fine_channels;
    use lantern_test_utils::{cameo_outdoor_par_tri_12, FixtureBuilder};

    fn fixture(target: &str) -> Fixture {
        FixtureBuilder::new("acme", "scanner")
            .channel("speed", "Speed")
            .channel("pan", "Pan")
            .fine("pan", &["pan-fine"])
            .channel("trigger", "Mode")
            .switching("speed-or-pan", "trigger", "speed", &[("Fine", target)])
            .full_mode("basic", &["trigger", "speed-or-pan"])
            .build()
    }

    #[test]
    fn switching_channel_detected() {
        let f = fixture("pan");
        assert!(SwitchingChannels.has_feature(&f, &FineChannels::new()).unwrap());
        let plain = cameo_outdoor_par_tri_12();
        assert!(!SwitchingChannels.has_feature(&plain, &FineChannels::new()).unwrap());
    }

    #[test]
    fn fine_target_uses_fine_index() {
        let coarse = fixture("pan");
        assert!(!SwitchingToFineChannel
            .has_feature(&coarse, &index_fine_channels(&coarse))
            .unwrap());

        let fine = fixture("pan-fine");
        assert!(SwitchingToFineChannel
            .has_feature(&fine, &index_fine_channels(&fine))
            .unwrap());
    }
}
