// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Unused channels.
//!
//! Unlike most built-ins this one validates mode references: a mode naming a
//! channel the fixture does not define is reported as an error rather than a
//! plain `false`.

use lantern_core::{FeaturePlugin, FineChannels, Fixture, LanternError};

/// An available channel is not referenced by any mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnusedChannels;

impl FeaturePlugin for UnusedChannels {
    fn name(&self) -> &str {
        "Unused channels"
    }

    fn description(&self) -> Option<&str> {
        Some("An available channel is not used in any mode")
    }

    fn has_feature(&self, fixture: &Fixture, _fine: &FineChannels) -> Result<bool, LanternError> {
        for mode in &fixture.modes {
            for key in mode.channels.iter().flatten() {
                if fixture.resolve_channel(key).is_none() {
                    return Err(LanternError::Feature {
                        plugin: self.name().to_string(),
                        fixture: fixture.id().to_string(),
                        message: format!("mode `{}` references unknown channel `{key}`", mode.name),
                    });
                }
            }
        }

        let used = fixture.used_channel_keys();
        Ok(fixture.available_channels.iter().any(|(key, channel)| {
            !used.contains(key.as_str())
                && !channel
                    .fine_channel_aliases
                    .iter()
                    .any(|alias| used.contains(alias.as_str()))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lantern_test_utils::{cameo_outdoor_par_tri_12, FixtureBuilder};

    #[test]
    fn every_channel_used_does_not_match() {
        let f = cameo_outdoor_par_tri_12();
        assert!(!UnusedChannels.has_feature(&f, &FineChannels::new()).unwrap());
    }

    #[test]
    fn leftover_channel_matches() {
        let f = FixtureBuilder::new("acme", "par")
            .channel("dimmer", "Dimmer")
            .channel("strobe", "Strobe")
            .full_mode("1ch", &["dimmer"])
            .build();
        assert!(UnusedChannels.has_feature(&f, &FineChannels::new()).unwrap());
    }

    #[test]
    fn channel_used_only_through_fine_alias_counts_as_used() {
        let f = FixtureBuilder::new("acme", "spot")
            .channel("pan", "Pan")
            .fine("pan", &["pan-fine"])
            .full_mode("fine only", &["pan-fine"])
            .build();
        assert!(!UnusedChannels.has_feature(&f, &FineChannels::new()).unwrap());
    }

    #[test]
    fn switching_targets_count_as_used() {
        let f = FixtureBuilder::new("acme", "scanner")
            .channel("trigger", "Mode")
            .channel("speed", "Speed")
            .channel("gobo", "Gobo")
            .switching("aux", "trigger", "speed", &[("Gobo", "gobo")])
            .full_mode("basic", &["trigger", "aux"])
            .build();
        assert!(!UnusedChannels.has_feature(&f, &FineChannels::new()).unwrap());
    }

    #[test]
    fn dangling_mode_reference_is_an_error() {
        let f = FixtureBuilder::new("acme", "broken")
            .channel("dimmer", "Dimmer")
            .full_mode("1ch", &["missing"])
            .build();
        let err = UnusedChannels.has_feature(&f, &FineChannels::new()).unwrap_err();
        assert!(err.to_string().contains("unknown channel `missing`"));
    }
}
