// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use lantern_core::{FeaturePlugin, FineChannels, Fixture, LanternError};

/// Fixture is split into separately controllable heads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Heads;

impl FeaturePlugin for Heads {
    fn name(&self) -> &str {
        "Heads"
    }

    fn description(&self) -> Option<&str> {
        Some("Fixture has multiple heads")
    }

    fn has_feature(&self, fixture: &Fixture, _fine: &FineChannels) -> Result<bool, LanternError> {
        Ok(fixture.heads.as_ref().is_some_and(|heads| !heads.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lantern_test_utils::FixtureBuilder;

    #[test]
    fn declared_heads_match() {
        let f = FixtureBuilder::new("acme", "bar")
            .channel("r1", "Red 1")
            .channel("r2", "Red 2")
            .head("Head 1", &["r1"])
            .head("Head 2", &["r2"])
            .build();
        assert!(Heads.has_feature(&f, &FineChannels::new()).unwrap());
        assert!(!Heads
            .has_feature(&FixtureBuilder::new("acme", "par").build(), &FineChannels::new())
            .unwrap());
    }
}
