// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fluent builder for test fixtures.

use std::collections::BTreeMap;

use lantern_core::fixture::{Links, Meta, Rdm};
use lantern_core::{Channel, ChannelKind, Fixture, Mode, Physical, SwitchingChannel};

/// Builds a [`Fixture`] with sensible empty defaults.
#[derive(Debug, Clone)]
pub struct FixtureBuilder {
    fixture: Fixture,
}

impl FixtureBuilder {
    /// Starts a fixture named after its key.
    pub fn new(manufacturer_key: &str, fixture_key: &str) -> Self {
        Self {
            fixture: Fixture {
                manufacturer_key: manufacturer_key.to_string(),
                fixture_key: fixture_key.to_string(),
                name: fixture_key.to_string(),
                manufacturer_name: None,
                short_name: None,
                categories: Vec::new(),
                available_channels: BTreeMap::new(),
                modes: Vec::new(),
                switching_channels: Vec::new(),
                heads: None,
                rdm: None,
                physical: None,
                links: Links::default(),
                meta: Meta::default(),
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.fixture.name = name.to_string();
        self
    }

    pub fn manufacturer_name(mut self, name: &str) -> Self {
        self.fixture.manufacturer_name = Some(name.to_string());
        self
    }

    pub fn categories(mut self, categories: &[&str]) -> Self {
        self.fixture.categories = categories.iter().map(|c| (*c).to_string()).collect();
        self
    }

    /// Adds a generic channel.
    pub fn channel(self, key: &str, name: &str) -> Self {
        self.channel_of(key, name, ChannelKind::Generic)
    }

    pub fn channel_of(mut self, key: &str, name: &str, kind: ChannelKind) -> Self {
        self.fixture.available_channels.insert(
            key.to_string(),
            Channel {
                name: name.to_string(),
                kind,
                color: None,
                fine_channel_aliases: Vec::new(),
                default_value: None,
            },
        );
        self
    }

    /// Adds a color intensity channel emitting `color`.
    pub fn color_channel(mut self, key: &str, name: &str, color: &str) -> Self {
        self = self.channel_of(key, name, ChannelKind::ColorIntensity);
        if let Some(channel) = self.fixture.available_channels.get_mut(key) {
            channel.color = Some(color.to_string());
        }
        self
    }

    /// Sets the fine aliases of an already added channel.
    pub fn fine(mut self, key: &str, aliases: &[&str]) -> Self {
        if let Some(channel) = self.fixture.available_channels.get_mut(key) {
            channel.fine_channel_aliases = aliases.iter().map(|a| (*a).to_string()).collect();
        }
        self
    }

    /// Adds a mode; `None` entries are unused slots.
    pub fn mode(mut self, name: &str, channels: &[Option<&str>]) -> Self {
        self.fixture.modes.push(Mode {
            name: name.to_string(),
            short_name: None,
            channels: channels.iter().map(|c| c.map(str::to_string)).collect(),
            physical_override: None,
        });
        self
    }

    /// Adds a mode whose slots are all used.
    pub fn full_mode(self, name: &str, channels: &[&str]) -> Self {
        let slots: Vec<Option<&str>> = channels.iter().copied().map(Some).collect();
        self.mode(name, &slots)
    }

    /// Sets a physical override on the most recently added mode.
    pub fn override_last_mode(mut self, physical: Physical) -> Self {
        if let Some(mode) = self.fixture.modes.last_mut() {
            mode.physical_override = Some(physical);
        }
        self
    }

    pub fn switching(
        mut self,
        key: &str,
        trigger_channel: &str,
        default_channel: &str,
        switch_to: &[(&str, &str)],
    ) -> Self {
        self.fixture.switching_channels.push(SwitchingChannel {
            key: key.to_string(),
            name: key.to_string(),
            trigger_channel: trigger_channel.to_string(),
            default_channel: default_channel.to_string(),
            switch_to: switch_to
                .iter()
                .map(|(label, target)| ((*label).to_string(), (*target).to_string()))
                .collect(),
        });
        self
    }

    pub fn head(mut self, name: &str, channels: &[&str]) -> Self {
        self.fixture
            .heads
            .get_or_insert_with(BTreeMap::new)
            .insert(
                name.to_string(),
                channels.iter().map(|c| (*c).to_string()).collect(),
            );
        self
    }

    pub fn rdm(mut self, model_id: u16) -> Self {
        self.fixture.rdm = Some(Rdm {
            model_id,
            software_version: None,
        });
        self
    }

    pub fn physical(mut self, physical: Physical) -> Self {
        self.fixture.physical = Some(physical);
        self
    }

    pub fn manual(mut self, url: &str) -> Self {
        self.fixture.links.manual.push(url.to_string());
        self
    }

    pub fn author(mut self, author: &str) -> Self {
        self.fixture.meta.authors.push(author.to_string());
        self
    }

    pub fn build(self) -> Fixture {
        self.fixture
    }
}

/// The three-channel RGB PAR used across export tests.
pub fn cameo_outdoor_par_tri_12() -> Fixture {
    FixtureBuilder::new("cameo", "outdoor-par-tri-12")
        .name("Outdoor PAR TRI 12")
        .manufacturer_name("Cameo")
        .categories(&["Color Changer"])
        .color_channel("red", "Red", "Red")
        .color_channel("green", "Green", "Green")
        .color_channel("blue", "Blue", "Blue")
        .full_mode("3-channel", &["red", "green", "blue"])
        .author("Felix Edelmann")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_name_to_key() {
        let f = FixtureBuilder::new("acme", "par").build();
        assert_eq!(f.name, "par");
        assert_eq!(f.id().to_string(), "acme/par");
    }

    #[test]
    fn cameo_fixture_has_three_channels() {
        let f = cameo_outdoor_par_tri_12();
        assert_eq!(f.available_channels.len(), 3);
        assert_eq!(f.modes[0].channels.len(), 3);
        assert!(f.null_channels().is_empty());
    }
}
