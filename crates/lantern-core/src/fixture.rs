// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only fixture model consumed by feature and export plugins.
//!
//! Fixtures are produced and validated by an external loader. The engine only
//! ever hands out `&Fixture`, so no plugin can mutate a definition during a run.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Stable identifier of a fixture: `"<manufacturer_key>/<fixture_key>"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FixtureId(pub String);

impl std::fmt::Display for FixtureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::borrow::Borrow<str> for FixtureId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Broad function of a channel, used by exporters to pick a target group.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum ChannelKind {
    #[default]
    Generic,
    Intensity,
    ColorIntensity,
    ColorWheel,
    Pan,
    Tilt,
    Focus,
    Zoom,
    Gobo,
    Prism,
    Shutter,
    Strobe,
    Speed,
    Effect,
    Maintenance,
    Nothing,
}

/// A coarse channel as declared in the fixture's available channels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    /// Display name.
    pub name: String,
    #[serde(default)]
    pub kind: ChannelKind,
    /// Emitted color for [`ChannelKind::ColorIntensity`] channels (e.g. "Red").
    #[serde(default)]
    pub color: Option<String>,
    /// Higher-resolution aliases, most significant first after the coarse byte.
    #[serde(default)]
    pub fine_channel_aliases: Vec<String>,
    #[serde(default)]
    pub default_value: Option<u32>,
}

/// Physical properties of a fixture or a mode override.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Physical {
    /// Width, height, depth in millimetres.
    #[serde(default)]
    pub dimensions: Option<[f64; 3]>,
    /// Weight in kilograms.
    #[serde(default)]
    pub weight: Option<f64>,
    /// Power consumption in watts.
    #[serde(default)]
    pub power: Option<f64>,
    #[serde(default)]
    pub dmx_connector: Option<String>,
    #[serde(default)]
    pub bulb: Option<Bulb>,
    #[serde(default)]
    pub lens: Option<Lens>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bulb {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub color_temperature: Option<f64>,
    #[serde(default)]
    pub lumens: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lens {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub degrees_min_max: Option<[f64; 2]>,
}

/// A DMX mode: an ordered channel layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mode {
    pub name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    /// Channel keys in DMX order. `None` marks an unused slot.
    pub channels: Vec<Option<String>>,
    #[serde(default)]
    pub physical_override: Option<Physical>,
}

impl Mode {
    /// Short name if set, otherwise the full name.
    pub fn short_name(&self) -> &str {
        self.short_name.as_deref().unwrap_or(&self.name)
    }
}

/// A channel whose function depends on the value of a trigger channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchingChannel {
    pub key: String,
    pub name: String,
    pub trigger_channel: String,
    /// Channel used when the trigger is at its default value.
    pub default_channel: String,
    /// Trigger capability label → channel key.
    #[serde(default)]
    pub switch_to: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rdm {
    pub model_id: u16,
    #[serde(default)]
    pub software_version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Links {
    #[serde(default)]
    pub manual: Vec<String>,
    #[serde(default)]
    pub product_page: Vec<String>,
    #[serde(default)]
    pub video: Vec<String>,
    #[serde(default)]
    pub other: Vec<String>,
}

impl Links {
    pub fn is_empty(&self) -> bool {
        self.manual.is_empty()
            && self.product_page.is_empty()
            && self.video.is_empty()
            && self.other.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub create_date: Option<String>,
    #[serde(default)]
    pub last_modify_date: Option<String>,
}

/// One unused slot in a mode's channel list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NullChannel {
    /// Index of the mode in [`Fixture::modes`].
    pub mode: usize,
    /// Zero-based DMX slot within that mode.
    pub slot: usize,
}

/// What a mode channel key resolves to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChannelRef<'a> {
    Coarse {
        key: &'a str,
        channel: &'a Channel,
    },
    Fine {
        coarse_key: &'a str,
        channel: &'a Channel,
        /// 1 for the first fine byte (16-bit), 2 for the second (24-bit), ...
        fine_index: usize,
    },
    Switching(&'a SwitchingChannel),
}

/// An immutable fixture definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub manufacturer_key: String,
    pub fixture_key: String,
    pub name: String,
    #[serde(default)]
    pub manufacturer_name: Option<String>,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub available_channels: BTreeMap<String, Channel>,
    #[serde(default)]
    pub modes: Vec<Mode>,
    #[serde(default)]
    pub switching_channels: Vec<SwitchingChannel>,
    #[serde(default)]
    pub heads: Option<BTreeMap<String, Vec<String>>>,
    #[serde(default)]
    pub rdm: Option<Rdm>,
    #[serde(default)]
    pub physical: Option<Physical>,
    #[serde(default)]
    pub links: Links,
    #[serde(default)]
    pub meta: Meta,
}

impl Fixture {
    /// The stable `"<manufacturer_key>/<fixture_key>"` identifier.
    pub fn id(&self) -> FixtureId {
        FixtureId(format!("{}/{}", self.manufacturer_key, self.fixture_key))
    }

    /// Manufacturer display name, falling back to the key.
    pub fn manufacturer_name(&self) -> &str {
        self.manufacturer_name
            .as_deref()
            .unwrap_or(&self.manufacturer_key)
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    pub fn channel(&self, key: &str) -> Option<&Channel> {
        self.available_channels.get(key)
    }

    pub fn switching_channel(&self, key: &str) -> Option<&SwitchingChannel> {
        self.switching_channels.iter().find(|s| s.key == key)
    }

    /// Every null slot across all modes, in mode then slot order.
    pub fn null_channels(&self) -> Vec<NullChannel> {
        self.modes
            .iter()
            .enumerate()
            .flat_map(|(mode, m)| {
                m.channels
                    .iter()
                    .enumerate()
                    .filter(|(_, c)| c.is_none())
                    .map(move |(slot, _)| NullChannel { mode, slot })
            })
            .collect()
    }

    /// Resolves a mode channel key to a coarse, fine or switching channel.
    pub fn resolve_channel<'a>(&'a self, key: &str) -> Option<ChannelRef<'a>> {
        if let Some((coarse_key, channel)) = self.available_channels.get_key_value(key) {
            return Some(ChannelRef::Coarse {
                key: coarse_key,
                channel,
            });
        }
        for (coarse_key, channel) in &self.available_channels {
            if let Some(pos) = channel.fine_channel_aliases.iter().position(|a| a == key) {
                return Some(ChannelRef::Fine {
                    coarse_key,
                    channel,
                    fine_index: pos + 1,
                });
            }
        }
        self.switching_channel(key).map(ChannelRef::Switching)
    }

    /// Channel keys used by at least one mode, including switching targets.
    pub fn used_channel_keys(&self) -> std::collections::BTreeSet<&str> {
        let mut used = std::collections::BTreeSet::new();
        for key in self.modes.iter().flat_map(|m| m.channels.iter().flatten()) {
            used.insert(key.as_str());
            if let Some(sw) = self.switching_channel(key) {
                used.insert(sw.default_channel.as_str());
                used.extend(sw.switch_to.values().map(String::as_str));
            }
        }
        used
    }
}
