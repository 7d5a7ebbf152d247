// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! QLC+ fixture definitions (`.qxf`).
//!
//! One file per fixture, named `<manufacturer>/<fixture>.qxf`. Channels are
//! emitted in order of first use across modes. Switching channels are written
//! as their default channel since QLC+ has no equivalent concept, and unused
//! mode slots become "No function" channels.

use std::collections::{HashMap, HashSet};

use lantern_core::{
    ChannelKind, ChannelRef, ExportOptions, ExportPlugin, Fixture, LanternError, OutputFile,
    Physical,
};
use tracing::debug;

use crate::xml::XmlWriter;

pub const MIMETYPE: &str = "application/x-qlc-fixture";

const NAMESPACE: &str = "http://www.qlcplus.org/FixtureDefinition";

/// Fixture types QLC+ understands; anything else becomes "Other".
const KNOWN_TYPES: &[&str] = &[
    "Color Changer",
    "Dimmer",
    "Effect",
    "Fan",
    "Flower",
    "Hazer",
    "Laser",
    "Moving Head",
    "Scanner",
    "Smoke",
    "Strobe",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct QlcPlusExport;

impl ExportPlugin for QlcPlusExport {
    fn key(&self) -> &str {
        "qlcplus"
    }

    fn name(&self) -> &str {
        "QLC+ 4.12"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(1, 0, 0)
    }

    fn export(
        &self,
        library: &[Fixture],
        options: &ExportOptions,
    ) -> Result<Vec<OutputFile>, LanternError> {
        library
            .iter()
            .map(|fixture| {
                let content = fixture_definition(fixture, options)?;
                debug!(fixture = %fixture.id(), "qlcplus definition rendered");
                Ok(OutputFile::text(
                    format!("{}/{}.qxf", fixture.manufacturer_key, fixture.fixture_key),
                    content,
                    MIMETYPE,
                ))
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
struct QlcChannel {
    name: String,
    group: &'static str,
    byte: u8,
    colour: Option<String>,
    default_value: Option<u32>,
}

fn invalid(fixture: &Fixture, message: String) -> LanternError {
    LanternError::InvalidFixture {
        fixture: fixture.id().to_string(),
        message,
    }
}

/// Stable identity of a resolved channel, independent of its display name.
fn identity(channel_ref: &ChannelRef<'_>) -> String {
    match channel_ref {
        ChannelRef::Coarse { key, .. } => (*key).to_string(),
        ChannelRef::Fine {
            coarse_key,
            fine_index,
            ..
        } => format!("{coarse_key}#{fine_index}"),
        ChannelRef::Switching(sw) => format!("switch:{}", sw.key),
    }
}

/// Returns `name`, or `name 2`, `name 3`, ... if `taken` already holds it.
fn unique_name(name: &str, taken: &HashSet<String>) -> String {
    if !taken.contains(name) {
        return name.to_string();
    }
    (2..)
        .map(|n| format!("{name} {n}"))
        .find(|candidate| !taken.contains(candidate))
        .unwrap_or_else(|| name.to_string())
}

/// Resolves a mode key, following a switching channel to its default.
fn resolve<'a>(fixture: &'a Fixture, key: &str) -> Result<ChannelRef<'a>, LanternError> {
    match fixture.resolve_channel(key) {
        Some(ChannelRef::Switching(sw)) => match fixture.resolve_channel(&sw.default_channel) {
            Some(ChannelRef::Switching(_)) | None => Err(invalid(
                fixture,
                format!(
                    "switching channel `{key}` has unresolvable default `{}`",
                    sw.default_channel
                ),
            )),
            Some(resolved) => Ok(resolved),
        },
        Some(resolved) => Ok(resolved),
        None => Err(invalid(
            fixture,
            format!("mode channel `{key}` is not defined"),
        )),
    }
}

fn group(kind: ChannelKind) -> &'static str {
    match kind {
        ChannelKind::Generic | ChannelKind::Intensity | ChannelKind::ColorIntensity => "Intensity",
        ChannelKind::ColorWheel => "Colour",
        ChannelKind::Pan => "Pan",
        ChannelKind::Tilt => "Tilt",
        ChannelKind::Focus | ChannelKind::Zoom => "Beam",
        ChannelKind::Gobo => "Gobo",
        ChannelKind::Prism => "Prism",
        ChannelKind::Shutter | ChannelKind::Strobe => "Shutter",
        ChannelKind::Speed => "Speed",
        ChannelKind::Effect => "Effect",
        ChannelKind::Maintenance => "Maintenance",
        ChannelKind::Nothing => "Nothing",
    }
}

fn qlc_channel(channel_ref: ChannelRef<'_>) -> QlcChannel {
    let (channel, name, byte) = match channel_ref {
        ChannelRef::Coarse { channel, .. } => (channel, channel.name.clone(), 0),
        ChannelRef::Fine {
            channel, fine_index, ..
        } => {
            let name = if fine_index == 1 {
                format!("{} fine", channel.name)
            } else {
                format!("{} fine^{fine_index}", channel.name)
            };
            (channel, name, 1)
        }
        // Callers resolve switching channels first.
        ChannelRef::Switching(sw) => {
            return QlcChannel {
                name: sw.name.clone(),
                group: "Nothing",
                byte: 0,
                colour: None,
                default_value: None,
            };
        }
    };
    QlcChannel {
        name,
        group: group(channel.kind),
        byte,
        colour: match channel.kind {
            ChannelKind::ColorIntensity => channel.color.clone(),
            _ => None,
        },
        default_value: channel.default_value,
    }
}

fn null_channel(nth: usize) -> QlcChannel {
    QlcChannel {
        name: if nth == 0 {
            "No function".to_string()
        } else {
            format!("No function {}", nth + 1)
        },
        group: "Nothing",
        byte: 0,
        colour: None,
        default_value: None,
    }
}

fn fixture_type(fixture: &Fixture) -> &str {
    fixture
        .categories
        .iter()
        .map(String::as_str)
        .find(|c| KNOWN_TYPES.contains(c))
        .or_else(|| fixture.has_category("Pixel Bar").then_some("LED Bar (Pixels)"))
        .unwrap_or("Other")
}

fn focus_type(fixture: &Fixture) -> &'static str {
    let moves = fixture
        .available_channels
        .values()
        .any(|c| matches!(c.kind, ChannelKind::Pan | ChannelKind::Tilt));
    match (moves, fixture.has_category("Scanner")) {
        (true, true) => "Mirror",
        (true, false) => "Head",
        (false, _) => "Fixed",
    }
}

fn num(value: Option<f64>) -> String {
    value.unwrap_or(0.0).to_string()
}

fn write_physical(w: &mut XmlWriter, physical: &Physical, focus: &str) {
    let bulb = physical.bulb.clone().unwrap_or_default();
    let lens = physical.lens.clone().unwrap_or_default();
    let [width, height, depth] = physical.dimensions.unwrap_or([0.0; 3]);
    let [degrees_min, degrees_max] = lens.degrees_min_max.unwrap_or([0.0; 2]);

    let lumens = num(bulb.lumens);
    let colour_temperature = num(bulb.color_temperature);
    let weight = num(physical.weight);
    let (width, height, depth) = (width.to_string(), height.to_string(), depth.to_string());
    let (degrees_min, degrees_max) = (degrees_min.to_string(), degrees_max.to_string());
    let power = num(physical.power);

    w.start("Physical", &[]);
    w.empty(
        "Bulb",
        &[
            ("Type", bulb.kind.as_deref().unwrap_or("Other")),
            ("Lumens", lumens.as_str()),
            ("ColourTemperature", colour_temperature.as_str()),
        ],
    );
    w.empty(
        "Dimensions",
        &[
            ("Weight", weight.as_str()),
            ("Width", width.as_str()),
            ("Height", height.as_str()),
            ("Depth", depth.as_str()),
        ],
    );
    w.empty(
        "Lens",
        &[
            ("Name", lens.name.as_deref().unwrap_or("Other")),
            ("DegreesMin", degrees_min.as_str()),
            ("DegreesMax", degrees_max.as_str()),
        ],
    );
    w.empty("Focus", &[("Type", focus), ("PanMax", "0"), ("TiltMax", "0")]);
    w.empty(
        "Technical",
        &[
            ("PowerConsumption", power.as_str()),
            (
                "DmxConnector",
                physical.dmx_connector.as_deref().unwrap_or("Other"),
            ),
        ],
    );
    w.end();
}

/// Renders the `.qxf` document for one fixture.
pub fn fixture_definition(
    fixture: &Fixture,
    options: &ExportOptions,
) -> Result<String, LanternError> {
    // Resolve every mode first so a bad reference fails before any output.
    let mut channels: Vec<QlcChannel> = Vec::new();
    // Resolved channel identity -> emitted QLC+ name.
    let mut emitted: HashMap<String, String> = HashMap::new();
    let mut taken: HashSet<String> = HashSet::new();
    let mut modes: Vec<Vec<String>> = Vec::with_capacity(fixture.modes.len());

    for mode in &fixture.modes {
        let mut names = Vec::with_capacity(mode.channels.len());
        let mut nulls = 0;
        for slot in &mode.channels {
            let (id, mut channel) = match slot {
                Some(key) => {
                    let resolved = resolve(fixture, key)?;
                    (identity(&resolved), qlc_channel(resolved))
                }
                None => {
                    nulls += 1;
                    (format!("null#{nulls}"), null_channel(nulls - 1))
                }
            };
            if let Some(name) = emitted.get(&id) {
                names.push(name.clone());
                continue;
            }
            channel.name = unique_name(&channel.name, &taken);
            taken.insert(channel.name.clone());
            emitted.insert(id, channel.name.clone());
            names.push(channel.name.clone());
            channels.push(channel);
        }
        modes.push(names);
    }

    let focus = focus_type(fixture);
    let mut w = XmlWriter::new();
    w.raw_line(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    w.raw_line("<!DOCTYPE FixtureDefinition>");
    w.start("FixtureDefinition", &[("xmlns", NAMESPACE)]);

    w.start("Creator", &[]);
    w.text("Name", &[], &options.creator);
    w.text("Version", &[], &options.version);
    w.text("Author", &[], &fixture.meta.authors.join(", "));
    w.end();
    w.text("Manufacturer", &[], fixture.manufacturer_name());
    w.text("Model", &[], &fixture.name);
    w.text("Type", &[], fixture_type(fixture));

    for channel in &channels {
        let default = channel.default_value.map(|v| v.to_string());
        let mut attrs = vec![("Name", channel.name.as_str())];
        if let Some(default) = default.as_deref() {
            attrs.push(("Default", default));
        }
        w.start("Channel", &attrs);
        let byte = channel.byte.to_string();
        w.text("Group", &[("Byte", byte.as_str())], channel.group);
        if let Some(colour) = &channel.colour {
            w.text("Colour", &[], colour);
        }
        w.end();
    }

    for (mode, names) in fixture.modes.iter().zip(&modes) {
        w.start("Mode", &[("Name", mode.name.as_str())]);
        if let Some(physical) = &mode.physical_override {
            write_physical(&mut w, physical, focus);
        }
        for (number, name) in names.iter().enumerate() {
            let number = number.to_string();
            w.text("Channel", &[("Number", number.as_str())], name);
        }
        if let Some(heads) = &fixture.heads {
            for head_channels in heads.values() {
                let slots: Vec<usize> = mode
                    .channels
                    .iter()
                    .enumerate()
                    .filter(|(_, key)| {
                        key.as_ref()
                            .is_some_and(|k| head_channels.iter().any(|h| h == k))
                    })
                    .map(|(slot, _)| slot)
                    .collect();
                if slots.is_empty() {
                    continue;
                }
                w.start("Head", &[]);
                for slot in slots {
                    w.text("Channel", &[], &slot.to_string());
                }
                w.end();
            }
        }
        w.end();
    }

    write_physical(&mut w, &fixture.physical.clone().unwrap_or_default(), focus);
    Ok(w.finish())
}
