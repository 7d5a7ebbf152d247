// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Open Fixture Library JSON.
//!
//! Writes one `<manufacturer>/<fixture>.json` per fixture plus a single
//! `manufacturers.json` covering every manufacturer in the library.

use std::collections::BTreeMap;

use lantern_core::fixture::{Bulb, Lens, Links, Rdm};
use lantern_core::{
    Channel, ChannelKind, ExportOptions, ExportPlugin, Fixture, LanternError, OutputFile, Physical,
};
use serde::Serialize;

pub const FIXTURE_MIMETYPE: &str = "application/ofl-fixture";
pub const MANUFACTURERS_MIMETYPE: &str = "application/ofl-manufacturers";
pub const MANUFACTURERS_FILE: &str = "manufacturers.json";

const SCHEMA: &str =
    "https://raw.githubusercontent.com/OpenLightingProject/open-fixture-library/master/schemas/fixture.json";

#[derive(Debug, Clone, Copy, Default)]
pub struct OflExport;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OflFixture<'a> {
    #[serde(rename = "$schema")]
    schema: &'a str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    short_name: Option<&'a str>,
    categories: &'a [String],
    meta: OflMeta<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    links: Option<OflLinks<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    physical: Option<OflPhysical<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rdm: Option<OflRdm<'a>>,
    available_channels: BTreeMap<&'a str, OflChannel<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    heads: Option<&'a BTreeMap<String, Vec<String>>>,
    modes: Vec<OflMode<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OflMeta<'a> {
    authors: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    create_date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_modify_date: Option<&'a str>,
    import_plugin: OflImport<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OflImport<'a> {
    plugin: &'a str,
    version: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OflLinks<'a> {
    #[serde(skip_serializing_if = "no_urls")]
    manual: &'a [String],
    #[serde(skip_serializing_if = "no_urls")]
    product_page: &'a [String],
    #[serde(skip_serializing_if = "no_urls")]
    video: &'a [String],
    #[serde(skip_serializing_if = "no_urls")]
    other: &'a [String],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OflPhysical<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    dimensions: Option<[f64; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    power: Option<f64>,
    #[serde(rename = "DMXconnector", skip_serializing_if = "Option::is_none")]
    dmx_connector: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bulb: Option<OflBulb<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lens: Option<OflLens<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OflBulb<'a> {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color_temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lumens: Option<f64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OflLens<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    degrees_min_max: Option<[f64; 2]>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OflRdm<'a> {
    model_id: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    software_version: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OflChannel<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "no_aliases")]
    fine_channel_aliases: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    default_value: Option<u32>,
    capability: OflCapability<'a>,
}

#[derive(Serialize)]
struct OflCapability<'a> {
    #[serde(rename = "type")]
    kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OflMode<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    short_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    physical: Option<OflPhysical<'a>>,
    channels: &'a [Option<String>],
}

#[derive(Serialize)]
struct OflManufacturer<'a> {
    name: &'a str,
}

fn no_urls(urls: &&[String]) -> bool {
    urls.is_empty()
}

fn no_aliases(aliases: &&[String]) -> bool {
    aliases.is_empty()
}

fn links(links: &Links) -> Option<OflLinks<'_>> {
    (!links.is_empty()).then(|| OflLinks {
        manual: &links.manual,
        product_page: &links.product_page,
        video: &links.video,
        other: &links.other,
    })
}

fn bulb(bulb: &Bulb) -> OflBulb<'_> {
    OflBulb {
        kind: bulb.kind.as_deref(),
        color_temperature: bulb.color_temperature,
        lumens: bulb.lumens,
    }
}

fn lens(lens: &Lens) -> OflLens<'_> {
    OflLens {
        name: lens.name.as_deref(),
        degrees_min_max: lens.degrees_min_max,
    }
}

fn physical(physical: &Physical) -> OflPhysical<'_> {
    OflPhysical {
        dimensions: physical.dimensions,
        weight: physical.weight,
        power: physical.power,
        dmx_connector: physical.dmx_connector.as_deref(),
        bulb: physical.bulb.as_ref().map(bulb),
        lens: physical.lens.as_ref().map(lens),
    }
}

fn rdm(rdm: &Rdm) -> OflRdm<'_> {
    OflRdm {
        model_id: rdm.model_id,
        software_version: rdm.software_version.as_deref(),
    }
}

fn channel(channel: &Channel) -> OflChannel<'_> {
    OflChannel {
        name: &channel.name,
        fine_channel_aliases: &channel.fine_channel_aliases,
        default_value: channel.default_value,
        capability: OflCapability {
            kind: channel.kind.to_string(),
            color: match channel.kind {
                ChannelKind::ColorIntensity => channel.color.as_deref(),
                _ => None,
            },
        },
    }
}

fn to_json<T: Serialize>(value: &T, what: &str) -> Result<String, LanternError> {
    serde_json::to_string_pretty(value)
        .map(|mut json| {
            json.push('\n');
            json
        })
        .map_err(|e| LanternError::Export {
            plugin: "ofl".to_string(),
            message: format!("failed to serialize {what}: {e}"),
        })
}

/// Renders the OFL JSON document for one fixture.
pub fn fixture_json(fixture: &Fixture, options: &ExportOptions) -> Result<String, LanternError> {
    for key in fixture.modes.iter().flat_map(|m| m.channels.iter().flatten()) {
        if fixture.resolve_channel(key).is_none() {
            return Err(LanternError::InvalidFixture {
                fixture: fixture.id().to_string(),
                message: format!("mode channel `{key}` is not defined"),
            });
        }
    }

    let document = OflFixture {
        schema: SCHEMA,
        name: &fixture.name,
        short_name: fixture.short_name.as_deref(),
        categories: &fixture.categories,
        meta: OflMeta {
            authors: &fixture.meta.authors,
            create_date: fixture
                .meta
                .create_date
                .as_deref()
                .or(options.date.as_deref()),
            last_modify_date: fixture
                .meta
                .last_modify_date
                .as_deref()
                .or(options.date.as_deref()),
            import_plugin: OflImport {
                plugin: &options.creator,
                version: &options.version,
            },
        },
        links: links(&fixture.links),
        physical: fixture.physical.as_ref().map(physical),
        rdm: fixture.rdm.as_ref().map(rdm),
        available_channels: fixture
            .available_channels
            .iter()
            .map(|(key, c)| (key.as_str(), channel(c)))
            .collect(),
        heads: fixture.heads.as_ref(),
        modes: fixture
            .modes
            .iter()
            .map(|m| OflMode {
                name: &m.name,
                short_name: m.short_name.as_deref(),
                physical: m.physical_override.as_ref().map(physical),
                channels: &m.channels,
            })
            .collect(),
    };
    to_json(&document, "fixture")
}

impl ExportPlugin for OflExport {
    fn key(&self) -> &str {
        "ofl"
    }

    fn name(&self) -> &str {
        "Open Fixture Library JSON"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(1, 0, 0)
    }

    fn export(
        &self,
        library: &[Fixture],
        options: &ExportOptions,
    ) -> Result<Vec<OutputFile>, LanternError> {
        let mut files = Vec::with_capacity(library.len() + 1);
        let mut manufacturers = BTreeMap::new();

        for fixture in library {
            files.push(OutputFile::text(
                format!("{}/{}.json", fixture.manufacturer_key, fixture.fixture_key),
                fixture_json(fixture, options)?,
                FIXTURE_MIMETYPE,
            ));
            manufacturers
                .entry(fixture.manufacturer_key.as_str())
                .or_insert_with(|| OflManufacturer {
                    name: fixture.manufacturer_name(),
                });
        }

        files.push(OutputFile::text(
            MANUFACTURERS_FILE,
            to_json(&manufacturers, "manufacturers")?,
            MANUFACTURERS_MIMETYPE,
        ));
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lantern_test_utils::{cameo_outdoor_par_tri_12, FixtureBuilder};

    fn parse(content: &str) -> serde_json::Value {
        serde_json::from_str(content).unwrap()
    }

    #[test]
    fn fixture_json_carries_channels_and_modes() {
        let content = fixture_json(&cameo_outdoor_par_tri_12(), &ExportOptions::default()).unwrap();
        let json = parse(&content);
        assert_eq!(json["name"], "Outdoor PAR TRI 12");
        assert_eq!(json["categories"][0], "Color Changer");
        assert_eq!(json["availableChannels"]["red"]["capability"]["type"], "ColorIntensity");
        assert_eq!(json["availableChannels"]["red"]["capability"]["color"], "Red");
        assert_eq!(json["modes"][0]["channels"][2], "blue");
        assert_eq!(json["meta"]["importPlugin"]["plugin"], "Lantern");
        assert!(json.get("links").is_none());
    }

    #[test]
    fn null_slots_stay_null() {
        let fixture = FixtureBuilder::new("acme", "bar")
            .channel("dimmer", "Dimmer")
            .mode("3ch", &[Some("dimmer"), None, Some("dimmer")])
            .build();
        let json = parse(&fixture_json(&fixture, &ExportOptions::default()).unwrap());
        assert!(json["modes"][0]["channels"][1].is_null());
    }

    #[test]
    fn nested_sections_use_ofl_key_names() {
        let fixture = FixtureBuilder::new("acme", "spot")
            .rdm(7)
            .manual("https://example.com/spot.pdf")
            .physical(Physical {
                dmx_connector: Some("3-pin".into()),
                bulb: Some(Bulb {
                    color_temperature: Some(6500.0),
                    ..Bulb::default()
                }),
                lens: Some(Lens {
                    degrees_min_max: Some([10.0, 40.0]),
                    ..Lens::default()
                }),
                ..Physical::default()
            })
            .build();
        let content = fixture_json(&fixture, &ExportOptions::default()).unwrap();
        assert!(!content.contains("model_id"));
        assert!(!content.contains("dmx_connector"));

        let json = parse(&content);
        assert_eq!(json["rdm"]["modelId"], 7);
        assert_eq!(json["physical"]["DMXconnector"], "3-pin");
        assert_eq!(json["physical"]["bulb"]["colorTemperature"], 6500.0);
        assert_eq!(json["physical"]["lens"]["degreesMinMax"][1], 40.0);
        assert_eq!(json["links"]["manual"][0], "https://example.com/spot.pdf");
        assert!(json["links"].get("productPage").is_none());
    }

    #[test]
    fn export_date_fills_missing_meta_dates() {
        let options = ExportOptions {
            date: Some("2026-01-31".into()),
            ..ExportOptions::default()
        };
        let json = parse(&fixture_json(&cameo_outdoor_par_tri_12(), &options).unwrap());
        assert_eq!(json["meta"]["createDate"], "2026-01-31");
    }

    #[test]
    fn manufacturers_file_is_written_once() {
        let library = vec![
            cameo_outdoor_par_tri_12(),
            FixtureBuilder::new("cameo", "flat-par").build(),
            FixtureBuilder::new("acme", "spot").manufacturer_name("Acme Lighting").build(),
        ];
        let files = OflExport.export(&library, &ExportOptions::default()).unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "cameo/outdoor-par-tri-12.json",
                "cameo/flat-par.json",
                "acme/spot.json",
                "manufacturers.json"
            ]
        );

        let manufacturers = files.last().unwrap();
        assert_eq!(manufacturers.mimetype, MANUFACTURERS_MIMETYPE);
        let json = parse(manufacturers.content.as_text().unwrap());
        assert_eq!(json["cameo"]["name"], "Cameo");
        assert_eq!(json["acme"]["name"], "Acme Lighting");
    }

    #[test]
    fn undefined_mode_channel_fails_whole_export() {
        let library = vec![
            cameo_outdoor_par_tri_12(),
            FixtureBuilder::new("acme", "broken").full_mode("1ch", &["ghost"]).build(),
        ];
        let err = OflExport.export(&library, &ExportOptions::default()).unwrap_err();
        assert!(matches!(err, LanternError::InvalidFixture { .. }));
    }
}
