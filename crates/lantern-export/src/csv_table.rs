// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! One-row-per-fixture CSV summary of the library.

use lantern_core::{
    index_fine_channels, ExportOptions, ExportPlugin, Fixture, LanternError, OutputFile,
};
use serde::Serialize;

pub const MIMETYPE: &str = "text/csv";
pub const FILE_NAME: &str = "fixtures.csv";

const HEADER: [&str; 11] = [
    "manufacturer",
    "manufacturer_name",
    "fixture",
    "name",
    "categories",
    "modes",
    "channels",
    "max_footprint",
    "fine_channels",
    "switching_channels",
    "rdm_model_id",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExport;

#[derive(Debug, Serialize)]
struct Row<'a> {
    manufacturer: &'a str,
    manufacturer_name: &'a str,
    fixture: &'a str,
    name: &'a str,
    categories: String,
    modes: usize,
    channels: usize,
    max_footprint: usize,
    fine_channels: usize,
    switching_channels: usize,
    rdm_model_id: Option<u16>,
}

impl<'a> Row<'a> {
    fn new(fixture: &'a Fixture) -> Self {
        Self {
            manufacturer: &fixture.manufacturer_key,
            manufacturer_name: fixture.manufacturer_name(),
            fixture: &fixture.fixture_key,
            name: &fixture.name,
            categories: fixture.categories.join(";"),
            modes: fixture.modes.len(),
            channels: fixture.available_channels.len(),
            max_footprint: fixture
                .modes
                .iter()
                .map(|m| m.channels.len())
                .max()
                .unwrap_or(0),
            fine_channels: index_fine_channels(fixture).len(),
            switching_channels: fixture.switching_channels.len(),
            rdm_model_id: fixture.rdm.as_ref().map(|r| r.model_id),
        }
    }
}

fn csv_error(e: impl std::fmt::Display) -> LanternError {
    LanternError::Export {
        plugin: "csv".to_string(),
        message: e.to_string(),
    }
}

/// Renders the summary table; the header is written even for an empty library.
pub fn summary_table(library: &[Fixture]) -> Result<String, LanternError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(HEADER).map_err(csv_error)?;
    for fixture in library {
        writer.serialize(Row::new(fixture)).map_err(csv_error)?;
    }
    let bytes = writer.into_inner().map_err(csv_error)?;
    String::from_utf8(bytes).map_err(csv_error)
}

impl ExportPlugin for CsvExport {
    fn key(&self) -> &str {
        "csv"
    }

    fn name(&self) -> &str {
        "CSV summary"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(1, 0, 0)
    }

    fn export(
        &self,
        library: &[Fixture],
        _options: &ExportOptions,
    ) -> Result<Vec<OutputFile>, LanternError> {
        Ok(vec![OutputFile::text(FILE_NAME, summary_table(library)?, MIMETYPE)])
    }
}
