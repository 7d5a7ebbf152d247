// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Export plugin trait.

use crate::error::LanternError;
use crate::fixture::Fixture;
use crate::types::{ExportOptions, OutputFile};

/// Transforms a whole fixture library into files of a control-software format.
///
/// The full library is passed so formats can bundle several fixtures into one
/// file or emit cross-fixture indexes. Exports are all-or-nothing: on error no
/// file from the invocation is used. Templates or schemas must be loaded when
/// the plugin is constructed, never inside [`ExportPlugin::export`].
pub trait ExportPlugin: Send + Sync {
    /// Dispatch key (e.g. "qlcplus").
    fn key(&self) -> &str;

    /// Human-readable target name (e.g. "QLC+ 4.12").
    fn name(&self) -> &str;

    fn version(&self) -> semver::Version;

    /// Produces output files. Names must be unique and filesystem-safe.
    fn export(
        &self,
        library: &[Fixture],
        options: &ExportOptions,
    ) -> Result<Vec<OutputFile>, LanternError>;
}

impl std::fmt::Debug for dyn ExportPlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportPlugin")
            .field("key", &self.key())
            .field("version", &self.version())
            .finish()
    }
}
