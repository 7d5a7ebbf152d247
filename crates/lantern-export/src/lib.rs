// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in export plugins.
//!
//! Each exporter is a pure function of the library and [`ExportOptions`]:
//! output depends on nothing else, and no file is written here.
//!
//! [`ExportOptions`]: lantern_core::ExportOptions

pub mod csv_table;
pub mod ofl;
pub mod qlcplus;
mod xml;

use std::sync::Arc;

use lantern_core::LanternError;
use lantern_plugin::ExportRegistry;

pub use csv_table::CsvExport;
pub use ofl::OflExport;
pub use qlcplus::QlcPlusExport;

/// Register all built-in export plugins with the given registry.
pub fn register_builtins(registry: &mut ExportRegistry) -> Result<(), LanternError> {
    registry.register(Arc::new(QlcPlusExport))?;
    registry.register(Arc::new(OflExport))?;
    registry.register(Arc::new(CsvExport))?;
    Ok(())
}

/// A registry holding only the built-in exporters.
pub fn builtin_registry() -> Result<ExportRegistry, LanternError> {
    let mut registry = ExportRegistry::new();
    register_builtins(&mut registry)?;
    Ok(registry)
}
