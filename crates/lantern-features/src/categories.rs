// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Multiple categories.

use lantern_core::{FeaturePlugin, FineChannels, Fixture, LanternError};

/// Fixture is listed under more than one category.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultipleCategories;

impl FeaturePlugin for MultipleCategories {
    fn name(&self) -> &str {
        "Multiple categories"
    }

    fn description(&self) -> Option<&str> {
        Some("Fixture belongs to more than one category")
    }

    fn order(&self) -> Option<i64> {
        Some(10)
    }

    fn has_feature(&self, fixture: &Fixture, _fine: &FineChannels) -> Result<bool, LanternError> {
        Ok(fixture.categories.len() > 1)
    }
}
