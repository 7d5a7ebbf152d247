// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Feature plugins with fixed or deliberately broken behavior.

use std::time::Duration;

use lantern_core::{FeaturePlugin, FineChannels, Fixture, LanternError};

/// Always answers `value`.
#[derive(Debug, Clone)]
pub struct ConstFeature {
    pub name: String,
    pub order: Option<i64>,
    pub value: bool,
}

impl ConstFeature {
    pub fn new(name: &str, value: bool) -> Self {
        Self {
            name: name.to_string(),
            order: None,
            value,
        }
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }
}

impl FeaturePlugin for ConstFeature {
    fn name(&self) -> &str {
        &self.name
    }

    fn order(&self) -> Option<i64> {
        self.order
    }

    fn has_feature(&self, _fixture: &Fixture, _fine: &FineChannels) -> Result<bool, LanternError> {
        Ok(self.value)
    }
}

/// Returns an error for every fixture, or only for one fixture id when set.
#[derive(Debug, Clone)]
pub struct FailingFeature {
    pub name: String,
    pub only_for: Option<String>,
}

impl FailingFeature {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            only_for: None,
        }
    }

    pub fn only_for(mut self, fixture_id: &str) -> Self {
        self.only_for = Some(fixture_id.to_string());
        self
    }
}

impl FeaturePlugin for FailingFeature {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_feature(&self, fixture: &Fixture, _fine: &FineChannels) -> Result<bool, LanternError> {
        let id = fixture.id();
        match &self.only_for {
            Some(target) if *target != id.0 => Ok(true),
            _ => Err(LanternError::Feature {
                plugin: self.name.clone(),
                fixture: id.0,
                message: "malformed capability data".to_string(),
            }),
        }
    }
}

/// Panics on every fixture.
#[derive(Debug, Clone)]
pub struct PanickingFeature {
    pub name: String,
}

impl PanickingFeature {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl FeaturePlugin for PanickingFeature {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_feature(&self, fixture: &Fixture, _fine: &FineChannels) -> Result<bool, LanternError> {
        panic!("index out of range in {}", fixture.id())
    }
}

/// Sleeps before answering `true`.
#[derive(Debug, Clone)]
pub struct SlowFeature {
    pub name: String,
    pub delay: Duration,
}

impl SlowFeature {
    pub fn new(name: &str, delay: Duration) -> Self {
        Self {
            name: name.to_string(),
            delay,
        }
    }
}

impl FeaturePlugin for SlowFeature {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_feature(&self, _fixture: &Fixture, _fine: &FineChannels) -> Result<bool, LanternError> {
        std::thread::sleep(self.delay);
        Ok(true)
    }
}
