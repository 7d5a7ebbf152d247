// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Feature plugin trait.

use crate::error::LanternError;
use crate::fine::FineChannels;
use crate::fixture::Fixture;

/// A named predicate flagging whether a fixture exhibits some semantic trait.
///
/// Implementations must be pure: the same fixture and fine-channel index
/// always give the same answer, and no state is kept between calls. The engine
/// relies on this for reproducible matrices but does not enforce it.
pub trait FeaturePlugin: Send + Sync {
    /// Unique name within a registry (e.g. "Multiple categories").
    fn name(&self) -> &str;

    fn description(&self) -> Option<&str> {
        None
    }

    /// Explicit sort position. Plugins without one are placed after all
    /// ordered plugins, in discovery order.
    fn order(&self) -> Option<i64> {
        None
    }

    /// Returns whether `fixture` has this feature.
    fn has_feature(
        &self,
        fixture: &Fixture,
        fine_channels: &FineChannels,
    ) -> Result<bool, LanternError>;
}

impl std::fmt::Debug for dyn FeaturePlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeaturePlugin")
            .field("name", &self.name())
            .field("order", &self.order())
            .finish()
    }
}
