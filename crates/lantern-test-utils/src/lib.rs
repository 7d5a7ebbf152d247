// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Lantern tests.
//!
//! Provides fixture builders and misbehaving plugins for fast, deterministic
//! tests of the registry, the evaluation engine, and export dispatch.
//!
//! # Components
//!
//! - [`FixtureBuilder`] - Fluent construction of [`lantern_core::Fixture`] values
//! - [`CountingIndexer`] - Fine-channel indexer that counts its invocations
//! - [`mock_plugins`] - Constant, failing, panicking, and slow feature plugins

pub mod builder;
pub mod counting;
pub mod mock_plugins;

pub use builder::{cameo_outdoor_par_tri_12, FixtureBuilder};
pub use counting::CountingIndexer;
pub use mock_plugins::{ConstFeature, FailingFeature, PanickingFeature, SlowFeature};
