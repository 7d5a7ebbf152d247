// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Feature evaluation engine.
//!
//! Applies every plugin of a [`lantern_plugin::FeatureRegistry`] to every
//! fixture of a library and collects the answers into a [`FeatureMatrix`].
//! One failing plugin never stops the run; its results carry the error instead.

pub mod evaluate;
pub mod matrix;
pub mod report;

pub use evaluate::{evaluate, Evaluator};
pub use matrix::FeatureMatrix;
pub use report::{CoverageReport, FeatureCoverage};
