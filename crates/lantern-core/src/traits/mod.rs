// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin trait definitions.
//!
//! Feature plugins are pure predicates over a fixture; export plugins are pure
//! transforms over a whole library. Both are stateless and shared process-wide.

pub mod export;
pub mod feature;

pub use export::ExportPlugin;
pub use feature::FeaturePlugin;
