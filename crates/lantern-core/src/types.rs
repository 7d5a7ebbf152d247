// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types exchanged between plugins, the engine, and callers.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::fixture::FixtureId;

/// Contents of an exported file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileContent {
    Text(String),
    Binary(Vec<u8>),
}

impl FileContent {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            FileContent::Text(s) => s.as_bytes(),
            FileContent::Binary(b) => b,
        }
    }

    /// Text content, if this is a text file.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FileContent::Text(s) => Some(s),
            FileContent::Binary(_) => None,
        }
    }
}

/// A file produced by an export plugin. Ownership passes to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputFile {
    /// Relative, filesystem-safe path such as `cameo/outdoor-par-tri-12.qxf`.
    pub name: String,
    pub content: FileContent,
    pub mimetype: String,
}

impl OutputFile {
    pub fn text(name: impl Into<String>, content: impl Into<String>, mimetype: &str) -> Self {
        Self {
            name: name.into(),
            content: FileContent::Text(content.into()),
            mimetype: mimetype.to_string(),
        }
    }
}

/// Parameters shared by every export invocation.
///
/// Everything an exporter would otherwise read from the environment (clock,
/// tool version) is passed in here so exports are pure functions of the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Tool name written into file headers.
    pub creator: String,
    /// Tool version written into file headers.
    pub version: String,
    /// Export date (ISO-8601), if the target format records one.
    pub date: Option<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            creator: "Lantern".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            date: None,
        }
    }
}

/// Why a feature evaluation produced no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    /// The plugin returned an error.
    Failed,
    /// The plugin panicked.
    Panicked,
    /// The plugin exceeded its time budget.
    TimedOut,
}

/// Error attached to a [`FeatureResult`] for a single (fixture, plugin) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub plugin: String,
    pub fixture: FixtureId,
    pub kind: ErrorKind,
    pub message: String,
}

impl std::fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "feature `{}` on `{}` {}: {}",
            self.plugin, self.fixture, self.kind, self.message
        )
    }
}

/// Tri-state outcome used by reports so errors are never shown as "false".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FeatureStatus {
    Present,
    Absent,
    Errored,
}

/// Result of one feature plugin on one fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureResult {
    pub plugin_name: String,
    pub fixture_id: FixtureId,
    /// Always `false` when `error` is set.
    pub matched: bool,
    pub error: Option<ErrorInfo>,
}

impl FeatureResult {
    pub fn matched(plugin_name: &str, fixture_id: &FixtureId, matched: bool) -> Self {
        Self {
            plugin_name: plugin_name.to_string(),
            fixture_id: fixture_id.clone(),
            matched,
            error: None,
        }
    }

    pub fn errored(
        plugin_name: &str,
        fixture_id: &FixtureId,
        kind: ErrorKind,
        message: String,
    ) -> Self {
        Self {
            plugin_name: plugin_name.to_string(),
            fixture_id: fixture_id.clone(),
            matched: false,
            error: Some(ErrorInfo {
                plugin: plugin_name.to_string(),
                fixture: fixture_id.clone(),
                kind,
                message,
            }),
        }
    }

    pub fn status(&self) -> FeatureStatus {
        match (&self.error, self.matched) {
            (Some(_), _) => FeatureStatus::Errored,
            (None, true) => FeatureStatus::Present,
            (None, false) => FeatureStatus::Absent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errored_result_is_not_matched_and_reports_errored() {
        let id = FixtureId("acme/spot".into());
        let result = FeatureResult::errored("rdm", &id, ErrorKind::Panicked, "boom".into());
        assert!(!result.matched);
        assert_eq!(result.status(), FeatureStatus::Errored);
        let info = result.error.unwrap();
        assert_eq!(info.plugin, "rdm");
        assert_eq!(info.fixture, id);
        assert_eq!(
            info.to_string(),
            "feature `rdm` on `acme/spot` panicked: boom"
        );
    }

    #[test]
    fn status_distinguishes_present_and_absent() {
        let id = FixtureId("acme/spot".into());
        assert_eq!(FeatureResult::matched("x", &id, true).status(), FeatureStatus::Present);
        assert_eq!(FeatureResult::matched("x", &id, false).status(), FeatureStatus::Absent);
    }

    #[test]
    fn error_kind_display_is_kebab_case() {
        assert_eq!(ErrorKind::TimedOut.to_string(), "timed-out");
        assert_eq!(FeatureStatus::Errored.to_string(), "errored");
    }

    #[test]
    fn file_content_bytes() {
        let file = OutputFile::text("a/b.txt", "hi", "text/plain");
        assert_eq!(file.content.as_bytes(), b"hi");
        assert_eq!(file.content.as_text(), Some("hi"));
        assert_eq!(FileContent::Binary(vec![1, 2]).as_text(), None);
    }
}
