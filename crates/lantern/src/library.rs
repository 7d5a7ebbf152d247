// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reads fixture JSON files into a library.
//!
//! A file holds either one fixture object or an array of them. Directories
//! are searched recursively for `*.json`, in sorted path order so the
//! library order is stable across runs.

use std::path::{Path, PathBuf};

use lantern_core::{Fixture, LanternError};
use serde::Deserialize;
use tracing::debug;

#[derive(Deserialize)]
#[serde(untagged)]
enum FixtureFile {
    Many(Vec<Fixture>),
    One(Box<Fixture>),
}

fn collect_json(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), LanternError> {
    let mut entries = std::fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()?;
    entries.sort();
    for path in entries {
        if path.is_dir() {
            collect_json(&path, out)?;
        } else if path.extension().is_some_and(|ext| ext == "json") {
            out.push(path);
        }
    }
    Ok(())
}

/// Expands directories into the JSON files they contain.
pub fn fixture_paths(paths: &[PathBuf]) -> Result<Vec<PathBuf>, LanternError> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            collect_json(path, &mut files)?;
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

pub fn read_fixture_file(path: &Path) -> Result<Vec<Fixture>, LanternError> {
    let content = std::fs::read_to_string(path)?;
    let parsed: FixtureFile =
        serde_json::from_str(&content).map_err(|e| LanternError::InvalidFixture {
            fixture: path.display().to_string(),
            message: e.to_string(),
        })?;
    Ok(match parsed {
        FixtureFile::Many(fixtures) => fixtures,
        FixtureFile::One(fixture) => vec![*fixture],
    })
}

/// Loads every fixture under `paths`, in argument then file order.
pub fn load_library(paths: &[PathBuf]) -> Result<Vec<Fixture>, LanternError> {
    let mut library = Vec::new();
    for path in fixture_paths(paths)? {
        let fixtures = read_fixture_file(&path)?;
        debug!(path = %path.display(), count = fixtures.len(), "fixture file read");
        library.extend(fixtures);
    }
    Ok(library)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lantern_test_utils::{cameo_outdoor_par_tri_12, FixtureBuilder};

    fn write(path: &Path, value: &impl serde::Serialize) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, serde_json::to_string(value).unwrap()).unwrap();
    }

    #[test]
    fn reads_single_and_array_files() {
        let dir = tempfile::tempdir().unwrap();
        let single = dir.path().join("cameo.json");
        let many = dir.path().join("acme.json");
        write(&single, &cameo_outdoor_par_tri_12());
        write(
            &many,
            &vec![
                FixtureBuilder::new("acme", "a").build(),
                FixtureBuilder::new("acme", "b").build(),
            ],
        );

        let library = load_library(&[single, many]).unwrap();
        let ids: Vec<String> = library.iter().map(|f| f.id().to_string()).collect();
        assert_eq!(ids, vec!["cameo/outdoor-par-tri-12", "acme/a", "acme/b"]);
    }

    #[test]
    fn directories_are_walked_in_sorted_order() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("z/last.json"), &FixtureBuilder::new("z", "last").build());
        write(&dir.path().join("a/first.json"), &FixtureBuilder::new("a", "first").build());
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let library = load_library(&[dir.path().to_path_buf()]).unwrap();
        let ids: Vec<String> = library.iter().map(|f| f.id().to_string()).collect();
        assert_eq!(ids, vec!["a/first", "z/last"]);
    }

    #[test]
    fn malformed_json_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{\"name\": 1}").unwrap();
        let err = load_library(&[path]).unwrap_err();
        assert!(matches!(err, LanternError::InvalidFixture { .. }));
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_library(&[PathBuf::from("/nonexistent/fixture.json")]).unwrap_err();
        assert!(matches!(err, LanternError::Io(_)));
    }
}
