// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end runs of the `lantern` binary against temporary fixture files.

use std::path::Path;
use std::process::{Command, Output};

use lantern_test_utils::{cameo_outdoor_par_tri_12, FixtureBuilder};

fn lantern(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lantern"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(["--config", "lantern.toml"])
        .args(args)
        .output()
        .unwrap()
}

fn setup(config: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("lantern.toml"), config).unwrap();
    let library = vec![
        cameo_outdoor_par_tri_12(),
        FixtureBuilder::new("acme", "spot")
            .categories(&["Moving Head", "Scanner"])
            .channel("pan", "Pan")
            .fine("pan", &["pan-fine"])
            .full_mode("basic", &["pan", "pan-fine"])
            .build(),
    ];
    std::fs::write(
        dir.path().join("library.json"),
        serde_json::to_string(&library).unwrap(),
    )
    .unwrap();
    dir
}

#[test]
fn export_writes_qlcplus_files() {
    let dir = setup("[logging]\nlevel = \"warn\"\n");
    let output = lantern(dir.path(), &["export", "qlcplus", "library.json", "--out", "dist"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let qxf =
        std::fs::read_to_string(dir.path().join("dist/cameo/outdoor-par-tri-12.qxf")).unwrap();
    assert!(qxf.contains("<Model>Outdoor PAR TRI 12</Model>"));
    assert!(dir.path().join("dist/acme/spot.qxf").exists());
}

#[test]
fn unknown_export_target_fails_without_output() {
    let dir = setup("");
    let output = lantern(
        dir.path(),
        &["export", "does-not-exist", "library.json", "--out", "dist"],
    );
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown export target `does-not-exist`"));
    assert!(!dir.path().join("dist").exists());
}

#[test]
fn features_json_reports_matrix() {
    let dir = setup("[features]\ndisabled = [\"Manual link\"]\nconcurrent = true\n");
    let output = lantern(dir.path(), &["features", "library.json", "--json"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = &report["matrix"]["rows"];
    assert_eq!(rows["acme/spot"]["Multiple categories"]["matched"], true);
    assert_eq!(rows["cameo/outdoor-par-tri-12"]["Multiple categories"]["matched"], false);
    assert!(rows["acme/spot"].get("Manual link").is_none());
}

#[test]
fn config_typo_exits_with_diagnostic() {
    let dir = setup("[features]\ndisabld = []\n");
    let output = lantern(dir.path(), &["plugins"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("disabld"), "{stderr}");
}

#[test]
fn plugins_lists_builtin_exports() {
    let dir = setup("");
    let output = lantern(dir.path(), &["plugins", "--json"]);
    assert!(output.status.success());
    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<&str> = entries
        .as_array()
        .unwrap()
        .iter()
        .filter(|e| e["kind"] == "export")
        .map(|e| e["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["csv", "ofl", "qlcplus"]);
}

#[test]
fn config_prints_effective_toml() {
    let dir = setup("[export]\ncreator = \"Rig Builder\"\n");
    let output = lantern(dir.path(), &["config"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("creator = \"Rig Builder\""));
    assert!(stdout.contains("[logging]"));
}
