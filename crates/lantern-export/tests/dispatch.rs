// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dispatch through the registry with the built-in exporters.

use lantern_core::{ExportOptions, LanternError};
use lantern_export::builtin_registry;
use lantern_plugin::{dispatch, validate_output_files};
use lantern_test_utils::{cameo_outdoor_par_tri_12, FixtureBuilder};

#[test]
fn qlcplus_single_fixture_gives_one_file() {
    let registry = builtin_registry().unwrap();
    let files = dispatch("qlcplus", &[cameo_outdoor_par_tri_12()], &registry).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].name, "cameo/outdoor-par-tri-12.qxf");
    assert_eq!(files[0].mimetype, "application/x-qlc-fixture");
    assert!(files[0].content.as_text().unwrap().contains("<Model>Outdoor PAR TRI 12</Model>"));
}

#[test]
fn unknown_key_is_an_error_and_no_fallback() {
    let registry = builtin_registry().unwrap();
    let err = dispatch("does-not-exist", &[cameo_outdoor_par_tri_12()], &registry).unwrap_err();
    match err {
        LanternError::UnknownExportTarget { key } => assert_eq!(key, "does-not-exist"),
        other => panic!("expected UnknownExportTarget, got {other:?}"),
    }
}

#[test]
fn invalid_fixture_fails_whole_export() {
    let registry = builtin_registry().unwrap();
    let library = vec![
        cameo_outdoor_par_tri_12(),
        FixtureBuilder::new("acme", "broken").full_mode("1ch", &["ghost"]).build(),
    ];
    for key in ["qlcplus", "ofl"] {
        let err = dispatch(key, &library, &registry).unwrap_err();
        match err {
            LanternError::Export { plugin, message } => {
                assert_eq!(plugin, key);
                assert!(message.contains("acme/broken"), "{message}");
            }
            other => panic!("expected Export, got {other:?}"),
        }
    }
}

#[test]
fn builtin_outputs_have_unique_safe_names() {
    let registry = builtin_registry().unwrap();
    let library = vec![
        cameo_outdoor_par_tri_12(),
        FixtureBuilder::new("cameo", "flat-par")
            .channel("dimmer", "Dimmer")
            .full_mode("1ch", &["dimmer"])
            .build(),
        FixtureBuilder::new("acme", "spot").build(),
    ];
    for key in registry.keys() {
        let files = registry
            .dispatch_validated(key, &library, &ExportOptions::default())
            .unwrap();
        validate_output_files(key, &files).unwrap();
    }
}

#[test]
fn empty_library_exports() {
    let registry = builtin_registry().unwrap();
    assert!(dispatch("qlcplus", &[], &registry).unwrap().is_empty());
    let ofl = dispatch("ofl", &[], &registry).unwrap();
    assert_eq!(ofl.len(), 1);
    assert_eq!(ofl[0].name, "manufacturers.json");
    assert_eq!(dispatch("csv", &[], &registry).unwrap().len(), 1);
}

#[test]
fn exports_are_deterministic() {
    let registry = builtin_registry().unwrap();
    let library = vec![cameo_outdoor_par_tri_12()];
    for key in registry.keys() {
        let a = dispatch(key, &library, &registry).unwrap();
        let b = dispatch(key, &library, &registry).unwrap();
        assert_eq!(a, b, "{key}");
    }
}
