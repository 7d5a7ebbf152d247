// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Repeated evaluation over an immutable library gives identical matrices.

use lantern_engine::{evaluate, Evaluator};
use lantern_plugin::{FeatureDescriptor, FeatureRegistry, PluginSource};
use lantern_test_utils::{
    cameo_outdoor_par_tri_12, FailingFeature, FixtureBuilder, PanickingFeature,
};

fn registry() -> FeatureRegistry {
    FeatureRegistry::load(vec![
        PluginSource::descriptor(
            "categories",
            FeatureDescriptor::new("Multiple categories")
                .predicate(|f, _| Ok(f.categories.len() > 1)),
        ),
        PluginSource::descriptor(
            "fine",
            FeatureDescriptor::new("Fine channels").predicate(|_, fine| Ok(!fine.is_empty())),
        ),
        PluginSource::single("broken", FailingFeature::new("Broken")),
        PluginSource::single("panics", PanickingFeature::new("Panics")),
    ])
    .unwrap()
}

fn library() -> Vec<lantern_core::Fixture> {
    vec![
        cameo_outdoor_par_tri_12(),
        FixtureBuilder::new("acme", "spot")
            .categories(&["Moving Head", "Color Changer"])
            .channel("pan", "Pan")
            .fine("pan", &["pan-fine"])
            .full_mode("basic", &["pan", "pan-fine"])
            .build(),
    ]
}

#[test]
fn evaluate_twice_is_identical() {
    let library = library();
    let registry = registry();
    let snapshot = library.clone();

    let first = evaluate(&library, &registry);
    let second = evaluate(&library, &registry);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
    // The library is untouched by evaluation.
    assert_eq!(library, snapshot);
}

#[test]
fn matrix_marks_errors_distinctly_from_false() {
    let matrix = Evaluator::new().evaluate(&library(), &registry());
    let cameo = "cameo/outdoor-par-tri-12";

    let fine = matrix.get(cameo, "Fine channels").unwrap();
    assert!(!fine.matched);
    assert!(fine.error.is_none());

    let broken = matrix.get(cameo, "Broken").unwrap();
    assert!(!broken.matched);
    assert!(broken.error.is_some());

    assert!(matrix.get("acme/spot", "Multiple categories").unwrap().matched);
    assert!(matrix.get("acme/spot", "Fine channels").unwrap().matched);
    assert_eq!(matrix.errors().len(), 4);
}
