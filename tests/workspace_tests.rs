// Copyright (c) 2025 - Cowboy AI, LLC.

use diagram_chaser::{
    CategoryError, CompositionValidation, EngineConfig, Functor, NaturalTransformation,
    SearchConfig, SearchOutcome, Workspace,
};

/// The demo session: C = a -> b -> c, D = x -> y, F: C -> D, span diagram in C
fn demo_workspace(config: EngineConfig) -> Workspace {
    let mut workspace = Workspace::with_config(config).unwrap();

    let c = workspace.new_category("C").unwrap();
    for o in ["a", "b", "c"] {
        c.add_object(o).unwrap();
    }
    c.add_morphism("f", "a", "b", "").unwrap();
    c.add_morphism("g", "b", "c", "").unwrap();
    c.add_morphism("h", "a", "c", "").unwrap();
    c.set_composition("g", "f", "h").unwrap();
    c.ensure_identities();
    c.register_identity_laws();

    let d = workspace.new_category("D").unwrap();
    d.add_object("x").unwrap();
    d.add_object("y").unwrap();
    d.add_morphism("u", "x", "y", "").unwrap();
    d.ensure_identities();

    let mut functor = Functor::new("F", "C", "D");
    functor
        .add_object_mapping("a", "x")
        .add_object_mapping("b", "y")
        .add_object_mapping("c", "y")
        .add_morphism_mapping("f", "u")
        .add_morphism_mapping("g", "id_y")
        .add_morphism_mapping("h", "u");
    workspace.define_functor(functor).unwrap();

    let span = workspace.new_shape("span").unwrap();
    for n in ["1", "2", "3"] {
        span.add_node(n).unwrap();
    }
    span.add_edge("e1", "1", "2").unwrap();
    span.add_edge("e2", "3", "2").unwrap();

    workspace.new_diagram("myspan", "span", "C").unwrap();
    for (node, object) in [("1", "a"), ("2", "b"), ("3", "c")] {
        workspace.map_diagram_node("myspan", node, object).unwrap();
    }
    workspace.map_diagram_edge("myspan", "e1", "f").unwrap();
    workspace.map_diagram_edge("myspan", "e2", "g").unwrap();
    workspace
}

#[test]
fn demo_session_limit_is_negative() {
    let workspace = demo_workspace(EngineConfig::default());
    let outcome = workspace.compute_limit("myspan").unwrap();
    assert!(matches!(outcome, SearchOutcome::NotFound { .. }));
    assert!(outcome.to_string().starts_with("no limit found"));
}

#[test]
fn demo_session_adjunction_candidate() {
    // Hom_D(F(-), x) is non-empty only at a, mirrored by Hom_C(-, a);
    // Hom_D(F(-), y) is a singleton everywhere, mirrored by Hom_C(-, c)
    let workspace = demo_workspace(EngineConfig::default());
    let outcome = workspace.check_adjunction("F").unwrap();
    let candidate = outcome.found().expect("candidate");
    assert_eq!(candidate.image("x").map(String::as_str), Some("a"));
    assert_eq!(candidate.image("y").map(String::as_str), Some("c"));
}

#[test]
fn extra_arrow_breaks_demo_adjunction() {
    let mut workspace = demo_workspace(EngineConfig::default());
    workspace
        .category_mut("D")
        .unwrap()
        .add_morphism("v", "x", "y", "")
        .unwrap();
    let outcome = workspace.check_adjunction("F").unwrap();
    assert!(matches!(outcome, SearchOutcome::NotFound { .. }));
    assert!(outcome.to_string().contains("no right adjoint found"));
}

#[test]
fn configured_budget_reaches_the_search() {
    let config = EngineConfig {
        search: SearchConfig::default().with_max_candidates(1),
        ..EngineConfig::default()
    };
    let mut workspace = demo_workspace(config);
    let point = workspace.new_shape("point").unwrap();
    point.add_node("1").unwrap();
    workspace.new_diagram("at_a", "point", "C").unwrap();
    workspace.map_diagram_node("at_a", "1", "a").unwrap();

    let outcome = workspace.compute_limit("at_a").unwrap();
    assert_eq!(
        outcome,
        SearchOutcome::BudgetExceeded {
            explored: 1,
            budget: 1
        }
    );
}

#[test]
fn strict_workspace_rejects_ill_typed_composition() {
    let mut workspace = demo_workspace(EngineConfig::default());
    let c = workspace.category_mut("C").unwrap();
    let err = c.set_composition("f", "g", "h").unwrap_err();
    assert!(matches!(err, CategoryError::NotComposable { .. }));
    assert!(err.is_validation_error());
}

#[test]
fn lenient_workspace_accepts_ill_typed_composition() {
    let config = EngineConfig {
        composition_validation: CompositionValidation::Lenient,
        ..EngineConfig::default()
    };
    let mut workspace = demo_workspace(config);
    let c = workspace.category_mut("C").unwrap();
    c.set_composition("f", "g", "h").unwrap();
    assert_eq!(c.compose("f", "g").map(String::as_str), Some("h"));
}

#[test]
fn natural_transformations_are_stored_only() {
    let mut workspace = demo_workspace(EngineConfig::default());
    let mut other = Functor::new("G", "C", "D");
    other.add_object_mapping("a", "y");
    workspace.define_functor(other).unwrap();

    let eta = NaturalTransformation::new("eta", "F", "G").with_component("a", "u");
    workspace.add_natural_transformation(eta.clone()).unwrap();
    assert_eq!(workspace.natural_transformation("eta").unwrap(), &eta);
    assert!(workspace.add_natural_transformation(eta).is_err());

    let summary = workspace.summary();
    assert_eq!(summary.natural_transformations, 1);
    assert_eq!(summary.functors.len(), 2);
}

#[test]
fn functor_with_dangling_reference_rejected() {
    let mut workspace = demo_workspace(EngineConfig::default());
    let mut broken = Functor::new("H", "C", "D");
    broken.add_morphism_mapping("f", "missing");
    let err = workspace.define_functor(broken).unwrap_err();
    assert!(matches!(err, CategoryError::UnknownMorphism { .. }));
    assert!(workspace.functor("H").is_err());
}
