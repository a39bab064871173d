// Copyright (c) 2025 - Cowboy AI, LLC.

use std::collections::BTreeMap;

use diagram_chaser::{
    find_limit, verify_cone, Category, Cone, ConeVerdict, Diagram, IncompleteInput, SearchOutcome,
    Shape,
};
use pretty_assertions::assert_eq;
use test_case::test_case;

fn legs(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(n, m)| (n.to_string(), m.to_string()))
        .collect()
}

fn with_identities(mut category: Category) -> Category {
    category.ensure_identities();
    category.register_identity_laws();
    category
}

/// a, b, c with f: a -> b, g: b -> c, h: a -> c and g . f = h
fn span_category() -> Category {
    let mut category = Category::new("C");
    for o in ["a", "b", "c"] {
        category.add_object(o).unwrap();
    }
    category.add_morphism("f", "a", "b", "").unwrap();
    category.add_morphism("g", "b", "c", "").unwrap();
    category.add_morphism("h", "a", "c", "").unwrap();
    category.set_composition("g", "f", "h").unwrap();
    with_identities(category)
}

fn span_shape() -> Shape {
    let mut shape = Shape::new("span");
    for n in ["1", "2", "3"] {
        shape.add_node(n).unwrap();
    }
    shape.add_edge("e1", "1", "2").unwrap();
    shape.add_edge("e2", "3", "2").unwrap();
    shape
}

fn span_diagram() -> Diagram {
    let mut diagram = Diagram::new("myspan", "span", "C");
    diagram
        .map_node("1", "a")
        .map_node("2", "b")
        .map_node("3", "c")
        .map_edge("e1", "f")
        .map_edge("e2", "g");
    diagram
}

#[test]
fn identity_cone_over_single_node() {
    let category = with_identities({
        let mut c = Category::new("C");
        c.add_object("X").unwrap();
        c
    });
    let mut shape = Shape::new("point");
    shape.add_node("1").unwrap();
    let mut diagram = Diagram::new("d", "point", "C");
    diagram.map_node("1", "X");

    let outcome = find_limit(&category, &shape, &diagram);
    assert_eq!(
        outcome,
        SearchOutcome::Found {
            value: Cone::new("X", legs(&[("1", "id_X")]))
        }
    );
}

#[test]
fn span_example_has_no_cone_at_a() {
    let category = span_category();
    let shape = span_shape();
    let diagram = span_diagram();

    // e1 commutes because f . id_a = f was registered; e2 needs g . h = f
    let candidate = Cone::new("a", legs(&[("1", "id_a"), ("2", "f"), ("3", "h")]));
    assert_eq!(category.compose("f", "id_a").map(String::as_str), Some("f"));
    assert_eq!(
        verify_cone(&category, &shape, &diagram, &candidate),
        ConeVerdict::DoesNotCommute {
            edge: "e2".to_string(),
            composite: None,
            expected: "f".to_string(),
        }
    );

    let outcome = find_limit(&category, &shape, &diagram);
    assert!(matches!(outcome, SearchOutcome::NotFound { .. }), "{:?}", outcome);
    assert!(outcome.reason().unwrap().contains("no limit found"));
}

#[test]
fn missing_edge_image_is_incomplete_input() {
    let category = span_category();
    let shape = span_shape();
    let mut diagram = span_diagram();
    diagram.edge_map.shift_remove("e2");

    for leg3 in ["h", "id_c", "g"] {
        let candidate = Cone::new("a", legs(&[("1", "id_a"), ("2", "f"), ("3", leg3)]));
        assert_eq!(
            verify_cone(&category, &shape, &diagram, &candidate),
            ConeVerdict::Incomplete(IncompleteInput::MissingEdgeImage {
                edge: "e2".to_string()
            })
        );
    }

    let outcome = find_limit(&category, &shape, &diagram);
    assert!(matches!(outcome, SearchOutcome::NotFound { .. }));
}

#[test]
fn binary_product_is_found() {
    let mut category = Category::new("C");
    for o in ["p", "q", "x", "y"] {
        category.add_object(o).unwrap();
    }
    category.add_morphism("p1", "p", "x", "").unwrap();
    category.add_morphism("p2", "p", "y", "").unwrap();
    category.add_morphism("q1", "q", "x", "").unwrap();
    category.add_morphism("q2", "q", "y", "").unwrap();
    category.add_morphism("u", "q", "p", "").unwrap();
    category.set_composition("p1", "u", "q1").unwrap();
    category.set_composition("p2", "u", "q2").unwrap();
    let category = with_identities(category);

    let mut shape = Shape::new("pair");
    shape.add_node("1").unwrap();
    shape.add_node("2").unwrap();
    let mut diagram = Diagram::new("xy", "pair", "C");
    diagram.map_node("1", "x").map_node("2", "y");

    let outcome = find_limit(&category, &shape, &diagram);
    assert_eq!(
        outcome,
        SearchOutcome::Found {
            value: Cone::new("p", legs(&[("1", "p1"), ("2", "p2")]))
        }
    );
}

#[test]
fn pullback_is_found() {
    let mut category = Category::new("C");
    for o in ["P", "x", "y", "z"] {
        category.add_object(o).unwrap();
    }
    category.add_morphism("f", "x", "z", "").unwrap();
    category.add_morphism("g", "y", "z", "").unwrap();
    category.add_morphism("p1", "P", "x", "").unwrap();
    category.add_morphism("p2", "P", "y", "").unwrap();
    category.add_morphism("d", "P", "z", "").unwrap();
    category.set_composition("f", "p1", "d").unwrap();
    category.set_composition("g", "p2", "d").unwrap();
    let category = with_identities(category);

    let mut shape = Shape::new("cospan");
    for n in ["1", "2", "3"] {
        shape.add_node(n).unwrap();
    }
    shape.add_edge("e1", "1", "3").unwrap();
    shape.add_edge("e2", "2", "3").unwrap();

    let mut diagram = Diagram::new("xzy", "cospan", "C");
    diagram
        .map_node("1", "x")
        .map_node("2", "y")
        .map_node("3", "z")
        .map_edge("e1", "f")
        .map_edge("e2", "g");

    let cone = find_limit(&category, &shape, &diagram)
        .into_found()
        .expect("pullback");
    assert_eq!(cone.apex, "P");
    assert_eq!(cone.legs, legs(&[("1", "p1"), ("2", "p2"), ("3", "d")]));
}

fn discrete_category(objects: usize) -> Category {
    let mut category = Category::new("Discrete");
    for i in 0..objects {
        category.add_object(format!("o{}", i)).unwrap();
    }
    with_identities(category)
}

#[test_case(1, true ; "single object is searched")]
#[test_case(8, true ; "eight objects are searched")]
#[test_case(9, false ; "nine objects are refused")]
#[test_case(12, false ; "twelve objects are refused")]
fn object_count_guard(objects: usize, searched: bool) {
    let category = discrete_category(objects);
    let mut shape = Shape::new("point");
    shape.add_node("1").unwrap();
    let mut diagram = Diagram::new("d", "point", "Discrete");
    diagram.map_node("1", "o0");

    let outcome = find_limit(&category, &shape, &diagram);
    if searched {
        assert_eq!(outcome.found().map(|c| c.apex.as_str()), Some("o0"));
    } else {
        assert!(matches!(outcome, SearchOutcome::Infeasible { .. }), "{:?}", outcome);
        assert!(outcome.reason().unwrap().contains("too large"));
    }
}

#[test]
fn rendered_limit_lists_legs() {
    let category = discrete_category(2);
    let mut shape = Shape::new("point");
    shape.add_node("1").unwrap();
    let mut diagram = Diagram::new("d", "point", "Discrete");
    diagram.map_node("1", "o1");

    let rendered = find_limit(&category, &shape, &diagram).to_string();
    assert_eq!(rendered, "Found limit with apex: o1\nLegs:\n - 1 : id_o1");
}
