//! Navigator tests: depth, offset/position lookup, enclosing-scope walks,
//! and containment.
//!
//! The fixture mirrors this source, with spans assigned by hand:
//!
//! ```text
//! class C:
//!     def m(self):
//!         x = 1
//! ```

use pyglass_core::{LineIndex, Position, Span};
use pyglass_tree::navigate::{
    enclosing_class, enclosing_class_or_module, enclosing_function, find_node_by_offset,
    find_node_by_position, is_node_contained_within, node_depth,
};
use pyglass_tree::nodes::{
    Assignment, Class, Function, Module, Name, NodeId, NodeKind, Number, Parameter,
    ParameterCategory, ParseTree,
};

const SOURCE: &str = "class C:\n    def m(self):\n        x = 1\n";

/// Node ids of the fixture tree, named after the source they cover.
struct Fixture {
    tree: ParseTree,
    module: NodeId,
    class: NodeId,
    class_name: NodeId,
    function: NodeId,
    function_name: NodeId,
    assignment: NodeId,
    target: NodeId,
    value: NodeId,
}

fn fixture() -> Fixture {
    let mut tree = ParseTree::new();
    let class_name = tree.insert(NodeKind::Name(Name { value: "C".into() }), Span::new(6, 1));
    let function_name = tree.insert(NodeKind::Name(Name { value: "m".into() }), Span::new(17, 1));
    let target = tree.insert(NodeKind::Name(Name { value: "x".into() }), Span::new(34, 1));
    let value = tree.insert(
        NodeKind::Number(Number {
            literal: "1".into(),
        }),
        Span::new(38, 1),
    );
    let assignment = tree.insert(
        NodeKind::Assignment(Assignment {
            left_expression: target,
            right_expression: value,
        }),
        Span::new(34, 5),
    );
    let function = tree.insert(
        NodeKind::Function(Function {
            name: function_name,
            parameters: vec![Parameter {
                category: ParameterCategory::Simple,
                name: Some("self".into()),
                default_value: None,
            }],
            body: vec![assignment],
            is_async: false,
        }),
        Span::new(13, 26),
    );
    let class = tree.insert(
        NodeKind::Class(Class {
            name: class_name,
            arguments: vec![],
            body: vec![function],
        }),
        Span::new(0, 39),
    );
    let module = tree.insert(
        NodeKind::Module(Module {
            body: vec![class],
        }),
        Span::new(0, 40),
    );
    tree.link(module).unwrap();
    Fixture {
        tree,
        module,
        class,
        class_name,
        function,
        function_name,
        assignment,
        target,
        value,
    }
}

#[test]
fn depth_counts_the_node_itself() {
    let f = fixture();
    assert_eq!(node_depth(&f.tree, f.module), 1);
    assert_eq!(node_depth(&f.tree, f.class), 2);
    assert_eq!(node_depth(&f.tree, f.function), 3);
    assert_eq!(node_depth(&f.tree, f.assignment), 4);
    assert_eq!(node_depth(&f.tree, f.target), 5);
}

#[test]
fn offset_search_returns_the_deepest_match() {
    let f = fixture();
    assert_eq!(find_node_by_offset(&f.tree, f.module, 34), Some(f.target));
    assert_eq!(find_node_by_offset(&f.tree, f.module, 38), Some(f.value));
    assert_eq!(
        find_node_by_offset(&f.tree, f.module, 17),
        Some(f.function_name)
    );
    // The "=" sits between the assignment's children.
    assert_eq!(
        find_node_by_offset(&f.tree, f.module, 36),
        Some(f.assignment)
    );
    // Nothing under the class covers the "class" keyword itself.
    assert_eq!(find_node_by_offset(&f.tree, f.module, 0), Some(f.class));
}

#[test]
fn offset_search_is_end_inclusive() {
    let f = fixture();
    // 35 is one past "x"; the target's span still claims it.
    assert_eq!(find_node_by_offset(&f.tree, f.module, 35), Some(f.target));
    // 40 is the module's own end.
    assert_eq!(find_node_by_offset(&f.tree, f.module, 40), Some(f.module));
    assert_eq!(find_node_by_offset(&f.tree, f.module, 41), None);
}

#[test]
fn offset_search_fails_fast_outside_the_start_node() {
    let f = fixture();
    // Offset 6 is inside the module but outside the function subtree.
    assert_eq!(find_node_by_offset(&f.tree, f.function, 6), None);
    assert_eq!(
        find_node_by_offset(&f.tree, f.function, 34),
        Some(f.target)
    );
}

#[test]
fn offset_search_never_returns_a_non_containing_node() {
    let f = fixture();
    let index = LineIndex::new(SOURCE);
    for offset in 0..SOURCE.len() {
        let found = find_node_by_offset(&f.tree, f.module, offset).unwrap();
        assert!(
            f.tree[found].span.contains_offset(offset),
            "offset {} resolved to a node spanning {}",
            offset,
            f.tree[found].span
        );
        // The deepest match is at least as deep as the module fallback.
        assert!(node_depth(&f.tree, found) >= 1);
        let position = index.position_at(offset).unwrap();
        assert_eq!(
            find_node_by_position(&f.tree, f.module, position, &index),
            Some(found)
        );
    }
}

#[test]
fn position_lookup_converts_through_the_line_index() {
    let f = fixture();
    let index = LineIndex::new(SOURCE);
    // Line 3, column 9 is "x".
    assert_eq!(
        find_node_by_position(&f.tree, f.module, Position::new(3, 9), &index),
        Some(f.target)
    );
    assert_eq!(
        find_node_by_position(&f.tree, f.module, Position::new(1, 7), &index),
        Some(f.class_name)
    );
}

#[test]
fn unmappable_positions_short_circuit_to_none() {
    let f = fixture();
    let index = LineIndex::new(SOURCE);
    assert_eq!(
        find_node_by_position(&f.tree, f.module, Position::new(99, 1), &index),
        None
    );
    assert_eq!(
        find_node_by_position(&f.tree, f.module, Position::new(1, 50), &index),
        None
    );
}

#[test]
fn enclosing_class_walks_through_functions_by_default() {
    let f = fixture();
    assert_eq!(enclosing_class(&f.tree, f.target, false), Some(f.class));
    assert_eq!(enclosing_class(&f.tree, f.function, false), Some(f.class));
    // With the stop flag, the function boundary ends the walk first.
    assert_eq!(enclosing_class(&f.tree, f.target, true), None);
    assert_eq!(enclosing_class(&f.tree, f.function_name, true), None);
    // The class itself has no enclosing class before the module boundary.
    assert_eq!(enclosing_class(&f.tree, f.class, false), None);
}

#[test]
fn enclosing_class_or_module_accepts_the_module() {
    let f = fixture();
    assert_eq!(
        enclosing_class_or_module(&f.tree, f.target, false),
        Some(f.class)
    );
    assert_eq!(
        enclosing_class_or_module(&f.tree, f.class, false),
        Some(f.module)
    );
    assert_eq!(enclosing_class_or_module(&f.tree, f.target, true), None);
    assert_eq!(enclosing_class_or_module(&f.tree, f.module, false), None);
}

#[test]
fn enclosing_function_stops_at_a_class_boundary() {
    let f = fixture();
    assert_eq!(enclosing_function(&f.tree, f.target), Some(f.function));
    assert_eq!(enclosing_function(&f.tree, f.function_name), Some(f.function));
    // The function's own parent is the class, so the walk ends empty.
    assert_eq!(enclosing_function(&f.tree, f.function), None);
    assert_eq!(enclosing_function(&f.tree, f.class_name), None);
}

#[test]
fn function_directly_under_module_has_no_enclosing_class() {
    // def f(): y
    let mut tree = ParseTree::new();
    let function_name = tree.insert(NodeKind::Name(Name { value: "f".into() }), Span::new(4, 1));
    let y = tree.insert(NodeKind::Name(Name { value: "y".into() }), Span::new(9, 1));
    let function = tree.insert(
        NodeKind::Function(Function {
            name: function_name,
            parameters: vec![],
            body: vec![y],
            is_async: false,
        }),
        Span::new(0, 10),
    );
    let module = tree.insert(
        NodeKind::Module(Module {
            body: vec![function],
        }),
        Span::new(0, 10),
    );
    tree.link(module).unwrap();

    assert_eq!(enclosing_class(&tree, y, false), None);
    assert_eq!(enclosing_class(&tree, y, true), None);
    assert_eq!(
        enclosing_class_or_module(&tree, y, false),
        Some(module)
    );
    assert_eq!(enclosing_function(&tree, y), Some(function));
}

#[test]
fn containment_is_transitive_but_not_reflexive() {
    let f = fixture();
    assert!(is_node_contained_within(&f.tree, f.target, f.assignment));
    assert!(is_node_contained_within(&f.tree, f.target, f.module));
    assert!(!is_node_contained_within(&f.tree, f.target, f.target));
    assert!(!is_node_contained_within(&f.tree, f.module, f.target));
    assert!(!is_node_contained_within(&f.tree, f.class, f.function));
}
