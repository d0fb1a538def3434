//! Parse-tree model, navigator, and expression printer for pyglass.
//!
//! This crate is the tree-side core of the pyglass front end. The parser
//! (an external collaborator) produces a [`ParseTree`] of typed nodes;
//! this crate answers structural questions about that tree and converts
//! expression subtrees back into canonical source text.
//!
//! # Overview
//!
//! - **Data model**: [`ParseTree`], [`NodeId`], [`NodeKind`] — an arena of
//!   immutable nodes with parent back-references, built bottom-up and
//!   linked once (see [`ParseTree::link`]).
//! - **Navigation**: the [`navigate`] queries — node depth, deepest node
//!   at an offset or line:column position, enclosing class / module /
//!   function lookup, containment tests.
//! - **Printing**: [`print_expression`] and [`print_operator`] — a total
//!   recursive renderer over the closed variant set, with sentinel
//!   fallbacks instead of failures.
//!
//! # Quick Start
//!
//! ```
//! use pyglass_core::Span;
//! use pyglass_tree::nodes::{BinaryOperation, Name, NodeKind, Operator, ParseTree};
//! use pyglass_tree::printer::{print_expression, PrintExpressionFlags};
//!
//! let mut tree = ParseTree::new();
//! let a = tree.insert(NodeKind::Name(Name { value: "a".into() }), Span::new(0, 1));
//! let b = tree.insert(NodeKind::Name(Name { value: "b".into() }), Span::new(4, 1));
//! let sum = tree.insert(
//!     NodeKind::BinaryOperation(BinaryOperation {
//!         left_expression: a,
//!         operator: Operator::Add,
//!         right_expression: b,
//!     }),
//!     Span::new(0, 5),
//! );
//!
//! let text = print_expression(&tree, sum, PrintExpressionFlags::default());
//! assert_eq!(text, "a + b");
//! ```
//!
//! Both halves are pure functions of an immutable tree: no I/O, no
//! mutation, safe to call from any number of threads at once.

pub mod navigate;
pub mod nodes;
pub mod printer;

pub use navigate::{
    enclosing_class, enclosing_class_or_module, enclosing_function, find_node_by_offset,
    find_node_by_position, is_node_contained_within, node_depth,
};
pub use nodes::{NodeId, NodeKind, Operator, ParseNode, ParseTree, TreeError};
pub use printer::{print_expression, print_operator, PrintExpressionFlags, EXPRESSION_SENTINEL};
