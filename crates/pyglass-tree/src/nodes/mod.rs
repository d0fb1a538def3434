//! The parse-tree data model.
//!
//! Nodes live in a [`ParseTree`] arena and refer to each other with
//! [`NodeId`] indices. The parser (an external collaborator) builds the
//! arena bottom-up with [`ParseTree::insert`] and then calls
//! [`ParseTree::link`] exactly once to establish parent back-references;
//! after that the tree is immutable as far as this crate is concerned, so
//! it can be shared across threads freely.
//!
//! Ownership runs parent-to-child through the typed payload fields; parent
//! links are plain back-pointing indices, never owning references.

use std::fmt;
use std::ops::Index as IndexOp;

use thiserror::Error;

use pyglass_core::Span;

pub mod expression;
pub mod op;

pub use expression::{
    Argument, ArgumentCategory, Assignment, AugmentedAssignment, Await, BinaryOperation, Call,
    ComprehensionFor, ComprehensionIf, Constant, Dictionary, DictionaryExpandEntry,
    DictionaryKeyEntry, Index, Keyword, Lambda, List, ListComprehension, MemberAccess, Name,
    Number, Parameter, ParameterCategory, Set, Slice, StringList, StringLiteral, StringTokenFlags,
    Ternary, Tuple, TypeAnnotation, UnaryOperation, Unpack, Yield, YieldFrom,
};
pub use op::Operator;

/// Arena index of a parse node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node_{}", self.0)
    }
}

// ============================================================================
// Structural nodes
// ============================================================================

/// The root of a file's parse tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    pub body: Vec<NodeId>,
}

/// A `class` definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    /// The class [`Name`] node.
    pub name: NodeId,
    /// Base classes and keyword arguments of the class statement.
    pub arguments: Vec<Argument>,
    pub body: Vec<NodeId>,
}

/// A `def` definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    /// The function [`Name`] node.
    pub name: NodeId,
    pub parameters: Vec<Parameter>,
    pub body: Vec<NodeId>,
    pub is_async: bool,
}

// ============================================================================
// The closed variant set
// ============================================================================

/// The closed set of node shapes this crate understands.
///
/// Matching on this enum is how both the printer and the navigator
/// dispatch; the compiler enforces that every variant is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    // Structural
    Module(Module),
    Class(Class),
    Function(Function),
    // Expressions
    Name(Name),
    MemberAccess(MemberAccess),
    Call(Call),
    Index(Index),
    UnaryOperation(UnaryOperation),
    BinaryOperation(BinaryOperation),
    Number(Number),
    String(StringLiteral),
    StringList(StringList),
    Assignment(Assignment),
    TypeAnnotation(TypeAnnotation),
    AugmentedAssignment(AugmentedAssignment),
    Await(Await),
    Ternary(Ternary),
    List(List),
    Unpack(Unpack),
    Tuple(Tuple),
    Yield(Yield),
    YieldFrom(YieldFrom),
    Ellipsis,
    ListComprehension(ListComprehension),
    ComprehensionFor(ComprehensionFor),
    ComprehensionIf(ComprehensionIf),
    Slice(Slice),
    Lambda(Lambda),
    Constant(Constant),
    Dictionary(Dictionary),
    DictionaryKeyEntry(DictionaryKeyEntry),
    DictionaryExpandEntry(DictionaryExpandEntry),
    Set(Set),
}

/// One node of the parse tree: a source span, an optional parent
/// back-reference, and the variant payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNode {
    pub span: Span,
    /// Back-reference established by [`ParseTree::link`]; `None` for the
    /// root (and for every node before linking).
    pub parent: Option<NodeId>,
    pub kind: NodeKind,
}

impl ParseNode {
    /// Whether this node is a [`Module`].
    pub fn is_module(&self) -> bool {
        matches!(self.kind, NodeKind::Module(_))
    }

    /// Whether this node is a [`Class`].
    pub fn is_class(&self) -> bool {
        matches!(self.kind, NodeKind::Class(_))
    }

    /// Whether this node is a [`Function`].
    pub fn is_function(&self) -> bool {
        matches!(self.kind, NodeKind::Function(_))
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Structural problems detected while wiring parent links.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The proposed root id is not in the arena.
    #[error("unknown root {0}")]
    UnknownRoot(NodeId),
    /// A node names a child id that is not in the arena.
    #[error("{parent} references unknown child {child}")]
    UnknownChild { parent: NodeId, child: NodeId },
    /// Two nodes claim the same child, which would make the parent chain
    /// ambiguous (or cyclic).
    #[error("{child} is claimed by both {first_parent} and {second_parent}")]
    ChildReused {
        child: NodeId,
        first_parent: NodeId,
        second_parent: NodeId,
    },
}

// ============================================================================
// The arena
// ============================================================================

/// Arena of [`ParseNode`]s for one file.
#[derive(Debug, Clone, Default)]
pub struct ParseTree {
    nodes: Vec<ParseNode>,
}

impl ParseTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node to the arena and return its id.
    ///
    /// Child ids inside `kind` must already be in the arena by the time
    /// [`link`](ParseTree::link) runs; inserting bottom-up guarantees that.
    pub fn insert(&mut self, kind: NodeKind, span: Span) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(ParseNode {
            span,
            parent: None,
            kind,
        });
        id
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node, or `None` for an id from another tree.
    pub fn get(&self, id: NodeId) -> Option<&ParseNode> {
        self.nodes.get(id.index())
    }

    /// Parent of a node, if linked and not the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self[id].parent
    }

    /// Enumerate a node's direct children, in document order.
    ///
    /// This is the generic child walk the offset search depends on; it is
    /// derived from the per-variant payload fields but exposes none of
    /// them. The printer does not use it.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        collect_children(&self[id].kind, &mut out);
        out
    }

    /// Establish parent back-references for every node reachable from
    /// `root`.
    ///
    /// Call once, after the last [`insert`](ParseTree::insert). Fails if a
    /// payload references an id outside the arena or if two nodes claim
    /// the same child; on failure the tree should be discarded, since some
    /// parent links may already be set.
    pub fn link(&mut self, root: NodeId) -> Result<(), TreeError> {
        if self.get(root).is_none() {
            return Err(TreeError::UnknownRoot(root));
        }
        let mut pending = vec![root];
        while let Some(current) = pending.pop() {
            for child in self.children(current) {
                let Some(node) = self.nodes.get_mut(child.index()) else {
                    return Err(TreeError::UnknownChild {
                        parent: current,
                        child,
                    });
                };
                if let Some(first_parent) = node.parent {
                    return Err(TreeError::ChildReused {
                        child,
                        first_parent,
                        second_parent: current,
                    });
                }
                node.parent = Some(current);
                pending.push(child);
            }
        }
        Ok(())
    }
}

impl IndexOp<NodeId> for ParseTree {
    type Output = ParseNode;

    fn index(&self, id: NodeId) -> &ParseNode {
        &self.nodes[id.index()]
    }
}

/// Push the nodes referenced by a run of call or class arguments: the
/// optional name node, then the value, per argument.
fn argument_children(arguments: &[Argument], out: &mut Vec<NodeId>) {
    for argument in arguments {
        out.extend(argument.name);
        out.push(argument.value_expression);
    }
}

/// Push the nodes referenced by a parameter list; only default values are
/// nodes (parameter names are plain token text).
fn parameter_children(parameters: &[Parameter], out: &mut Vec<NodeId>) {
    for parameter in parameters {
        out.extend(parameter.default_value);
    }
}

/// Push the ids of every direct child of `kind`, in document order.
fn collect_children(kind: &NodeKind, out: &mut Vec<NodeId>) {
    match kind {
        NodeKind::Module(module) => out.extend_from_slice(&module.body),
        NodeKind::Class(class) => {
            out.push(class.name);
            argument_children(&class.arguments, out);
            out.extend_from_slice(&class.body);
        }
        NodeKind::Function(function) => {
            out.push(function.name);
            parameter_children(&function.parameters, out);
            out.extend_from_slice(&function.body);
        }
        NodeKind::Name(_) | NodeKind::Number(_) | NodeKind::String(_) => {}
        NodeKind::Ellipsis | NodeKind::Constant(_) => {}
        NodeKind::MemberAccess(access) => {
            out.push(access.left_expression);
            out.push(access.member_name);
        }
        NodeKind::Call(call) => {
            out.push(call.left_expression);
            argument_children(&call.arguments, out);
        }
        NodeKind::Index(index) => {
            out.push(index.base_expression);
            out.extend_from_slice(&index.items);
        }
        NodeKind::UnaryOperation(unary) => out.push(unary.expression),
        NodeKind::BinaryOperation(binary) => {
            out.push(binary.left_expression);
            out.push(binary.right_expression);
        }
        NodeKind::StringList(list) => {
            out.extend_from_slice(&list.strings);
            out.extend(list.type_annotation);
        }
        NodeKind::Assignment(assignment) => {
            out.push(assignment.left_expression);
            out.push(assignment.right_expression);
        }
        NodeKind::TypeAnnotation(annotation) => {
            out.push(annotation.value_expression);
            out.push(annotation.type_annotation);
        }
        NodeKind::AugmentedAssignment(assignment) => {
            out.push(assignment.left_expression);
            out.push(assignment.right_expression);
        }
        NodeKind::Await(await_node) => out.push(await_node.expression),
        NodeKind::Ternary(ternary) => {
            out.push(ternary.if_expression);
            out.push(ternary.test_expression);
            out.push(ternary.else_expression);
        }
        NodeKind::List(list) => out.extend_from_slice(&list.entries),
        NodeKind::Unpack(unpack) => out.push(unpack.expression),
        NodeKind::Tuple(tuple) => out.extend_from_slice(&tuple.expressions),
        NodeKind::Yield(yield_node) => out.extend(yield_node.expression),
        NodeKind::YieldFrom(yield_from) => out.push(yield_from.expression),
        NodeKind::ListComprehension(comprehension) => {
            out.push(comprehension.expression);
            out.extend_from_slice(&comprehension.comprehensions);
        }
        NodeKind::ComprehensionFor(clause) => {
            out.push(clause.target_expression);
            out.push(clause.iterable_expression);
        }
        NodeKind::ComprehensionIf(clause) => out.push(clause.test_expression),
        NodeKind::Slice(slice) => {
            out.extend(slice.start_value);
            out.extend(slice.end_value);
            out.extend(slice.step_value);
        }
        NodeKind::Lambda(lambda) => {
            parameter_children(&lambda.parameters, out);
            out.push(lambda.expression);
        }
        NodeKind::Dictionary(dictionary) => out.extend_from_slice(&dictionary.entries),
        NodeKind::DictionaryKeyEntry(entry) => {
            out.push(entry.key_expression);
            out.push(entry.value_expression);
        }
        NodeKind::DictionaryExpandEntry(entry) => out.push(entry.expand_expression),
        NodeKind::Set(set) => out.extend_from_slice(&set.entries),
    }
}
