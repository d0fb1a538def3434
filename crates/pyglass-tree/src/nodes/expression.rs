//! Typed payloads for the expression node variants.
//!
//! Each variant of [`NodeKind`](super::NodeKind) owns one of the structs in
//! this module. Child expressions are held as [`NodeId`]s into the arena;
//! token payloads (literal text, keyword identifiers, string flags) are
//! copied out of the lexer output at construction time and are read-only
//! from then on.

use serde::{Deserialize, Serialize};

use super::op::Operator;
use super::NodeId;

/// How a call argument is passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArgumentCategory {
    /// Ordinary positional or keyword argument.
    Simple,
    /// `*args`-style iterable unpack.
    UnpackedList,
    /// `**kwargs`-style mapping unpack.
    UnpackedDictionary,
}

/// One argument of a [`Call`] node, owned by the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub category: ArgumentCategory,
    /// Name node for keyword arguments (`name=value`).
    pub name: Option<NodeId>,
    pub value_expression: NodeId,
}

/// How a parameter binds its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterCategory {
    /// Ordinary parameter.
    Simple,
    /// `*args`-style variadic list parameter.
    VarArgList,
    /// `**kwargs`-style variadic dictionary parameter.
    VarArgDictionary,
}

/// One parameter of a [`Lambda`] or `Function` node.
///
/// The name is optional: a bare `*` separator is a nameless
/// [`VarArgList`](ParameterCategory::VarArgList) parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub category: ParameterCategory,
    pub name: Option<String>,
    pub default_value: Option<NodeId>,
}

/// Lexer flags describing how a string literal was written.
///
/// Modeled as named booleans rather than a bit mask; the all-false
/// [`Default`] is a plain double-quoted single-line string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StringTokenFlags {
    /// `r` prefix: escapes are literal.
    pub raw: bool,
    /// `u` prefix.
    pub unicode: bool,
    /// `b` prefix: bytes literal.
    pub bytes: bool,
    /// `f` prefix: format string.
    pub format: bool,
    /// Triple-quoted (`'''` / `"""`).
    pub triplicate: bool,
    /// Delimited with `'` rather than `"`.
    pub single_quote: bool,
}

/// The tokenizer's keyword set.
///
/// Constant nodes carry one of these; only `True`, `False`, `None`, and
/// `Debug` are printable constants, the rest exist so a malformed tree can
/// be represented (and rendered with the sentinel) without panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    And,
    As,
    Assert,
    Async,
    Await,
    Break,
    Class,
    Continue,
    Debug,
    Def,
    Del,
    Elif,
    Else,
    Except,
    False,
    Finally,
    For,
    From,
    Global,
    If,
    Import,
    In,
    Is,
    Lambda,
    None,
    Nonlocal,
    Not,
    Or,
    Pass,
    Raise,
    Return,
    True,
    Try,
    While,
    With,
    Yield,
}

/// A simple identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    /// Identifier text, verbatim from the token.
    pub value: String,
}

/// Attribute access: `left.member`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberAccess {
    pub left_expression: NodeId,
    /// The member [`Name`] node.
    pub member_name: NodeId,
}

/// A call: `left(arg, *rest, name=value)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub left_expression: NodeId,
    pub arguments: Vec<Argument>,
}

/// Subscript access: `base[item, ...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index {
    pub base_expression: NodeId,
    pub items: Vec<NodeId>,
}

/// A prefix operator application: `not x`, `-x`, `~x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnaryOperation {
    pub operator: Operator,
    pub expression: NodeId,
}

/// An infix operator application: `left op right`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryOperation {
    pub left_expression: NodeId,
    pub operator: Operator,
    pub right_expression: NodeId,
}

/// A numeric literal; the token text is kept verbatim so `0x10`, `1_000`,
/// and `1e-3` all print back exactly as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Number {
    pub literal: String,
}

/// A single string token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    pub flags: StringTokenFlags,
    /// The escaped value between the delimiters, verbatim.
    pub value: String,
}

/// A run of adjacent string tokens (implicit concatenation).
///
/// When the list appears in annotation position, the parser may attach the
/// expression it parsed out of the string text; see
/// [`PrintExpressionFlags`](crate::printer::PrintExpressionFlags).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringList {
    /// The [`StringLiteral`] pieces, in document order.
    pub strings: Vec<NodeId>,
    /// Parsed forward-declared annotation, when the parser produced one.
    pub type_annotation: Option<NodeId>,
}

/// An assignment expression statement: `left = right`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub left_expression: NodeId,
    pub right_expression: NodeId,
}

/// An annotated expression: `value: annotation`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAnnotation {
    pub value_expression: NodeId,
    pub type_annotation: NodeId,
}

/// An augmented assignment: `left += right` and friends.
///
/// The operator is one of the `*Equal` variants; its token carries the `=`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentedAssignment {
    pub left_expression: NodeId,
    pub operator: Operator,
    pub right_expression: NodeId,
}

/// `await expr`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Await {
    pub expression: NodeId,
}

/// A conditional expression: `if_expression if test else else_expression`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ternary {
    pub if_expression: NodeId,
    pub test_expression: NodeId,
    pub else_expression: NodeId,
}

/// A list display: `[a, b]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    pub entries: Vec<NodeId>,
}

/// An iterable unpack: `*expr`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unpack {
    pub expression: NodeId,
}

/// A tuple display. A one-element tuple prints with its disambiguating
/// trailing comma.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tuple {
    pub expressions: Vec<NodeId>,
}

/// `yield` / `yield expr`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Yield {
    pub expression: Option<NodeId>,
}

/// `yield from expr`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YieldFrom {
    pub expression: NodeId,
}

/// A comprehension: a body followed by `for`/`if` clauses.
///
/// The body is an expression node, or a
/// [`DictionaryKeyEntry`] for dict comprehensions. Despite the name this
/// variant backs list, set, dict, and generator comprehension forms alike;
/// the surrounding display node supplies the brackets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListComprehension {
    pub expression: NodeId,
    /// [`ComprehensionFor`] / [`ComprehensionIf`] clause nodes, in order.
    pub comprehensions: Vec<NodeId>,
}

/// One `for target in iterable` comprehension clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComprehensionFor {
    pub is_async: bool,
    pub target_expression: NodeId,
    pub iterable_expression: NodeId,
}

/// One `if test` comprehension clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComprehensionIf {
    pub test_expression: NodeId,
}

/// A subscript slice: `start:end:step` with every part optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slice {
    pub start_value: Option<NodeId>,
    pub end_value: Option<NodeId>,
    pub step_value: Option<NodeId>,
}

/// `lambda params: expression`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lambda {
    pub parameters: Vec<Parameter>,
    pub expression: NodeId,
}

/// A keyword constant: `True`, `False`, `None`, `__debug__`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant {
    pub keyword: Keyword,
}

/// A dictionary display: `{ k: v, **rest }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    /// [`DictionaryKeyEntry`] / [`DictionaryExpandEntry`] nodes, in order.
    pub entries: Vec<NodeId>,
}

/// One `key: value` dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryKeyEntry {
    pub key_expression: NodeId,
    pub value_expression: NodeId,
}

/// One `**mapping` dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryExpandEntry {
    pub expand_expression: NodeId,
}

/// A set display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Set {
    pub entries: Vec<NodeId>,
}
