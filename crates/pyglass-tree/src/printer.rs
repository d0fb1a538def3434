//! Reconstruction of source-level expression text from parse nodes.
//!
//! The printer is the inverse direction of parsing for a single
//! expression subtree: a recursive descent over the closed
//! [`NodeKind`] set that emits canonical, re-parseable, single-line
//! source text. It is deliberately not a formatter — no wrapping, no
//! indentation, no comment preservation — because its consumers are
//! diagnostic messages and inferred-signature displays, which need a
//! compact canonical rendering rather than a faithful byte-level
//! round trip.
//!
//! Printing never fails. A variant with no textual form (a structural
//! node, or a clause node reached outside its owning expression) renders
//! the fixed [`EXPRESSION_SENTINEL`] so the surrounding print survives a
//! malformed tree.

use serde::{Deserialize, Serialize};

use crate::nodes::{
    Argument, ArgumentCategory, Keyword, NodeId, NodeKind, Operator, Parameter, ParameterCategory,
    ParseTree, StringTokenFlags,
};

/// Fallback rendering for a node the printer has no textual form for.
pub const EXPRESSION_SENTINEL: &str = "<Expression>";

/// Options recognized by [`print_expression`].
///
/// Flags propagate unchanged through the recursion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintExpressionFlags {
    /// Prefer the parsed annotation attached to a string-literal list over
    /// its literal text, normalizing forward-declared annotations like
    /// `"List[int]"` back to direct syntax.
    pub forward_declarations: bool,
}

/// Render the token for an operator.
///
/// Total over the closed operator enumeration; see [`Operator::as_str`].
pub fn print_operator(operator: Operator) -> &'static str {
    operator.as_str()
}

/// Render an expression subtree as canonical source text.
pub fn print_expression(tree: &ParseTree, node: NodeId, flags: PrintExpressionFlags) -> String {
    let mut printer = Printer {
        tree,
        flags,
        out: String::new(),
    };
    printer.node(node);
    printer.out
}

/// Recursive emitter. All output goes through one growing buffer, the way
/// a codegen state threads through node emission.
struct Printer<'t> {
    tree: &'t ParseTree,
    flags: PrintExpressionFlags,
    out: String,
}

impl Printer<'_> {
    fn emit(&mut self, token: &str) {
        self.out.push_str(token);
    }

    fn node(&mut self, id: NodeId) {
        let tree = self.tree;
        match &tree[id].kind {
            NodeKind::Name(name) => self.emit(&name.value),
            NodeKind::MemberAccess(access) => {
                self.node(access.left_expression);
                self.emit(".");
                self.node(access.member_name);
            }
            NodeKind::Call(call) => {
                self.node(call.left_expression);
                self.emit("(");
                self.arguments(&call.arguments);
                self.emit(")");
            }
            NodeKind::Index(index) => {
                self.node(index.base_expression);
                self.emit("[");
                self.separated(&index.items);
                self.emit("]");
            }
            NodeKind::UnaryOperation(unary) => {
                self.emit(unary.operator.as_str());
                self.emit(" ");
                self.node(unary.expression);
            }
            NodeKind::BinaryOperation(binary) => {
                self.node(binary.left_expression);
                self.emit(" ");
                self.emit(binary.operator.as_str());
                self.emit(" ");
                self.node(binary.right_expression);
            }
            NodeKind::Number(number) => self.emit(&number.literal),
            NodeKind::String(string) => self.string_literal(&string.flags, &string.value),
            NodeKind::StringList(list) => {
                if let (true, Some(annotation)) =
                    (self.flags.forward_declarations, list.type_annotation)
                {
                    self.node(annotation);
                } else {
                    for (i, piece) in list.strings.iter().enumerate() {
                        if i > 0 {
                            self.emit(" ");
                        }
                        self.node(*piece);
                    }
                }
            }
            NodeKind::Assignment(assignment) => {
                self.node(assignment.left_expression);
                self.emit(" = ");
                self.node(assignment.right_expression);
            }
            NodeKind::TypeAnnotation(annotation) => {
                self.node(annotation.value_expression);
                self.emit(": ");
                self.node(annotation.type_annotation);
            }
            NodeKind::AugmentedAssignment(assignment) => {
                self.node(assignment.left_expression);
                self.emit(" ");
                self.emit(assignment.operator.as_str());
                self.emit(" ");
                self.node(assignment.right_expression);
            }
            NodeKind::Await(await_node) => {
                self.emit("await ");
                self.node(await_node.expression);
            }
            NodeKind::Ternary(ternary) => {
                self.node(ternary.if_expression);
                self.emit(" if ");
                self.node(ternary.test_expression);
                self.emit(" else ");
                self.node(ternary.else_expression);
            }
            NodeKind::List(list) => {
                self.emit("[");
                self.separated(&list.entries);
                self.emit("]");
            }
            NodeKind::Unpack(unpack) => {
                self.emit("*");
                self.node(unpack.expression);
            }
            NodeKind::Tuple(tuple) => {
                self.emit("(");
                self.separated(&tuple.expressions);
                // A one-element tuple needs its disambiguating comma.
                if tuple.expressions.len() == 1 {
                    self.emit(", ");
                }
                self.emit(")");
            }
            NodeKind::Yield(yield_node) => match yield_node.expression {
                Some(expression) => {
                    self.emit("yield ");
                    self.node(expression);
                }
                None => self.emit("yield"),
            },
            NodeKind::YieldFrom(yield_from) => {
                self.emit("yield from ");
                self.node(yield_from.expression);
            }
            NodeKind::Ellipsis => self.emit("..."),
            NodeKind::ListComprehension(comprehension) => {
                self.comprehension_body(comprehension.expression);
                for clause in &comprehension.comprehensions {
                    self.emit(" ");
                    self.comprehension_clause(*clause);
                }
            }
            NodeKind::Slice(slice) => {
                if let Some(start) = slice.start_value {
                    self.node(start);
                }
                if let Some(end) = slice.end_value {
                    self.emit(":");
                    self.node(end);
                }
                if let Some(step) = slice.step_value {
                    self.emit(":");
                    self.node(step);
                }
            }
            NodeKind::Lambda(lambda) => {
                self.emit("lambda ");
                for (i, parameter) in lambda.parameters.iter().enumerate() {
                    if i > 0 {
                        self.emit(", ");
                    }
                    self.parameter(parameter);
                }
                self.emit(": ");
                self.node(lambda.expression);
            }
            NodeKind::Constant(constant) => match constant.keyword {
                Keyword::True => self.emit("True"),
                Keyword::False => self.emit("False"),
                Keyword::Debug => self.emit("__debug__"),
                Keyword::None => self.emit("None"),
                // A constant node never carries any other keyword; render
                // the sentinel instead of guessing at a token.
                _ => self.emit(EXPRESSION_SENTINEL),
            },
            NodeKind::Dictionary(dictionary) => {
                self.emit("{ ");
                for (i, entry) in dictionary.entries.iter().enumerate() {
                    if i > 0 {
                        self.emit(", ");
                    }
                    self.dictionary_entry(*entry);
                }
                self.emit(" }");
            }
            NodeKind::DictionaryExpandEntry(entry) => {
                self.emit("**");
                self.node(entry.expand_expression);
            }
            NodeKind::Set(set) => self.separated(&set.entries),
            // Key entries and comprehension clauses only have a textual
            // form inside their owning expression; structural nodes have
            // none at all.
            NodeKind::DictionaryKeyEntry(_)
            | NodeKind::ComprehensionFor(_)
            | NodeKind::ComprehensionIf(_)
            | NodeKind::Module(_)
            | NodeKind::Class(_)
            | NodeKind::Function(_) => self.emit(EXPRESSION_SENTINEL),
        }
    }

    /// `", "`-separated rendering of a run of expressions.
    fn separated(&mut self, ids: &[NodeId]) {
        for (i, id) in ids.iter().enumerate() {
            if i > 0 {
                self.emit(", ");
            }
            self.node(*id);
        }
    }

    fn arguments(&mut self, arguments: &[Argument]) {
        for (i, argument) in arguments.iter().enumerate() {
            if i > 0 {
                self.emit(", ");
            }
            match argument.category {
                ArgumentCategory::Simple => {}
                ArgumentCategory::UnpackedList => self.emit("*"),
                ArgumentCategory::UnpackedDictionary => self.emit("**"),
            }
            if let Some(name) = argument.name {
                self.node(name);
                self.emit("=");
            }
            self.node(argument.value_expression);
        }
    }

    fn parameter(&mut self, parameter: &Parameter) {
        match parameter.category {
            ParameterCategory::Simple => {}
            ParameterCategory::VarArgList => self.emit("*"),
            ParameterCategory::VarArgDictionary => self.emit("**"),
        }
        if let Some(name) = &parameter.name {
            self.emit(name);
        }
        if let Some(default_value) = parameter.default_value {
            self.emit(" = ");
            self.node(default_value);
        }
    }

    /// The body of a comprehension: a plain expression, or `key: value`
    /// when the body is a dictionary key entry.
    fn comprehension_body(&mut self, id: NodeId) {
        if let NodeKind::DictionaryKeyEntry(entry) = &self.tree[id].kind {
            self.node(entry.key_expression);
            self.emit(": ");
            self.node(entry.value_expression);
        } else {
            self.node(id);
        }
    }

    fn comprehension_clause(&mut self, id: NodeId) {
        match &self.tree[id].kind {
            NodeKind::ComprehensionFor(clause) => {
                if clause.is_async {
                    self.emit("async ");
                }
                self.emit("for ");
                self.node(clause.target_expression);
                self.emit(" in ");
                self.node(clause.iterable_expression);
            }
            NodeKind::ComprehensionIf(clause) => {
                self.emit("if ");
                self.node(clause.test_expression);
            }
            _ => self.emit(EXPRESSION_SENTINEL),
        }
    }

    fn dictionary_entry(&mut self, id: NodeId) {
        if let NodeKind::DictionaryKeyEntry(entry) = &self.tree[id].kind {
            self.node(entry.key_expression);
            self.emit(": ");
            self.node(entry.value_expression);
        } else {
            self.node(id);
        }
    }

    /// Reconstruct a string token: prefix letters in the fixed order
    /// `r`, `u`, `b`, `f`, then the delimiter chosen by the triplicate and
    /// quote-style flags, with the escaped value verbatim in between.
    fn string_literal(&mut self, flags: &StringTokenFlags, value: &str) {
        if flags.raw {
            self.emit("r");
        }
        if flags.unicode {
            self.emit("u");
        }
        if flags.bytes {
            self.emit("b");
        }
        if flags.format {
            self.emit("f");
        }
        let delimiter = match (flags.triplicate, flags.single_quote) {
            (true, true) => "'''",
            (true, false) => "\"\"\"",
            (false, true) => "'",
            (false, false) => "\"",
        };
        self.emit(delimiter);
        self.emit(value);
        self.emit(delimiter);
    }
}
