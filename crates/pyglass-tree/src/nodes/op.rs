//! The operator enumeration and its operator-to-token table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A unary, binary, or augmented-assignment operator.
///
/// This is the closed operator set the tokenizer produces. Augmented
/// variants (`AddEqual` etc.) carry their `=` suffix in the rendered token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    AddEqual,
    And,
    Assign,
    BitwiseAnd,
    BitwiseAndEqual,
    BitwiseInvert,
    BitwiseOr,
    BitwiseOrEqual,
    BitwiseXor,
    BitwiseXorEqual,
    Divide,
    DivideEqual,
    Equals,
    FloorDivide,
    FloorDivideEqual,
    GreaterThan,
    GreaterThanOrEqual,
    In,
    Is,
    IsNot,
    LeftShift,
    LeftShiftEqual,
    LessThan,
    LessThanOrEqual,
    MatrixMultiply,
    MatrixMultiplyEqual,
    Mod,
    ModEqual,
    Multiply,
    MultiplyEqual,
    Not,
    NotEquals,
    NotIn,
    Or,
    Power,
    PowerEqual,
    RightShift,
    RightShiftEqual,
    Subtract,
    SubtractEqual,
    Walrus,
}

impl Operator {
    /// Every operator, in declaration order.
    ///
    /// Exists so the operator-to-token table can be checked exhaustively.
    pub const ALL: [Operator; 42] = [
        Operator::Add,
        Operator::AddEqual,
        Operator::And,
        Operator::Assign,
        Operator::BitwiseAnd,
        Operator::BitwiseAndEqual,
        Operator::BitwiseInvert,
        Operator::BitwiseOr,
        Operator::BitwiseOrEqual,
        Operator::BitwiseXor,
        Operator::BitwiseXorEqual,
        Operator::Divide,
        Operator::DivideEqual,
        Operator::Equals,
        Operator::FloorDivide,
        Operator::FloorDivideEqual,
        Operator::GreaterThan,
        Operator::GreaterThanOrEqual,
        Operator::In,
        Operator::Is,
        Operator::IsNot,
        Operator::LeftShift,
        Operator::LeftShiftEqual,
        Operator::LessThan,
        Operator::LessThanOrEqual,
        Operator::MatrixMultiply,
        Operator::MatrixMultiplyEqual,
        Operator::Mod,
        Operator::ModEqual,
        Operator::Multiply,
        Operator::MultiplyEqual,
        Operator::Not,
        Operator::NotEquals,
        Operator::NotIn,
        Operator::Or,
        Operator::Power,
        Operator::PowerEqual,
        Operator::RightShift,
        Operator::RightShiftEqual,
        Operator::Subtract,
        Operator::SubtractEqual,
        Operator::Walrus,
    ];

    /// The source-text token for this operator.
    ///
    /// The match is exhaustive over the closed enumeration, so every
    /// operator renders a real token; there is no `unknown` fallback to
    /// reach.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::AddEqual => "+=",
            Operator::And => "and",
            Operator::Assign => "=",
            Operator::BitwiseAnd => "&",
            Operator::BitwiseAndEqual => "&=",
            Operator::BitwiseInvert => "~",
            Operator::BitwiseOr => "|",
            Operator::BitwiseOrEqual => "|=",
            Operator::BitwiseXor => "^",
            Operator::BitwiseXorEqual => "^=",
            Operator::Divide => "/",
            Operator::DivideEqual => "/=",
            Operator::Equals => "==",
            Operator::FloorDivide => "//",
            Operator::FloorDivideEqual => "//=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
            Operator::In => "in",
            Operator::Is => "is",
            Operator::IsNot => "is not",
            Operator::LeftShift => "<<",
            Operator::LeftShiftEqual => "<<=",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::MatrixMultiply => "@",
            Operator::MatrixMultiplyEqual => "@=",
            Operator::Mod => "%",
            Operator::ModEqual => "%=",
            Operator::Multiply => "*",
            Operator::MultiplyEqual => "*=",
            Operator::Not => "not",
            Operator::NotEquals => "!=",
            Operator::NotIn => "not in",
            Operator::Or => "or",
            Operator::Power => "**",
            Operator::PowerEqual => "**=",
            Operator::RightShift => ">>",
            Operator::RightShiftEqual => ">>=",
            Operator::Subtract => "-",
            Operator::SubtractEqual => "-=",
            Operator::Walrus => ":=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_operator_has_a_token() {
        for op in Operator::ALL {
            let token = op.as_str();
            assert!(!token.is_empty(), "{:?} has an empty token", op);
            assert_ne!(token, "unknown", "{:?} renders the fallback token", op);
        }
    }

    #[test]
    fn tokens_are_distinct_except_star_overloads() {
        // `*` and `**` double as unpack markers but appear once each here;
        // all operator tokens are pairwise distinct.
        let tokens: HashSet<&str> = Operator::ALL.iter().map(|op| op.as_str()).collect();
        assert_eq!(tokens.len(), Operator::ALL.len());
    }

    #[test]
    fn augmented_operators_carry_their_equals_suffix() {
        assert_eq!(Operator::AddEqual.as_str(), "+=");
        assert_eq!(Operator::FloorDivideEqual.as_str(), "//=");
        assert_eq!(Operator::PowerEqual.as_str(), "**=");
    }

    #[test]
    fn keyword_operators_render_as_words() {
        assert_eq!(Operator::IsNot.as_str(), "is not");
        assert_eq!(Operator::NotIn.as_str(), "not in");
        assert_eq!(Operator::And.to_string(), "and");
    }
}
