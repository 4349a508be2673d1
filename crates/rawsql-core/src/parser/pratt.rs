//! Operator binding powers for the expression parser.

use crate::lexer::{Lexeme, TokenKind};

/// Binding power of the operand of a prefix `not`.
pub const NOT_BP: u8 = 5;

/// Binding power of the operand of `-`, `+` and `~`.
pub const UNARY_BP: u8 = 17;

/// Left binding power of the postfix `::` cast.
pub const CAST_BP: u8 = 19;

/// Returns the infix binding power of a lexeme.
///
/// Returns `(left_bp, right_bp)`. Every level is left associative.
/// Returns `None` if the lexeme is not an infix operator.
#[must_use]
pub fn infix_binding_power(lexeme: &Lexeme) -> Option<(u8, u8)> {
    match lexeme.kind {
        TokenKind::Command => match lexeme.text.as_str() {
            "or" => Some((1, 2)),
            "and" => Some((3, 4)),
            "is" | "is not" | "like" | "not like" | "ilike" | "not ilike" | "in" | "not in" => {
                Some((7, 8))
            }
            "between" | "not between" => Some((9, 10)),
            _ => None,
        },
        TokenKind::Operator => match lexeme.text.as_str() {
            "=" | "<>" | "!=" | "<" | "<=" | ">" | ">=" => Some((7, 8)),
            "||" | "&" | "|" | "^" | "#" | "<<" | ">>" | "->" | "->>" | "#>" | "#>>" | "@>"
            | "<@" | "~" | "~*" | "!~" | "!~*" => Some((11, 12)),
            "+" | "-" => Some((13, 14)),
            "*" | "/" | "%" => Some((15, 16)),
            "::" => Some((CAST_BP, CAST_BP + 1)),
            _ => None,
        },
        _ => None,
    }
}

/// Returns the operand binding power of a prefix operator.
///
/// Returns `None` if the lexeme is not a prefix operator.
#[must_use]
pub fn prefix_binding_power(lexeme: &Lexeme) -> Option<u8> {
    match (lexeme.kind, lexeme.text.as_str()) {
        (TokenKind::Operator, "-" | "+" | "~") => Some(UNARY_BP),
        (TokenKind::Command, "not") => Some(NOT_BP),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(text: &str) -> Lexeme {
        Lexeme::new(TokenKind::Operator, text, 0)
    }

    fn keyword(text: &str) -> Lexeme {
        Lexeme::new(TokenKind::Command, text, 0)
    }

    fn bp(lexeme: &Lexeme) -> u8 {
        infix_binding_power(lexeme).unwrap().0
    }

    #[test]
    fn test_precedence_ordering() {
        assert!(bp(&keyword("and")) > bp(&keyword("or")));
        assert!(bp(&op("=")) > bp(&keyword("and")));
        assert!(bp(&keyword("between")) > bp(&op("=")));
        assert!(bp(&op("||")) > bp(&keyword("not between")));
        assert!(bp(&op("+")) > bp(&op("||")));
        assert!(bp(&op("*")) > bp(&op("-")));
        assert!(bp(&op("::")) > UNARY_BP);
    }

    #[test]
    fn test_not_binds_looser_than_comparison() {
        let not = prefix_binding_power(&keyword("not")).unwrap();
        assert!(not < bp(&op("=")));
        assert!(not > bp(&keyword("and")));
    }

    #[test]
    fn test_left_associativity() {
        let (left, right) = infix_binding_power(&op("+")).unwrap();
        assert!(left < right);
    }

    #[test]
    fn test_non_operators() {
        assert!(infix_binding_power(&keyword("from")).is_none());
        assert!(infix_binding_power(&Lexeme::new(TokenKind::Identifier, "and", 0)).is_none());
        assert!(prefix_binding_power(&op("*")).is_none());
    }
}
