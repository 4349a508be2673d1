//! Character classes shared by the token readers.

/// Returns true for ASCII decimal digits.
#[must_use]
pub const fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Returns true for ASCII hexadecimal digits.
#[must_use]
pub const fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// Returns true for `0` and `1`.
#[must_use]
pub const fn is_binary_digit(c: char) -> bool {
    matches!(c, '0' | '1')
}

/// Returns true for ASCII octal digits.
#[must_use]
pub const fn is_octal_digit(c: char) -> bool {
    matches!(c, '0'..='7')
}

/// Returns true for the whitespace characters SQL separates tokens with.
#[must_use]
pub const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// Returns true for characters that can appear in a symbolic operator.
#[must_use]
pub const fn is_operator_char(c: char) -> bool {
    matches!(
        c,
        '+' | '-' | '*' | '/' | '%' | '=' | '<' | '>' | '!' | '~' | '&' | '|' | '^' | '#' | '@'
    )
}

/// Returns true for characters that end a bare word.
///
/// Identifiers and keywords run until the first delimiter.
#[must_use]
pub const fn is_delimiter(c: char) -> bool {
    is_whitespace(c)
        || is_operator_char(c)
        || matches!(
            c,
            '(' | ')' | '[' | ']' | '{' | '}' | ',' | '.' | ';' | ':' | '?' | '\'' | '"' | '`'
        )
}
