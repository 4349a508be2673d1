//! Lexeme types and the keyword tables used to classify bare words.

use core::fmt;

use serde::Serialize;

/// Reserved words that are always read as [`TokenKind::Command`].
const RESERVED: &[&str] = &[
    "all",
    "and",
    "array",
    "as",
    "asc",
    "between",
    "case",
    "cast",
    "desc",
    "distinct",
    "else",
    "end",
    "except",
    "exists",
    "false",
    "fetch",
    "for",
    "from",
    "having",
    "ilike",
    "in",
    "intersect",
    "is",
    "join",
    "lateral",
    "like",
    "limit",
    "materialized",
    "not",
    "null",
    "offset",
    "on",
    "or",
    "over",
    "recursive",
    "select",
    "then",
    "true",
    "union",
    "using",
    "values",
    "when",
    "where",
    "window",
    "with",
];

/// Multi-word keywords, merged into a single command lexeme.
///
/// A leading word that only appears here (`group`, `left`, ...) stays an
/// identifier when the rest of the phrase does not follow.
const PHRASES: &[&str] = &[
    "cross join",
    "distinct on",
    "except all",
    "full join",
    "full outer join",
    "group by",
    "inner join",
    "intersect all",
    "is not",
    "left join",
    "left outer join",
    "natural full join",
    "natural full outer join",
    "natural inner join",
    "natural join",
    "natural left join",
    "natural left outer join",
    "natural right join",
    "natural right outer join",
    "not between",
    "not ilike",
    "not in",
    "not like",
    "not materialized",
    "nulls first",
    "nulls last",
    "order by",
    "partition by",
    "right join",
    "right outer join",
    "union all",
];

/// Returns true if `word` (lowercase) is a reserved single-word keyword.
#[must_use]
pub fn is_reserved(word: &str) -> bool {
    RESERVED.binary_search(&word).is_ok()
}

/// Classifies a lowercase candidate phrase.
///
/// Returns `(complete, extendable)`: whether the candidate is a full
/// keyword and whether a longer keyword starts with it.
#[must_use]
pub fn phrase_status(candidate: &str) -> (bool, bool) {
    let complete = is_reserved(candidate) || PHRASES.contains(&candidate);
    let extendable = PHRASES.iter().any(|phrase| {
        phrase.len() > candidate.len()
            && phrase.starts_with(candidate)
            && phrase.as_bytes()[candidate.len()] == b' '
    });
    (complete, extendable)
}

/// The kind of a lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// Not classified.
    Unknown,
    /// Number or quoted string.
    Literal,
    /// Symbolic operator (`+`, `::`, `<>`, ...) or `;`.
    Operator,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// Bare or quoted name, or the `*` wildcard.
    Identifier,
    /// Reserved keyword, possibly spanning several words (`group by`).
    Command,
    /// Bind parameter (`:name`, `$1`, `@name`, `?`).
    Parameter,
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,
    /// Comment text, only reported through [`crate::lexer::Tokenizer::comments`].
    Comment,
    /// Prefixed string constant (`e'..'`, `x'..'`, `b'..'`, `u&'..'`).
    EscapedStringConstant,
}

impl TokenKind {
    /// Returns a short human-readable name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Literal => "literal",
            Self::Operator => "operator",
            Self::OpenParen => "open paren",
            Self::CloseParen => "close paren",
            Self::Comma => "comma",
            Self::Dot => "dot",
            Self::Identifier => "identifier",
            Self::Command => "command",
            Self::Parameter => "parameter",
            Self::OpenBracket => "open bracket",
            Self::CloseBracket => "close bracket",
            Self::Comment => "comment",
            Self::EscapedStringConstant => "escaped string constant",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lexeme {
    /// The kind of lexeme.
    pub kind: TokenKind,
    /// Normalized text (unquoted identifier, lowercase keyword, ...).
    pub text: String,
    /// Byte offset of the lexeme in the source text.
    pub position: usize,
    /// Byte offset just past the lexeme's source text.
    ///
    /// Differs from `position + text.len()` when the text was normalized,
    /// as for quoted identifiers or merged keywords.
    pub end: usize,
}

impl Lexeme {
    /// Creates a new lexeme.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        let text = text.into();
        Self {
            kind,
            end: position + text.len(),
            text,
            position,
        }
    }

    /// Sets the end of the lexeme's source text.
    #[must_use]
    pub const fn ending_at(mut self, end: usize) -> Self {
        self.end = end;
        self
    }

    /// Returns true if this is the given command keyword.
    #[must_use]
    pub fn is_command(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Command && self.text == keyword
    }

    /// Returns true if this is a bare word equal to `word`, ignoring case.
    ///
    /// Used for contextual keywords such as `rows` or `first` that are
    /// ordinary identifiers elsewhere.
    #[must_use]
    pub fn is_word(&self, word: &str) -> bool {
        matches!(self.kind, TokenKind::Identifier | TokenKind::Command)
            && self.text.eq_ignore_ascii_case(word)
    }

    /// Returns true if a sign or `*` after this lexeme starts an operand.
    ///
    /// That is the case after operators, opening punctuation, commas and
    /// keywords, except the keywords that end an operand themselves
    /// (`end`, `null`, `true`, `false`).
    #[must_use]
    pub fn expects_operand(&self) -> bool {
        match self.kind {
            TokenKind::Operator
            | TokenKind::OpenParen
            | TokenKind::OpenBracket
            | TokenKind::Comma
            | TokenKind::Dot => true,
            TokenKind::Command => !matches!(self.text.as_str(), "end" | "null" | "true" | "false"),
            _ => false,
        }
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} `{}`", self.kind, self.text)
    }
}
