//! Tokenizer error types.

/// An error raised while splitting the input into lexemes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenizeError {
    /// A quoted identifier has no closing delimiter.
    #[error("Closing delimiter `{delimiter}` not found at position {position}\n{context}")]
    UnclosedIdentifier {
        /// Offset of the opening delimiter.
        position: usize,
        /// The expected closing delimiter.
        delimiter: char,
        /// Source excerpt with a caret under the offset.
        context: String,
    },

    /// A string literal has no closing quote.
    #[error("Single quote is not closed at position {position}\n{context}")]
    UnclosedString {
        /// Offset of the opening quote (or of the literal prefix).
        position: usize,
        /// Source excerpt with a caret under the offset.
        context: String,
    },

    /// A block comment has no closing `*/`.
    #[error("Block comment is not closed at position {position}\n{context}")]
    UnclosedComment {
        /// Offset of the opening `/*`.
        position: usize,
        /// Source excerpt with a caret under the offset.
        context: String,
    },

    /// No lexical rule matches the character.
    #[error("Unexpected character `{character}` at position {position}\n{context}")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Offset of the character.
        position: usize,
        /// Source excerpt with a caret under the offset.
        context: String,
    },
}

impl TokenizeError {
    /// Returns the byte offset the error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnclosedIdentifier { position, .. }
            | Self::UnclosedString { position, .. }
            | Self::UnclosedComment { position, .. }
            | Self::UnexpectedCharacter { position, .. } => *position,
        }
    }

    /// Returns the rendered context snippet.
    #[must_use]
    pub fn context(&self) -> &str {
        match self {
            Self::UnclosedIdentifier { context, .. }
            | Self::UnclosedString { context, .. }
            | Self::UnclosedComment { context, .. }
            | Self::UnexpectedCharacter { context, .. } => context,
        }
    }
}

/// Renders up to five characters on each side of `position` with a caret
/// on the line below pointing at it.
#[must_use]
pub fn context_snippet(input: &str, position: usize) -> String {
    let position = position.min(input.len());
    let before: Vec<(usize, char)> = input[..position].char_indices().collect();
    let start = before
        .len()
        .checked_sub(5)
        .map_or(0, |index| before[index].0);
    let end = input[position..]
        .char_indices()
        .nth(5)
        .map_or(input.len(), |(offset, _)| position + offset);
    let caret_offset = input[start..position].chars().count();
    format!("{}\n{}^", &input[start..end], " ".repeat(caret_offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_in_the_middle() {
        let snippet = context_snippet("select 'abc from t", 7);
        assert_eq!(snippet, "lect 'abc \n     ^");
    }

    #[test]
    fn test_snippet_at_start_and_end() {
        assert_eq!(context_snippet("abc", 0), "abc\n^");
        assert_eq!(context_snippet("abc", 3), "abc\n   ^");
    }

    #[test]
    fn test_snippet_multibyte() {
        let snippet = context_snippet("é`x", 2);
        assert_eq!(snippet, "é`x\n ^");
    }

    #[test]
    fn test_position_accessor() {
        let err = TokenizeError::UnclosedString {
            position: 7,
            context: String::new(),
        };
        assert_eq!(err.position(), 7);
    }
}
