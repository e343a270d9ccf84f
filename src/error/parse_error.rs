/// Represents all errors that can occur while tokenizing an input line.
///
/// Lexing stops at the first failure; nothing after it is examined.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A character outside the recognized symbol set.
    #[error("Lexer error: unexpected '{found}' at position {position}.")]
    UnexpectedCharacter {
        /// The offending source slice.
        found:    String,
        /// Byte offset of the slice in the input line.
        position: usize,
    },
    /// A well-formed integer or rational literal whose digits do not fit in
    /// a 64-bit integer.
    #[error("Lexer error: literal '{literal}' at position {position} does not fit in a 64-bit integer.")]
    LiteralOutOfRange {
        /// The literal as written.
        literal:  String,
        /// Byte offset of the literal in the input line.
        position: usize,
    },
}

/// Represents all errors that can occur while parsing a token sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Found a token the grammar does not allow at this point.
    #[error("Parser error: unexpected token {token} at position {position}.")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset of the token in the input line.
        position: usize,
    },
    /// Reached the end of input while an operand was still expected.
    #[error("Parser error: unexpected end of input.")]
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    #[error("Parser error: expected closing parenthesis ')' for the group opened at position {position}.")]
    ExpectedClosingParen {
        /// Byte offset of the opening parenthesis.
        position: usize,
    },
    /// A complete line was parsed but tokens remain.
    #[error("Parser error: extra tokens after expression, starting with {token} at position {position}.")]
    UnexpectedTrailingTokens {
        /// The first unconsumed token.
        token:    String,
        /// Byte offset of that token.
        position: usize,
    },
}
