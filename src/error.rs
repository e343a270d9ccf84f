/// Lexing and parsing errors.
///
/// Defines the errors raised before evaluation begins: characters outside the
/// recognized symbol set, and token sequences the grammar cannot reduce.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while walking the syntax tree:
/// unbound variables, division by zero and arithmetic overflow.
pub mod runtime_error;

pub use parse_error::{LexError, ParseError};
pub use runtime_error::RuntimeError;

/// Any failure produced by the line pipeline.
///
/// Each phase has its own error type; this enum wraps them so a caller of
/// [`crate::evaluate_line`] or [`crate::graph_at`] handles one type. Use
/// [`Error::kind`] to branch on the failure, never the message text.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The input could not be split into tokens.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The token sequence did not match the grammar.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// The kind of a pipeline failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A character outside the symbol set; see [`LexError`].
    Lex,
    /// See [`ParseError`].
    Parse,
    /// A variable was referenced before it was bound.
    UnboundVariable,
    /// A division (or rational literal) had a zero divisor.
    DivisionByZero,
    /// Exact arithmetic left the `i64` range, or a literal was too large
    /// to represent.
    Overflow,
}

impl Error {
    /// Classifies the error.
    ///
    /// ```
    /// use numline::{SymbolTable, error::ErrorKind, evaluate_line};
    ///
    /// let err = evaluate_line("2 $ 3", &SymbolTable::new()).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Lex);
    ///
    /// let err = evaluate_line("1 / 0", &SymbolTable::new()).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    ///
    /// let err = evaluate_line("99999999999999999999", &SymbolTable::new()).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Overflow);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lex(LexError::UnexpectedCharacter { .. }) => ErrorKind::Lex,
            Self::Lex(LexError::LiteralOutOfRange { .. }) => ErrorKind::Overflow,
            Self::Parse(_) => ErrorKind::Parse,
            Self::Runtime(RuntimeError::UnboundVariable { .. }) => ErrorKind::UnboundVariable,
            Self::Runtime(RuntimeError::DivisionByZero) => ErrorKind::DivisionByZero,
            Self::Runtime(RuntimeError::Overflow) => ErrorKind::Overflow,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Lex => "LexError",
            Self::Parse => "ParseError",
            Self::UnboundVariable => "UnboundVariable",
            Self::DivisionByZero => "DivisionByZero",
            Self::Overflow => "Overflow",
        };
        write!(f, "{name}")
    }
}
