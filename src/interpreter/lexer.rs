use logos::Logos;
use tracing::trace;

use crate::error::LexError;

/// Represents a lexical token in an input line.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines every symbol the language accepts; anything else is a
/// [`LexError`].
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexFailure)]
pub enum Token {
    /// Floating-point literal tokens with exactly one decimal point, such as
    /// `3.14`, `.5` or `2.`.
    #[regex(r"[0-9]+\.[0-9]*", parse_float)]
    #[regex(r"\.[0-9]+", parse_float)]
    Float(f64),
    /// Rational literal tokens written with a backslash, such as `2\3`.
    #[regex(r"[0-9]+\\[0-9]+", parse_rational)]
    Rational((i64, i64)),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Identifier tokens; case-sensitive variable names such as `x` or `Rate`.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Equals,
    /// Whitespace separates tokens and is never emitted.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Why the lexer rejected a slice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LexFailure {
    /// The slice matched no token.
    #[default]
    Unrecognized,
    /// A numeric literal's digits do not fit in an `i64`.
    OutOfRange,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Float(x) => write!(f, "'{x}'"),
            Self::Rational((n, d)) => write!(f, "'{n}\\{d}'"),
            Self::Integer(n) => write!(f, "'{n}'"),
            Self::Identifier(name) => write!(f, "'{name}'"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::Caret => write!(f, "'^'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Equals => write!(f, "'='"),
            Self::Ignored => write!(f, "whitespace"),
        }
    }
}

/// Splits an input line into `(token, byte offset)` pairs.
///
/// Lexing is all-or-nothing: the first character outside the symbol set, or
/// the first integer or rational literal too large for `i64`, aborts the
/// whole line.
///
/// # Errors
/// Returns a [`LexError`] naming the first rejected slice.
///
/// # Example
/// ```
/// use numline::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x = 2\\3").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Identifier("x".to_string()), 0),
///                 (Token::Equals, 2),
///                 (Token::Rational((2, 3)), 4)]);
///
/// assert!(tokenize("2 $ 3").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(LexFailure::Unrecognized) => {
                return Err(LexError::UnexpectedCharacter { found: lexer.slice().to_string(),
                                                           position });
            },
            Err(LexFailure::OutOfRange) => {
                return Err(LexError::LiteralOutOfRange { literal: lexer.slice().to_string(),
                                                         position });
            },
        }
    }

    trace!(count = tokens.len(), "tokenized line");
    Ok(tokens)
}

/// Parses a floating-point literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
/// Parses an integer literal from the current token slice.
///
/// # Errors
/// `OutOfRange` if the literal does not fit in an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexFailure> {
    lex.slice().parse().map_err(|_| LexFailure::OutOfRange)
}
/// Parses a rational literal `numerator\denominator` from the current token
/// slice.
///
/// The denominator is not checked here; a zero denominator is reported when
/// the literal is evaluated.
fn parse_rational(lex: &logos::Lexer<Token>) -> Result<(i64, i64), LexFailure> {
    let (numer, denom) = lex.slice()
                            .split_once('\\')
                            .ok_or(LexFailure::Unrecognized)?;
    let part = |digits: &str| digits.parse::<i64>().map_err(|_| LexFailure::OutOfRange);
    Ok((part(numer)?, part(denom)?))
}
