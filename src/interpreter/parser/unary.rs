use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses an operand, the `NR` rule.
///
/// An operand is a literal, a variable or a parenthesized group, optionally
/// preceded by exactly one minus sign. Negation does not nest: `- - x` is a
/// syntax error, while `-(-x)` is fine.
///
/// Grammar:
/// ```text
///     NR := ["-"] (IntNum | FloatNum | RatNum | varID)
///         | "(" E ")"
///         | "-" "(" E ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::Negate`] wrapping an atom, or the atom itself.
pub(crate) fn parse_operand<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, _)) = tokens.peek() {
        tokens.next();
        let expr = parse_atom(tokens)?;
        return Ok(Expr::Negate { expr: Box::new(expr) });
    }

    parse_atom(tokens)
}

/// Parses an atom: a literal, a variable reference or a parenthesized group.
///
/// # Errors
/// - `UnexpectedToken` for anything else, a second minus sign included.
/// - `UnexpectedEndOfInput` when the line ends where an atom is expected.
fn parse_atom<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Integer(n), _)) => Ok(literal(*n)),
        Some((Token::Float(x), _)) => Ok(literal(*x)),
        Some((Token::Rational(pair), _)) => Ok(literal(*pair)),
        Some((Token::Identifier(name), _)) => Ok(Expr::Variable { name: name.clone() }),
        Some((Token::LParen, position)) => parse_grouping(tokens, *position),
        Some((tok, position)) => Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                                    position: *position, }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

fn literal(value: impl Into<LiteralValue>) -> Expr {
    Expr::Literal { value: value.into() }
}

/// Parses the rest of a parenthesized group after its `(`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned just after `(`.
/// - `position`: Offset of the opening parenthesis, for errors.
///
/// # Errors
/// `ExpectedClosingParen` when the inner expression is not followed by `)`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, position: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let inner = parse_expression(tokens)?;

    match tokens.next() {
        Some((Token::RParen, _)) => Ok(Expr::Grouped { expr: Box::new(inner) }),
        _ => Err(ParseError::ExpectedClosingParen { position }),
    }
}
