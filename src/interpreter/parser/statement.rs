use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a whole token sequence as one line.
///
/// The line must be exactly one statement; any token left after it is an
/// error.
///
/// # Errors
/// Propagates statement errors, and returns `UnexpectedTrailingTokens` when
/// the statement does not consume the whole line.
///
/// # Example
/// ```
/// use numline::{
///     ast::Statement,
///     interpreter::{lexer::tokenize, parser::statement::parse_line},
/// };
///
/// let tokens = tokenize("x = 1 + 2").unwrap();
/// assert!(matches!(parse_line(&tokens), Ok(Statement::Assignment { .. })));
///
/// let tokens = tokenize("1 2").unwrap();
/// assert!(parse_line(&tokens).is_err());
/// ```
pub fn parse_line(tokens: &[(Token, usize)]) -> ParseResult<Statement> {
    let mut iter = tokens.iter().peekable();
    let statement = parse_statement(&mut iter)?;

    if let Some((token, position)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token:    token.to_string(),
                                                          position: *position, });
    }

    debug!(?statement, "parsed line");
    Ok(statement)
}

/// Parses a whole token sequence as one expression, without the assignment
/// form.
///
/// Used where a line must denote a value, such as the coefficient and
/// constant of a plotted line.
///
/// # Errors
/// Propagates expression errors, and returns `UnexpectedTrailingTokens` when
/// the expression does not consume the whole line (which includes a stray
/// `=` after an identifier).
pub fn parse_standalone_expression(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter)?;

    if let Some((token, position)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token:    token.to_string(),
                                                          position: *position, });
    }

    Ok(expr)
}

/// Parses a single statement.
/// A statement is either:
/// - an assignment `varID "=" E`, recognized by an identifier directly
///   followed by `=`;
/// - an expression `E`.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, position)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some(statement) = parse_assignment(tokens)? {
        return Ok(statement);
    }

    Ok(Statement::Expression(parse_expression(tokens)?))
}

/// Parses an assignment of the form `name = expression`.
///
/// Uses a cloned iterator to look one token past the identifier, so a line
/// such as `x + 1` is left untouched for expression parsing.
///
/// # Returns
/// - `Ok(Some(statement))` if an assignment was parsed,
/// - `Ok(None)` if the line does not start with `identifier =`.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if !matches!(tokens.peek(), Some((Token::Identifier(_), _))) {
        return Ok(None);
    }

    let mut lookahead = tokens.clone();
    lookahead.next();
    if !matches!(lookahead.peek(), Some((Token::Equals, _))) {
        return Ok(None);
    }

    let Some((Token::Identifier(name), _)) = tokens.next() else {
        return Ok(None);
    };
    tokens.next();
    let name = name.clone();

    let value = parse_expression(tokens)?;
    Ok(Some(Statement::Assignment { name, value }))
}
