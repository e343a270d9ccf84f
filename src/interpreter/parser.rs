/// Shared parser plumbing.
///
/// Defines the parse result type and the entry point for the expression rule
/// `E`, which every other rule eventually recurses back into through
/// parenthesized groups.
pub mod core;

/// Operand parsing.
///
/// Handles the innermost rule `NR`: numeric literals, variable references and
/// parenthesized groups, each optionally preceded by a single minus sign.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the additive, multiplicative and power levels of the grammar,
/// from lowest to highest precedence.
pub mod binary;

/// Line parsing.
///
/// Decides whether a line is an assignment or a bare expression, and rejects
/// tokens left over once the line rule is complete.
pub mod statement;
