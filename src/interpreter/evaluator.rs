/// Binary operator evaluation logic.
///
/// Handles arithmetic between two numbers: promotion to a common tier, the
/// four basic operators and exponentiation.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation, which never changes a number's tier.
pub mod unary;

/// Core evaluation logic and context.
///
/// Contains the evaluation context that holds the symbol table snapshot and
/// dispatches on each kind of expression node.
pub mod core;

/// Per-node evaluation helpers.
///
/// Provides the routines that turn literals, variable references and operator
/// nodes into numbers.
pub mod utils;

/// Statement evaluation.
///
/// Evaluates a whole line and packages its value together with the bindings
/// it produces.
pub mod statement;
