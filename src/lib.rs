//! # numline
//!
//! numline evaluates single-line arithmetic and assignment expressions over a
//! persistent symbol table. Numbers are integers, exact rationals (written
//! `2\3`) or floats, and mixed arithmetic promotes along that tower.
//!
//! A front end talks to the crate through three entry points:
//! [`evaluate_line`], [`graph_at`] (with [`sweep`] for whole plots) and
//! [`run_tests`].

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::sync::Once;

use tracing::debug;

use crate::interpreter::{
    evaluator::statement::evaluate, lexer::tokenize, parser::statement::parse_line,
};
pub use crate::{
    error::{Error, ErrorKind},
    interpreter::{
        graphing::{DEFAULT_SWEEP, Line, Orientation, graph_at, sweep},
        self_test::{BATTERY, Expected, TestCase, TestOutcome, TestReport, run_cases, run_tests},
        value::{number::Number, symbol_table::SymbolTable},
    },
};

/// Defines the structure of parsed lines.
///
/// This module declares the `Statement` and `Expr` types that represent a
/// line as a tree. The AST is built by the parser, consumed by a single
/// evaluation and then dropped.
pub mod ast;
/// Provides the error types for lexing, parsing and evaluation.
///
/// Every failure of the pipeline is one of a small set of kinds; callers
/// branch on [`ErrorKind`] and use the `Display` text only for people.
pub mod error;
/// Orchestrates the entire process of line evaluation.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, plotting and the self-test battery.
pub mod interpreter;
/// General utilities for numeric conversion.
pub mod util;

/// What one evaluated line gives back to the front end.
#[derive(Debug, Clone, PartialEq)]
pub struct LineOutput {
    /// The value of the line, or `None` for a blank line.
    pub value:    Option<Number>,
    /// The value rendered for display: digits for integers, `n\d` for
    /// rationals, decimal notation for floats.
    pub rendered: Option<String>,
    /// The caller's table with this line's bindings merged in.
    pub bindings: SymbolTable,
}

/// Evaluates one input line against a symbol table.
///
/// The line runs through the lexer, parser and evaluator. Any binding it
/// produces is merged into a copy of `bindings`, which is returned together
/// with the rendered value. `bindings` itself is left untouched, so a failed
/// line never changes the caller's state. A blank line has no value and
/// returns the table unchanged.
///
/// # Errors
/// Returns an [`Error`] whose [`kind`](Error::kind) tells lexing, parsing,
/// unbound-variable, division-by-zero and overflow failures apart.
///
/// # Examples
/// ```
/// use numline::{SymbolTable, evaluate_line};
///
/// let first = evaluate_line("x = 5", &SymbolTable::new()).unwrap();
/// assert_eq!(first.rendered.as_deref(), Some("5"));
///
/// let second = evaluate_line("x / 2", &first.bindings).unwrap();
/// assert_eq!(second.rendered.as_deref(), Some("5\\2"));
///
/// // Intentional error: `y` is not bound.
/// assert!(evaluate_line("y + 1", &second.bindings).is_err());
/// ```
pub fn evaluate_line(source: &str, bindings: &SymbolTable) -> Result<LineOutput, Error> {
    let tokens = tokenize(source)?;

    if tokens.is_empty() {
        return Ok(LineOutput { value:    None,
                               rendered: None,
                               bindings: bindings.clone(), });
    }

    let statement = parse_line(&tokens)?;
    let evaluation = evaluate(&statement, bindings)?;
    let merged = bindings.merge(&evaluation.delta);

    debug!(source, result = %evaluation.value, symbols = %merged, "evaluated line");

    Ok(LineOutput { value:    Some(evaluation.value),
                    rendered: Some(evaluation.value.to_string()),
                    bindings: merged, })
}

static TRACING_INIT: Once = Once::new();

/// Installs a `tracing` subscriber that prints to stderr.
///
/// Only takes effect when `RUST_LOG` is set (for example
/// `RUST_LOG=numline=debug`), and only the first time it is called.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
                    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

                    if std::env::var("RUST_LOG").is_ok() {
                        tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                                        .with_target(true))
                                                      .with(EnvFilter::from_default_env())
                                                      .init();
                    }
                });
}
