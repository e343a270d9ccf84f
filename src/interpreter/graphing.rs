use std::ops::Range;

use tracing::debug;

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::Context,
        lexer::tokenize,
        parser::statement::parse_standalone_expression,
        value::{number::Number, symbol_table::SymbolTable},
    },
};

/// The integer samples a plot sweep visits by default.
pub const DEFAULT_SWEEP: Range<i64> = -100..100;

/// Which axis the sample variable is plotted on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    /// `y = coefficient * x + constant`; points are `(sample, value)`.
    #[default]
    XFirst,
    /// `x = coefficient * y + constant`; points are `(value, sample)`.
    YFirst,
}

/// A straight line `coefficient * x + constant` with both parts already
/// evaluated.
///
/// Coefficient and constant are full expressions, so they may reference
/// variables from the symbol table they were evaluated against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// The slope.
    pub coefficient: Number,
    /// The offset.
    pub constant:    Number,
}

impl Line {
    /// Parses and evaluates the coefficient and constant expressions.
    ///
    /// # Errors
    /// The first lexing, parsing or evaluation error from either expression,
    /// coefficient first.
    pub fn new(coefficient: &str, constant: &str, bindings: &SymbolTable) -> Result<Self, Error> {
        Ok(Self { coefficient: evaluate_expression(coefficient, bindings)?,
                  constant:    evaluate_expression(constant, bindings)?, })
    }

    /// Evaluates the line at `x`.
    ///
    /// All three operands are promoted to floats first, whatever their tier,
    /// so sampling never fails: values beyond the `i64` range just lose
    /// precision.
    #[must_use]
    pub fn at(&self, x: &Number) -> f64 {
        self.coefficient
            .as_float()
            .mul_add(x.as_float(), self.constant.as_float())
    }
}

/// Evaluates `coefficient * x + constant` at one sample.
///
/// Each of the three strings is an independent expression run through the
/// lexer, parser and evaluator against `bindings`. The result is always a
/// float, ready to use as a plot coordinate.
///
/// # Errors
/// Any lexing, parsing or evaluation error from the three expressions,
/// unchanged.
///
/// # Example
/// ```
/// use numline::{SymbolTable, graph_at};
///
/// assert_eq!(graph_at("2", "3", "4", &SymbolTable::new()).unwrap(), 11.0);
/// assert!(graph_at("a", "3", "4", &SymbolTable::new()).is_err());
/// ```
pub fn graph_at(coefficient: &str,
                constant: &str,
                x: &str,
                bindings: &SymbolTable)
                -> Result<f64, Error> {
    let line = Line::new(coefficient, constant, bindings)?;
    let x = evaluate_expression(x, bindings)?;
    Ok(line.at(&x))
}

/// Samples a line at every integer in `range`.
///
/// The coefficient and constant are parsed and evaluated once, so a failing
/// line reports one error rather than one per sample. Sampling itself cannot
/// fail.
///
/// # Errors
/// The first error raised while evaluating the coefficient or constant.
///
/// # Example
/// ```
/// use numline::{Orientation, SymbolTable, sweep};
///
/// let points = sweep("2", "1", 0..3, Orientation::XFirst, &SymbolTable::new()).unwrap();
/// assert_eq!(points, vec![(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)]);
///
/// let points = sweep("2", "1", 0..2, Orientation::YFirst, &SymbolTable::new()).unwrap();
/// assert_eq!(points, vec![(1.0, 0.0), (3.0, 1.0)]);
/// ```
pub fn sweep(coefficient: &str,
             constant: &str,
             range: Range<i64>,
             orientation: Orientation,
             bindings: &SymbolTable)
             -> Result<Vec<(f64, f64)>, Error> {
    let line = Line::new(coefficient, constant, bindings)?;
    debug!(?line, ?range, ?orientation, "sweeping line");

    Ok(range.map(|sample| {
                let x = Number::Integer(sample);
                let value = line.at(&x);
                match orientation {
                    Orientation::XFirst => (x.as_float(), value),
                    Orientation::YFirst => (value, x.as_float()),
                }
            })
            .collect())
}

/// Runs one expression string through the whole pipeline.
fn evaluate_expression(text: &str, bindings: &SymbolTable) -> Result<Number, Error> {
    let tokens = tokenize(text)?;
    let expr = parse_standalone_expression(&tokens)?;
    Ok(Context::new(bindings).eval(&expr)?)
}
