use tracing::debug;

use crate::{
    ast::Statement,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{number::Number, symbol_table::SymbolTable},
    },
};

/// The outcome of evaluating one statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The value of the expression, or the value just bound.
    pub value: Number,
    /// Bindings introduced or updated by the statement: exactly one pair for
    /// an assignment, none for a bare expression.
    pub delta: SymbolTable,
}

impl Context<'_> {
    /// Evaluates a single statement.
    ///
    /// An assignment evaluates its right-hand side and reports the bound
    /// value along with a one-entry delta. A bare expression reports its
    /// value with an empty delta. The context's own table is never modified;
    /// merging the delta is the caller's job.
    ///
    /// # Example
    /// ```
    /// use numline::{
    ///     ast::{Expr, LiteralValue, Statement},
    ///     interpreter::{
    ///         evaluator::core::Context,
    ///         value::{number::Number, symbol_table::SymbolTable},
    ///     },
    /// };
    ///
    /// let table = SymbolTable::new();
    /// let statement = Statement::Assignment { name:  "x".to_string(),
    ///                                         value: Expr::Literal { value: LiteralValue::Integer(5) }, };
    ///
    /// let evaluation = Context::new(&table).eval_statement(&statement).unwrap();
    /// assert_eq!(evaluation.value, Number::Integer(5));
    /// assert_eq!(evaluation.delta, SymbolTable::single("x", Number::Integer(5)));
    /// assert!(table.is_empty());
    /// ```
    pub fn eval_statement(&self, statement: &Statement) -> EvalResult<Evaluation> {
        let evaluation = match statement {
            Statement::Assignment { name, value } => {
                let value = self.eval(value)?;
                Evaluation { value,
                             delta: SymbolTable::single(name.clone(), value) }
            },
            Statement::Expression(expr) => Evaluation { value: self.eval(expr)?,
                                                        delta: SymbolTable::new(), },
        };

        debug!(value = %evaluation.value, bindings = evaluation.delta.len(), "evaluated statement");
        Ok(evaluation)
    }
}

/// Evaluates a statement against a symbol table snapshot.
///
/// Shorthand for `Context::new(bindings).eval_statement(statement)`.
pub fn evaluate(statement: &Statement, bindings: &SymbolTable) -> EvalResult<Evaluation> {
    Context::new(bindings).eval_statement(statement)
}
