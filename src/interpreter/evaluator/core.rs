use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::value::{number::Number, symbol_table::SymbolTable},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// A context borrows the caller's symbol table for the duration of one
/// evaluation and never writes to it. Bindings produced by the evaluation are
/// returned as a separate delta (see
/// [`Context::eval_statement`](Context::eval_statement)), which the caller
/// merges into its own table. Contexts over different tables are independent
/// and can be used from different threads at the same time.
///
/// ## Usage
///
/// ```
/// use numline::{
///     ast::Expr,
///     interpreter::{
///         evaluator::core::Context,
///         value::{number::Number, symbol_table::SymbolTable},
///     },
/// };
///
/// let table = SymbolTable::single("x", Number::Integer(4));
/// let context = Context::new(&table);
///
/// let expr = Expr::Variable { name: "x".to_string() };
/// assert_eq!(context.eval(&expr).unwrap(), Number::Integer(4));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    /// The snapshot variable references are resolved against.
    pub bindings: &'a SymbolTable,
}

impl<'a> Context<'a> {
    /// Creates an evaluation context over a symbol table snapshot.
    #[must_use]
    pub const fn new(bindings: &'a SymbolTable) -> Self {
        Self { bindings }
    }

    /// Evaluates an expression and returns the resulting number.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on expression variant: literals,
    /// variables, negation, binary operations and parenthesized groups.
    /// Binary operands are evaluated left before right.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value of the expression.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Number> {
        match expr {
            Expr::Literal { value, .. } => Self::eval_literal(value),
            Expr::Variable { name, .. } => self.eval_variable(name),
            Expr::Negate { expr, .. } => self.eval_negate_op(expr),
            Expr::BinaryOp { left, op, right, .. } => self.eval_binary_op(left, *op, right),
            Expr::Grouped { expr, .. } => self.eval(expr),
        }
    }
}
