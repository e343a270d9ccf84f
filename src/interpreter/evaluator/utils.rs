use crate::{
    ast::{BinaryOperator, Expr, LiteralValue},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::number::Number,
    },
};

impl Context<'_> {
    /// Evaluates a literal.
    ///
    /// Integer and float literals map directly to their variant. Rational
    /// literals are reduced but stay `Rational` even when the denominator
    /// reduces to one.
    ///
    /// # Errors
    /// `DivisionByZero` for a rational literal such as `1\0`.
    pub fn eval_literal(value: &LiteralValue) -> EvalResult<Number> {
        Number::from_literal(value)
    }

    /// Looks up a variable by name in the context's symbol table.
    ///
    /// If the variable is not bound, an `UnboundVariable` error is returned.
    ///
    /// # Example
    /// ```
    /// use numline::interpreter::{
    ///     evaluator::core::Context,
    ///     value::{number::Number, symbol_table::SymbolTable},
    /// };
    ///
    /// let table = SymbolTable::single("x", Number::Integer(10));
    /// let ctx = Context::new(&table);
    ///
    /// assert_eq!(ctx.eval_variable("x").unwrap(), Number::Integer(10));
    /// assert!(ctx.eval_variable("y").is_err());
    /// ```
    pub fn eval_variable(&self, name: &str) -> EvalResult<Number> {
        self.bindings
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UnboundVariable { name: name.to_owned() })
    }

    /// Evaluates a negation node by evaluating its operand and negating the
    /// result with [`Context::eval_negate`].
    pub fn eval_negate_op(&self, expr: &Expr) -> EvalResult<Number> {
        let value = self.eval(expr)?;
        Self::eval_negate(&value)
    }

    /// Evaluates a binary operator applied to two expressions.
    ///
    /// The left operand is fully evaluated before the right one; the two
    /// values are then combined by [`Context::eval_binary`].
    pub fn eval_binary_op(&self,
                          left: &Expr,
                          op: BinaryOperator,
                          right: &Expr)
                          -> EvalResult<Number> {
        let lval = self.eval(left)?;
        let rval = self.eval(right)?;

        Self::eval_binary(op, &lval, &rval)
    }
}
