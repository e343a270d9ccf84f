use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::number::Number,
    },
};

impl Context<'_> {
    /// Evaluates a binary operation between two numbers.
    ///
    /// `+`, `-`, `*` and `/` go through `eval_scalar_op`, which promotes both
    /// operands to a common tier first. `^` calls `eval_pow`, whose tier
    /// depends on the exponent as much as on the base.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<Number>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use num_rational::Ratio;
    /// use numline::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::number::Number},
    /// };
    ///
    /// let result = Context::eval_binary(BinaryOperator::Div, &Number::Integer(6), &Number::Integer(4));
    /// assert_eq!(result.unwrap(), Number::Rational(Ratio::new(3, 2)));
    ///
    /// let result = Context::eval_binary(BinaryOperator::Pow, &Number::Integer(2), &Number::Integer(10));
    /// assert_eq!(result.unwrap(), Number::Integer(1024));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: &Number, right: &Number) -> EvalResult<Number> {
        match op {
            BinaryOperator::Add
            | BinaryOperator::Sub
            | BinaryOperator::Mul
            | BinaryOperator::Div => Self::eval_scalar_op(op, left, right),
            BinaryOperator::Pow => Self::eval_pow(left, right),
        }
    }
}
