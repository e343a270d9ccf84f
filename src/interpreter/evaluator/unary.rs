use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::number::Number,
    },
};

impl Context<'_> {
    /// Negates a number without changing its tier.
    ///
    /// # Errors
    /// `Overflow` when negating `i64::MIN`.
    ///
    /// # Example
    /// ```
    /// use num_rational::Ratio;
    /// use numline::interpreter::{evaluator::core::Context, value::number::Number};
    ///
    /// let v = Context::eval_negate(&Number::Integer(5)).unwrap();
    /// assert_eq!(v, Number::Integer(-5));
    ///
    /// let v = Context::eval_negate(&Number::Rational(Ratio::new(1, 2))).unwrap();
    /// assert_eq!(v, Number::Rational(Ratio::new(-1, 2)));
    /// ```
    pub fn eval_negate(value: &Number) -> EvalResult<Number> {
        match value {
            Number::Integer(n) => n.checked_neg()
                                   .map(Number::Integer)
                                   .ok_or(RuntimeError::Overflow),
            Number::Rational(r) if *r.numer() == i64::MIN => Err(RuntimeError::Overflow),
            Number::Rational(r) => Ok(Number::Rational(-*r)),
            Number::Float(x) => Ok(Number::Float(-x)),
        }
    }
}
