use num_rational::Ratio;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Zero};

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::number::{Number, Promoted},
    },
};

impl Context<'_> {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// Operands are promoted with [`Number::promote`] and the operation runs
    /// in the resulting tier:
    /// - floats use IEEE arithmetic and produce a float;
    /// - rationals use exact, checked arithmetic and collapse to an integer
    ///   when the reduced denominator is one;
    /// - integers use checked arithmetic, except that a division which does
    ///   not come out even produces a reduced rational.
    ///
    /// Division by zero is checked explicitly in every tier, the float zero
    /// included. `Pow` between floats is `powf`; between exact operands it
    /// defers to `eval_pow`.
    ///
    /// # Example
    /// ```
    /// use num_rational::Ratio;
    /// use numline::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::number::Number},
    /// };
    ///
    /// let third = Number::Rational(Ratio::new(1, 3));
    /// let two_thirds = Number::Rational(Ratio::new(2, 3));
    ///
    /// let sum = Context::eval_scalar_op(BinaryOperator::Add, &two_thirds, &third).unwrap();
    /// assert_eq!(sum, Number::Integer(1));
    ///
    /// let sum = Context::eval_scalar_op(BinaryOperator::Add, &third, &third).unwrap();
    /// assert_eq!(sum, Number::Rational(Ratio::new(2, 3)));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: &Number,
                          right: &Number)
                          -> EvalResult<Number> {
        match left.promote(right) {
            Promoted::Floats(a, b) => Self::eval_float_op(op, a, b),
            Promoted::Rationals(a, b) => Self::eval_rational_op(op, a, b),
            Promoted::Integers(a, b) => Self::eval_integer_op(op, a, b),
        }
    }

    fn eval_float_op(op: BinaryOperator, a: f64, b: f64) -> EvalResult<Number> {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};

        Ok(Number::Float(match op {
                             Add => a + b,
                             Sub => a - b,
                             Mul => a * b,
                             Div => {
                                 if b == 0.0 {
                                     return Err(RuntimeError::DivisionByZero);
                                 }
                                 a / b
                             },
                             Pow => a.powf(b),
                         }))
    }

    fn eval_rational_op(op: BinaryOperator, a: Ratio<i64>, b: Ratio<i64>) -> EvalResult<Number> {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};

        let result = match op {
            Add => a.checked_add(&b),
            Sub => a.checked_sub(&b),
            Mul => a.checked_mul(&b),
            Div => {
                if b.is_zero() {
                    return Err(RuntimeError::DivisionByZero);
                }
                a.checked_div(&b)
            },
            Pow => return Self::eval_pow(&Number::Rational(a), &Number::Rational(b)),
        };

        result.map(Number::from_ratio)
              .ok_or(RuntimeError::Overflow)
    }

    fn eval_integer_op(op: BinaryOperator, a: i64, b: i64) -> EvalResult<Number> {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};

        let result = match op {
            Add => a.checked_add(b),
            Sub => a.checked_sub(b),
            Mul => a.checked_mul(b),
            Div => {
                if b == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                match a.checked_rem(b) {
                    Some(0) => a.checked_div(b),
                    Some(_) => return Number::rational(a, b),
                    None => None,
                }
            },
            Pow => return Self::eval_pow(&Number::Integer(a), &Number::Integer(b)),
        };

        result.map(Number::Integer).ok_or(RuntimeError::Overflow)
    }
}
