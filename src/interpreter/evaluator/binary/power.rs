use num_rational::Ratio;
use num_traits::{Zero, checked_pow};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::number::Number,
    },
    util::num::exponent_to_usize,
};

impl Context<'_> {
    /// Evaluates an exponentiation operation.
    ///
    /// An exact base (integer or rational) raised to an integer-valued
    /// exponent (an integer, or a rational whose denominator is one) is
    /// computed exactly by repeated multiplication. A negative exponent
    /// inverts the base first, so `2 ^ -2` is `1\4`. Every other combination
    /// (a float on either side, or a fractional exponent) is computed with
    /// `powf` and yields a float.
    ///
    /// # Errors
    /// - `DivisionByZero` for an exact zero raised to a negative exponent.
    /// - `Overflow` when the exact result does not fit in `i64`.
    ///
    /// # Example
    /// ```
    /// use num_rational::Ratio;
    /// use numline::interpreter::{evaluator::core::Context, value::number::Number};
    ///
    /// let result = Context::eval_pow(&Number::Integer(2), &Number::Integer(-2)).unwrap();
    /// assert_eq!(result, Number::Rational(Ratio::new(1, 4)));
    ///
    /// let result = Context::eval_pow(&Number::Integer(4), &Number::Rational(Ratio::new(1, 2)));
    /// assert_eq!(result.unwrap(), Number::Float(2.0));
    /// ```
    pub fn eval_pow(base: &Number, exponent: &Number) -> EvalResult<Number> {
        match (base, exponent.as_exact_integer()) {
            (Number::Float(_), _) | (_, None) => {
                Ok(Number::Float(base.as_float().powf(exponent.as_float())))
            },
            (Number::Integer(b), Some(e)) => {
                if e < 0 {
                    Self::exact_pow(Ratio::from_integer(*b), e)
                } else {
                    checked_pow(*b, exponent_to_usize(e.unsigned_abs())?).map(Number::Integer)
                                                                         .ok_or(RuntimeError::Overflow)
                }
            },
            (Number::Rational(r), Some(e)) => Self::exact_pow(*r, e),
        }
    }

    fn exact_pow(base: Ratio<i64>, exponent: i64) -> EvalResult<Number> {
        let base = if exponent < 0 {
            if base.is_zero() {
                return Err(RuntimeError::DivisionByZero);
            }
            if *base.numer() == i64::MIN {
                return Err(RuntimeError::Overflow);
            }
            base.recip()
        } else {
            base
        };

        checked_pow(base, exponent_to_usize(exponent.unsigned_abs())?).map(Number::from_ratio)
                                                                      .ok_or(RuntimeError::Overflow)
    }
}
