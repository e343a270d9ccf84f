use num_rational::Ratio;

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Converts an `i64` to the nearest `f64`.
///
/// Integers beyond `2^53` round to the nearest representable double. Float
/// promotion accepts that loss silently, so this never fails.
///
/// ## Example
/// ```
/// use numline::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(-42), -42.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts a rational to the nearest `f64` by dividing numerator by
/// denominator in floating point.
///
/// ## Example
/// ```
/// use num_rational::Ratio;
/// use numline::util::num::ratio_to_f64;
///
/// assert_eq!(ratio_to_f64(&Ratio::new(1, 4)), 0.25);
/// ```
#[must_use]
pub fn ratio_to_f64(value: &Ratio<i64>) -> f64 {
    i64_to_f64(*value.numer()) / i64_to_f64(*value.denom())
}

/// Converts an exponent magnitude to `usize` for repeated multiplication.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` when the magnitude does not fit the
/// platform's `usize`.
///
/// ## Example
/// ```
/// use numline::util::num::exponent_to_usize;
///
/// assert_eq!(exponent_to_usize(12).unwrap(), 12);
/// ```
pub fn exponent_to_usize(value: u64) -> EvalResult<usize> {
    usize::try_from(value).map_err(|_| RuntimeError::Overflow)
}
