use num_rational::Ratio;

use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::{i64_to_f64, ratio_to_f64},
};

/// A value of the numeric tower.
///
/// Every consumer matches on all three variants; there is no fourth kind of
/// number. Rationals are kept reduced with a positive denominator, which
/// `Ratio` guarantees on construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A whole number (64 bit integer).
    Integer(i64),
    /// An exact fraction in lowest terms.
    Rational(Ratio<i64>),
    /// A double precision floating-point number.
    Float(f64),
}

/// Two operands lifted to the lowest common tier of the tower.
///
/// Produced by [`Number::promote`]; binary operators match on this instead of
/// on every pair of variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Promoted {
    /// Both operands were integers.
    Integers(i64, i64),
    /// At least one operand was rational and neither was a float.
    Rationals(Ratio<i64>, Ratio<i64>),
    /// At least one operand was a float.
    Floats(f64, f64),
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<Ratio<i64>> for Number {
    fn from(v: Ratio<i64>) -> Self {
        Self::Rational(v)
    }
}

impl Number {
    /// Builds a reduced rational from a numerator and denominator.
    ///
    /// # Errors
    /// - `DivisionByZero` when `denom` is zero.
    /// - `Overflow` when either part is `i64::MIN`, whose sign cannot be
    ///   normalized.
    ///
    /// # Example
    /// ```
    /// use num_rational::Ratio;
    /// use numline::interpreter::value::number::Number;
    ///
    /// assert_eq!(Number::rational(2, -4).unwrap(),
    ///            Number::Rational(Ratio::new(-1, 2)));
    /// assert!(Number::rational(1, 0).is_err());
    /// ```
    pub fn rational(numer: i64, denom: i64) -> EvalResult<Self> {
        if denom == 0 {
            return Err(RuntimeError::DivisionByZero);
        }
        if numer == i64::MIN || denom == i64::MIN {
            return Err(RuntimeError::Overflow);
        }
        Ok(Self::Rational(Ratio::new(numer, denom)))
    }

    /// Turns a rational result back into an integer when its denominator is
    /// one.
    ///
    /// This is the only place a `Rational` collapses to an `Integer`; it is
    /// applied to arithmetic results, never to literals.
    #[must_use]
    pub fn from_ratio(value: Ratio<i64>) -> Self {
        if value.is_integer() {
            Self::Integer(value.to_integer())
        } else {
            Self::Rational(value)
        }
    }

    /// Builds the number a literal denotes.
    ///
    /// Rational literals keep their variant even when they reduce to a whole
    /// number, so `4\2` is `Rational(2/1)`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` for a rational literal with a zero
    /// denominator.
    pub fn from_literal(literal: &LiteralValue) -> EvalResult<Self> {
        match *literal {
            LiteralValue::Integer(n) => Ok(Self::Integer(n)),
            LiteralValue::Float(f) => Ok(Self::Float(f)),
            LiteralValue::Rational { numer, denom } => Self::rational(numer, denom),
        }
    }

    /// Converts the number to an `f64`.
    ///
    /// # Example
    /// ```
    /// use num_rational::Ratio;
    /// use numline::interpreter::value::number::Number;
    ///
    /// assert_eq!(Number::Integer(3).as_float(), 3.0);
    /// assert_eq!(Number::Rational(Ratio::new(1, 2)).as_float(), 0.5);
    /// ```
    #[must_use]
    pub fn as_float(&self) -> f64 {
        match self {
            Self::Integer(n) => i64_to_f64(*n),
            Self::Rational(r) => ratio_to_f64(r),
            Self::Float(f) => *f,
        }
    }

    /// Returns the value as an integer if it is exactly one.
    ///
    /// Rationals with denominator one qualify; floats never do.
    #[must_use]
    pub fn as_exact_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::Rational(r) if r.is_integer() => Some(r.to_integer()),
            Self::Rational(_) | Self::Float(_) => None,
        }
    }

    /// Lifts two operands to their common tier.
    ///
    /// A float on either side wins; otherwise a rational on either side makes
    /// both rational; otherwise both stay integers.
    ///
    /// # Example
    /// ```
    /// use num_rational::Ratio;
    /// use numline::interpreter::value::number::{Number, Promoted};
    ///
    /// let half = Number::Rational(Ratio::new(1, 2));
    /// assert_eq!(half.promote(&Number::Integer(2)),
    ///            Promoted::Rationals(Ratio::new(1, 2), Ratio::from_integer(2)));
    /// assert_eq!(half.promote(&Number::Float(0.5)), Promoted::Floats(0.5, 0.5));
    /// ```
    #[must_use]
    pub fn promote(&self, other: &Self) -> Promoted {
        match (self, other) {
            (Self::Float(_), _) | (_, Self::Float(_)) => {
                Promoted::Floats(self.as_float(), other.as_float())
            },
            (Self::Integer(a), Self::Integer(b)) => Promoted::Integers(*a, *b),
            (Self::Rational(a), Self::Rational(b)) => Promoted::Rationals(*a, *b),
            (Self::Rational(a), Self::Integer(b)) => {
                Promoted::Rationals(*a, Ratio::from_integer(*b))
            },
            (Self::Integer(a), Self::Rational(b)) => {
                Promoted::Rationals(Ratio::from_integer(*a), *b)
            },
        }
    }

    /// The name shown next to a value in the symbol table listing.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "Integer",
            Self::Rational(_) => "Rational",
            Self::Float(_) => "Floating Point",
        }
    }
}

/// Renders integers as digits, floats with Rust's shortest round-trip
/// formatting and rationals as `numerator\denominator`.
impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Rational(r) => write!(f, "{}\\{}", r.numer(), r.denom()),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}
