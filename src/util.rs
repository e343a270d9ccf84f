/// Numeric conversion helpers.
///
/// Explicit conversions between `i64`, `Ratio<i64>` and `f64`, used by float
/// promotion and exponentiation.
pub mod num;
