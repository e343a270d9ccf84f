/// Operator dispatch.
pub mod core;
/// Exponentiation.
///
/// Exact powers for integer-valued exponents, floating-point powers otherwise.
pub mod power;
/// The four basic operators on promoted operands.
pub mod scalar;
