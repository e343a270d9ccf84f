/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Referenced a variable absent from the symbol table.
    #[error("Unbound variable '{name}'.")]
    UnboundVariable {
        /// The name of the variable.
        name: String,
    },
    /// Attempted division by zero, or built a rational with a zero
    /// denominator.
    #[error("Division by zero.")]
    DivisionByZero,
    /// Exact integer or rational arithmetic overflowed `i64`.
    #[error("Integer overflow while trying to compute result.")]
    Overflow,
}
