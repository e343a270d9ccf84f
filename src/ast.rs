/// Represents a numeric literal as written in the source.
///
/// Literals are not numbers yet: the parser records the digits it saw and the
/// evaluator builds the [`Number`](crate::interpreter::value::number::Number).
/// A rational literal therefore keeps its raw denominator, zero included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal such as `42`.
    Integer(i64),
    /// A floating-point literal such as `2.5`.
    Float(f64),
    /// A rational literal such as `2\3`.
    Rational {
        /// Digits before the backslash.
        numer: i64,
        /// Digits after the backslash.
        denom: i64,
    },
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<(i64, i64)> for LiteralValue {
    fn from((numer, denom): (i64, i64)) -> Self {
        Self::Rational { numer, denom }
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Nodes own their children and carry no back-references. The tree is built
/// by the parser, consumed by one evaluation and then dropped. Source offsets
/// stay on the tokens; only parse errors report them.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal {
        /// The literal as written.
        value: LiteralValue,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// Arithmetic negation of an operand (`-x`, `-(a + b)`).
    Negate {
        /// The negated operand.
        expr: Box<Self>,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// A parenthesized expression.
    Grouped {
        /// The inner expression.
        expr: Box<Self>,
    },
}

/// Represents a parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `name = expr`; evaluating it yields one binding.
    Assignment {
        /// The name being bound.
        name:  String,
        /// The right-hand side.
        value: Expr,
    },
    /// A bare expression evaluated for its value only.
    Expression(Expr),
}

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}
