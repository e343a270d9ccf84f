/// The evaluator module computes the value of parsed lines.
///
/// The evaluator walks the AST against a read-only symbol table snapshot,
/// applies the numeric tower's promotion rules and reports runtime errors
/// such as unbound variables or division by zero. Assignments produce a
/// binding delta instead of mutating the table.
///
/// # Responsibilities
/// - Evaluates every AST node kind.
/// - Implements exact integer and rational arithmetic, and float fallback.
/// - Packages a line's value together with the bindings it introduces.
pub mod evaluator;
/// Plot sampling.
///
/// Evaluates a line `coefficient * x + constant` at one sample or over a
/// range of integer samples, always producing floats for plotting.
pub mod graphing;
/// The lexer module tokenizes input lines for further parsing.
///
/// The lexer reads the raw line and produces a sequence of tokens: numeric
/// literals of three kinds, identifiers, operators, parentheses and `=`.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input into tokens with their byte offsets.
/// - Skips whitespace.
/// - Rejects the whole line at the first character outside the symbol set.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one function per grammar rule, from the
/// assignment form down to single operands.
///
/// # Responsibilities
/// - Converts tokens into a `Statement` tree.
/// - Encodes precedence and associativity of `+ - * / ^`.
/// - Rejects lines that do not reduce to exactly one statement.
pub mod parser;
/// The built-in self-test battery.
///
/// Runs a fixed list of lines through the whole pipeline and reports, for
/// each one, whether it rendered (or failed) as expected.
pub mod self_test;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Number` tower and its promotion rule.
/// - Defines the `SymbolTable` and its merge operation.
pub mod value;
