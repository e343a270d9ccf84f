/// The numeric tower.
///
/// Defines `Number`, the closed set of runtime values (integer, exact
/// rational, float), together with promotion to a common tier, conversions
/// and the rendering used for results.
pub mod number;
/// Variable bindings.
///
/// Defines `SymbolTable`, the ordered name-to-number mapping, and its merge
/// operation, which is the only way bindings change between evaluations.
pub mod symbol_table;
