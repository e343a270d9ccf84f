use tracing::trace;

use crate::interpreter::value::number::Number;

/// An ordered mapping from variable names to numbers.
///
/// Names are unique. Slot order is kept for display only; lookups go by name.
/// A table is never shared between evaluations: the evaluator reads a
/// snapshot and returns a delta, and the owner of the persistent table folds
/// the delta in with [`SymbolTable::merge`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolTable {
    entries: Vec<(String, Number)>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Creates a table holding exactly one binding.
    ///
    /// This is the shape of the delta an assignment produces.
    #[must_use]
    pub fn single(name: impl Into<String>, value: Number) -> Self {
        Self { entries: vec![(name.into(), value)] }
    }

    /// Looks up a variable by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Number> {
        self.entries
            .iter()
            .find_map(|(n, v)| (n == name).then_some(v))
    }

    /// Iterates over `(name, value)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Number)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// The number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the table holds no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every binding.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Applies `delta` on top of `self` and returns the result.
    ///
    /// Pairs from `delta` are applied in `delta`'s order. A name already in
    /// `self` keeps its slot and takes the new value; a new name is appended.
    ///
    /// # Example
    /// ```
    /// use numline::interpreter::value::{number::Number, symbol_table::SymbolTable};
    ///
    /// let base: SymbolTable = [("x", Number::Integer(3)), ("y", Number::Integer(4))].into_iter()
    ///                                                                                .collect();
    /// let merged = base.merge(&SymbolTable::single("x", Number::Integer(7)));
    ///
    /// let names: Vec<_> = merged.iter().map(|(n, _)| n).collect();
    /// assert_eq!(names, ["x", "y"]);
    /// assert_eq!(merged.get("x"), Some(&Number::Integer(7)));
    /// ```
    #[must_use]
    pub fn merge(&self, delta: &Self) -> Self {
        let mut merged = self.clone();
        for (name, value) in &delta.entries {
            merged.upsert(name, *value);
        }
        merged
    }

    fn upsert(&mut self, name: &str, value: Number) {
        if let Some(slot) = self.entries.iter_mut().find(|(n, _)| n == name) {
            trace!(name, %value, "replacing binding");
            slot.1 = value;
        } else {
            trace!(name, %value, "appending binding");
            self.entries.push((name.to_string(), value));
        }
    }
}

impl<S: Into<String>> FromIterator<(S, Number)> for SymbolTable {
    /// Collects pairs as successive merges, so a repeated name keeps its first
    /// slot and its last value.
    fn from_iter<T: IntoIterator<Item = (S, Number)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (name, value) in iter {
            table.upsert(&name.into(), value);
        }
        table
    }
}

impl std::fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;

        for (index, (name, value)) in self.entries.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }

            write!(f, "{name} = {value}")?;
        }

        write!(f, "]")
    }
}
