use std::collections::HashMap;

use crate::error::ParseError;

/// Maximum number of distinct variables a single program may declare.
pub const MAX_DECLARATIONS: usize = 20;

/// Maps declared variable names to their current value.
///
/// A declared variable with no value yet is stored as `None`, which is
/// distinct from a stored zero. The table is filled while parsing and then
/// read and written by the evaluator.
#[derive(Debug, Default, Clone)]
pub struct SymbolTable {
    values: HashMap<String, Option<i32>>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `name` without a value.
    ///
    /// # Errors
    /// - [`ParseError::Redeclared`] if the name is already a key.
    /// - [`ParseError::NoMoreDeclarations`] if [`MAX_DECLARATIONS`] names are
    ///   already declared.
    ///
    /// # Example
    /// ```
    /// use core_lang::{error::ParseError, interpreter::symbol_table::SymbolTable};
    ///
    /// let mut table = SymbolTable::new();
    /// table.declare("X", 1).unwrap();
    ///
    /// assert!(table.contains("X"));
    /// assert_eq!(table.get("X"), None);
    /// assert!(matches!(table.declare("X", 2), Err(ParseError::Redeclared { line: 2, .. })));
    /// ```
    pub fn declare(&mut self, name: &str, line: usize) -> Result<(), ParseError> {
        if self.values.contains_key(name) {
            return Err(ParseError::Redeclared { name: name.to_string(),
                                                line });
        }
        if self.values.len() >= MAX_DECLARATIONS {
            return Err(ParseError::NoMoreDeclarations { name: name.to_string(),
                                                        line });
        }
        self.values.insert(name.to_string(), None);
        Ok(())
    }

    /// Returns `true` if `name` has been declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Current value of `name`; `None` when undeclared or never assigned.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<i32> {
        self.values.get(name).copied().flatten()
    }

    /// Stores `value` under an already declared `name`.
    ///
    /// Undeclared names are left untouched; the parser rejects any program
    /// that would assign one.
    pub fn set(&mut self, name: &str, value: i32) {
        if let Some(slot) = self.values.get_mut(name) {
            *slot = Some(value);
        }
    }

    /// Number of declared names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
