//! The host's name table.

use std::collections::HashMap;

/// Value held by a name
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Num(f64),
    Str(String),
}

/// A slot in the symbol table
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub value: Value,
}

impl Cell {
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self.value, Value::Num(_))
    }

    /// The cell as a 1-based column, if it holds a positive whole number
    #[must_use]
    pub fn as_column(&self) -> Option<usize> {
        match self.value {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Guard ensures a positive whole number
            Value::Num(n) if n >= 1.0 && n.fract() == 0.0 => Some(n as usize),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct SymbolTable {
    cells: HashMap<String, Cell>,
}

impl SymbolTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `column`, creating it or overwriting its value and type.
    pub fn bind(&mut self, name: &str, column: usize) {
        #[allow(clippy::cast_precision_loss)]
        let value = Value::Num(column as f64);
        match self.cells.get_mut(name) {
            Some(cell) => cell.value = value,
            None => {
                self.cells.insert(name.to_string(), Cell { value });
            }
        }
    }

    /// Store a string value under `name`
    pub fn set_str(&mut self, name: &str, value: impl Into<String>) {
        self.cells.insert(
            name.to_string(),
            Cell {
                value: Value::Str(value.into()),
            },
        );
    }

    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Cell> {
        self.cells.get(name)
    }

    /// Resolve `name` to the column it is bound to
    #[must_use]
    pub fn column(&self, name: &str) -> Option<usize> {
        self.lookup(name).and_then(Cell::as_column)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
