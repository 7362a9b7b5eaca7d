use std::fmt;
use thiserror::Error;

/// Maximum number of names a table holds by default.
pub const SYMBOL_CAPACITY: usize = 100;

/// A declared variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub line: usize,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymbolError {
    #[error("Variable '{0}' already declared")]
    AlreadyDeclared(String),

    #[error("Symbol table full (max {0} variables)")]
    TableFull(usize),
}

/// Flat, insertion-ordered registry of declared names.
///
/// There is no scoping and no removal: a name is either declared for the rest
/// of the run or it is not.
#[derive(Debug)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    capacity: usize,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(SYMBOL_CAPACITY)
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            symbols: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Register a variable declared on `line`
    /// # Errors
    /// If the name is already declared or the table is full. The existing
    /// entry is never overwritten.
    pub fn declare(&mut self, name: &str, line: usize) -> Result<(), SymbolError> {
        if self.is_declared(name) {
            return Err(SymbolError::AlreadyDeclared(name.to_string()));
        }
        if self.symbols.len() >= self.capacity {
            return Err(SymbolError::TableFull(self.capacity));
        }

        self.symbols.push(Symbol {
            name: name.to_string(),
            line,
        });
        Ok(())
    }

    #[must_use]
    pub fn is_declared(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.symbols.iter().find(|symbol| symbol.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Declared names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(|symbol| symbol.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }
}

impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "=== Symbol Table ===")?;
        if self.symbols.is_empty() {
            writeln!(f, "(empty)")?;
        } else {
            for symbol in self.iter() {
                writeln!(f, "  Variable: {}", symbol.name)?;
            }
        }
        writeln!(f, "====================")
    }
}
