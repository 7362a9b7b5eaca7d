use crate::diagnostics::{Diagnostic, Diagnostics, Entry};
use crate::symbol::SymbolTable;
use std::fmt;

/// Outcome of one parse session: the transcript, the counters and the final
/// symbol table.
#[derive(Debug)]
pub struct Report {
    diagnostics: Diagnostics,
    symbols: SymbolTable,
    statements_attempted: usize,
}

impl Report {
    pub(crate) fn new(
        diagnostics: Diagnostics,
        symbols: SymbolTable,
        statements_attempted: usize,
    ) -> Self {
        Self {
            diagnostics,
            symbols,
            statements_attempted,
        }
    }

    /// True when no syntax or semantic error was reported
    #[must_use]
    pub fn succeeded(&self) -> bool {
        !self.diagnostics.has_failed()
    }

    #[must_use]
    pub fn syntax_errors(&self) -> usize {
        self.diagnostics.syntax_errors()
    }

    #[must_use]
    pub fn semantic_errors(&self) -> usize {
        self.diagnostics.semantic_errors()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.errors()
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        self.diagnostics.entries()
    }

    #[must_use]
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Statements the top-level loop started, including the one that faulted
    #[must_use]
    pub fn statements_attempted(&self) -> usize {
        self.statements_attempted
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "=== Starting Parse ===")?;
        writeln!(f)?;

        for entry in self.entries() {
            match entry {
                Entry::Progress(line) => writeln!(f, "{line}")?,
                Entry::Error(diagnostic) => {
                    writeln!(f)?;
                    writeln!(f, "{diagnostic}")?;
                }
            }
        }

        writeln!(f)?;
        writeln!(f, "=== Parse Complete ===")?;
        writeln!(f, "Syntax Errors: {}", self.syntax_errors())?;
        writeln!(f, "Semantic Errors: {}", self.semantic_errors())?;

        if self.succeeded() {
            writeln!(f, "Status: SUCCESS")?;
            writeln!(f)?;
            write!(f, "{}", self.symbols)
        } else {
            writeln!(f, "Status: FAILED")
        }
    }
}
