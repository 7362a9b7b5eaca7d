pub mod report;

pub use report::*;

use crate::lexer::Token;
use std::fmt;

/// Which counter a diagnostic is charged to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    Semantic,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorKind::Syntax => write!(f, "SYNTAX ERROR"),
            ErrorKind::Semantic => write!(f, "SEMANTIC ERROR"),
        }
    }
}

/// A reported error, tagged with the lookahead token at the time of the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: ErrorKind,
    pub line: usize,
    pub message: String,
    pub lexeme: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "[{}] Line {}: {}", self.kind, self.line, self.message)?;
        write!(f, "  Current token: '{}'", self.lexeme)
    }
}

/// One line (or block) of the parse transcript, in emission order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Progress(String),
    Error(Diagnostic),
}

/// Error counters, the sticky failure flag, and the ordered transcript.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Entry>,
    syntax_errors: usize,
    semantic_errors: usize,
    failed: bool,
}

impl Diagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn progress(&mut self, line: impl Into<String>) {
        self.entries.push(Entry::Progress(line.into()));
    }

    pub fn report_syntax_error(&mut self, message: impl fmt::Display, at: &Token) {
        self.syntax_errors += 1;
        self.record(ErrorKind::Syntax, message, at);
    }

    pub fn report_semantic_error(&mut self, message: impl fmt::Display, at: &Token) {
        self.semantic_errors += 1;
        self.record(ErrorKind::Semantic, message, at);
    }

    fn record(&mut self, kind: ErrorKind, message: impl fmt::Display, at: &Token) {
        self.failed = true;
        self.entries.push(Entry::Error(Diagnostic {
            kind,
            line: at.line,
            message: message.to_string(),
            lexeme: at.lexeme.clone(),
        }));
    }

    /// Set by the first error of either kind and never cleared
    #[must_use]
    pub fn has_failed(&self) -> bool {
        self.failed
    }

    #[must_use]
    pub fn syntax_errors(&self) -> usize {
        self.syntax_errors
    }

    #[must_use]
    pub fn semantic_errors(&self) -> usize {
        self.semantic_errors
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Error(diagnostic) => Some(diagnostic),
            Entry::Progress(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenKind;

    #[test]
    fn counters_are_independent_and_flag_is_shared() {
        let token = Token::new(TokenKind::Identifier, 3, "y".to_string());
        let mut diagnostics = Diagnostics::new();
        assert!(!diagnostics.has_failed());

        diagnostics.report_semantic_error("Variable 'y' used before declaration", &token);
        assert!(diagnostics.has_failed());
        assert_eq!(diagnostics.syntax_errors(), 0);
        assert_eq!(diagnostics.semantic_errors(), 1);

        diagnostics.report_syntax_error("Expected ';'", &token);
        assert_eq!(diagnostics.syntax_errors(), 1);
        assert_eq!(diagnostics.errors().count(), 2);
    }

    #[test]
    fn diagnostic_renders_kind_line_and_lexeme() {
        let token = Token::new(
            TokenKind::Keyword(crate::lexer::Keyword::Print),
            2,
            "print".to_string(),
        );
        let mut diagnostics = Diagnostics::new();
        diagnostics.report_syntax_error("Expected ';' at end of declaration", &token);

        let rendered = diagnostics.errors().next().unwrap().to_string();
        assert_eq!(
            rendered,
            "[SYNTAX ERROR] Line 2: Expected ';' at end of declaration\n  Current token: 'print'"
        );
    }
}
