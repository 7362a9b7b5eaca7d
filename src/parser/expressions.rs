use crate::diagnostics::Diagnostics;
use crate::lexer::{Scanner, Token, TokenKind};
use crate::parser::{SemanticError, SyntaxError};
use crate::symbol::SymbolTable;

/// Predictive recursive-descent parser with one token of lookahead.
///
/// The parser owns the whole session: the scanner, the lookahead token, the
/// symbol table and the diagnostics. Errors never unwind through the grammar
/// procedures; they are recorded and each procedure applies its own local
/// recovery.
pub struct Parser<I: Iterator<Item = char>> {
    scanner: Scanner<I>,
    pub(crate) current: Token,
    pub(crate) symbol_table: SymbolTable,
    pub(crate) diagnostics: Diagnostics,
}

impl<I: Iterator<Item = char>> Parser<I> {
    /// Create a parser and prime the lookahead with the first token
    pub fn new(scanner: Scanner<I>) -> Self {
        Self::with_symbol_table(scanner, SymbolTable::new())
    }

    pub fn with_symbol_table(scanner: Scanner<I>, symbol_table: SymbolTable) -> Self {
        let line = scanner.line();
        let mut parser = Self {
            scanner,
            current: Token::eof(line),
            symbol_table,
            diagnostics: Diagnostics::new(),
        };
        parser.advance();
        parser
    }

    /// Get reference to symbol table
    #[must_use]
    pub fn symbol_table(&self) -> &SymbolTable {
        &self.symbol_table
    }

    #[must_use]
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Current lookahead token
    #[must_use]
    pub fn peek(&self) -> &Token {
        &self.current
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    /// Replace the lookahead with the next token, reporting any lexer error
    pub(crate) fn advance(&mut self) {
        self.current = self.scanner.next_token();
        if let Some(err) = self.scanner.take_error() {
            self.syntax_error(err.into());
        }
    }

    /// Report a missing token unless the lookahead is `kind`. Never consumes.
    pub(crate) fn expect(
        &mut self,
        kind: TokenKind,
        expected: &'static str,
        context: &'static str,
    ) -> bool {
        if self.check(kind) {
            return true;
        }
        self.syntax_error(SyntaxError::ExpectedToken { expected, context });
        false
    }

    /// Panic-mode recovery: discard tokens up to and including `sync`
    pub(crate) fn synchronize(&mut self, sync: TokenKind) {
        while !self.check(sync) && !self.is_at_end() {
            self.advance();
        }
        if self.check(sync) {
            self.advance();
        }
    }

    pub(crate) fn syntax_error(&mut self, err: SyntaxError) {
        self.diagnostics.report_syntax_error(err, &self.current);
    }

    pub(crate) fn semantic_error(&mut self, err: SemanticError) {
        self.diagnostics.report_semantic_error(err, &self.current);
    }

    pub(crate) fn trace_found(&mut self, indent: &str, what: &str) {
        let line = format!("{indent}Found {what}: {}", self.current.lexeme);
        self.diagnostics.progress(line);
    }

    /// expression := term ('+' term)*
    pub(crate) fn parse_expression(&mut self) {
        self.diagnostics.progress("  Parsing expression...");
        self.parse_term();

        while self.check(TokenKind::Plus) {
            self.trace_found("    ", "operator");
            self.advance();
            self.parse_term();
        }
    }

    /// term := IDENT | NUMBER
    fn parse_term(&mut self) {
        match self.current.kind {
            TokenKind::Identifier => {
                self.trace_found("    ", "identifier");
                if !self.symbol_table.is_declared(&self.current.lexeme) {
                    let name = self.current.lexeme.clone();
                    self.semantic_error(SemanticError::UndeclaredInExpression(name));
                }
                self.advance();
            }
            TokenKind::Number => {
                self.trace_found("    ", "number");
                self.advance();
            }
            _ => {
                self.syntax_error(SyntaxError::ExpectedTerm);
                self.advance(); // try to recover
            }
        }
    }
}
