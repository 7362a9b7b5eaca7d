use crate::diagnostics::Report;
use crate::lexer::{Keyword, Scanner, TokenKind};
use crate::parser::expressions::Parser;
use crate::parser::{SemanticError, SyntaxError};

impl<I: Iterator<Item = char>> Parser<I> {
    /// program := statement* EOF
    ///
    /// Stops at the first reported error of either kind. The statement that
    /// faulted still finishes its own recovery, but no later statement is
    /// started.
    pub fn parse_program(mut self) -> Report {
        let mut attempted = 0;

        while !self.is_at_end() && !self.diagnostics.has_failed() {
            attempted += 1;
            self.parse_statement();
        }

        Report::new(self.diagnostics, self.symbol_table, attempted)
    }

    /// statement := declaration | assignment | printStmt
    pub(crate) fn parse_statement(&mut self) {
        match self.current.kind {
            TokenKind::Keyword(Keyword::Int) => self.parse_declaration(),
            TokenKind::Keyword(Keyword::Print) => self.parse_print_statement(),
            TokenKind::Identifier => self.parse_assignment(),
            TokenKind::Unknown => {
                self.syntax_error(SyntaxError::UnexpectedCharacter);
                self.advance(); // try to recover
            }
            _ => {
                self.syntax_error(SyntaxError::ExpectedStatement);
                self.advance(); // try to recover
            }
        }
    }

    /// declaration := 'int' IDENT '=' expression ';'
    fn parse_declaration(&mut self) {
        self.diagnostics.progress("Parsing declaration...");
        self.trace_found("  ", "keyword");
        self.advance(); // consume 'int'

        if !self.check(TokenKind::Identifier) {
            self.syntax_error(SyntaxError::ExpectedIdentifier("after 'int'"));
            self.synchronize(TokenKind::Semicolon);
            return;
        }

        let name = self.current.lexeme.clone();
        let line = self.current.line;
        self.trace_found("  ", "identifier");
        self.advance();

        if let Err(err) = self.symbol_table.declare(&name, line) {
            self.semantic_error(err.into());
        }

        if !self.expect(TokenKind::Assign, "'='", "after identifier") {
            return;
        }
        self.trace_found("  ", "operator");
        self.advance();

        self.parse_expression();

        if !self.expect(TokenKind::Semicolon, "';'", "at end of declaration") {
            return;
        }
        self.trace_found("  ", "symbol");
        self.finish("Declaration");
    }

    /// assignment := IDENT '=' expression ';'
    fn parse_assignment(&mut self) {
        self.diagnostics.progress("Parsing assignment...");
        self.trace_found("  ", "identifier");

        if !self.symbol_table.is_declared(&self.current.lexeme) {
            let name = self.current.lexeme.clone();
            self.semantic_error(SemanticError::UndeclaredAssignment(name));
        }
        self.advance();

        if !self.expect(TokenKind::Assign, "'='", "in assignment") {
            return;
        }
        self.trace_found("  ", "operator");
        self.advance();

        self.parse_expression();

        if !self.expect(TokenKind::Semicolon, "';'", "at end of assignment") {
            return;
        }
        self.trace_found("  ", "symbol");
        self.finish("Assignment");
    }

    /// printStmt := 'print' '(' IDENT ')' ';'
    fn parse_print_statement(&mut self) {
        self.diagnostics.progress("Parsing print statement...");
        self.trace_found("  ", "keyword");
        self.advance(); // consume 'print'

        if !self.expect(TokenKind::OpenParen, "'('", "after print") {
            return;
        }
        self.trace_found("  ", "symbol");
        self.advance();

        if !self.check(TokenKind::Identifier) {
            self.syntax_error(SyntaxError::ExpectedIdentifier("inside print()"));
            self.synchronize(TokenKind::CloseParen);
            return;
        }

        self.trace_found("  ", "identifier");
        if !self.symbol_table.is_declared(&self.current.lexeme) {
            let name = self.current.lexeme.clone();
            self.semantic_error(SemanticError::UndeclaredPrint(name));
        }
        self.advance();

        if !self.expect(TokenKind::CloseParen, "')'", "after identifier") {
            return;
        }
        self.trace_found("  ", "symbol");
        self.advance();

        if !self.expect(TokenKind::Semicolon, "';'", "at end of print statement") {
            return;
        }
        self.trace_found("  ", "symbol");
        self.finish("Print statement");
    }

    /// Trace a completed statement and consume its ';'
    fn finish(&mut self, construct: &str) {
        self.diagnostics.progress(format!("{construct} parsed successfully!"));
        self.diagnostics.progress("");
        self.advance();
    }
}

/// Convenience function for running the whole front end over a source string
pub fn parse_source(source: &str) -> Report {
    Parser::new(Scanner::new(source.chars())).parse_program()
}
