use crate::lexer::LexerError;
use crate::symbol::SymbolError;
use thiserror::Error;

/// Syntax error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("Expected statement (declaration, assignment, or print)")]
    ExpectedStatement,

    #[error("Unexpected character in statement")]
    UnexpectedCharacter,

    #[error("Expected identifier {0}")]
    ExpectedIdentifier(&'static str),

    #[error("Expected {expected} {context}")]
    ExpectedToken {
        expected: &'static str,
        context: &'static str,
    },

    #[error("Expected identifier or number in expression")]
    ExpectedTerm,

    #[error(transparent)]
    Lexer(#[from] LexerError),
}

/// Semantic error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemanticError {
    #[error("Variable '{0}' used before declaration")]
    UndeclaredAssignment(String),

    #[error("Variable '{0}' used in print() before declaration")]
    UndeclaredPrint(String),

    #[error("Variable '{0}' used in expression before declaration")]
    UndeclaredInExpression(String),

    #[error(transparent)]
    Symbol(#[from] SymbolError),
}
