use std::fmt;

/// Language keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Int,
    Print,
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Keyword::Int => "int",
            Keyword::Print => "print",
        };
        write!(f, "{}", s)
    }
}

impl Keyword {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "int" => Some(Keyword::Int),
            "print" => Some(Keyword::Print),
            _ => None,
        }
    }
}

/// Token kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword(Keyword),
    Identifier,
    Number,

    Assign,             // =
    Plus,               // +
    Semicolon,          // ;
    OpenParen,          // (
    CloseParen,         // )

    Eof,
    Unknown,
}

/// A token with the line it was scanned on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub lexeme: String,
}

impl Token {
    pub fn new(kind: TokenKind, line: usize, lexeme: String) -> Self {
        Self { kind, line, lexeme }
    }

    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, line, "EOF".to_string())
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}
