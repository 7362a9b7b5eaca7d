use thiserror::Error;

/// Lexer error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexerError {
    #[error("Unknown character '{0}' (ASCII: {code})", code = code_point(.0))]
    UnexpectedChar(char),

    #[error("Identifier too long (max {0} characters)")]
    IdentifierTooLong(usize),

    #[error("Number too long (max {0} digits)")]
    NumberTooLong(usize),
}

fn code_point(ch: &char) -> u32 {
    u32::from(*ch)
}
