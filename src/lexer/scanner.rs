use crate::lexer::{Keyword, LexerError, Token, TokenKind};
use std::iter::{Fuse, Peekable};

/// Longest lexeme an identifier or number run may capture.
pub const MAX_LEXEME_LEN: usize = 49;

/// Pull-based lexer over any character source.
///
/// Each call to [`Scanner::next_token`] consumes exactly the characters of one
/// token. A character that ends a run is only peeked, never consumed, so the
/// next call always starts at the right place.
pub struct Scanner<I: Iterator<Item = char>> {
    input: Peekable<Fuse<I>>,
    line: usize,
    max_lexeme_len: usize,
    error: Option<LexerError>,
}

impl<I: Iterator<Item = char>> Scanner<I> {
    pub fn new(input: I) -> Self {
        Self::with_max_lexeme_len(input, MAX_LEXEME_LEN)
    }

    pub fn with_max_lexeme_len(input: I, max_lexeme_len: usize) -> Self {
        Self {
            input: input.fuse().peekable(),
            line: 1,
            max_lexeme_len: max_lexeme_len.max(1),
            error: None,
        }
    }

    /// Line the scanner is currently on
    pub fn line(&self) -> usize {
        self.line
    }

    /// Error raised while producing the most recent token, if any
    pub fn take_error(&mut self) -> Option<LexerError> {
        self.error.take()
    }

    /// Scan the next token. Returns `Eof` forever once input is exhausted.
    pub fn next_token(&mut self) -> Token {
        self.error = None;
        self.skip_whitespace();

        let Some(ch) = self.input.next() else {
            return Token::eof(self.line);
        };

        let kind = match ch {
            '=' => TokenKind::Assign,
            '+' => TokenKind::Plus,
            ';' => TokenKind::Semicolon,
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,

            ch if ch.is_ascii_alphabetic() => return self.scan_identifier_or_keyword(ch),
            ch if ch.is_ascii_digit() => return self.scan_number(ch),

            _ => {
                self.error = Some(LexerError::UnexpectedChar(ch));
                TokenKind::Unknown
            }
        };

        Token::new(kind, self.line, ch.to_string())
    }

    fn skip_whitespace(&mut self) {
        while let Some(&ch) = self.input.peek() {
            match ch {
                '\n' => self.line += 1,
                ' ' | '\t' | '\r' | '\x0B' | '\x0C' => {}
                _ => break,
            }
            self.input.next();
        }
    }

    /// Consume characters matching `accept` onto `lexeme`. Returns `false` if
    /// the run was cut short by the lexeme limit.
    ///
    /// A run of exactly `max_lexeme_len` characters is accepted; the limit is
    /// only an error when one more run character follows.
    fn scan_run(&mut self, lexeme: &mut String, accept: fn(&char) -> bool) -> bool {
        while self.input.peek().is_some_and(accept) {
            if lexeme.len() >= self.max_lexeme_len {
                return false;
            }
            if let Some(ch) = self.input.next() {
                lexeme.push(ch);
            }
        }
        true
    }

    fn scan_identifier_or_keyword(&mut self, first: char) -> Token {
        let mut text = first.to_string();

        if !self.scan_run(&mut text, char::is_ascii_alphanumeric) {
            self.error = Some(LexerError::IdentifierTooLong(self.max_lexeme_len));
        }

        let kind = match Keyword::from_str(&text) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Identifier,
        };
        Token::new(kind, self.line, text)
    }

    fn scan_number(&mut self, first: char) -> Token {
        let mut text = first.to_string();

        if !self.scan_run(&mut text, char::is_ascii_digit) {
            self.error = Some(LexerError::NumberTooLong(self.max_lexeme_len));
        }

        Token::new(TokenKind::Number, self.line, text)
    }
}

// Convenience function for tokenizing input, ending with the `Eof` token
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut scanner = Scanner::new(input.chars());
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token();
        let done = token.is(TokenKind::Eof);
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}
