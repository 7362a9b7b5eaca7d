use minilang::lexer::{tokenize, Keyword, LexerError, Scanner, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).into_iter().map(|token| token.kind).collect()
}

#[test]
fn test_tokenize_statements() {
    let tokens = tokenize("int x = 5;\nprint(x);\n");

    let expected = [
        (TokenKind::Keyword(Keyword::Int), "int", 1),
        (TokenKind::Identifier, "x", 1),
        (TokenKind::Assign, "=", 1),
        (TokenKind::Number, "5", 1),
        (TokenKind::Semicolon, ";", 1),
        (TokenKind::Keyword(Keyword::Print), "print", 2),
        (TokenKind::OpenParen, "(", 2),
        (TokenKind::Identifier, "x", 2),
        (TokenKind::CloseParen, ")", 2),
        (TokenKind::Semicolon, ";", 2),
        (TokenKind::Eof, "EOF", 3),
    ];

    assert_eq!(tokens.len(), expected.len());
    for (token, (kind, lexeme, line)) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, kind);
        assert_eq!(token.lexeme, lexeme);
        assert_eq!(token.line, line, "wrong line for {lexeme}");
    }
}

#[test]
fn test_keywords_need_exact_match() {
    assert_eq!(
        kinds("integer printer int2 Int"),
        [
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );

    let tokens = tokenize("print int");
    assert_eq!(tokens[0].kind, TokenKind::Keyword(Keyword::Print));
    assert_eq!(Keyword::Print.to_string(), tokens[0].lexeme);
    assert_eq!(Keyword::Int.to_string(), tokens[1].lexeme);
}

#[test]
fn test_number_then_identifier() {
    let tokens = tokenize("123abc a1b2");
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].lexeme, "123");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].lexeme, "abc");
    assert_eq!(tokens[2].lexeme, "a1b2");
}

#[test]
fn test_eof_is_idempotent() {
    let mut scanner = Scanner::new("x\n".chars());
    assert_eq!(scanner.next_token().kind, TokenKind::Identifier);

    let first = scanner.next_token();
    assert_eq!(first.kind, TokenKind::Eof);
    let line = scanner.line();

    for _ in 0..5 {
        assert_eq!(scanner.next_token(), first);
        assert_eq!(scanner.take_error(), None);
        assert_eq!(scanner.line(), line);
    }
}

#[test]
fn test_eof_holds_for_sources_that_resume() {
    // Yields 'x', then ends, then would yield 'y' if asked again
    let mut step = 0;
    let source = std::iter::from_fn(move || {
        step += 1;
        match step {
            1 => Some('x'),
            2 => None,
            _ => Some('y'),
        }
    });
    let mut scanner = Scanner::new(source);

    assert_eq!(scanner.next_token().kind, TokenKind::Identifier);
    assert_eq!(scanner.next_token().kind, TokenKind::Eof);
    for _ in 0..3 {
        let after = scanner.next_token();
        assert_eq!(after.kind, TokenKind::Eof);
        assert_eq!(after.lexeme, "EOF");
    }
}

#[test]
fn test_empty_input() {
    let mut scanner = Scanner::new("".chars());
    assert_eq!(scanner.next_token().kind, TokenKind::Eof);
    assert_eq!(scanner.line(), 1);
}

#[test]
fn test_whitespace_tracks_lines() {
    let tokens = tokenize("\n\n \t x\r\n\x0B\x0C y");
    assert_eq!(tokens[0].line, 3);
    assert_eq!(tokens[1].line, 4);
    assert_eq!(tokens[1].lexeme, "y");
}

#[test]
fn test_unknown_character() {
    let mut scanner = Scanner::new("x $ 3".chars());
    scanner.next_token();

    let unknown = scanner.next_token();
    assert_eq!(unknown.kind, TokenKind::Unknown);
    assert_eq!(unknown.lexeme, "$");

    let err = scanner.take_error().expect("unknown character reported");
    assert_eq!(err, LexerError::UnexpectedChar('$'));
    assert_eq!(err.to_string(), "Unknown character '$' (ASCII: 36)");

    // Lexing carries on past the bad character
    let next = scanner.next_token();
    assert_eq!(next.kind, TokenKind::Number);
    assert_eq!(scanner.take_error(), None);
}

#[test]
fn test_non_ascii_is_unknown() {
    let mut scanner = Scanner::new("é".chars());
    assert_eq!(scanner.next_token().kind, TokenKind::Unknown);
    assert_eq!(scanner.take_error(), Some(LexerError::UnexpectedChar('é')));
}

#[test]
fn test_identifier_at_limit_is_accepted() {
    let name = "a".repeat(49);
    let mut scanner = Scanner::new(name.chars());

    let token = scanner.next_token();
    assert_eq!(token.lexeme, name);
    assert_eq!(scanner.take_error(), None);
}

#[test]
fn test_long_identifier_is_truncated_without_losing_input() {
    let source = format!("{} = 1;", "a".repeat(60));
    let mut scanner = Scanner::new(source.chars());

    let head = scanner.next_token();
    assert_eq!(head.kind, TokenKind::Identifier);
    assert_eq!(head.lexeme.len(), 49);
    assert_eq!(scanner.take_error(), Some(LexerError::IdentifierTooLong(49)));

    let tail = scanner.next_token();
    assert_eq!(tail.kind, TokenKind::Identifier);
    assert_eq!(tail.lexeme, "a".repeat(11));
    assert_eq!(scanner.take_error(), None);

    assert_eq!(scanner.next_token().kind, TokenKind::Assign);
    assert_eq!(scanner.next_token().lexeme, "1");
    assert_eq!(scanner.next_token().kind, TokenKind::Semicolon);
    assert_eq!(scanner.next_token().kind, TokenKind::Eof);
}

#[test]
fn test_long_number_is_truncated() {
    let source = format!("{};", "7".repeat(52));
    let mut scanner = Scanner::new(source.chars());

    assert_eq!(scanner.next_token().lexeme.len(), 49);
    let err = scanner.take_error().expect("number too long");
    assert_eq!(err.to_string(), "Number too long (max 49 digits)");

    assert_eq!(scanner.next_token().lexeme, "777");
    assert_eq!(scanner.next_token().kind, TokenKind::Semicolon);
}

#[test]
fn test_custom_lexeme_limit() {
    let mut scanner = Scanner::with_max_lexeme_len("abcdef".chars(), 3);

    assert_eq!(scanner.next_token().lexeme, "abc");
    assert_eq!(scanner.take_error(), Some(LexerError::IdentifierTooLong(3)));
    assert_eq!(scanner.next_token().lexeme, "def");
    assert_eq!(scanner.take_error(), None);
}
