use super::*;
use token::TokenKind::*;

fn match_expected(input: &str, expected: Vec<TokenKind>) {
    let mut lexer = Lexer::new(input);
    let tokens = lexer.tokenize().unwrap();
    assert_eq!(tokens.len(), expected.len(), "tokens: {tokens:?}");

    tokens
        .iter()
        .zip(expected.iter())
        .for_each(|(t, e)| assert_eq!(t.kind, *e));
}

fn lexemes(input: &str) -> Vec<String> {
    Lexer::new(input)
        .tokenize()
        .unwrap()
        .into_iter()
        .map(|t| t.lexeme)
        .collect()
}

#[test]
fn test_simple_program() {
    let input = "programa p;\nvar x : inteiro;\ninicio\n  x := 1;\nfim.";
    match_expected(
        input,
        vec![
            KProgram, Identifier, Semicolon, KVar, Identifier, Colon, KInteger, Semicolon, KBegin,
            Identifier, Assign, IntLiteral, Semicolon, KEnd, Dot,
        ],
    );
}

#[test]
fn test_line_numbers() {
    let input = "programa\n\nteste ;\n{ um\ncomentario }\nfim";
    let tokens = Lexer::new(input).tokenize().unwrap();
    let lines: Vec<_> = tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 3, 3, 6]);
}

#[test]
fn test_two_char_operators() {
    match_expected(
        "< <= <> > >= : := =",
        vec![Less, LessEq, NotEq, Greater, GreaterEq, Colon, Assign, Equal],
    );
    match_expected("a<>b", vec![Identifier, NotEq, Identifier]);
    match_expected("x:=1", vec![Identifier, Assign, IntLiteral]);
    match_expected("<<", vec![Less, Less]);
}

#[test]
fn test_integer_followed_by_separator() {
    let mut lexer = Lexer::new("12,x");
    let first = lexer.next_token().unwrap();
    assert_eq!(first, Token::new("12", IntLiteral, 1));

    let second = lexer.next_token().unwrap();
    assert_eq!(second.kind, Comma);
    assert_eq!(lexer.next_token().unwrap().kind, Identifier);
}

#[test]
fn test_real_literal_keeps_separator() {
    let mut lexer = Lexer::new("2,5");
    assert_eq!(lexer.next_token().unwrap(), Token::new("2,5", RealLiteral, 1));
    assert_eq!(lexer.next_token().unwrap().kind, EOF);

    assert_eq!(lexemes("10,25+3"), vec!["10,25", "+", "3"]);
    assert_eq!(lexemes("1,"), vec!["1", ","]);
}

#[test]
fn test_keywords_are_lowercase_only() {
    match_expected("inicio Inicio INICIO fim1 se", vec![KBegin, Identifier, Identifier, Identifier, KIf]);
    match_expected("enquanto entao escreve faca le senao", vec![KWhile, KThen, KWrite, KDo, KRead, KElse]);
    match_expected("x1 abc2def", vec![Identifier, Identifier]);
}

#[test]
fn test_comment_is_skipped() {
    match_expected("{ comentario } fim { outro }", vec![KEnd]);
    match_expected("a{}b", vec![Identifier, Identifier]);
}

#[test]
fn test_unterminated_comment() {
    let mut lexer = Lexer::new("fim\n{ aberto\n\n");
    assert_eq!(lexer.next_token().unwrap().kind, KEnd);

    let err = lexer.next_token().unwrap_err();
    assert_eq!(err.error, LexerErrorType::UnterminatedComment);
    assert_eq!(err.token.line, 2);
}

#[test]
fn test_invalid_symbol_does_not_stop_scanning() {
    let mut lexer = Lexer::new("a @ b");
    assert_eq!(lexer.next_token().unwrap().kind, Identifier);

    let err = lexer.next_token().unwrap_err();
    assert_eq!(err.error, LexerErrorType::InvalidSymbol('@'));
    assert_eq!(err.token.kind, Error);

    assert_eq!(lexer.next_token().unwrap().lexeme, "b");
}

#[test]
fn test_too_long_lexeme() {
    let name = "a".repeat(MAX_LEXEME_LEN + 1);
    let err = Lexer::new(&name).next_token().unwrap_err();
    assert_eq!(err.error, LexerErrorType::TooLong(MAX_LEXEME_LEN + 1));

    let name = "a".repeat(MAX_LEXEME_LEN);
    assert_eq!(Lexer::new(&name).next_token().unwrap().kind, Identifier);
}

#[test]
fn test_eof_is_sticky() {
    let mut lexer = Lexer::new("  \n\t ");
    assert_eq!(lexer.next_token().unwrap().kind, EOF);
    assert_eq!(lexer.next_token().unwrap().kind, EOF);
    assert_eq!(lexer.line(), 2);
}
