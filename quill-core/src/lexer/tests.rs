use super::prelude::{Lexer, LexicalError, LexicalErrorType, Token};

fn lex(input: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(input.char_indices().map(|(i, c)| (i as u32, c)));
    let mut tokens = vec![];

    loop {
        let (_, token, _) = lexer.next_token().expect("unexpected lexical error");

        if token == Token::Eof {
            tokens.push(token);
            break;
        }

        tokens.push(token);
    }

    tokens
}

#[test]
fn test_numbers_and_operators() {
    let tokens = lex("12 + foo");

    assert_eq!(tokens, vec![
        Token::Number(12.0),
        Token::Plus,
        Token::Ident("foo".to_string()),
        Token::Eof,
    ]);
}

#[test]
fn test_keywords() {
    let tokens = lex("let const fn letter constant");

    assert_eq!(tokens, vec![
        Token::Let,
        Token::Const,
        Token::Fn,
        Token::Ident("letter".to_string()),
        Token::Ident("constant".to_string()),
        Token::Eof,
    ]);
}

#[test]
fn test_punctuation() {
    let tokens = lex("( ) { } [ ] , . : ; = + - * / %");

    assert_eq!(tokens, vec![
        Token::LParen,
        Token::RParen,
        Token::LBrace,
        Token::RBrace,
        Token::LSBracket,
        Token::RSBracket,
        Token::Comma,
        Token::Dot,
        Token::Colon,
        Token::Semicolon,
        Token::Assign,
        Token::Plus,
        Token::Minus,
        Token::Asterisk,
        Token::Slash,
        Token::Percent,
        Token::Eof,
    ]);
}

#[test]
fn test_whitespace_is_discarded() {
    let tokens = lex("  let\tx\r\n=\n\n10 ;  ");

    assert_eq!(tokens, vec![
        Token::Let,
        Token::Ident("x".to_string()),
        Token::Assign,
        Token::Number(10.0),
        Token::Semicolon,
        Token::Eof,
    ]);
}

#[test]
fn test_declaration() {
    let tokens = lex("const point = { x: 1, y: 2 }; print(point.x);");

    assert_eq!(tokens, vec![
        Token::Const,
        Token::Ident("point".to_string()),
        Token::Assign,
        Token::LBrace,
        Token::Ident("x".to_string()),
        Token::Colon,
        Token::Number(1.0),
        Token::Comma,
        Token::Ident("y".to_string()),
        Token::Colon,
        Token::Number(2.0),
        Token::RBrace,
        Token::Semicolon,
        Token::Ident("print".to_string()),
        Token::LParen,
        Token::Ident("point".to_string()),
        Token::Dot,
        Token::Ident("x".to_string()),
        Token::RParen,
        Token::Semicolon,
        Token::Eof,
    ]);
}

#[test]
fn test_unrecognized_character() {
    let input = "let x ? 1";
    let mut lexer = Lexer::new(input.char_indices().map(|(i, c)| (i as u32, c)));

    let mut error: Option<LexicalError> = None;

    for _ in 0..input.len() {
        match lexer.next_token() {
            Ok((_, Token::Eof, _)) => break,
            Ok(_) => {},
            Err(err) => {
                error = Some(err);
                break;
            }
        }
    }

    let error = error.expect("expected a lexical error");

    assert_eq!(error.error, LexicalErrorType::UnrecognizedToken { tok: '?' });
    assert_eq!(error.location.start, 6);
}
