#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // <letter>{<letter>}
    Ident(String),
    // {/ <digit> /}
    Number(f64),

    // Keywords
    Let,
    Const,
    Fn,

    // Binary operators
    Plus, // +
    Minus, // -
    Asterisk, // *
    Slash, // /
    Percent, // %

    // Assignment
    Assign, // =

    // Separators
    Comma, // ,
    Dot, // .
    Colon, // :
    Semicolon, // ;
    LParen, // (
    RParen, // )
    LBrace, // {
    RBrace, // }
    LSBracket, // [
    RSBracket, // ]

    Eof,
}

impl Token {
    pub fn is_reserved_word(&self) -> bool {
        match self {
            Token::Let
            | Token::Const
            | Token::Fn => true,
            _ => false
        }
    }

    pub fn as_literal(&self) -> String {
        match self {
            Token::Ident(value) => format!("{}", value),
            Token::Number(value) => format!("{}", value),

            Token::Let => "let".to_string(),
            Token::Const => "const".to_string(),
            Token::Fn => "fn".to_string(),

            Token::Plus => "+".to_string(),
            Token::Minus => "-".to_string(),
            Token::Asterisk => "*".to_string(),
            Token::Slash => "/".to_string(),
            Token::Percent => "%".to_string(),

            Token::Assign => "=".to_string(),

            Token::Comma => ",".to_string(),
            Token::Dot => ".".to_string(),
            Token::Colon => ":".to_string(),
            Token::Semicolon => ";".to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
            Token::LBrace => "{".to_string(),
            Token::RBrace => "}".to_string(),
            Token::LSBracket => "[".to_string(),
            Token::RSBracket => "]".to_string(),

            Token::Eof => "\0".to_string(),
        }
    }
}
