use super::error::{LexicalError, LexicalErrorType};
use super::token::Token;
use std::fmt::Display;
use crate::utils::prelude::SrcSpan;

pub type Spanned = (u32, Token, u32);
pub type LexResult = std::result::Result<Spanned, LexicalError>;

pub fn str_to_keyword(word: &str) -> Option<Token> {
	Some(match word {
		"let" => Token::Let,
		"const" => Token::Const,
		"fn" => Token::Fn,

		_ => return None
	})
}

#[derive(Debug)]
pub struct Lexer<T: Iterator<Item = (u32, char)>> {
	position: u32,
	next_position: u32,
	ch: Option<char>,
	next_ch: Option<char>,
	input: T,
}

impl<T: Iterator<Item = (u32, char)>> Display for Lexer<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f,
			"Lexer {{\n\tposition: {},\n\tnext_position: {},\n\tch: {:?}, next_ch: {:?}\n}}",
			self.position, self.next_position, self.ch, self.next_ch
		)
	}
}

impl<T: Iterator<Item = (u32, char)>> Lexer<T> {
	pub fn new(input: T) -> Self {
        let mut lexer = Self {
            position: 0,
            next_position: 0,
            ch: None,
			next_ch: None,
            input,
        };

        lexer.next_char();
        lexer.next_char();

        return lexer;
    }

    pub fn next_token(&mut self) -> LexResult {
		let span = match self.ch {
			Some(ch) => match ch {
				'+' => self.eat_one_char(Token::Plus),
				'-' => self.eat_one_char(Token::Minus),
				'*' => self.eat_one_char(Token::Asterisk),
				'/' => self.eat_one_char(Token::Slash),
				'%' => self.eat_one_char(Token::Percent),
				'=' => self.eat_one_char(Token::Assign),
				',' => self.eat_one_char(Token::Comma),
				'.' => self.eat_one_char(Token::Dot),
				':' => self.eat_one_char(Token::Colon),
				';' => self.eat_one_char(Token::Semicolon),
				'(' => self.eat_one_char(Token::LParen),
				')' => self.eat_one_char(Token::RParen),
				'{' => self.eat_one_char(Token::LBrace),
				'}' => self.eat_one_char(Token::RBrace),
				'[' => self.eat_one_char(Token::LSBracket),
				']' => self.eat_one_char(Token::RSBracket),
				'a'..='z' | 'A'..='Z' => {
					return Ok(self.lex_ident());
				},
				'0'..='9' => {
					return self.lex_number();
				},
				' ' | '\t' | '\r' | '\n' => {
					let _ = self.next_char();

					return self.next_token();
				},
				c => {
					let location = self.position;
					return Err(LexicalError {
						error: LexicalErrorType::UnrecognizedToken { tok: c },
						location: SrcSpan {
							start: location,
							end: location,
						},
					});
				}
			},
			None => {
				self.eat_one_char(Token::Eof)
			}
		};

		Ok(span)
    }

	fn next_char(&mut self) -> Option<char> {
		let ch = self.ch;

		let next = match self.input.next() {
			Some((pos, ch)) => {
				self.position = self.next_position;
				self.next_position = pos;

				Some(ch)
			},
			None => {
				self.position = self.next_position;
				self.next_position += 1;

				None
			}
		};

		self.ch = self.next_ch;
		self.next_ch = next;

		ch
	}

	fn eat_one_char(&mut self, token: Token) -> Spanned {
		let start_pos = self.position;
		self.next_char();
		let end_pos = self.position;

		(start_pos, token, end_pos)
	}

	fn lex_ident(&mut self) -> Spanned {
        let start_pos = self.position;
		let mut ident = String::new();

		loop {
			match self.ch {
				Some(ch) if ch.is_ascii_alphabetic() => match self.next_char() {
					Some(ch) => ident.push(ch),
					None => break
				},
				_ => break
			}
		}

        let end_pos = self.position;

        let tok = match str_to_keyword(&ident) {
			Some(tok) => tok,
			None => Token::Ident(ident)
		};

		(start_pos, tok, end_pos)
	}

	fn lex_number(&mut self) -> LexResult {
		let start_pos = self.position;

		let mut value = String::new();

		loop {
			match self.ch {
				Some(ch) if ch.is_ascii_digit() => match self.next_char() {
					Some(ch) => value.push(ch),
					None => break
				},
				_ => break
			}
		}

		let end_pos = self.position;

		match value.parse::<f64>() {
			Ok(number) => Ok((start_pos, Token::Number(number), end_pos)),
			Err(_) => Err(LexicalError {
				error: LexicalErrorType::InvalidNumber,
				location: SrcSpan::from(start_pos, end_pos)
			})
		}
	}
}

impl<T: Iterator<Item = (u32, char)>> Iterator for Lexer<T> {
	type Item = LexResult;

	fn next(&mut self) -> Option<Self::Item> {
		let token = self.next_token();

		Some(token)
	}
}
