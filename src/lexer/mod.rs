//! Turns source text into tokens.
//!
//! The lexer pulls one character at a time with a single character of
//! lookahead and never backtracks. It also never fails: whatever it does not
//! understand becomes an `Illegal` token carrying the offending character, and
//! the parser decides what to make of it. Once the input is exhausted every
//! further call yields `Eof`.
//!
//! Identifiers are runs of ASCII letters and `_`. A run is checked against the
//! keyword table only after it ends, so `iffy` is an identifier and not `if`
//! followed by `fy` (`maximal munch`).
mod token;

use std::{iter::Peekable, str::CharIndices};

use TokenKind::*;
pub use token::*;

/// A lexer over borrowed source code
pub struct Lexer<'a> {
	/// User input source code
	source:      &'a str,
	/// User input source code iterator
	source_iter: Peekable<CharIndices<'a>>,
	/// Points at the beginning of the current lexeme
	start:       usize,
	/// Points just past the character currently being considered
	cursor:      usize,
	/// Line the next character sits on
	line:        usize,
}

impl<'a> Lexer<'a> {
	pub fn new(source: &'a str) -> Self {
		let source_iter = source.char_indices().peekable();

		Self { source, source_iter, start: 0, cursor: 0, line: 1 }
	}

	/// Lex the whole input, the last token is always `Eof`.
	pub fn tokenize(source: &str) -> Vec<Token> {
		let mut lexer = Lexer::new(source);
		let mut tokens = Vec::new();
		loop {
			let token = lexer.next_token();
			let done = token.kind == Eof;
			tokens.push(token);
			if done {
				return tokens;
			}
		}
	}

	/// Produce the next token from the source.
	pub fn next_token(&mut self) -> Token {
		self.skip_whitespace();

		let Some(next_char) = self.advance() else {
			return Token::new(Eof, "", self.line);
		};
		self.start = self.cursor - next_char.len_utf8();

		#[rustfmt::skip]
		let kind = match next_char {
			'+' => Plus,
			'-' => Minus,
			'*' => Asterisk,
			'/' => Slash,
			'<' => Less,
			'>' => Greater,
			'(' => LeftParen,
			')' => RightParen,
			'{' => LeftBrace,
			'}' => RightBrace,
			',' => Comma,
			';' => Semicolon,
			'=' => if self.match_next('=') { EqualEqual } else { Assign },
			'!' => if self.match_next('=') { BangEqual } else { Bang },
			c if c.is_ascii_digit() => self.number(),
			c if is_identifier_char(c) => self.identifier(),
			_ => Illegal,
		};

		Token::new(kind, &self.source[self.start..self.cursor], self.line)
	}

	/// Skip spaces, tabs, carriage returns and newlines.
	fn skip_whitespace(&mut self) {
		while let Some(c) = self.peek() {
			match c {
				' ' | '\t' | '\r' => {}
				'\n' => self.line += 1,
				_ => return,
			}
			self.advance();
		}
	}

	/// Match the next character if it is the expected one
	fn match_next(&mut self, expected: char) -> bool {
		matches!(self.peek(), Some(c) if c == expected && { self.advance(); true })
	}

	/// Advance to the next character
	fn advance(&mut self) -> Option<char> {
		let (i, c) = self.source_iter.next()?;
		self.cursor = i + c.len_utf8();
		Some(c)
	}

	/// Peek the current character
	fn peek(&mut self) -> Option<char> { self.source_iter.peek().map(|&(_, c)| c) }

	/// Scan a digit run, conversion to an integer is the parser's job
	fn number(&mut self) -> TokenKind {
		while self.peek().is_some_and(|c| c.is_ascii_digit()) {
			self.advance();
		}
		Number
	}

	/// Scan an identifier or keyword
	fn identifier(&mut self) -> TokenKind {
		while self.peek().is_some_and(is_identifier_char) {
			self.advance();
		}
		TokenKind::keyword_or_identifier(&self.source[self.start..self.cursor])
	}
}

fn is_identifier_char(c: char) -> bool { c.is_ascii_alphabetic() || c == '_' }
