use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::lexer::TokenKind;

/// A single diagnostic recorded while parsing, parsing carries on afterwards.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {type}")]
pub struct ParseError {
	line:   usize,
	r#type: ParseErrorType,
}

impl ParseError {
	pub fn new(line: usize, r#type: ParseErrorType) -> Self { Self { line, r#type } }

	pub fn line(&self) -> usize { self.line }

	pub fn error_type(&self) -> &ParseErrorType { &self.r#type }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorType {
	/// Nothing knows how to start an expression with this token.
	NoPrefixParseFn(TokenKind),
	/// A required token was missing.
	UnexpectedToken { expected: TokenKind, found: TokenKind },
	/// A digit run that does not fit an `i64`.
	InvalidInteger(String),
}

impl Display for ParseErrorType {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		use ParseErrorType::*;
		match self {
			NoPrefixParseFn(kind) => {
				write!(f, "No prefix parse function for {kind}")
			}
			UnexpectedToken { expected, found } => {
				write!(f, "Expected next token to be {expected}, got {found} instead")
			}
			InvalidInteger(literal) => {
				write!(f, "Could not parse {literal} as integer")
			}
		}
	}
}
