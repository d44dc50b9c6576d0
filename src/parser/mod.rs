//! The `Lexer` uses the `lexical grammar`, its alphabet is characters.
//! The `Parser` uses the `syntactic grammar`, its alphabet is tokens.
//!
//! Statements are parsed by plain recursive descent, expressions by precedence
//! climbing (a `Pratt` parser): every token kind may own a prefix handler,
//! which starts an expression, and an infix handler, which continues one whose
//! left side is already parsed. Adding a new operator or literal means adding a
//! handler in [`rules`], the loop in [`Parser::parse_expression`] never
//! changes.
//!
//! |Name|Operators|Associates
//! --|--|--
//! Equals|== !=|Left
//! LessGreater|< >|Left
//! Sum|+ -|Left
//! Product|* /|Left
//! Prefix|! -|Right
//! Call|f(x)|Left
//!
//! Grammar:
//!
//! ``` BNF
//! program        → statement* EOF ;
//! statement      → ( "say" | "invar" ) IDENTIFIER "=" expression ";"?
//!                | "return" expression? ";"?
//!                | expression ";"? ;
//! block          → "{" statement* "}" ;
//! expression     → prefix ( infix )* ;
//! prefix         → IDENTIFIER | NUMBER | "true" | "false"
//!                | ( "!" | "-" ) expression
//!                | "(" expression ")"
//!                | "if" "(" expression ")" block ( "else" block )?
//!                | "fun" "(" ( IDENTIFIER ( "," IDENTIFIER )* )? ")" block ;
//! infix          → ( "==" | "!=" | "<" | ">" | "+" | "-" | "*" | "/" ) expression
//!                | "(" ( expression ( "," expression )* )? ")" ;
//! ```
//!
//! The parser never gives up. A malformed construct is recorded as a
//! [`ParseError`] and replaced by an `Expression::Error` node (or, for a broken
//! declaration, dropped), then parsing resumes at the next token.

pub mod expression;
mod precedence;
mod rules;

use log::{debug, trace};
pub use precedence::Precedence;
use TokenKind::*;

use crate::{
	error::parser::{ParseError, ParseErrorType},
	lexer::{Lexer, Token, TokenKind},
	parser::expression::{Expression, Identifier},
	statement::{BlockStatement, Program, Statement},
};

/// Parser over a token stream pulled lazily from its own lexer.
pub struct Parser<'a> {
	lexer:   Lexer<'a>,
	/// The token being looked at.
	current: Token,
	/// One token of lookahead.
	peek:    Token,
	errors:  Vec<ParseError>,
}

impl<'a> Parser<'a> {
	pub fn new(source: &'a str) -> Self {
		let mut lexer = Lexer::new(source);
		let current = lexer.next_token();
		let peek = lexer.next_token();

		Self { lexer, current, peek, errors: Vec::new() }
	}

	/// Parse every statement up to the end of input.
	pub fn parse_program(&mut self) -> Program {
		let mut program = Program::default();
		while !self.current_is(Eof) {
			if let Some(statement) = self.parse_statement() {
				program.statements.push(statement);
			}
			self.advance();
		}
		program
	}

	/// Diagnostics recorded so far, in the order they were found.
	pub fn errors(&self) -> &[ParseError] { &self.errors }

	pub fn into_errors(self) -> Vec<ParseError> { self.errors }

	/// Shift the lookahead into `current` and pull a fresh token.
	fn advance(&mut self) {
		let next = self.lexer.next_token();
		self.current = std::mem::replace(&mut self.peek, next);
	}

	fn current_is(&self, kind: TokenKind) -> bool { self.current.kind == kind }

	fn peek_is(&self, kind: TokenKind) -> bool { self.peek.kind == kind }

	fn current_precedence(&self) -> Precedence { Precedence::of(self.current.kind) }

	fn peek_precedence(&self) -> Precedence { Precedence::of(self.peek.kind) }

	/// Advance onto the lookahead if it has the expected kind, otherwise record
	/// the mismatch and return an error node describing it.
	fn expect_peek(&mut self, kind: TokenKind) -> Result<(), Expression> {
		if self.peek_is(kind) {
			self.advance();
			return Ok(());
		}
		let found = self.peek.clone();
		Err(self.report(found, ParseErrorType::UnexpectedToken { expected: kind, found: self.peek.kind }))
	}

	/// Record a diagnostic and build the error node that takes the failed
	/// expression's place.
	fn report(&mut self, token: Token, r#type: ParseErrorType) -> Expression {
		let message = r#type.to_string();
		let error = ParseError::new(token.line, r#type);
		debug!("{error}");
		self.errors.push(error);
		Expression::error(token, message)
	}

	fn parse_statement(&mut self) -> Option<Statement> {
		trace!("statement at line {}: {:?}", self.current.line, self.current.kind);
		match self.current.kind {
			Say | Invar => self.parse_say_statement(),
			Return => Some(self.parse_return_statement()),
			_ => Some(self.parse_expression_statement()),
		}
	}

	/// `say x = 5;`, dropped entirely when the name or `=` is missing.
	fn parse_say_statement(&mut self) -> Option<Statement> {
		let token = self.current.clone();
		self.expect_peek(TokenKind::Identifier).ok()?;
		let name = Identifier::new(self.current.clone());
		self.expect_peek(Assign).ok()?;
		self.advance();

		let value = self.parse_expression(Precedence::Lowest);
		if self.peek_is(Semicolon) {
			self.advance();
		}
		Some(Statement::Say { token, name, value })
	}

	fn parse_return_statement(&mut self) -> Statement {
		let token = self.current.clone();
		if self.peek_is(Semicolon) || self.peek_is(RightBrace) || self.peek_is(Eof) {
			if self.peek_is(Semicolon) {
				self.advance();
			}
			return Statement::Return { token, value: None };
		}
		self.advance();

		let value = self.parse_expression(Precedence::Lowest);
		if self.peek_is(Semicolon) {
			self.advance();
		}
		Statement::Return { token, value: Some(value) }
	}

	fn parse_expression_statement(&mut self) -> Statement {
		let token = self.current.clone();
		let expression = self.parse_expression(Precedence::Lowest);
		if self.peek_is(Semicolon) {
			self.advance();
		}
		Statement::Expression { token, expression }
	}

	/// Statements up to the closing `}`, `current` must be the `{`.
	fn parse_block_statement(&mut self) -> BlockStatement {
		let mut block = BlockStatement::new(self.current.clone());
		self.advance();

		while !self.current_is(RightBrace) {
			if self.current_is(Eof) {
				let token = self.current.clone();
				self.report(token, ParseErrorType::UnexpectedToken { expected: RightBrace, found: Eof });
				break;
			}
			if let Some(statement) = self.parse_statement() {
				block.statements.push(statement);
			}
			self.advance();
		}
		block
	}

	/// Precedence climbing: parse a prefix, then keep folding infix operators
	/// that bind tighter than `precedence` into the left side.
	pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> Expression {
		let Some(prefix) = rules::prefix_rule(self.current.kind) else {
			let token = self.current.clone();
			return self.report(token, ParseErrorType::NoPrefixParseFn(self.current.kind));
		};
		let mut left = prefix(self);

		while !self.peek_is(Semicolon) && precedence < self.peek_precedence() {
			let Some(infix) = rules::infix_rule(self.peek.kind) else {
				return left;
			};
			self.advance();
			left = infix(self, left);
		}
		left
	}
}
