//! Prefix and infix handlers, keyed by token kind.
//!
//! Handlers are entered with `current` on the token that selected them and
//! return with `current` on the last token they consumed.

use super::{Parser, Precedence};
use crate::{
	error::parser::ParseErrorType,
	lexer::TokenKind::{self, *},
	parser::expression::{self, Expression},
};

pub(super) type PrefixParseFn<'a> = fn(&mut Parser<'a>) -> Expression;
pub(super) type InfixParseFn<'a> = fn(&mut Parser<'a>, Expression) -> Expression;

/// Handler that can start an expression at this token.
pub(super) fn prefix_rule<'a>(kind: TokenKind) -> Option<PrefixParseFn<'a>> {
	let rule: PrefixParseFn<'a> = match kind {
		Identifier => Parser::parse_identifier,
		Number => Parser::parse_number_literal,
		True | False => Parser::parse_boolean,
		Bang | Minus => Parser::parse_prefix_expression,
		LeftParen => Parser::parse_grouped_expression,
		If => Parser::parse_if_expression,
		Function => Parser::parse_function_expression,
		_ => return None,
	};
	Some(rule)
}

/// Handler that continues an already parsed left side at this token.
pub(super) fn infix_rule<'a>(kind: TokenKind) -> Option<InfixParseFn<'a>> {
	let rule: InfixParseFn<'a> = match kind {
		Plus | Minus | Asterisk | Slash | EqualEqual | BangEqual | Less | Greater => Parser::parse_infix_expression,
		LeftParen => Parser::parse_call_expression,
		_ => return None,
	};
	Some(rule)
}

impl<'a> Parser<'a> {
	fn parse_identifier(&mut self) -> Expression { Expression::Identifier(expression::Identifier::new(self.current.clone())) }

	fn parse_number_literal(&mut self) -> Expression {
		let token = self.current.clone();
		match token.literal.parse::<i64>() {
			Ok(value) => Expression::Number { token, value },
			Err(_) => {
				let literal = token.literal.clone();
				self.report(token, ParseErrorType::InvalidInteger(literal))
			}
		}
	}

	fn parse_boolean(&mut self) -> Expression {
		Expression::Boolean { token: self.current.clone(), value: self.current_is(True) }
	}

	fn parse_prefix_expression(&mut self) -> Expression {
		let operator = self.current.clone();
		self.advance();
		let operand = self.parse_expression(Precedence::Prefix);
		Expression::prefix(operator, operand)
	}

	fn parse_infix_expression(&mut self, left: Expression) -> Expression {
		let operator = self.current.clone();
		let precedence = self.current_precedence();
		self.advance();
		let right = self.parse_expression(precedence);
		Expression::infix(left, operator, right)
	}

	fn parse_grouped_expression(&mut self) -> Expression { self.grouped_expression().unwrap_or_else(|error| error) }

	fn grouped_expression(&mut self) -> Result<Expression, Expression> {
		self.advance();
		let expression = self.parse_expression(Precedence::Lowest);
		self.expect_peek(RightParen)?;
		Ok(expression)
	}

	fn parse_if_expression(&mut self) -> Expression { self.if_expression().unwrap_or_else(|error| error) }

	/// `if ( <condition> ) { <consequence> } [ else { <alternative> } ]`
	fn if_expression(&mut self) -> Result<Expression, Expression> {
		let token = self.current.clone();
		self.expect_peek(LeftParen)?;
		self.advance();
		let condition = self.parse_expression(Precedence::Lowest);
		self.expect_peek(RightParen)?;
		self.expect_peek(LeftBrace)?;
		let consequence = self.parse_block_statement();

		let alternative = if self.peek_is(Else) {
			self.advance();
			self.expect_peek(LeftBrace)?;
			Some(self.parse_block_statement())
		} else {
			None
		};

		Ok(Expression::If { token, condition: Box::new(condition), consequence, alternative })
	}

	fn parse_function_expression(&mut self) -> Expression { self.function_expression().unwrap_or_else(|error| error) }

	/// `fun ( <parameters> ) { <body> }`
	fn function_expression(&mut self) -> Result<Expression, Expression> {
		let token = self.current.clone();
		self.expect_peek(LeftParen)?;
		let parameters = self.function_parameters()?;
		self.expect_peek(LeftBrace)?;
		let body = self.parse_block_statement();
		Ok(Expression::Function { token, parameters, body })
	}

	/// Comma separated identifiers, `current` starts on `(` and ends on `)`.
	fn function_parameters(&mut self) -> Result<Vec<expression::Identifier>, Expression> {
		let mut parameters = Vec::new();
		if self.peek_is(RightParen) {
			self.advance();
			return Ok(parameters);
		}

		self.expect_peek(Identifier)?;
		parameters.push(expression::Identifier::new(self.current.clone()));
		while self.peek_is(Comma) {
			self.advance();
			self.expect_peek(Identifier)?;
			parameters.push(expression::Identifier::new(self.current.clone()));
		}

		self.expect_peek(RightParen)?;
		Ok(parameters)
	}

	fn parse_call_expression(&mut self, callee: Expression) -> Expression {
		let token = self.current.clone();
		match self.call_arguments() {
			Ok(arguments) => Expression::Call { token, callee: Box::new(callee), arguments },
			Err(error) => error,
		}
	}

	/// Comma separated expressions, `current` starts on `(` and ends on `)`.
	fn call_arguments(&mut self) -> Result<Vec<Expression>, Expression> {
		let mut arguments = Vec::new();
		if self.peek_is(RightParen) {
			self.advance();
			return Ok(arguments);
		}

		self.advance();
		arguments.push(self.parse_expression(Precedence::Lowest));
		while self.peek_is(Comma) {
			self.advance();
			self.advance();
			arguments.push(self.parse_expression(Precedence::Lowest));
		}

		self.expect_peek(RightParen)?;
		Ok(arguments)
	}
}
