//! There is no place in the grammar where both an expression and a statement
//! are allowed. The operands of `+` are always expressions, never statements.
//! The branches of an `if` are always blocks of statements.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::{
	lexer::{Token, TokenKind},
	parser::expression::{Expression, Identifier},
};

/// A statement in the programming language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
	/// An expression used as a statement.
	Expression { token: Token, expression: Expression },
	/// A `say` or `invar` declaration. The value is parsed but never bound.
	Say { token: Token, name: Identifier, value: Expression },
	/// A return statement, `return;` carries no value.
	Return { token: Token, value: Option<Expression> },
	/// A block of statements.
	Block(BlockStatement),
}

impl Statement {
	pub fn token(&self) -> &Token {
		match self {
			Statement::Expression { token, .. } | Statement::Say { token, .. } | Statement::Return { token, .. } => {
				token
			}
			Statement::Block(block) => &block.token,
		}
	}

	pub fn token_literal(&self) -> &str { &self.token().literal }

	/// Whether this is a declaration introduced by `invar`.
	pub fn is_invariant(&self) -> bool {
		matches!(self, Statement::Say { token, .. } if token.kind == TokenKind::Invar)
	}
}

/// Statements between `{` and `}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockStatement {
	/// The opening brace.
	pub token:      Token,
	pub statements: Vec<Statement>,
}

impl BlockStatement {
	pub fn new(token: Token) -> Self { Self { token, statements: Vec::new() } }

	pub fn token_literal(&self) -> &str { &self.token.literal }
}

/// The root of every parsed source text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
	pub statements: Vec<Statement>,
}

impl Program {
	/// Literal of the first statement, empty for an empty program.
	pub fn token_literal(&self) -> &str { self.statements.first().map(Statement::token_literal).unwrap_or_default() }
}

impl Display for Statement {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		match self {
			Statement::Expression { expression, .. } => write!(f, "{expression}"),
			Statement::Say { token, name, value } => write!(f, "({} {name} {value})", token.literal),
			Statement::Return { value: Some(value), .. } => write!(f, "(return {value})"),
			Statement::Return { value: None, .. } => write!(f, "(return)"),
			Statement::Block(block) => write!(f, "{block}"),
		}
	}
}

impl Display for BlockStatement {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		let statements = self.statements.iter().map(|s| s.to_string()).collect::<Vec<_>>().join(" ");
		write!(f, "{{{statements}}}")
	}
}

impl Display for Program {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		let statements = self.statements.iter().map(|s| s.to_string()).collect::<Vec<_>>().join("\n");
		write!(f, "{statements}")
	}
}
