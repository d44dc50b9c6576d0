//! Expression AST nodes
//!
//! An `Expression` is a tree structure representing code like `-12 * (4 + x)`
//! as nested nodes. Every node keeps the token it was built from so callers can
//! report literals and lines. A failed parse does not abort the tree, it leaves
//! an `Expression::Error` in the slot the broken expression would have filled.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::{lexer::Token, statement::BlockStatement};

/// A name, as an operand or as a function parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
	pub token: Token,
	pub name:  String,
}

impl Identifier {
	pub fn new(token: Token) -> Self {
		let name = token.literal.clone();
		Self { token, name }
	}
}

/// Expression AST nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
	Identifier(Identifier),
	Number { token: Token, value: i64 },
	Boolean { token: Token, value: bool },
	Prefix { operator: Token, operand: Box<Expression> },
	Infix { left: Box<Expression>, operator: Token, right: Box<Expression> },
	If { token: Token, condition: Box<Expression>, consequence: BlockStatement, alternative: Option<BlockStatement> },
	Function { token: Token, parameters: Vec<Identifier>, body: BlockStatement },
	Call { token: Token, callee: Box<Expression>, arguments: Vec<Expression> },
	/// A local parse failure standing in for the expression that failed.
	Error { token: Token, message: String },
}

impl Expression {
	pub fn prefix(operator: Token, operand: Self) -> Self { Expression::Prefix { operator, operand: Box::new(operand) } }

	pub fn infix(left: Self, operator: Token, right: Self) -> Self {
		Expression::Infix { left: Box::new(left), operator, right: Box::new(right) }
	}

	pub fn error(token: Token, message: impl Into<String>) -> Self {
		Expression::Error { token, message: message.into() }
	}

	/// The token this node was built from.
	pub fn token(&self) -> &Token {
		match self {
			Expression::Identifier(identifier) => &identifier.token,
			Expression::Number { token, .. }
			| Expression::Boolean { token, .. }
			| Expression::If { token, .. }
			| Expression::Function { token, .. }
			| Expression::Call { token, .. }
			| Expression::Error { token, .. } => token,
			Expression::Prefix { operator, .. } | Expression::Infix { operator, .. } => operator,
		}
	}

	pub fn token_literal(&self) -> &str { &self.token().literal }

	pub fn is_error(&self) -> bool { matches!(self, Expression::Error { .. }) }
}

impl Display for Identifier {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult { write!(f, "{}", self.name) }
}

impl Display for Expression {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		match self {
			Expression::Identifier(identifier) => write!(f, "{identifier}"),
			Expression::Number { value, .. } => write!(f, "{value}"),
			Expression::Boolean { value, .. } => write!(f, "{value}"),
			Expression::Prefix { operator, operand } => write!(f, "({} {operand})", operator.literal),
			Expression::Infix { left, operator, right } => write!(f, "({} {left} {right})", operator.literal),
			Expression::If { condition, consequence, alternative, .. } => match alternative {
				Some(alternative) => write!(f, "(if {condition} {consequence} else {alternative})"),
				None => write!(f, "(if {condition} {consequence})"),
			},
			Expression::Function { parameters, body, .. } => {
				write!(f, "(fun ({}) {body})", join(parameters))
			}
			Expression::Call { callee, arguments, .. } => {
				if arguments.is_empty() {
					write!(f, "(call {callee})")
				} else {
					write!(f, "(call {callee} {})", join(arguments))
				}
			}
			Expression::Error { message, .. } => write!(f, "(error {message:?})"),
		}
	}
}

fn join<T: Display>(items: &[T]) -> String { items.iter().map(|item| item.to_string()).collect::<Vec<_>>().join(" ") }
