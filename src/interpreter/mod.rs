//! Tree-walking evaluator.
//!
//! The interpreter walks the syntax tree produced by the parser, recursively
//! evaluating each node and computing its runtime value. It keeps no state of
//! its own: every failure becomes an `Error` value returned in place, and a
//! block stops at the first statement that evaluates to one.
//!
//! # Supported nodes
//!
//! - **Literals**: integers, `true`, `false`
//! - **Prefix**: `-` (negation), `!` (logical NOT)
//! - **Infix**: `+`, `-`, `*`, `/`, `<`, `>`, `==`, `!=`
//! - **If**: `if (c) { .. } else { .. }`
//!
//! Names, declarations, returns, functions and calls parse but have no
//! evaluation rule yet; they evaluate to a generic error.

pub mod value;

use log::trace;
use value::{Object, Value, error, integer, is_false, is_null, is_true, is_truthy, native_bool, null};

use crate::{
	lexer::{Token, TokenKind::*},
	parser::expression::Expression,
	statement::{BlockStatement, Program, Statement},
};

/// Value of every node the interpreter has no rule for.
pub const UNSUPPORTED: &str = "Error encountered!";

/// Any node of the syntax tree that can be evaluated.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
	Program(&'a Program),
	Statement(&'a Statement),
	Block(&'a BlockStatement),
	Expression(&'a Expression),
}

impl<'a> From<&'a Program> for Node<'a> {
	fn from(program: &'a Program) -> Self { Node::Program(program) }
}

impl<'a> From<&'a Statement> for Node<'a> {
	fn from(statement: &'a Statement) -> Self { Node::Statement(statement) }
}

impl<'a> From<&'a BlockStatement> for Node<'a> {
	fn from(block: &'a BlockStatement) -> Self { Node::Block(block) }
}

impl<'a> From<&'a Expression> for Node<'a> {
	fn from(expression: &'a Expression) -> Self { Node::Expression(expression) }
}

/// Interpreter that evaluates syntax trees.
#[derive(Debug, Default, Clone, Copy)]
pub struct Interpreter;

impl Interpreter {
	pub fn evaluate_node(&self, node: Node<'_>) -> Object {
		match node {
			Node::Program(program) => self.evaluate_program(program),
			Node::Statement(statement) => self.evaluate_statement(statement),
			Node::Block(block) => self.evaluate_block(block),
			Node::Expression(expression) => self.evaluate(expression),
		}
	}

	/// Value of the last statement, or the first error met.
	pub fn evaluate_program(&self, program: &Program) -> Object { self.evaluate_statements(&program.statements) }

	pub fn evaluate_block(&self, block: &BlockStatement) -> Object { self.evaluate_statements(&block.statements) }

	fn evaluate_statements(&self, statements: &[Statement]) -> Object {
		let mut result = null();
		for statement in statements {
			result = self.evaluate_statement(statement);
			if result.is_error() {
				break;
			}
		}
		result
	}

	pub fn evaluate_statement(&self, statement: &Statement) -> Object {
		match statement {
			Statement::Expression { expression, .. } => self.evaluate(expression),
			Statement::Block(block) => self.evaluate_block(block),
			Statement::Say { .. } | Statement::Return { .. } => unsupported(statement),
		}
	}

	/// Evaluate the given expression and return its value.
	pub fn evaluate(&self, expression: &Expression) -> Object {
		match expression {
			Expression::Number { value, .. } => integer(*value),
			Expression::Boolean { value, .. } => native_bool(*value),
			Expression::Prefix { operator, operand } => {
				let operand = self.evaluate(operand);
				evaluate_prefix(operator, &operand)
			}
			Expression::Infix { left, operator, right } => {
				let left = self.evaluate(left);
				let right = self.evaluate(right);
				evaluate_infix(operator, &left, &right)
			}
			Expression::If { condition, consequence, alternative, .. } => {
				let condition = self.evaluate(condition);
				if is_truthy(&condition) {
					self.evaluate_block(consequence)
				} else if let Some(alternative) = alternative {
					self.evaluate_block(alternative)
				} else {
					null()
				}
			}
			Expression::Error { message, .. } => error(message.as_str()),
			Expression::Identifier(_) | Expression::Function { .. } | Expression::Call { .. } => unsupported(expression),
		}
	}
}

fn unsupported(node: &impl std::fmt::Display) -> Object {
	trace!("no evaluation rule for {node}");
	error(UNSUPPORTED)
}

fn evaluate_prefix(operator: &Token, operand: &Object) -> Object {
	match operator.kind {
		Bang => evaluate_bang(operand),
		Minus => match **operand {
			Value::Integer(n) => n.checked_neg().map_or_else(|| error(format!("integer overflow: -{n}")), integer),
			_ => null(),
		},
		_ => null(),
	}
}

/// Only `true`, `false` and `null` are special, anything else negates to `false`.
fn evaluate_bang(operand: &Object) -> Object {
	if is_true(operand) {
		native_bool(false)
	} else if is_false(operand) || is_null(operand) {
		native_bool(true)
	} else {
		native_bool(false)
	}
}

fn evaluate_infix(operator: &Token, left: &Object, right: &Object) -> Object {
	match (&**left, &**right) {
		(Value::Integer(l), Value::Integer(r)) => evaluate_integer_infix(operator, *l, *r),
		// Non-integers compare by identity, which only means something for the singletons.
		_ => match operator.kind {
			EqualEqual => native_bool(Object::ptr_eq(left, right)),
			BangEqual => native_bool(!Object::ptr_eq(left, right)),
			_ => null(),
		},
	}
}

fn evaluate_integer_infix(operator: &Token, l: i64, r: i64) -> Object {
	let result = match operator.kind {
		Plus => l.checked_add(r),
		Minus => l.checked_sub(r),
		Asterisk => l.checked_mul(r),
		Slash if r == 0 => return error("division by zero"),
		Slash => l.checked_div(r),
		Less => return native_bool(l < r),
		Greater => return native_bool(l > r),
		EqualEqual => return native_bool(l == r),
		BangEqual => return native_bool(l != r),
		_ => return null(),
	};
	result.map_or_else(|| error(format!("integer overflow: {l} {} {r}", operator.literal)), integer)
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use super::*;
	use crate::parser::Parser;

	fn eval(input: &str) -> Object {
		let mut parser = Parser::new(input);
		let program = parser.parse_program();
		Interpreter.evaluate_program(&program)
	}

	fn assert_integer(input: &str, expected: i64) {
		assert_eq!(*eval(input), Value::Integer(expected), "{input}");
	}

	fn assert_same(input: &str, expected: &Object) {
		let value = eval(input);
		assert!(Arc::ptr_eq(&value, expected), "{input}: got {value}, expected the {expected} singleton");
	}

	fn assert_error(input: &str, message: &str) {
		assert_eq!(*eval(input), Value::Error(message.to_string()), "{input}");
	}

	#[test]
	fn eval_integers() {
		assert_integer("5", 5);
		assert_integer("-5", -5);
		assert_integer("--5", 5);
		assert_integer("2 + 3 * 4", 14);
		assert_integer("(2 + 3) * 4", 20);
		assert_integer("5 + 1 - 5 * (9 - 2)", -29);
		assert_integer("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50);
		assert_integer("2 * 2 * 2 * 2 * 2", 32);
		assert_integer("-50 + 100 + -50", 0);
	}

	#[test]
	fn eval_division_truncates() {
		assert_integer("10 / 3", 3);
		assert_integer("-7 / 2", -3);
		assert_integer("7 / -2", -3);
	}

	#[test]
	fn eval_arithmetic_failures() {
		assert_error("1 / 0", "division by zero");
		assert_error("9223372036854775807 + 1", "integer overflow: 9223372036854775807 + 1");
		assert_error("0 - 9223372036854775807 - 2", "integer overflow: -9223372036854775807 - 2");
		assert_error("9223372036854775807 * 2", "integer overflow: 9223372036854775807 * 2");
		assert_error("-(0 - 9223372036854775807 - 1)", "integer overflow: --9223372036854775808");
	}

	#[test]
	fn eval_booleans_are_singletons() {
		let t = native_bool(true);
		let f = native_bool(false);
		assert_same("true", &t);
		assert_same("false", &f);
		assert!(Arc::ptr_eq(&eval("true"), &eval("true")));
		assert_same("true == true", &t);
		assert_same("false == true", &f);
		assert_same("true != false", &t);
		assert_same("1 < 2", &t);
		assert_same("1 > 2", &f);
		assert_same("1 == 1", &t);
		assert_same("1 != 1", &f);
		assert_same("(1 < 2) == true", &t);
		assert_same("(1 > 2) != false", &f);
		assert_same("5 > 4 == 3 < 4", &t);
	}

	#[test]
	fn eval_bang() {
		let t = native_bool(true);
		let f = native_bool(false);
		assert_same("!true", &f);
		assert_same("!false", &t);
		assert_same("!5", &f);
		assert_same("!!5", &t);
		assert_same("!!true", &t);
		assert_same("!!false", &f);
		assert_same("!(if (false) { 1 })", &t);
	}

	#[test]
	fn eval_mismatched_operands() {
		let nil = null();
		assert_same("-true", &nil);
		assert_same("true + false", &nil);
		assert_same("1 + true", &nil);
		assert_same("true < false", &nil);
		assert_same("1 == true", &native_bool(false));
		assert_same("1 != true", &native_bool(true));
		assert_same("(if (false) { 1 }) == (if (false) { 2 })", &native_bool(true));
	}

	#[test]
	fn eval_error_operands_are_not_propagated() {
		assert_same("!(1 / 0)", &native_bool(false));
		assert_same("(1 / 0) == (1 / 0)", &native_bool(false));
		assert_same("-(1 / 0)", &null());
		assert_same("1 + x", &null());
	}

	#[test]
	fn eval_if() {
		assert_same("if (false) { 1 }", &null());
		assert_integer("if (true) { 1 } else { 2 }", 1);
		assert_integer("if (false) { 1 } else { 2 }", 2);
		assert_integer("if (1) { 10 }", 10);
		assert_integer("if (1 < 2) { 10 }", 10);
		assert_integer("if (1 > 2) { 10 } else { 20 }", 20);
		assert_integer("if (if (false) { 1 }) { 1 } else { 2 }", 2);
		assert_integer("if (true) { 1; 2; 3 }", 3);
		assert_same("if (true) {}", &null());
	}

	#[test]
	fn eval_program_value() {
		assert_same("", &null());
		assert_integer("1; 2; 3", 3);
	}

	#[test]
	fn eval_unsupported_nodes() {
		assert_error("x", UNSUPPORTED);
		assert_error("say x = 5; 1", UNSUPPORTED);
		assert_error("invar x = 5", UNSUPPORTED);
		assert_error("return 1", UNSUPPORTED);
		assert_error("fun(x) { x }", UNSUPPORTED);
		assert_error("f(1)", UNSUPPORTED);
	}

	#[test]
	fn eval_stops_at_first_error() {
		assert_error("1; 1 / 0; 2 / 0", "division by zero");
		assert_error("if (true) { 1 / 0; 5 }", "division by zero");
		assert_error("if (true) { x; 5 }; 7", UNSUPPORTED);
	}

	#[test]
	fn eval_parse_errors() {
		assert_error("* 5", "No prefix parse function for *");
		assert_error("(1 + 2", "Expected next token to be ), got EOF instead");
	}

	#[test]
	fn eval_nodes() {
		let mut parser = Parser::new("if (true) { 40 + 2 }");
		let program = parser.parse_program();
		let Statement::Expression { expression, .. } = &program.statements[0] else {
			panic!("expected an expression statement");
		};
		let Expression::If { consequence, .. } = expression else {
			panic!("expected an if expression");
		};

		assert_eq!(*Interpreter.evaluate_node(Node::from(&program)), Value::Integer(42));
		assert_eq!(*Interpreter.evaluate_node(Node::from(&program.statements[0])), Value::Integer(42));
		assert_eq!(*Interpreter.evaluate_node(Node::from(expression)), Value::Integer(42));
		assert_eq!(*Interpreter.evaluate_node(Node::from(consequence)), Value::Integer(42));

		let block = Statement::Block(consequence.clone());
		assert_eq!(*Interpreter.evaluate_statement(&block), Value::Integer(42));
	}
}
