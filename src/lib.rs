//! # From text to value
//!
//! User's source code: `if (5 > 4 == 3 < 4) { 2 + 3 * 4 } else { 0 }`
//!
//! Data flows one way through three stages, and no stage ever looks back at
//! the one before it.

//! ## Lexing
//!
//! The [`Lexer`] takes in characters and produces tokens on demand. Single
//! characters `(`, `{`, `+`, two character operators `==` `!=`, digit runs
//! `123`, identifiers `x` and keywords `if` are all tokens. Whitespace is
//! skipped. Characters the language does not know become `Illegal` tokens
//! instead of errors.

//! ## Parsing
//!
//! The [`Parser`] pulls tokens from its lexer with one token of lookahead and
//! builds a syntax tree. Operator precedence is handled by precedence climbing:
//!
//! ``` markdown
//! if (Expression.If)
//! ├── == (Expression.Infix)
//! │   ├── > (Expression.Infix)
//! │   │   ├── 5
//! │   │   └── 4
//! │   └── < (Expression.Infix)
//! │       ├── 3
//! │       └── 4
//! ├── { + (Expression.Infix) }
//! │         ├── 2
//! │         └── * (Expression.Infix)
//! │             ├── 3
//! │             └── 4
//! └── else { 0 }
//! ```
//!
//! Syntax errors never abort the parse. Each one is collected as a diagnostic
//! and an `Expression::Error` node takes the place of the broken expression.

//! ## Evaluation
//!
//! The [`Interpreter`] walks the tree and computes a runtime value: an
//! integer, one of the shared `true`/`false` instances, the shared `null`, or
//! an error value. Errors are ordinary values; a sequence of statements stops
//! at the first one.
//!
//! Declarations (`say x = 5`), names, returns, functions and calls are parsed
//! but not evaluated yet, they all evaluate to an error value.

pub mod cli;
mod error;
pub mod interpreter;
pub mod lexer;
pub mod logger;
pub mod parser;
mod sayer;
pub mod statement;

pub use error::{
	SayerError,
	parser::{ParseError, ParseErrorType},
};
pub use interpreter::{
	Interpreter, Node,
	value::{Object, Value},
};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;
pub use sayer::Sayer;
use statement::Program;

/// Lex the whole source text, the last token is `Eof`.
pub fn tokenize(source: &str) -> Vec<Token> { Lexer::tokenize(source) }

/// Parse source text into a program and its diagnostics, which are empty when
/// the source is well formed.
pub fn parse(source: &str) -> (Program, Vec<String>) {
	let mut parser = Parser::new(source);
	let program = parser.parse_program();
	let diagnostics = parser.into_errors().iter().map(ToString::to_string).collect();
	(program, diagnostics)
}

/// Evaluate a program or any node inside one.
pub fn evaluate<'a>(node: impl Into<Node<'a>>) -> Object { Interpreter.evaluate_node(node.into()) }
