use std::fmt::Display;

/// A token produced by the lexer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
	pub kind:    TokenKind,
	pub literal: String,
	pub line:    usize,
}

impl Token {
	pub fn new(kind: TokenKind, literal: impl Into<String>, line: usize) -> Self {
		Self { kind, literal: literal.into(), line }
	}
}

/// The different kinds of tokens, literal text lives on the `Token`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
	/// Identifier, e.g. variable or parameter name.
	Identifier,
	/// Integer literal, a run of ASCII digits.
	Number,
	/// Declaration keyword `say`.
	Say,
	/// Invariant declaration keyword `invar`.
	Invar,
	/// Boolean literal `true`.
	True,
	/// Boolean literal `false`.
	False,
	/// If expression keyword.
	If,
	/// Else branch keyword.
	Else,
	/// Return statement keyword.
	Return,
	/// Function keyword `fun`.
	Function,
	/// Plus `+`.
	Plus,
	/// Minus `-`.
	Minus,
	/// Asterisk `*`.
	Asterisk,
	/// Slash `/`.
	Slash,
	/// Bang `!`.
	Bang,
	/// Less than `<`.
	Less,
	/// Greater than `>`.
	Greater,
	/// Equal equal `==`.
	EqualEqual,
	/// Bang equal `!=`.
	BangEqual,
	/// Assign `=`.
	Assign,
	/// Left parenthesis `(`.
	LeftParen,
	/// Right parenthesis `)`.
	RightParen,
	/// Left brace `{`.
	LeftBrace,
	/// Right brace `}`.
	RightBrace,
	/// Comma `,`.
	Comma,
	/// Semicolon `;`.
	Semicolon,
	/// Any character the language does not know.
	Illegal,
	/// End of input, repeated forever once reached.
	Eof,
}

impl TokenKind {
	pub fn keyword_or_identifier(value: &str) -> Self {
		match value {
			"say" => TokenKind::Say,
			"invar" => TokenKind::Invar,
			"true" => TokenKind::True,
			"false" => TokenKind::False,
			"if" => TokenKind::If,
			"else" => TokenKind::Else,
			"return" => TokenKind::Return,
			"fun" => TokenKind::Function,
			_ => TokenKind::Identifier,
		}
	}
}

impl Display for TokenKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use TokenKind::*;
		#[rustfmt::skip]
		let text = match self {
			Identifier => "IDENTIFIER",
			Number     => "NUMBER",
			Say        => "say",
			Invar      => "invar",
			True       => "true",
			False      => "false",
			If         => "if",
			Else       => "else",
			Return     => "return",
			Function   => "fun",
			Plus       => "+",
			Minus      => "-",
			Asterisk   => "*",
			Slash      => "/",
			Bang       => "!",
			Less       => "<",
			Greater    => ">",
			EqualEqual => "==",
			BangEqual  => "!=",
			Assign     => "=",
			LeftParen  => "(",
			RightParen => ")",
			LeftBrace  => "{",
			RightBrace => "}",
			Comma      => ",",
			Semicolon  => ";",
			Illegal    => "ILLEGAL",
			Eof        => "EOF",
		};
		write!(f, "{text}")
	}
}
