use crate::lexer::TokenKind;

/// Binding power of an operator, weakest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Lowest,
	/// `==` `!=`
	Equals,
	/// `<` `>`
	LessGreater,
	/// `+` `-`
	Sum,
	/// `*` `/`
	Product,
	/// unary `-` `!`
	Prefix,
	/// `f(x)`
	Call,
}

impl Precedence {
	/// Precedence of a token in infix position, `Lowest` when it is not an operator.
	pub fn of(kind: TokenKind) -> Self {
		use TokenKind::*;
		match kind {
			EqualEqual | BangEqual => Precedence::Equals,
			Less | Greater => Precedence::LessGreater,
			Plus | Minus => Precedence::Sum,
			Asterisk | Slash => Precedence::Product,
			LeftParen => Precedence::Call,
			_ => Precedence::Lowest,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn precedence_ladder() {
		assert!(Precedence::Lowest < Precedence::Equals);
		assert!(Precedence::Equals < Precedence::LessGreater);
		assert!(Precedence::LessGreater < Precedence::Sum);
		assert!(Precedence::Sum < Precedence::Product);
		assert!(Precedence::Product < Precedence::Prefix);
		assert!(Precedence::Prefix < Precedence::Call);
	}

	#[test]
	fn precedence_table() {
		assert_eq!(Precedence::of(TokenKind::BangEqual), Precedence::Equals);
		assert_eq!(Precedence::of(TokenKind::Greater), Precedence::LessGreater);
		assert_eq!(Precedence::of(TokenKind::Minus), Precedence::Sum);
		assert_eq!(Precedence::of(TokenKind::Slash), Precedence::Product);
		assert_eq!(Precedence::of(TokenKind::LeftParen), Precedence::Call);
		assert_eq!(Precedence::of(TokenKind::Semicolon), Precedence::Lowest);
		assert_eq!(Precedence::of(TokenKind::Bang), Precedence::Lowest);
	}
}
