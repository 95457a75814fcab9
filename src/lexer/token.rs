use crate::operator::Operator;

/// A token produced by the lexer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
	pub operator: Operator,
	/// Only meaningful for number literals.
	pub value:    f64,
	/// Byte offset where the token starts.
	pub column:   usize,
}

impl Token {
	pub fn new(operator: Operator, column: usize) -> Self { Self { operator, value: 0.0, column } }

	pub fn number(value: f64, column: usize) -> Self { Self { operator: Operator::Number, value, column } }
}
