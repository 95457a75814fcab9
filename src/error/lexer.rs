/// A lexing error with the column it occurred at.
#[derive(thiserror::Error, Debug, PartialEq)]
#[error("column {column}: {type}")]
pub struct LexError {
	/// Byte offset of the offending text.
	column: usize,
	/// What went wrong.
	r#type: LexErrorType,
}

impl LexError {
	pub fn new(column: usize, r#type: LexErrorType) -> Self { Self { column, r#type } }

	pub fn column(&self) -> usize { self.column }

	pub fn r#type(&self) -> &LexErrorType { &self.r#type }
}

/// Types of lexing errors.
#[derive(Debug, PartialEq)]
pub enum LexErrorType {
	/// A character that belongs to no character class.
	UnexpectedCharacter(char),
	/// A decimal point that is not followed by a digit.
	MalformedDecimal(String),
	/// Letters that spell no known function, constant or variable.
	UnknownIdentifier(String),
	/// A symbol that is neither an operator nor a parenthesis.
	UnknownSymbol(char),
}

impl std::fmt::Display for LexErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use LexErrorType::*;
		match self {
			UnexpectedCharacter(c) => {
				write!(f, "Unexpected character '{c}'")
			}
			MalformedDecimal(text) => {
				write!(f, "Malformed decimal number '{text}', a decimal point must be followed by a digit")
			}
			UnknownIdentifier(name) => {
				write!(f, "Unknown identifier '{name}'")
			}
			UnknownSymbol(c) => {
				write!(f, "Unknown symbol '{c}'")
			}
		}
	}
}
