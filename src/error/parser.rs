use crate::operator::Operator;

#[derive(thiserror::Error, Debug)]
pub enum ParserError {
	#[error("{0}")]
	InternalError(#[from] anyhow::Error),
	#[error(transparent)]
	Syntax(#[from] SyntaxError),
}

/// Ways a token sequence can fail to form one expression. Columns are byte
/// offsets into the function text.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SyntaxError {
	#[error("column {0}: no matching closing parenthesis found")]
	UnmatchedOpeningParenthesis(usize),
	#[error("column {0}: no matching opening parenthesis found")]
	UnmatchedClosingParenthesis(usize),
	#[error("column {column}: operator '{operator}' has not enough operands")]
	InsufficientOperands { column: usize, operator: Operator },
	#[error("more operands than operators, {0} expressions left")]
	ExcessOperands(usize),
	#[error("column {0}: empty parentheses")]
	EmptyGroup(usize),
	#[error("empty expression")]
	EmptyExpression,
}
