pub mod cli;
pub mod lexer;
pub mod math;
pub mod memory;
pub mod method;
pub mod parser;
pub mod vm;

use lexer::LexError;
use math::MathError;
use memory::OutOfMemory;
use method::MethodError;
use parser::{ParserError, SyntaxError};
use vm::VmError;

/// NewtonError is the top-level error type for the compiler and the solver.
#[derive(thiserror::Error, Debug)]
pub enum NewtonError {
	/// Internal compiler error, should never happen
	#[error("CompilerInternalError: {0}")]
	InternalError(#[from] anyhow::Error),
	/// The function text contains something the lexer cannot read
	#[error("Lex error: {0}")]
	Lex(#[from] LexError),
	/// The tokens do not form a single expression
	#[error("Syntax error: {0}")]
	Syntax(#[from] SyntaxError),
	/// A buffer could not grow
	#[error("Memory error: {0}")]
	OutOfMemory(#[from] OutOfMemory),
	/// Evaluation failed while the compiler folded constants
	#[error("Math error: {0}")]
	Math(#[from] MathError),
	/// Newton's method failed
	#[error("Method error: {0}")]
	Method(#[from] MethodError),
}

impl From<ParserError> for NewtonError {
	fn from(error: ParserError) -> Self {
		match error {
			ParserError::InternalError(e) => NewtonError::InternalError(e),
			ParserError::Syntax(e) => NewtonError::Syntax(e),
		}
	}
}

impl From<VmError> for NewtonError {
	fn from(error: VmError) -> Self { NewtonError::Method(error.into()) }
}
