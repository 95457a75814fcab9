//! Pipeline from function text to runnable code:
//! lex and parse, fold, differentiate, fold again, then compile both trees.

use log::{Level, debug, log_enabled};

use crate::{NewtonError, bytecode::{self, Bytecode}, expression::Expression, lexer::Lexer, parser::Parser};

/// A compiled function together with its derivative.
#[derive(Debug, Clone)]
pub struct Program {
	pub function_tree:   Expression,
	pub derivative_tree: Expression,
	pub function:        Bytecode,
	pub derivative:      Bytecode,
}

/// Parses function text into a tree. The parser consumes tokens while the
/// lexer produces them.
pub fn parse(source: &str) -> Result<Expression, NewtonError> {
	let mut parser = Parser::new();
	Lexer::new(source).run(&mut parser)?;
	Ok(parser.finish()?)
}

pub fn compile(source: &str) -> Result<Program, NewtonError> {
	let mut function_tree = parse(source)?;
	function_tree.fold()?;
	debug!("folded function {function_tree}");

	let mut derivative_tree = function_tree.derive();
	derivative_tree.fold()?;
	debug!("folded derivative {derivative_tree}");

	let function = bytecode::compile(&function_tree)?;
	let derivative = bytecode::compile(&derivative_tree)?;
	if log_enabled!(Level::Debug) {
		debug!("function code:\n{}", function.disassemble());
		debug!("derivative code:\n{}", derivative.disassemble());
	}

	Ok(Program { function_tree, derivative_tree, function, derivative })
}
