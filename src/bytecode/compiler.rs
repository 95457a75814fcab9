use anyhow::anyhow;
use log::debug;

use super::Bytecode;
use crate::{NewtonError, expression::Expression};

/// Linearizes a tree. On failure nothing is returned, never a partial buffer.
pub fn compile(tree: &Expression) -> Result<Bytecode, NewtonError> {
	let mut code = Bytecode::with_default_capacity()?;
	emit(tree, &mut code)?;
	debug!("compiled {tree} into {} bytes", code.len());
	Ok(code)
}

/// Pre-order: the node itself, then its children from left to right.
fn emit(node: &Expression, code: &mut Bytecode) -> Result<(), NewtonError> {
	match node {
		Expression::Number(value) => code.write_literal(*value)?,
		_ => {
			let opcode = node.operator().opcode().ok_or_else(|| anyhow!("No opcode for {:?}", node.operator()))?;
			code.write_opcode(opcode)?;
		}
	}
	for child in node.children() {
		emit(child, code)?;
	}
	Ok(())
}
