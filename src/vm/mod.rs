//! The stack virtual machine.
//!
//! Code is read from its last byte to its first. Leaves push a value,
//! operators pop their operands and push the result. Since the compiler
//! emits children left to right, the right operand is computed first and
//! ends up lower on the stack: the first pop of a binary operator is its
//! left-hand side.
mod stack;

use log::trace;
pub use stack::{MIN_CAPACITY, NumberStack};

use crate::{VmError, bytecode::{Bytecode, LITERAL_WIDTH, Opcode}, expression::checked_divide, operator};

/// One loaded code object and the variable register.
#[derive(Debug, Default)]
pub struct VirtualMachine<'code> {
	code:     Option<&'code Bytecode>,
	register: f64,
}

impl<'code> VirtualMachine<'code> {
	pub fn new() -> Self { Self::default() }

	/// Loads `code` and hands back whatever was loaded before.
	pub fn load(&mut self, code: &'code Bytecode) -> Option<&'code Bytecode> { self.code.replace(code) }

	pub fn unload(&mut self) -> Option<&'code Bytecode> { self.code.take() }

	pub fn register(&self) -> f64 { self.register }

	pub fn set_register(&mut self, x: f64) { self.register = x; }

	/// Runs the loaded code once and returns the single value it leaves.
	pub fn execute(&self) -> Result<f64, VmError> {
		let bytes = self.code.ok_or(VmError::NoCode)?.as_bytes();
		let mut stack = NumberStack::new()?;
		let mut offset = bytes.len();

		while offset > 0 {
			offset -= 1;
			let byte = bytes[offset];
			let opcode = Opcode::from_u8(byte).ok_or(VmError::InvalidOpcode { byte, offset })?;
			let value = match opcode {
				Opcode::Number => {
					let start = offset.checked_sub(LITERAL_WIDTH).ok_or(VmError::TruncatedLiteral(offset))?;
					let literal = bytes[start..offset].try_into().map_err(|_| VmError::TruncatedLiteral(offset))?;
					offset = start;
					f64::from_le_bytes(literal)
				}
				Opcode::Variable => self.register,
				Opcode::Pi => operator::PI,
				Opcode::E => operator::EULER,
				Opcode::Negate => -stack.pop()?,
				Opcode::Exp => stack.pop()?.exp(),
				Opcode::Ln => stack.pop()?.ln(),
				Opcode::Sin => stack.pop()?.sin(),
				Opcode::Cos => stack.pop()?.cos(),
				Opcode::Tan => stack.pop()?.tan(),
				Opcode::Add => {
					let (left, right) = operands(&mut stack)?;
					left + right
				}
				Opcode::Subtract => {
					let (left, right) = operands(&mut stack)?;
					left - right
				}
				Opcode::Multiply => {
					let (left, right) = operands(&mut stack)?;
					left * right
				}
				Opcode::Divide => {
					let (left, right) = operands(&mut stack)?;
					checked_divide(left, right)?
				}
				Opcode::Power => {
					let (left, right) = operands(&mut stack)?;
					left.powf(right)
				}
			};
			stack.push(value)?;
		}

		match stack.len() {
			1 => {
				let result = stack.pop()?;
				trace!("executed {} bytes with x = {}: {result}", bytes.len(), self.register);
				Ok(result)
			}
			n => Err(VmError::UnbalancedStack(n)),
		}
	}
}

/// Operands of a binary operator, left first. The left one is on top.
fn operands(stack: &mut NumberStack) -> Result<(f64, f64), VmError> {
	let left = stack.pop()?;
	let right = stack.pop()?;
	Ok((left, right))
}
