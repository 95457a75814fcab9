//! Bytecode: the linear form of an expression tree.
//!
//! Trees are emitted in prefix order, operator first and children left to
//! right. A number literal is written as its eight little-endian IEEE 754
//! bytes followed by the `Number` opcode, so a machine reading the code from
//! the back meets the opcode first and finds the literal right in front of it.
//!
//! ```text
//! 2*x - 1   =>   SUB MUL [2.0] PUSH LOADX [1.0] PUSH
//! ```
mod compiler;
mod disasm;
mod opcode;

pub use compiler::compile;
pub use opcode::Opcode;

use crate::OutOfMemory;

/// Bytes reserved by a fresh code object.
pub const DEFAULT_CAPACITY: usize = 64;

/// Bytes added whenever a write does not fit.
pub const GROW_BY: usize = 64;

/// Width of an encoded number literal.
pub const LITERAL_WIDTH: usize = size_of::<f64>();

/// A growable byte buffer of instructions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bytecode {
	code: Vec<u8>,
}

impl Bytecode {
	/// An empty code object that owns no buffer yet.
	pub fn new() -> Self { Self::default() }

	pub fn with_default_capacity() -> Result<Self, OutOfMemory> {
		let mut code = Vec::new();
		code.try_reserve_exact(DEFAULT_CAPACITY).map_err(|e| OutOfMemory::new("bytecode", e))?;
		Ok(Self { code })
	}

	pub fn len(&self) -> usize { self.code.len() }

	pub fn is_empty(&self) -> bool { self.code.is_empty() }

	pub fn capacity(&self) -> usize { self.code.capacity() }

	pub fn as_bytes(&self) -> &[u8] { &self.code }

	/// Releases the buffer; length and capacity drop to zero.
	pub fn clear(&mut self) { self.code = Vec::new(); }

	pub fn write_opcode(&mut self, opcode: Opcode) -> Result<(), OutOfMemory> { self.write(&[opcode.into()]) }

	/// Writes the literal bytes and the `Number` opcode after them.
	pub fn write_literal(&mut self, value: f64) -> Result<(), OutOfMemory> {
		self.write(&value.to_le_bytes())?;
		self.write_opcode(Opcode::Number)
	}

	fn write(&mut self, bytes: &[u8]) -> Result<(), OutOfMemory> {
		while self.code.capacity() - self.code.len() < bytes.len() {
			// Reserve relative to the length, so this grows the capacity by exactly GROW_BY.
			let additional = self.code.capacity() - self.code.len() + GROW_BY;
			self.code.try_reserve_exact(additional).map_err(|e| OutOfMemory::new("bytecode", e))?;
		}
		self.code.extend_from_slice(bytes);
		Ok(())
	}
}

impl From<Vec<u8>> for Bytecode {
	fn from(code: Vec<u8>) -> Self { Self { code } }
}
