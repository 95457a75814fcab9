use super::{math::MathError, memory::OutOfMemory};

/// Errors that can occur while the virtual machine executes bytecode
#[derive(thiserror::Error, Debug)]
pub enum VmError {
	/// Execution was requested before any code was loaded
	#[error("no code loaded")]
	NoCode,
	/// A byte that is no opcode
	#[error("invalid opcode 0x{byte:02x} at offset {offset}")]
	InvalidOpcode { byte: u8, offset: usize },
	/// A number literal opcode without its eight literal bytes
	#[error("number literal at offset {0} is truncated")]
	TruncatedLiteral(usize),
	/// An operator found fewer operands than its arity
	#[error("stack underflow")]
	StackUnderflow,
	/// The code did not reduce to exactly one value
	#[error("{0} values left on the stack, expected 1")]
	UnbalancedStack(usize),
	#[error(transparent)]
	Math(#[from] MathError),
	#[error(transparent)]
	OutOfMemory(#[from] OutOfMemory),
}
