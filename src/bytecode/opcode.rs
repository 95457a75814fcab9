use crate::operator::Operator;

/// One-byte instruction codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Opcode {
	/// Pushes the eight literal bytes stored in front of it.
	Number   = 0x01,
	Negate   = 0x02,
	Add      = 0x03,
	Subtract = 0x04,
	Multiply = 0x05,
	Divide   = 0x06,
	Power    = 0x07,
	Exp      = 0x08,
	Ln       = 0x09,
	Sin      = 0x0a,
	Cos      = 0x0b,
	Tan      = 0x0c,
	/// Pushes the variable register.
	Variable = 0x0d,
	Pi       = 0x0e,
	E        = 0x0f,
}

impl Opcode {
	pub fn from_u8(byte: u8) -> Option<Self> {
		Some(match byte {
			0x01 => Self::Number,
			0x02 => Self::Negate,
			0x03 => Self::Add,
			0x04 => Self::Subtract,
			0x05 => Self::Multiply,
			0x06 => Self::Divide,
			0x07 => Self::Power,
			0x08 => Self::Exp,
			0x09 => Self::Ln,
			0x0a => Self::Sin,
			0x0b => Self::Cos,
			0x0c => Self::Tan,
			0x0d => Self::Variable,
			0x0e => Self::Pi,
			0x0f => Self::E,
			_ => return None,
		})
	}

	/// Tree node kind this instruction was compiled from.
	pub fn operator(self) -> Operator {
		match self {
			Self::Number => Operator::Number,
			Self::Negate => Operator::Negate,
			Self::Add => Operator::Add,
			Self::Subtract => Operator::Subtract,
			Self::Multiply => Operator::Multiply,
			Self::Divide => Operator::Divide,
			Self::Power => Operator::Power,
			Self::Exp => Operator::Exp,
			Self::Ln => Operator::Ln,
			Self::Sin => Operator::Sin,
			Self::Cos => Operator::Cos,
			Self::Tan => Operator::Tan,
			Self::Variable => Operator::Variable,
			Self::Pi => Operator::Pi,
			Self::E => Operator::E,
		}
	}

	/// Operands the instruction pops.
	pub fn arity(self) -> usize { self.operator().arity() }

	pub fn mnemonic(self) -> &'static str {
		match self {
			Self::Number => "PUSH",
			Self::Negate => "NEG",
			Self::Add => "ADD",
			Self::Subtract => "SUB",
			Self::Multiply => "MUL",
			Self::Divide => "DIV",
			Self::Power => "POW",
			Self::Exp => "EXP",
			Self::Ln => "LN",
			Self::Sin => "SIN",
			Self::Cos => "COS",
			Self::Tan => "TAN",
			Self::Variable => "LOADX",
			Self::Pi => "PI",
			Self::E => "E",
		}
	}
}

impl From<Opcode> for u8 {
	fn from(opcode: Opcode) -> Self { opcode as u8 }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn byte_round_trip() {
		for byte in 0x01..=0x0f {
			let opcode = Opcode::from_u8(byte).unwrap();
			assert_eq!(u8::from(opcode), byte);
			assert_eq!(opcode.operator().opcode(), Some(opcode));
		}
		assert_eq!(Opcode::from_u8(0x00), None);
		assert_eq!(Opcode::from_u8(0x10), None);
		assert_eq!(Opcode::from_u8(0xff), None);
	}

	#[test]
	fn arity_follows_operator() {
		assert_eq!(Opcode::Number.arity(), 0);
		assert_eq!(Opcode::Tan.arity(), 1);
		assert_eq!(Opcode::Power.arity(), 2);
	}
}
