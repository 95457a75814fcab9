use super::{Bytecode, LITERAL_WIDTH, Opcode};

impl Bytecode {
	/// Lists the instructions in execution order, last byte first, one per
	/// line with its offset. Bytes that decode to nothing are shown raw.
	pub fn disassemble(&self) -> String {
		let bytes = self.as_bytes();
		let mut out = String::new();
		let mut offset = bytes.len();

		while offset > 0 {
			offset -= 1;
			let byte = bytes[offset];
			let line = match Opcode::from_u8(byte) {
				Some(Opcode::Number) if offset >= LITERAL_WIDTH => {
					let start = offset - LITERAL_WIDTH;
					let mut literal = [0; LITERAL_WIDTH];
					literal.copy_from_slice(&bytes[start..offset]);
					let line = format!("{offset:04} {:<6}{}", Opcode::Number.mnemonic(), f64::from_le_bytes(literal));
					offset = start;
					line
				}
				Some(Opcode::Number) => format!("{offset:04} {:<6}<truncated>", Opcode::Number.mnemonic()),
				Some(opcode) => format!("{offset:04} {}", opcode.mnemonic()),
				None => format!("{offset:04} ??    0x{byte:02x}"),
			};
			out.push_str(&line);
			out.push('\n');
		}
		out
	}
}
