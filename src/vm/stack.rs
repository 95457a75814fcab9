use log::trace;

use crate::{OutOfMemory, VmError};

/// Smallest capacity the stack ever shrinks to.
pub const MIN_CAPACITY: usize = 2;

/// Operand stack of the machine. Doubles when full and halves once it is at
/// most a quarter full, so memory follows the current depth, not the peak.
#[derive(Debug)]
pub struct NumberStack {
	values:   Vec<f64>,
	/// Logical capacity; the vector may hold slightly more.
	capacity: usize,
}

impl NumberStack {
	pub fn new() -> Result<Self, OutOfMemory> {
		let mut values = Vec::new();
		values.try_reserve_exact(MIN_CAPACITY).map_err(|e| OutOfMemory::new("vm stack", e))?;
		Ok(Self { values, capacity: MIN_CAPACITY })
	}

	pub fn len(&self) -> usize { self.values.len() }

	pub fn is_empty(&self) -> bool { self.values.is_empty() }

	pub fn capacity(&self) -> usize { self.capacity }

	pub fn push(&mut self, value: f64) -> Result<(), OutOfMemory> {
		if self.values.len() == self.capacity {
			let capacity = self.capacity * 2;
			self.values.try_reserve_exact(capacity - self.values.len()).map_err(|e| OutOfMemory::new("vm stack", e))?;
			trace!("stack grows to {capacity}");
			self.capacity = capacity;
		}
		self.values.push(value);
		Ok(())
	}

	pub fn pop(&mut self) -> Result<f64, VmError> {
		let value = self.values.pop().ok_or(VmError::StackUnderflow)?;
		if 4 * self.values.len() <= self.capacity && self.capacity > MIN_CAPACITY {
			self.capacity /= 2;
			self.values.shrink_to(self.capacity);
			trace!("stack shrinks to {}", self.capacity);
		}
		Ok(value)
	}
}
