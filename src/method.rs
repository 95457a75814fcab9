//! Newton's method over two compiled programs.
//!
//! `x_{n+1} = x_n - f(x_n) / f'(x_n)`, with `f` and `f'` run on the virtual
//! machine. The method is not guaranteed to converge, so the number of steps
//! is bounded.

use std::fmt::Display;

use log::{debug, info};

use crate::{MathError, MethodError, VmError, bytecode::Bytecode, vm::VirtualMachine};

/// Steps before giving up.
pub const MAX_ITERATIONS: usize = 100;

/// Largest `|f(x)|` accepted as a root.
pub const EPSILON: f64 = 1e-7;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MethodConfig {
	pub max_iterations: usize,
	pub tolerance:      f64,
}

impl Default for MethodConfig {
	fn default() -> Self { Self { max_iterations: MAX_ITERATIONS, tolerance: EPSILON } }
}

/// One completed step, `estimate = previous - value / slope`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
	pub index:    usize,
	pub estimate: f64,
	pub previous: f64,
	/// f(previous)
	pub value:    f64,
	/// f'(previous)
	pub slope:    f64,
}

impl Display for Step {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{:3}: {:6.3} = {:6.3} - {:6.3} / {:6.3}",
			self.index, self.estimate, self.previous, self.value, self.slope
		)
	}
}

/// Iterates from `guess` until `|f(x)|` drops below the tolerance. Every step
/// is handed to `observer`.
pub fn iterate<F>(
	function: &Bytecode,
	derivative: &Bytecode,
	guess: f64,
	config: &MethodConfig,
	mut observer: F,
) -> Result<f64, MethodError>
where
	F: FnMut(&Step),
{
	let mut machine = VirtualMachine::new();
	machine.set_register(guess);
	let mut residual = f64::NAN;

	for index in 0..config.max_iterations {
		machine.load(function);
		residual = machine.execute()?;
		let previous = machine.register();
		if residual.abs() < config.tolerance {
			info!("converged to {previous} after {index} steps");
			return Ok(previous);
		}

		machine.load(derivative);
		let slope = machine.execute()?;
		if slope == 0.0 {
			return Err(VmError::from(MathError::FlatDerivative { x: previous }).into());
		}

		let estimate = previous - residual / slope;
		machine.set_register(estimate);
		let step = Step { index, estimate, previous, value: residual, slope };
		debug!("{step}");
		observer(&step);
	}

	Err(MethodError::NotConverged { iterations: config.max_iterations, estimate: machine.register(), residual })
}
