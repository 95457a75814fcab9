use super::vm::VmError;

/// Errors of the Newton iteration
#[derive(thiserror::Error, Debug)]
pub enum MethodError {
	/// The iteration budget ran out before the residual got small enough
	#[error(
		"could not find a suitable result, aborting.\n  After {iterations} iterations the best result is {estimate:.4} with a function value of {residual:.4}."
	)]
	NotConverged { iterations: usize, estimate: f64, residual: f64 },
	#[error(transparent)]
	Machine(#[from] VmError),
}
