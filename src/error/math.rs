/// Errors raised while computing a value.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum MathError {
	/// A divisor evaluated to exactly zero
	#[error("trying to divide by zero. Try another guess value.")]
	DivisionByZero,
	/// The Newton step would divide by a vanishing derivative
	#[error("the derivative vanishes at x = {x}. Try another guess value.")]
	FlatDerivative { x: f64 },
}
