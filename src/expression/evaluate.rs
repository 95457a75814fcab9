use super::Expression::{self, *};
use crate::{error::math::MathError, operator};

/// Division that refuses an exactly-zero divisor.
pub(crate) fn checked_divide(dividend: f64, divisor: f64) -> Result<f64, MathError> {
	if divisor == 0.0 {
		return Err(MathError::DivisionByZero);
	}
	Ok(dividend / divisor)
}

impl Expression {
	/// Evaluates the tree with the variable set to `x`.
	///
	/// Real-number semantics throughout: `ln` of a non-positive number or a
	/// negative base to a fractional power yield NaN rather than an error.
	/// Only an exactly-zero divisor is rejected.
	pub fn evaluate(&self, x: f64) -> Result<f64, MathError> {
		Ok(match self {
			Number(n) => *n,
			Variable => x,
			Pi => operator::PI,
			E => operator::EULER,
			Negate(f) => -f.evaluate(x)?,
			Exp(f) => f.evaluate(x)?.exp(),
			Ln(f) => f.evaluate(x)?.ln(),
			Sin(f) => f.evaluate(x)?.sin(),
			Cos(f) => f.evaluate(x)?.cos(),
			Tan(f) => f.evaluate(x)?.tan(),
			Add(f, g) => f.evaluate(x)? + g.evaluate(x)?,
			Subtract(f, g) => f.evaluate(x)? - g.evaluate(x)?,
			Multiply(f, g) => f.evaluate(x)? * g.evaluate(x)?,
			Divide(f, g) => {
				let divisor = g.evaluate(x)?;
				checked_divide(f.evaluate(x)?, divisor)?
			}
			Power(f, g) => f.evaluate(x)?.powf(g.evaluate(x)?),
		})
	}
}

#[cfg(test)]
mod tests {
	use crate::{compiler, error::math::MathError};

	fn evaluate(input: &str, x: f64) -> Result<f64, MathError> { compiler::parse(input).unwrap().evaluate(x) }

	fn close(input: &str, x: f64, expected: f64) {
		let value = evaluate(input, x).unwrap();
		assert!((value - expected).abs() < 1e-12, "{input} at {x}: {value} != {expected}");
	}

	#[test]
	fn evaluate_arithmetic() {
		for x in [-3.0, 0.0, 1.5] {
			close("2+3*4", x, 14.0);
		}
		close("2^3^2", 0.0, 512.0);
		close("(2^3)^2", 0.0, 64.0);
		close("10 - 4 - 3", 0.0, 3.0);
		close("1/4", 0.0, 0.25);
		close("-x^2", 3.0, -9.0);
		close("3x - 1", 2.0, 5.0);
	}

	#[test]
	fn evaluate_functions_and_constants() {
		close("pi", 0.0, std::f64::consts::PI);
		close("E", 0.0, std::f64::consts::E);
		close("exp(x)", 1.0, std::f64::consts::E);
		close("ln(e^2)", 0.0, 2.0);
		close("sin(pi/2)", 0.0, 1.0);
		close("cos(0)", 0.0, 1.0);
		close("tan(x)", 0.5, 0.5f64.tan());
	}

	#[test]
	fn evaluate_real_semantics() {
		assert!(evaluate("ln(x)", -1.0).unwrap().is_nan());
		close("x^2", -2.0, 4.0);
		assert!(evaluate("x^0.5", -4.0).unwrap().is_nan());
	}

	#[test]
	fn evaluate_division_by_zero() {
		assert_eq!(evaluate("1/x", 0.0), Err(MathError::DivisionByZero));
		assert_eq!(evaluate("1/(x-x)", 5.0), Err(MathError::DivisionByZero));
		close("0/x", 2.0, 0.0);
	}
}
