//! Symbolic differentiation with respect to `x`.

use super::Expression::{self, *};

impl Expression {
	/// Builds the derivative as a new tree. The input is only read; subtrees
	/// needed in several places are cloned.
	pub fn derive(&self) -> Expression {
		match self {
			Number(_) | Pi | E => Expression::number(0.0),
			Variable => Expression::number(1.0),
			Negate(f) => Expression::negate(f.derive()),
			Add(f, g) => Expression::add(f.derive(), g.derive()),
			Subtract(f, g) => Expression::subtract(f.derive(), g.derive()),
			Multiply(f, g) => Expression::add(
				Expression::multiply(f.derive(), g.as_ref().clone()),
				Expression::multiply(f.as_ref().clone(), g.derive()),
			),
			Divide(f, g) => Expression::divide(
				Expression::subtract(
					Expression::multiply(f.derive(), g.as_ref().clone()),
					Expression::multiply(f.as_ref().clone(), g.derive()),
				),
				Expression::multiply(g.as_ref().clone(), g.as_ref().clone()),
			),
			Exp(f) => Expression::multiply(f.derive(), Expression::exp(f.as_ref().clone())),
			Ln(f) => Expression::multiply(f.derive(), Expression::divide(Expression::number(1.0), f.as_ref().clone())),
			Sin(f) => Expression::multiply(f.derive(), Expression::cos(f.as_ref().clone())),
			Cos(f) => Expression::multiply(
				Expression::number(-1.0),
				Expression::multiply(Expression::sin(f.as_ref().clone()), f.derive()),
			),
			Tan(f) => Expression::divide(
				f.derive(),
				Expression::power(Expression::cos(f.as_ref().clone()), Expression::number(2.0)),
			),
			Power(f, g) => {
				let base = Expression::divide(Expression::multiply(f.derive(), g.as_ref().clone()), f.as_ref().clone());
				// A constant exponent contributes nothing, and ln(f) may not exist.
				let exponent = if g.is_constant() {
					Expression::number(0.0)
				} else {
					Expression::multiply(Expression::ln(f.as_ref().clone()), g.derive())
				};
				Expression::multiply(self.clone(), Expression::add(base, exponent))
			}
		}
	}
}
