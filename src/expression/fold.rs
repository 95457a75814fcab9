use super::Expression::{self, *};
use crate::error::math::MathError;

impl Expression {
	/// Replaces every variable-free subtree with its value, from the leaves up.
	///
	/// Returns whether this whole node folded into a number. Pi and e fold as
	/// well, a bare variable never does.
	pub fn fold(&mut self) -> Result<bool, MathError> {
		if matches!(self, Variable) {
			return Ok(false);
		}
		let mut foldable = true;
		// Every child has to be visited, even after one of them refused.
		for child in self.children_mut() {
			foldable &= child.fold()?;
		}
		if foldable && !matches!(self, Number(_)) {
			*self = Number(self.evaluate(0.0)?);
		}
		Ok(foldable)
	}
}

#[cfg(test)]
mod tests {
	use crate::{compiler, error::math::MathError, expression::Expression};

	fn fold(input: &str, equals: &str) -> bool {
		let mut tree = compiler::parse(input).unwrap();
		let folded = tree.fold().unwrap();
		assert_eq!(tree.to_string(), equals);
		folded
	}

	#[test]
	fn fold_constants() {
		assert!(fold("2+3*4", "14"));
		assert!(fold("2^3^2", "512"));
		assert!(fold("-(1/4)", "-0.25"));
		assert!(fold("7", "7"));
	}

	#[test]
	fn fold_around_variable() {
		assert!(!fold("x", "x"));
		assert!(!fold("x + 2*3", "(+ x 6)"));
		assert!(!fold("(1+1)*x - 2^2", "(- (* 2 x) 4)"));
		assert!(!fold("x^(4/2)", "(^ x 2)"));
		assert!(!fold("sin(x + 0*1)", "(sin (+ x 0))"));
	}

	#[test]
	fn fold_is_idempotent() {
		let mut tree = compiler::parse("3*x + 2^3 - ln(e)").unwrap();
		tree.fold().unwrap();
		let once = tree.clone();
		tree.fold().unwrap();
		assert_eq!(tree, once);

		let mut number = compiler::parse("1/8").unwrap();
		assert!(number.fold().unwrap());
		assert!(number.fold().unwrap());
		assert_eq!(number, Expression::number(0.125));
	}

	#[test]
	fn fold_keeps_value() {
		let tree = compiler::parse("x*(1+2) + sin(pi/6)").unwrap();
		let mut folded = tree.clone();
		folded.fold().unwrap();
		for x in [-2.0, 0.0, 3.5] {
			assert!((tree.evaluate(x).unwrap() - folded.evaluate(x).unwrap()).abs() < 1e-12);
		}
	}

	#[test]
	fn fold_division_by_zero() {
		let mut tree = compiler::parse("x + 1/(2-2)").unwrap();
		assert_eq!(tree.fold(), Err(MathError::DivisionByZero));
	}
}
