//! Expression tree nodes
//!
//! An `Expression` is a tree structure representing a function like
//! `3*x^2 - sin(x)` as nested nodes. Every node owns its children; `clone`
//! makes an independent deep copy and dropping the root frees the whole tree.

mod derive;
mod evaluate;
mod fold;

pub(crate) use evaluate::checked_divide;
use Expression::*;
use anyhow::Context;

use crate::{lexer::Token, operator::Operator};

/// Expression tree nodes
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
	Number(f64),
	Variable,
	Pi,
	E,
	Negate(Box<Expression>),
	Exp(Box<Expression>),
	Ln(Box<Expression>),
	Sin(Box<Expression>),
	Cos(Box<Expression>),
	Tan(Box<Expression>),
	Add(Box<Expression>, Box<Expression>),
	Subtract(Box<Expression>, Box<Expression>),
	Multiply(Box<Expression>, Box<Expression>),
	Divide(Box<Expression>, Box<Expression>),
	Power(Box<Expression>, Box<Expression>),
}

impl Expression {
	pub fn number(value: f64) -> Self { Number(value) }

	pub fn negate(operand: Self) -> Self { Negate(Box::new(operand)) }

	pub fn exp(operand: Self) -> Self { Exp(Box::new(operand)) }

	pub fn ln(operand: Self) -> Self { Ln(Box::new(operand)) }

	pub fn sin(operand: Self) -> Self { Sin(Box::new(operand)) }

	pub fn cos(operand: Self) -> Self { Cos(Box::new(operand)) }

	pub fn add(left: Self, right: Self) -> Self { Add(Box::new(left), Box::new(right)) }

	pub fn subtract(left: Self, right: Self) -> Self { Subtract(Box::new(left), Box::new(right)) }

	pub fn multiply(left: Self, right: Self) -> Self { Multiply(Box::new(left), Box::new(right)) }

	pub fn divide(left: Self, right: Self) -> Self { Divide(Box::new(left), Box::new(right)) }

	pub fn power(left: Self, right: Self) -> Self { Power(Box::new(left), Box::new(right)) }

	/// Builds an inner node from its tag and operands in source order.
	pub(crate) fn from_operator(operator: Operator, operands: Vec<Self>) -> anyhow::Result<Self> {
		if operands.len() != operator.arity() {
			anyhow::bail!("Operator {operator:?} takes {} operands, got {}", operator.arity(), operands.len());
		}
		let mut operands = operands.into_iter();
		let mut operand = || operands.next().map(Box::new).context("Missing operand");

		Ok(match operator {
			Operator::Negate => Negate(operand()?),
			Operator::Exp => Exp(operand()?),
			Operator::Ln => Ln(operand()?),
			Operator::Sin => Sin(operand()?),
			Operator::Cos => Cos(operand()?),
			Operator::Tan => Tan(operand()?),
			Operator::Add => Add(operand()?, operand()?),
			Operator::Subtract => Subtract(operand()?, operand()?),
			Operator::Multiply => Multiply(operand()?, operand()?),
			Operator::Divide => Divide(operand()?, operand()?),
			Operator::Power => Power(operand()?, operand()?),
			_ => anyhow::bail!("Cannot build an inner node from {operator:?}"),
		})
	}

	/// Tag of this node.
	pub fn operator(&self) -> Operator {
		match self {
			Number(_) => Operator::Number,
			Variable => Operator::Variable,
			Pi => Operator::Pi,
			E => Operator::E,
			Negate(_) => Operator::Negate,
			Exp(_) => Operator::Exp,
			Ln(_) => Operator::Ln,
			Sin(_) => Operator::Sin,
			Cos(_) => Operator::Cos,
			Tan(_) => Operator::Tan,
			Add(..) => Operator::Add,
			Subtract(..) => Operator::Subtract,
			Multiply(..) => Operator::Multiply,
			Divide(..) => Operator::Divide,
			Power(..) => Operator::Power,
		}
	}

	pub fn arity(&self) -> usize { self.operator().arity() }

	/// Children from left to right.
	pub fn children(&self) -> impl Iterator<Item = &Expression> {
		let (first, second) = match self {
			Number(_) | Variable | Pi | E => (None, None),
			Negate(a) | Exp(a) | Ln(a) | Sin(a) | Cos(a) | Tan(a) => (Some(a.as_ref()), None),
			Add(a, b) | Subtract(a, b) | Multiply(a, b) | Divide(a, b) | Power(a, b) => (Some(a.as_ref()), Some(b.as_ref())),
		};
		first.into_iter().chain(second)
	}

	/// Children from left to right, mutably.
	pub fn children_mut(&mut self) -> impl Iterator<Item = &mut Expression> {
		let (first, second) = match self {
			Number(_) | Variable | Pi | E => (None, None),
			Negate(a) | Exp(a) | Ln(a) | Sin(a) | Cos(a) | Tan(a) => (Some(a.as_mut()), None),
			Add(a, b) | Subtract(a, b) | Multiply(a, b) | Divide(a, b) | Power(a, b) => (Some(a.as_mut()), Some(b.as_mut())),
		};
		first.into_iter().chain(second)
	}

	/// Whether the subtree contains no variable.
	pub fn is_constant(&self) -> bool { !matches!(self, Variable) && self.children().all(Expression::is_constant) }
}

impl TryFrom<Token> for Expression {
	type Error = anyhow::Error;

	fn try_from(token: Token) -> Result<Self, Self::Error> {
		Ok(match token.operator {
			Operator::Number => Number(token.value),
			Operator::Variable => Variable,
			Operator::Pi => Pi,
			Operator::E => E,
			_ => anyhow::bail!("Cannot convert token {:?} to a leaf", token),
		})
	}
}

impl std::fmt::Display for Expression {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Number(n) => write!(f, "{n}"),
			Variable | Pi | E => write!(f, "{}", self.operator()),
			_ => {
				write!(f, "({}", self.operator())?;
				for child in self.children() {
					write!(f, " {child}")?;
				}
				write!(f, ")")
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::compiler;

	#[test]
	fn is_constant_checks_every_child() {
		assert!(compiler::parse("2^3 + pi").unwrap().is_constant());
		assert!(!compiler::parse("x").unwrap().is_constant());
		assert!(!compiler::parse("2+x").unwrap().is_constant());
		assert!(!compiler::parse("x+2").unwrap().is_constant());
		assert!(!compiler::parse("2^(1+sin(x))").unwrap().is_constant());
	}

	#[test]
	fn clone_is_independent() {
		let original = compiler::parse("x^2 + 1").unwrap();
		let mut copy = original.clone();
		assert_eq!(copy, original);
		copy.fold().unwrap();
		*copy.children_mut().next().unwrap() = Expression::number(7.0);
		assert_eq!(original.to_string(), "(+ (^ x 2) 1)");
		assert_eq!(copy.to_string(), "(+ 7 1)");
	}

	#[test]
	fn children_in_source_order() {
		let tree = compiler::parse("x - 3").unwrap();
		let children: Vec<String> = tree.children().map(ToString::to_string).collect();
		assert_eq!(children, ["x", "3"]);
		assert_eq!(tree.arity(), 2);
		assert_eq!(Expression::Variable.children().count(), 0);
	}

	#[test]
	fn build_from_operator() {
		let tree = Expression::from_operator(Operator::Divide, vec![Expression::number(1.0), Expression::Variable]).unwrap();
		assert_eq!(tree, Expression::divide(Expression::number(1.0), Expression::Variable));
		assert!(Expression::from_operator(Operator::Sin, vec![]).is_err());
		assert!(Expression::from_operator(Operator::LeftParen, vec![]).is_err());
	}
}
