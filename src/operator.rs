//! Operator metadata.
//!
//! Every node kind the lexer, parser, tree and compiler deal with is one
//! [`Operator`] tag. The tables below are plain `match`es over the tag, so they
//! are fixed at compile time and can be shared by any number of compilations.
//!
//! |Operator|Arity|Precedence|Associates
//! --|--|--|--
//! `+ -`|2|1|Left
//! `* /`|2|2|Left
//! Negation `-`|1|3|Right
//! `^`|2|4|Right
//! `exp ln sin cos tan`|1|4|Right

use std::fmt::Display;

use Operator::*;

use crate::bytecode::Opcode;

/// Maximum number of children any node can have.
pub const MAX_ARITY: usize = 2;

/// Value of the `pi` constant.
pub const PI: f64 = std::f64::consts::PI;

/// Value of the `e` constant. Not named `E`, which is the operator tag.
pub const EULER: f64 = std::f64::consts::E;

/// Which side an operator groups to when precedences tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
	Left,
	Right,
}

/// Closed set of node kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
	/// Number literal.
	Number,
	/// Unary minus.
	Negate,
	/// Addition `+`.
	Add,
	/// Subtraction `-`.
	Subtract,
	/// Multiplication `*`, also inserted implicitly.
	Multiply,
	/// Division `/`.
	Divide,
	/// Power `^`.
	Power,
	/// Exponential function.
	Exp,
	/// Natural logarithm.
	Ln,
	/// Sine.
	Sin,
	/// Cosine.
	Cos,
	/// Tangent.
	Tan,
	/// The variable `x`.
	Variable,
	/// The constant pi.
	Pi,
	/// Euler's number.
	E,
	/// `(` or `[`.
	LeftParen,
	/// `)` or `]`.
	RightParen,
	/// Anything the lookup tables do not know.
	Unknown,
}

impl Operator {
	/// Number of children a node of this kind owns.
	pub fn arity(self) -> usize {
		match self {
			Negate | Exp | Ln | Sin | Cos | Tan => 1,
			Add | Subtract | Multiply | Divide | Power => 2,
			Number | Variable | Pi | E | LeftParen | RightParen | Unknown => 0,
		}
	}

	/// Binding strength, 0 for everything that is not an operator.
	pub fn precedence(self) -> u8 {
		match self {
			Add | Subtract => 1,
			Multiply | Divide => 2,
			Negate => 3,
			Power | Exp | Ln | Sin | Cos | Tan => 4,
			Number | Variable | Pi | E | LeftParen | RightParen | Unknown => 0,
		}
	}

	pub fn associativity(self) -> Associativity {
		match self {
			Power | Negate | Exp | Ln | Sin | Cos | Tan => Associativity::Right,
			_ => Associativity::Left,
		}
	}

	/// Opcode the compiler emits for this node kind. Parentheses and unknown
	/// tags never reach the compiler and have none.
	pub fn opcode(self) -> Option<Opcode> {
		Some(match self {
			Number => Opcode::Number,
			Negate => Opcode::Negate,
			Add => Opcode::Add,
			Subtract => Opcode::Subtract,
			Multiply => Opcode::Multiply,
			Divide => Opcode::Divide,
			Power => Opcode::Power,
			Exp => Opcode::Exp,
			Ln => Opcode::Ln,
			Sin => Opcode::Sin,
			Cos => Opcode::Cos,
			Tan => Opcode::Tan,
			Variable => Opcode::Variable,
			Pi => Opcode::Pi,
			E => Opcode::E,
			LeftParen | RightParen | Unknown => return None,
		})
	}

	/// Named unary functions.
	pub fn is_function(self) -> bool { matches!(self, Exp | Ln | Sin | Cos | Tan) }

	/// Arithmetic operators, prefix negation included.
	pub fn is_operator(self) -> bool { matches!(self, Negate | Add | Subtract | Multiply | Divide | Power) }

	/// Leaves: literals, constants and the variable.
	pub fn is_operand(self) -> bool { matches!(self, Number | Variable | Pi | E) }

	/// Whether a token of this kind can be the last token of an operand.
	pub fn ends_operand(self) -> bool { self.is_operand() || self == RightParen }

	/// Whether a token of this kind can be the first token of an operand.
	pub fn begins_operand(self) -> bool { self.is_operand() || self.is_function() || self == LeftParen }

	/// Whether `top`, sitting on the operator stack, has to be reduced before
	/// `self` is pushed.
	pub fn yields_to(self, top: Operator) -> bool {
		match self.associativity() {
			Associativity::Left => self.precedence() <= top.precedence(),
			Associativity::Right => self.precedence() < top.precedence(),
		}
	}

	/// Maps a single symbol character to its tag.
	pub fn from_symbol(c: char) -> Self {
		match c {
			'+' => Add,
			'-' => Subtract,
			'*' => Multiply,
			'/' => Divide,
			'^' => Power,
			'(' | '[' => LeftParen,
			')' | ']' => RightParen,
			_ => Unknown,
		}
	}

	/// Maps an identifier to its tag.
	pub fn from_identifier(name: &str) -> Self {
		match name {
			"exp" => Exp,
			"ln" => Ln,
			"sin" => Sin,
			"cos" => Cos,
			"tan" => Tan,
			"x" | "X" => Variable,
			"pi" | "PI" | "Pi" => Pi,
			"e" | "E" => E,
			_ => Unknown,
		}
	}

	/// Text used when printing trees and diagnostics.
	pub fn symbol(self) -> &'static str {
		match self {
			Number => "number",
			Negate | Subtract => "-",
			Add => "+",
			Multiply => "*",
			Divide => "/",
			Power => "^",
			Exp => "exp",
			Ln => "ln",
			Sin => "sin",
			Cos => "cos",
			Tan => "tan",
			Variable => "x",
			Pi => "pi",
			E => "e",
			LeftParen => "(",
			RightParen => ")",
			Unknown => "?",
		}
	}
}

impl Display for Operator {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.symbol()) }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn arity_matches_kind() {
		for op in [Number, Variable, Pi, E] {
			assert_eq!(op.arity(), 0);
			assert!(op.is_operand());
		}
		for op in [Negate, Exp, Ln, Sin, Cos, Tan] {
			assert_eq!(op.arity(), 1);
		}
		for op in [Add, Subtract, Multiply, Divide, Power] {
			assert_eq!(op.arity(), 2);
		}
	}

	#[test]
	fn precedence_climbing_rules() {
		// Left associative: equal precedence reduces.
		assert!(Subtract.yields_to(Add));
		assert!(Add.yields_to(Multiply));
		assert!(!Multiply.yields_to(Add));
		// Right associative: equal precedence stacks.
		assert!(!Power.yields_to(Power));
		assert!(Negate.yields_to(Power));
		// Parentheses never get reduced by an operator.
		assert!(!Add.yields_to(LeftParen));
	}

	#[test]
	fn lookup_tables() {
		assert_eq!(Operator::from_symbol('['), LeftParen);
		assert_eq!(Operator::from_symbol(']'), RightParen);
		assert_eq!(Operator::from_symbol('%'), Unknown);
		assert_eq!(Operator::from_identifier("X"), Variable);
		assert_eq!(Operator::from_identifier("Pi"), Pi);
		assert_eq!(Operator::from_identifier("E"), E);
		assert_eq!(Operator::from_identifier("sinh"), Unknown);
	}

	#[test]
	fn euler_tag_is_a_leaf() {
		assert_eq!(E.arity(), 0);
		assert_eq!(E.precedence(), 0);
		assert!(E.is_operand());
		assert_eq!(E.symbol(), "e");
		assert_eq!(E.opcode(), Some(Opcode::E));
		assert_eq!(Operator::from_identifier("e"), Operator::E);
		assert_eq!(EULER, std::f64::consts::E);
	}

	#[test]
	fn only_tree_nodes_have_opcodes() {
		assert_eq!(Pi.opcode(), Some(Opcode::Pi));
		assert_eq!(LeftParen.opcode(), None);
		assert_eq!(Unknown.opcode(), None);
	}
}
