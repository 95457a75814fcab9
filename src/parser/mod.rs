//! The `Lexer` turns characters into tokens, the `Parser` turns tokens into one
//! `Expression` tree.
//!
//! The grammar is small enough to be driven by operator precedence alone, so
//! instead of recursive descent the parser runs a variant of the
//! shunting-yard algorithm that builds tree nodes instead of postfix output:
//!
//! - operands go straight onto the operand stack,
//! - operators wait on the operator stack until something of lower
//!   precedence arrives, then get reduced: popped together with as many
//!   operands as their arity and pushed back as one subtree,
//! - a closing parenthesis reduces everything back to its opening partner, and
//!   a function right before that group takes the group as its argument.
//!
//! The parser is fed one token at a time through [`TokenSink`], so it builds
//! the tree while the lexer is still reading.

use anyhow::anyhow;
use log::debug;

use crate::{error::parser::{ParserError, SyntaxError}, expression::Expression, lexer::{Token, TokenSink}, operator::Operator};

/// An operator waiting on the operator stack.
#[derive(Debug, Clone, Copy)]
struct Pending {
	operator: Operator,
	column:   usize,
}

impl From<Token> for Pending {
	fn from(token: Token) -> Self { Self { operator: token.operator, column: token.column } }
}

/// Two-stack expression parser.
#[derive(Debug, Default)]
pub struct Parser {
	/// Finished subtrees.
	operands:  Vec<Expression>,
	/// Operators and opening parentheses not yet reduced.
	operators: Vec<Pending>,
	/// The token parsed last.
	previous:  Option<Operator>,
}

impl Parser {
	pub fn new() -> Self { Self::default() }

	/// Takes in the next token.
	pub fn parse_token(&mut self, token: Token) -> Result<(), ParserError> {
		let previous = self.previous.replace(token.operator);
		match token.operator {
			op if op.is_operand() => self.operands.push(Expression::try_from(token)?),
			// Prefix operators have no left operand, nothing can be waiting for them.
			op if op.is_function() || op == Operator::Negate => self.operators.push(token.into()),
			op if op.is_operator() => {
				while self.operators.last().is_some_and(|top| op.yields_to(top.operator)) {
					self.reduce()?;
				}
				self.operators.push(token.into());
			}
			Operator::LeftParen => self.operators.push(token.into()),
			Operator::RightParen => {
				if previous == Some(Operator::LeftParen) {
					return Err(SyntaxError::EmptyGroup(token.column).into());
				}
				self.close_group(token.column)?;
			}
			_ => return Err(anyhow!("Cannot parse token {token:?}").into()),
		}
		Ok(())
	}

	/// Reduces all remaining operators and returns the single tree left.
	pub fn finish(mut self) -> Result<Expression, ParserError> {
		while let Some(top) = self.operators.last() {
			if top.operator == Operator::LeftParen {
				return Err(SyntaxError::UnmatchedOpeningParenthesis(top.column).into());
			}
			self.reduce()?;
		}

		let tree = match self.operands.len() {
			0 => return Err(SyntaxError::EmptyExpression.into()),
			1 => self.operands.pop().ok_or_else(|| anyhow!("Operand stack emptied unexpectedly"))?,
			n => return Err(SyntaxError::ExcessOperands(n).into()),
		};
		debug!("parsed {tree}");
		Ok(tree)
	}

	/// Reduces back to the matching opening parenthesis and discards it. A
	/// function directly in front of the group is reduced as well.
	fn close_group(&mut self, column: usize) -> Result<(), ParserError> {
		loop {
			match self.operators.last() {
				None => return Err(SyntaxError::UnmatchedClosingParenthesis(column).into()),
				Some(top) if top.operator == Operator::LeftParen => {
					self.operators.pop();
					if self.operators.last().is_some_and(|top| top.operator.is_function()) {
						self.reduce()?;
					}
					return Ok(());
				}
				Some(_) => self.reduce()?,
			}
		}
	}

	/// Pops one operator, gives it its operands and pushes the result as a new
	/// operand.
	fn reduce(&mut self) -> Result<(), ParserError> {
		let pending = self.operators.pop().ok_or_else(|| anyhow!("Operator stack underflow"))?;
		let arity = pending.operator.arity();
		if self.operands.len() < arity {
			return Err(SyntaxError::InsufficientOperands { column: pending.column, operator: pending.operator }.into());
		}
		// split_off keeps the operands in source order.
		let operands = self.operands.split_off(self.operands.len() - arity);
		self.operands.push(Expression::from_operator(pending.operator, operands)?);
		Ok(())
	}
}

impl TokenSink for Parser {
	fn accept(&mut self, token: Token) -> Result<(), ParserError> { self.parse_token(token) }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::compiler;

	fn parse(input: &str, equals: &str) {
		let tree = compiler::parse(input).unwrap();
		assert_eq!(tree.to_string(), equals);
	}

	fn syntax_error(input: &str) -> SyntaxError {
		match compiler::parse(input) {
			Err(crate::NewtonError::Syntax(e)) => e,
			other => panic!("expected a syntax error for {input:?}, got {other:?}"),
		}
	}

	#[test]
	fn parse_expressions() {
		parse("2+3*4", "(+ 2 (* 3 4))");
		parse("1 + 2 * 3 / 4 - 5", "(- (+ 1 (/ (* 2 3) 4)) 5)");
		parse("(1 + 2) * 3", "(* (+ 1 2) 3)");
		parse("[x+1]*(x-1)", "(* (+ x 1) (- x 1))");
		parse("((x))", "x");
	}

	#[test]
	fn parse_associativity() {
		parse("1-2-3", "(- (- 1 2) 3)");
		parse("8/4/2", "(/ (/ 8 4) 2)");
		parse("2^3^2", "(^ 2 (^ 3 2))");
	}

	#[test]
	fn parse_unary() {
		parse("-x", "(- x)");
		parse("-x^2", "(- (^ x 2))");
		parse("-2*x", "(* (- 2) x)");
		parse("2*-3", "(* 2 (- 3))");
		parse("x^-1", "(^ x (- 1))");
		parse("--x", "(- (- x))");
		parse("1 - -x", "(- 1 (- x))");
	}

	#[test]
	fn parse_functions() {
		parse("sin(x)", "(sin x)");
		parse("ln(x)^2", "(^ (ln x) 2)");
		parse("exp(x+1)", "(exp (+ x 1))");
		parse("cos(tan(x))", "(cos (tan x))");
		parse("sin x + 1", "(+ (sin x) 1)");
		parse("sin x^2", "(sin (^ x 2))");
	}

	#[test]
	fn parse_implicit_multiplication() {
		parse("3x", "(* 3 x)");
		assert_eq!(compiler::parse("3x").unwrap(), compiler::parse("3*x").unwrap());
		parse("2(x+1)", "(* 2 (+ x 1))");
		parse("sin(x)cos(x)", "(* (sin x) (cos x))");
		parse("2pi x", "(* (* 2 pi) x)");
		parse("x^2 3", "(* (^ x 2) 3)");
	}

	#[test]
	fn parse_errors() {
		assert_eq!(syntax_error("(2+3"), SyntaxError::UnmatchedOpeningParenthesis(0));
		assert_eq!(syntax_error("2+3)"), SyntaxError::UnmatchedClosingParenthesis(3));
		assert_eq!(syntax_error("2+"), SyntaxError::InsufficientOperands { column: 1, operator: Operator::Add });
		assert_eq!(syntax_error("*3"), SyntaxError::InsufficientOperands { column: 0, operator: Operator::Multiply });
		assert_eq!(syntax_error("sin()"), SyntaxError::EmptyGroup(4));
		assert_eq!(syntax_error(""), SyntaxError::EmptyExpression);
		assert_eq!(syntax_error("   "), SyntaxError::EmptyExpression);
	}

	#[test]
	fn parse_excess_operands() {
		let mut parser = Parser::new();
		parser.accept(Token::number(2.0, 0)).unwrap();
		parser.accept(Token::number(3.0, 2)).unwrap();
		assert!(matches!(parser.finish(), Err(ParserError::Syntax(SyntaxError::ExcessOperands(2)))));
	}

	#[test]
	fn parse_rejects_unknown_tokens() {
		let mut parser = Parser::new();
		assert!(matches!(parser.accept(Token::new(Operator::Unknown, 0)), Err(ParserError::InternalError(_))));
	}
}
