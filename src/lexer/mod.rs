//! Lexical analysis of function text.
//!
//! The lexer is a finite-state machine. Each character is classified, the pair
//! of current state and character class selects a [`table::Transition`], and
//! the transition says which pending token to flush and how to consume the
//! character. Tokens are not collected: every token is handed to a
//! [`TokenSink`] the moment it is complete, which is how the parser builds the
//! tree while the text is still being read.
//!
//! Two rewrites happen on the way out:
//!
//! - `-` is negation unless it follows something that ends an operand.
//! - An operand followed directly by the start of another operand gets an
//!   implicit multiplication in between, so `3x` reads as `3*x` and
//!   `(x+1)(x-1)` as `(x+1)*(x-1)`.
mod table;
mod token;

use std::iter::once;

use log::trace;
use table::{CharClass, Emit, State, Step, transition};
pub use token::Token;

use crate::{LexError, LexErrorType, NewtonError, error::parser::ParserError, operator::Operator};

/// Receives tokens as soon as the lexer completes them.
pub trait TokenSink {
	fn accept(&mut self, token: Token) -> Result<(), ParserError>;
}

impl TokenSink for Vec<Token> {
	fn accept(&mut self, token: Token) -> Result<(), ParserError> {
		self.push(token);
		Ok(())
	}
}

/// A lexing machine over one function text
pub struct Lexer<'a> {
	/// User input function text
	source:         &'a str,
	state:          State,
	/// Letters of the pending identifier
	identifier:     String,
	/// Value of the pending number
	number:         f64,
	/// Fractional digits read so far
	decimal_places: i32,
	/// Pending single-character symbol
	symbol:         char,
	/// Where the pending token starts
	start:          usize,
	/// Operator of the last token handed out
	previous:       Option<Operator>,
}

impl<'a> Lexer<'a> {
	pub fn new(source: &'a str) -> Self {
		Self {
			source,
			state: State::Start,
			identifier: String::new(),
			number: 0.0,
			decimal_places: 0,
			symbol: '\0',
			start: 0,
			previous: None,
		}
	}

	/// Runs the machine until it accepts or fails, feeding every token to
	/// `sink`.
	pub fn run<S: TokenSink>(mut self, sink: &mut S) -> Result<(), NewtonError> {
		let characters = self.source.char_indices().map(|(i, c)| (i, Some(c))).chain(once((self.source.len(), None)));

		for (column, c) in characters {
			let class = CharClass::of(c);
			let edge = transition(self.state, class);
			if edge.next == State::Error {
				return Err(self.fault(column, c).into());
			}
			self.flush(edge.emit, sink)?;
			self.consume(edge.step, column, c);
			self.state = edge.next;
			if self.state == State::Accept {
				break;
			}
		}
		Ok(())
	}

	/// Emits the pending token, if the transition asks for it.
	fn flush<S: TokenSink>(&mut self, emit: Emit, sink: &mut S) -> Result<(), NewtonError> {
		let token = match emit {
			Emit::Nothing => return Ok(()),
			Emit::Number => Token::number(std::mem::take(&mut self.number), self.start),
			Emit::Identifier => {
				let name = std::mem::take(&mut self.identifier);
				match Operator::from_identifier(&name) {
					Operator::Unknown => {
						return Err(LexError::new(self.start, LexErrorType::UnknownIdentifier(name)).into());
					}
					operator => Token::new(operator, self.start),
				}
			}
			Emit::Symbol => match Operator::from_symbol(self.symbol) {
				Operator::Unknown => {
					return Err(LexError::new(self.start, LexErrorType::UnknownSymbol(self.symbol)).into());
				}
				Operator::Subtract if !self.previous.is_some_and(Operator::ends_operand) => {
					Token::new(Operator::Negate, self.start)
				}
				operator => Token::new(operator, self.start),
			},
		};
		self.emit(token, sink)
	}

	/// Hands a token to the sink, preceded by an implicit multiplication when
	/// two operands touch.
	fn emit<S: TokenSink>(&mut self, token: Token, sink: &mut S) -> Result<(), NewtonError> {
		if self.previous.is_some_and(Operator::ends_operand) && token.operator.begins_operand() {
			trace!("implicit multiplication at column {}", token.column);
			sink.accept(Token::new(Operator::Multiply, token.column))?;
		}
		trace!("emit {token:?}");
		self.previous = Some(token.operator);
		sink.accept(token)?;
		Ok(())
	}

	/// Feeds the current character to the pending token.
	fn consume(&mut self, step: Step, column: usize, c: Option<char>) {
		let Some(c) = c else { return };
		match step {
			Step::Nothing => {}
			Step::AppendCharacter => {
				if self.identifier.is_empty() {
					self.start = column;
				}
				self.identifier.push(c);
			}
			Step::AppendDigit => {
				if self.state != State::Number {
					self.start = column;
					self.number = 0.0;
				}
				self.number = self.number * 10.0 + digit(c);
			}
			Step::InitiateDecimal => {
				if self.state != State::Number {
					self.start = column;
					self.number = 0.0;
				}
				self.decimal_places = 0;
			}
			Step::AppendDecimalDigit => {
				self.decimal_places += 1;
				self.number += digit(c) * 10f64.powi(-self.decimal_places);
			}
			Step::BufferSymbol => {
				self.start = column;
				self.symbol = c;
			}
		}
	}

	/// Builds the error for a transition into the error state.
	fn fault(&self, column: usize, c: Option<char>) -> LexError {
		let r#type = match (self.state, c) {
			(State::DecimalPoint, _) | (State::DecimalNumber, Some('.')) => {
				LexErrorType::MalformedDecimal(self.source[self.start..column].to_string())
			}
			(_, Some(c)) => LexErrorType::UnexpectedCharacter(c),
			(_, None) => LexErrorType::MalformedDecimal(self.source[self.start..].to_string()),
		};
		let column = if matches!(r#type, LexErrorType::MalformedDecimal(_)) { self.start } else { column };
		LexError::new(column, r#type)
	}
}

fn digit(c: char) -> f64 { c.to_digit(10).map_or(0.0, f64::from) }
