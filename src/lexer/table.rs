//! States, character classes and the transition table of the lexing machine.
//!
//! A transition first flushes the pending token (`Emit`), then feeds the
//! current character to the token being built (`Step`).

use CharClass as C;
use State::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum State {
	Start,
	Letter,
	Number,
	DecimalPoint,
	DecimalNumber,
	Symbol,
	Accept,
	Error,
}

impl State {
	const COUNT: usize = 8;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum CharClass {
	Letter,
	Digit,
	DecimalPoint,
	Symbol,
	Whitespace,
	Unknown,
	/// End-of-input sentinel.
	End,
}

impl CharClass {
	const COUNT: usize = 7;

	pub fn of(c: Option<char>) -> Self {
		match c {
			None => C::End,
			Some(c) if c.is_ascii_alphabetic() => C::Letter,
			Some(c) if c.is_ascii_digit() => C::Digit,
			Some('.') => C::DecimalPoint,
			Some(c) if c.is_whitespace() => C::Whitespace,
			Some(c) if c.is_ascii_punctuation() => C::Symbol,
			Some(_) => C::Unknown,
		}
	}
}

/// Flushes the pending token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Emit {
	Nothing,
	Number,
	Identifier,
	Symbol,
}

/// Consumes the current character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Step {
	Nothing,
	AppendCharacter,
	AppendDigit,
	InitiateDecimal,
	AppendDecimalDigit,
	BufferSymbol,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Transition {
	pub next: State,
	pub emit: Emit,
	pub step: Step,
}

const fn t(next: State, emit: Emit, step: Step) -> Transition { Transition { next, emit, step } }

const FAIL: Transition = t(Error, Emit::Nothing, Step::Nothing);
const STAY_ACCEPT: Transition = t(Accept, Emit::Nothing, Step::Nothing);
const STAY_ERROR: Transition = FAIL;

use Emit as E;
use Step as S;

/// Indexed by `[state][class]`, classes in declaration order:
/// Letter, Digit, DecimalPoint, Symbol, Whitespace, Unknown, End.
#[rustfmt::skip]
static TRANSITIONS: [[Transition; CharClass::COUNT]; State::COUNT] = [
	// Start
	[
		t(Letter, E::Nothing, S::AppendCharacter),
		t(Number, E::Nothing, S::AppendDigit),
		t(DecimalPoint, E::Nothing, S::InitiateDecimal),
		t(Symbol, E::Nothing, S::BufferSymbol),
		t(Start, E::Nothing, S::Nothing),
		FAIL,
		t(Accept, E::Nothing, S::Nothing),
	],
	// Letter
	[
		t(Letter, E::Nothing, S::AppendCharacter),
		t(Number, E::Identifier, S::AppendDigit),
		FAIL,
		t(Symbol, E::Identifier, S::BufferSymbol),
		t(Start, E::Identifier, S::Nothing),
		FAIL,
		t(Accept, E::Identifier, S::Nothing),
	],
	// Number
	[
		t(Letter, E::Number, S::AppendCharacter),
		t(Number, E::Nothing, S::AppendDigit),
		t(DecimalPoint, E::Nothing, S::InitiateDecimal),
		t(Symbol, E::Number, S::BufferSymbol),
		t(Start, E::Number, S::Nothing),
		FAIL,
		t(Accept, E::Number, S::Nothing),
	],
	// DecimalPoint
	[
		FAIL,
		t(DecimalNumber, E::Nothing, S::AppendDecimalDigit),
		FAIL,
		FAIL,
		FAIL,
		FAIL,
		FAIL,
	],
	// DecimalNumber
	[
		t(Letter, E::Number, S::AppendCharacter),
		t(DecimalNumber, E::Nothing, S::AppendDecimalDigit),
		FAIL,
		t(Symbol, E::Number, S::BufferSymbol),
		t(Start, E::Number, S::Nothing),
		FAIL,
		t(Accept, E::Number, S::Nothing),
	],
	// Symbol
	[
		t(Letter, E::Symbol, S::AppendCharacter),
		t(Number, E::Symbol, S::AppendDigit),
		t(DecimalPoint, E::Symbol, S::InitiateDecimal),
		t(Symbol, E::Symbol, S::BufferSymbol),
		t(Start, E::Symbol, S::Nothing),
		FAIL,
		t(Accept, E::Symbol, S::Nothing),
	],
	// Accept
	[STAY_ACCEPT; CharClass::COUNT],
	// Error
	[STAY_ERROR; CharClass::COUNT],
];

pub(super) fn transition(state: State, class: CharClass) -> Transition { TRANSITIONS[state as usize][class as usize] }

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn classify() {
		assert_eq!(CharClass::of(Some('x')), C::Letter);
		assert_eq!(CharClass::of(Some('7')), C::Digit);
		assert_eq!(CharClass::of(Some('.')), C::DecimalPoint);
		assert_eq!(CharClass::of(Some('^')), C::Symbol);
		assert_eq!(CharClass::of(Some('\t')), C::Whitespace);
		assert_eq!(CharClass::of(Some('π')), C::Unknown);
		assert_eq!(CharClass::of(None), C::End);
	}

	#[test]
	fn decimal_point_needs_a_digit() {
		for class in [C::Letter, C::DecimalPoint, C::Symbol, C::Whitespace, C::Unknown, C::End] {
			assert_eq!(transition(DecimalPoint, class).next, Error);
		}
		assert_eq!(transition(DecimalPoint, C::Digit).next, DecimalNumber);
	}

	#[test]
	fn end_accepts_and_flushes() {
		assert_eq!(transition(Number, C::End), t(Accept, E::Number, S::Nothing));
		assert_eq!(transition(Letter, C::End), t(Accept, E::Identifier, S::Nothing));
		assert_eq!(transition(Symbol, C::End), t(Accept, E::Symbol, S::Nothing));
		assert_eq!(transition(Start, C::End).next, Accept);
	}
}
