//! # From function text to a root
//!
//! User's input: `3x^2 - sin(x)` and a starting value.
//!
//! ## Lexing
//!
//! A finite-state machine reads the text one character at a time and cuts it
//! into tokens: numbers `3`, `0.5`, the variable `x`, the constants `pi` and
//! `e`, the functions `exp ln sin cos tan`, operators and parentheses. Where
//! two operands touch, as in `3x`, it inserts the multiplication the reader
//! would have meant. A `-` with nothing to its left becomes negation.
//!
//! ## Parsing
//!
//! Tokens go to the parser while the lexer is still running. The parser keeps
//! an operand stack and an operator stack and reduces by precedence and
//! associativity, building the tree directly:
//!
//! ``` markdown
//! - (Subtract)
//! ├── * (Multiply)
//! │   ├── 3 (Number)
//! │   └── ^ (Power)
//! │       ├── x (Variable)
//! │       └── 2 (Number)
//! └── sin (Sin)
//!     └── x (Variable)
//! ```
//!
//! ## Tree passes
//!
//! Constant folding replaces every subtree without `x` by its value,
//! `2^3 * x` becomes `8 * x`. Differentiation builds a second tree by the
//! usual calculus rules, which is folded again since the rules produce a lot
//! of `0 * ...` and `1 * ...`.
//!
//! ## Code generation
//!
//! Both trees are flattened into bytecode, one byte per instruction plus
//! eight bytes per number literal, and run on a small stack machine.
//!
//! ## Newton's method
//!
//! `x_{n+1} = x_n - f(x_n) / f'(x_n)` runs both programs once per step until
//! `|f(x)|` is small enough or the step budget is spent.

pub mod bytecode;
pub mod cli;
pub mod compiler;
mod error;
pub mod expression;
pub mod lexer;
pub mod method;
pub mod operator;
pub mod parser;
mod solver;
pub mod vm;

pub use error::{
	NewtonError,
	cli::ArgumentError,
	lexer::{LexError, LexErrorType},
	math::MathError,
	memory::OutOfMemory,
	method::MethodError,
	parser::{ParserError, SyntaxError},
	vm::VmError,
};
pub use solver::Solver;
