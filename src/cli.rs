use std::{
	ffi::{OsStr, OsString},
	process::ExitCode,
};

use palc::Parser;

use crate::{NewtonError, error::cli::ArgumentError};

#[derive(Parser, Debug)]
#[command(
	name = "newton",
	after_long_help = "Both forms are equally valid: `newton 'x^2-4' 1` or `newton --f 'x^2-4' --g 1 --p`.\nWith exactly two arguments both are taken as they are, so `newton -x^2+4 -1` works."
)]
pub struct Cli {
	/// Function of x whose root is searched
	pub function: Option<String>,
	/// Starting value
	pub guess:    Option<String>,
	/// Function of x, takes precedence over the positional one
	#[arg(long, allow_hyphen_values = true)]
	pub f:        Option<String>,
	/// Starting value, takes precedence over the positional one
	#[arg(long, allow_hyphen_values = true)]
	pub g:        Option<String>,
	/// Print every iteration step
	#[arg(long)]
	pub p:        bool,
}

/// What to solve, taken from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
	pub function: String,
	pub guess:    f64,
	pub print:    bool,
}

impl Cli {
	/// Parses the process arguments, see [`Cli::try_parse_args`].
	pub fn parse_args() -> palc::Result<Self> { Self::try_parse_args(std::env::args_os()) }

	/// `<prog> <function> <guess>` is taken verbatim, so a function or guess
	/// starting with `-` is not mistaken for an option. Everything else goes
	/// through the option parser.
	pub fn try_parse_args<I, T>(args: I) -> palc::Result<Self>
	where
		I: IntoIterator<Item = T>,
		T: Into<OsString> + Clone,
	{
		let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
		if let [_, function, guess] = args.as_slice() {
			if !is_long_option(function) && !is_long_option(guess) {
				return Ok(Self {
					function: Some(function.to_string_lossy().into_owned()),
					guess:    Some(guess.to_string_lossy().into_owned()),
					f:        None,
					g:        None,
					p:        false,
				});
			}
		}
		Self::try_parse_from(args)
	}

	pub fn resolve(self) -> Result<Invocation, ArgumentError> {
		let function = self.f.or(self.function).ok_or(ArgumentError::MissingFunction)?;
		let text = self.g.or(self.guess).ok_or(ArgumentError::MissingGuess)?;
		let guess = text.trim().parse::<f64>().map_err(|_| ArgumentError::InvalidGuess(text))?;
		Ok(Invocation { function, guess, print: self.p })
	}
}

fn is_long_option(arg: &OsStr) -> bool { arg.as_encoded_bytes().starts_with(b"--") }

/// Process exit statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
	Success   = 0,
	Arguments = 1,
	Compiler  = 2,
	Method    = 3,
}

impl From<&NewtonError> for ExitStatus {
	fn from(error: &NewtonError) -> Self {
		match error {
			NewtonError::Method(_) => ExitStatus::Method,
			_ => ExitStatus::Compiler,
		}
	}
}

impl From<ExitStatus> for ExitCode {
	fn from(status: ExitStatus) -> Self { ExitCode::from(status as u8) }
}
