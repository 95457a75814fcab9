use crate::{NewtonError, compiler::{self, Program}, method::{self, MethodConfig}};

/// Solver is the entry point: compile a function, then run Newton's method on it.
#[derive(Debug, Default)]
pub struct Solver {
	config: MethodConfig,
}

impl Solver {
	pub fn new(config: MethodConfig) -> Self { Self { config } }

	pub fn compile(&self, source: &str) -> Result<Program, NewtonError> { compiler::compile(source) }

	/// Searches a root of an already compiled program. With `print` every
	/// step goes to stdout.
	pub fn solve(&self, program: &Program, guess: f64, print: bool) -> Result<f64, NewtonError> {
		let root = method::iterate(&program.function, &program.derivative, guess, &self.config, |step| {
			if print {
				println!("{step}");
			}
		})?;
		Ok(root)
	}

	/// Compile and solve in one go.
	pub fn run(&self, source: &str, guess: f64, print: bool) -> Result<f64, NewtonError> {
		let program = self.compile(source)?;
		self.solve(&program, guess, print)
	}
}
