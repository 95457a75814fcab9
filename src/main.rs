use std::process::ExitCode;

use env_logger::Env;
use newton::{Solver, cli::*};

fn main() -> ExitCode {
	env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

	let cli = match Cli::parse_args() {
		Ok(cli) => cli,
		Err(e) => {
			eprintln!("{e}");
			return ExitStatus::Arguments.into();
		}
	};
	let invocation = match cli.resolve() {
		Ok(invocation) => invocation,
		Err(e) => {
			eprintln!("Error: invalid arguments, {e}. See `newton --help`.");
			return ExitStatus::Arguments.into();
		}
	};

	let solver = Solver::default();
	match solver.run(&invocation.function, invocation.guess, invocation.print) {
		Ok(root) => {
			println!("The root of '{}' with starting value {:.6} is: {root:.6}.", invocation.function, invocation.guess);
			ExitStatus::Success.into()
		}
		Err(e) => {
			eprintln!("Error: {e}");
			ExitStatus::from(&e).into()
		}
	}
}
