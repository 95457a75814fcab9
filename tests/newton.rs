#[cfg(test)]
mod tests {
	use newton::{
		MathError, MethodError, NewtonError, Solver, SyntaxError, VmError,
		bytecode::compile,
		compiler::{self, parse},
		method::MethodConfig,
		vm::VirtualMachine,
	};

	fn init() { let _ = env_logger::builder().is_test(true).try_init(); }

	#[test]
	fn test_square_root_of_four() {
		init();
		let root = Solver::default().run("x^2-4", 1.0, false).unwrap();
		assert!((root - 2.0).abs() < 1e-6);
	}

	#[test]
	fn test_bracket_forms_and_implicit_multiplication() {
		init();
		let solver = Solver::default();
		let a = solver.run("[x-1](x+3)", 0.5, false).unwrap();
		let b = solver.run("(x-1)*(x+3)", 0.5, false).unwrap();
		assert_eq!(a, b);
		assert!((a - 1.0).abs() < 1e-6);
		assert_eq!(parse("3x").unwrap(), parse("3*x").unwrap());
	}

	#[test]
	fn test_transcendental_roots() {
		init();
		let solver = Solver::default();
		let root = solver.run("exp(x) - 2", 0.0, false).unwrap();
		assert!((root - 2f64.ln()).abs() < 1e-6);
		let root = solver.run("ln(x) - 1", 2.0, false).unwrap();
		assert!((root - std::f64::consts::E).abs() < 1e-6);
		let root = solver.run("tan(x) - 1", 0.5, false).unwrap();
		assert!((root - std::f64::consts::FRAC_PI_4).abs() < 1e-6);
	}

	#[test]
	fn test_tree_and_machine_agree() {
		init();
		for source in ["2+3*4", "2^3^2", "-x^2 + 3x", "sin(x)^2 + cos(x)^2", "x/(1+x^2)", "e^x - pi"] {
			let program = compiler::compile(source).unwrap();
			let mut machine = VirtualMachine::new();
			for x in [-1.5, 0.25, 2.0] {
				machine.set_register(x);
				machine.load(&program.function);
				let function = machine.execute().unwrap();
				machine.load(&program.derivative);
				let derivative = machine.execute().unwrap();
				assert!((function - program.function_tree.evaluate(x).unwrap()).abs() < 1e-12, "{source} at {x}");
				assert!((derivative - program.derivative_tree.evaluate(x).unwrap()).abs() < 1e-12, "{source}' at {x}");
			}
		}
	}

	#[test]
	fn test_constant_expressions_compile_to_one_literal() {
		init();
		let tree = parse("2+3*4").unwrap();
		assert_eq!(tree.evaluate(123.0).unwrap(), 14.0);
		let program = compiler::compile("2+3*4").unwrap();
		assert_eq!(program.function.len(), 9);
		assert_eq!(program.derivative_tree.to_string(), "0");
		assert_eq!(compile(&tree).unwrap().len(), 2 + 3 * 9);
	}

	#[test]
	fn test_unmatched_parenthesis() {
		init();
		let result = Solver::default().run("(2+3", 1.0, false);
		assert!(matches!(result, Err(NewtonError::Syntax(SyntaxError::UnmatchedOpeningParenthesis(_)))));
	}

	#[test]
	fn test_division_by_zero_at_guess() {
		init();
		let result = Solver::default().run("1/x", 0.0, false);
		assert!(matches!(result, Err(NewtonError::Method(MethodError::Machine(VmError::Math(MathError::DivisionByZero))))));
		let message = result.unwrap_err().to_string();
		assert!(message.contains("Try another guess value"), "{message}");
	}

	#[test]
	fn test_gives_up_without_a_real_root() {
		init();
		let solver = Solver::new(MethodConfig { max_iterations: 20, ..MethodConfig::default() });
		let result = solver.run("x^2 + 1", 0.5, false);
		assert!(matches!(result, Err(NewtonError::Method(MethodError::NotConverged { iterations: 20, .. }))));
	}
}
