#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use sayer::{Sayer, SayerError, Value};

	fn program(name: &str) -> PathBuf {
		PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("programs").join(name)
	}

	#[test]
	fn arithmetic() {
		let value = Sayer.run_file(program("arithmetic.say")).unwrap();
		assert_eq!(*value, Value::Integer(50));
	}

	#[test]
	fn conditionals() {
		let value = Sayer.run_file(program("conditionals.say")).unwrap();
		assert_eq!(*value, Value::Integer(14));
	}

	#[test]
	fn booleans() {
		let value = Sayer.run_file(program("booleans.say")).unwrap();
		assert_eq!(value.describe(), "true");
	}

	#[test]
	fn declarations_are_not_bound() {
		let result = Sayer.run_file(program("declaration.say"));
		assert!(matches!(result, Err(SayerError::RuntimeError(message)) if message == "Error encountered!"));
	}

	#[test]
	fn division_by_zero() {
		let result = Sayer.run_file(program("division.say"));
		assert!(matches!(result, Err(SayerError::RuntimeError(message)) if message == "division by zero"));
	}

	#[test]
	fn syntax_errors() {
		match Sayer.run_file(program("broken.say")) {
			Err(SayerError::ParserErrors(diagnostics)) => {
				assert_eq!(diagnostics, vec!["line 3: Expected next token to be {, got NUMBER instead"]);
			}
			other => panic!("unexpected result {other:?}"),
		}
	}
}
