use std::{fs::read_to_string, io::Write, path::Path};

use anyhow::Context;
use log::{debug, info};

use crate::{
	SayerError,
	interpreter::value::{Object, Value},
};

/// Sayer runs source code through the whole pipeline for a host.
pub struct Sayer;

impl Sayer {
	/// Run a source file, a program ending in an error value is reported as one.
	pub fn run_file<P: AsRef<Path>>(&self, path: P) -> Result<Object, SayerError> {
		let path = path.as_ref();
		info!("running {}", path.display());
		let source = read_to_string(path).with_context(|| format!("Failed open source file {}", path.display()))?;
		let value = self.run(&source)?;
		if let Value::Error(message) = &*value {
			return Err(SayerError::RuntimeError(message.clone()));
		}
		Ok(value)
	}

	/// Run the REPL prompt.
	pub fn run_prompt(&self) {
		let mut input = String::new();
		let stdin = std::io::stdin();
		loop {
			input.clear();
			print!("> ");
			if let Err(e) = std::io::stdout().flush() {
				eprintln!("Failed flush: {e}");
			}
			match stdin.read_line(&mut input) {
				Ok(0) => {
					println!("\nExited sayer repl");
					break;
				}
				Ok(_) => {}
				Err(e) => {
					eprintln!("Failed read line: {e}");
					continue;
				}
			}
			if input.trim().is_empty() {
				continue;
			}
			match self.run(input.trim()) {
				Ok(value) => println!("{value}"),
				Err(e) => eprintln!("{e}"),
			}
		}
	}

	/// Parse and evaluate source code, any parse diagnostic fails the run.
	pub fn run(&self, source: &str) -> Result<Object, SayerError> {
		let (program, diagnostics) = crate::parse(source);
		if !diagnostics.is_empty() {
			return Err(SayerError::ParserErrors(diagnostics));
		}
		debug!("parsed program:\n{program}");
		Ok(crate::evaluate(&program))
	}
}
