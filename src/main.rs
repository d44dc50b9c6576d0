use std::process::ExitCode;

use clap::Parser;
use sayer::cli::*;

fn main() -> ExitCode {
	let cli = Cli::parse();
	if let Err(e) = sayer::logger::init(cli.log_level()) {
		eprintln!("Failed init logger: {e}");
	}

	let sayer = sayer::Sayer;
	match cli.mode {
		Mode::File { path } => match sayer.run_file(&path) {
			Ok(value) => println!("{value}"),
			Err(e) => {
				eprintln!("Failed run file: {e}");
				return ExitCode::FAILURE;
			}
		},
		Mode::Repl => sayer.run_prompt(),
	}
	ExitCode::SUCCESS
}
