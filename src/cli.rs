use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "sayer", version, after_long_help = "Lexes, parses and evaluates say programs.")]
pub struct Cli {
	/// Log parser and evaluator activity
	#[arg(short, long, global = true)]
	pub verbose: bool,
	#[command(subcommand)]
	pub mode:    Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
	/// Input file
	File { path: PathBuf },
	/// Input prompt
	Repl,
}

impl Cli {
	pub fn log_level(&self) -> LevelFilter { if self.verbose { LevelFilter::Debug } else { LevelFilter::Warn } }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse_file_mode() {
		let cli = Cli::try_parse_from(["sayer", "file", "program.say"]).unwrap();
		assert!(matches!(cli.mode, Mode::File { ref path } if path == &PathBuf::from("program.say")));
		assert_eq!(cli.log_level(), LevelFilter::Warn);
	}

	#[test]
	fn parse_verbose_repl() {
		let cli = Cli::try_parse_from(["sayer", "repl", "--verbose"]).unwrap();
		assert!(matches!(cli.mode, Mode::Repl));
		assert_eq!(cli.log_level(), LevelFilter::Debug);
	}

	#[test]
	fn reject_missing_mode() {
		assert!(Cli::try_parse_from(["sayer"]).is_err());
	}
}
