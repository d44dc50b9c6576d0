pub mod parser;

/// SayerError is the top-level error type for hosts running source code.
#[derive(thiserror::Error, Debug)]
pub enum SayerError {
	/// Internal or I/O failure around the pipeline
	#[error("SayerInternalError: {0}")]
	InternalError(#[from] anyhow::Error),
	/// Diagnostics collected while parsing, in source order
	#[error("Parser errors:\n{}", .0.join("\n"))]
	ParserErrors(Vec<String>),
	/// The program evaluated to an error value
	#[error("Runtime error: {0}")]
	RuntimeError(String),
}
