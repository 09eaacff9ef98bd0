use std::io;

use thiserror::Error;

/// Errors raised while building, persisting or composing Markov chains.
///
/// Running out of words or failing to find a rhyme are not errors: those
/// outcomes are reported as `None` by the generation functions.
#[derive(Debug, Error)]
pub enum ChainError {
	/// A parameter is outside its valid domain (ex. a zero step).
	#[error("invalid argument: {0}")]
	InvalidArgument(String),

	/// An external prerequisite (tokenizer data, pronouncing dictionary) is missing.
	#[error("dependency unavailable: {0}")]
	DependencyUnavailable(String),

	#[error("i/o error: {0}")]
	Io(#[from] io::Error),

	/// A cached word tree could not be encoded or decoded.
	#[error("serialization error: {0}")]
	Serialization(#[from] postcard::Error),
}
