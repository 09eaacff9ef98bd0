use std::fmt;

use log::{debug, warn};

use super::rhyme::RhymeOracle;
use crate::error::ChainError;
use crate::model::markov_chain::{MarkovChain, take};
use crate::model::random::RandomSource;

/// Parameters of couplet generation.
pub struct CoupletInput {
	/// Number of words on each line (>= 1).
	words_per_line: usize,

	/// Number of attempts before `compose_couplet` gives up.
	pub nb_try: usize,
}

impl CoupletInput {
	/// Creates an input with the default number of attempts.
	///
	/// # Errors
	/// Returns `ChainError::InvalidArgument` if `words_per_line` is 0.
	pub fn new(words_per_line: usize) -> Result<Self, ChainError> {
		let mut input = Self { words_per_line: 1, nb_try: 1000 };
		input.set_words_per_line(words_per_line)?;
		Ok(input)
	}

	pub fn words_per_line(&self) -> usize {
		self.words_per_line
	}

	pub fn set_words_per_line(&mut self, words_per_line: usize) -> Result<(), ChainError> {
		if words_per_line == 0 {
			return Err(ChainError::InvalidArgument("a line needs at least one word".to_owned()));
		}
		self.words_per_line = words_per_line;
		Ok(())
	}
}

/// Two lines whose last words rhyme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Couplet {
	pub first_line: Vec<String>,
	pub second_line: Vec<String>,
}

impl fmt::Display for Couplet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "{}", self.first_line.join(" "))?;
		write!(f, "{}", self.second_line.join(" "))
	}
}

/// Tries once to write a couplet.
///
/// # Behavior
/// - The first line is read from `forward`.
/// - `backward` (a chain built with a negative step) is restarted and asked
///   for a word rhyming with the end of the first line, then continues
///   backwards from it. The result is reversed so the rhyme ends the line.
/// - On success `forward` is moved to the rhyming word, so the next couplet
///   follows on from this one.
///
/// Cursors are only handed from `backward` to `forward`. The last word of the
/// first line is never used as `backward`'s cursor: the rhyme is drawn with no
/// previous word, among every word `backward` knows.
///
/// Returns `None` if the first line is empty or nothing rhymes with it; the
/// caller is expected to try again.
pub fn make_couplet<F, B, O>(
	words_per_line: usize,
	forward: &mut MarkovChain<F>,
	backward: &mut MarkovChain<B>,
	oracle: &O,
) -> Option<Couplet>
where
	F: RandomSource,
	B: RandomSource,
	O: RhymeOracle + ?Sized,
{
	let first_line = take(&mut *forward, words_per_line);
	let last_word = first_line.last()?;

	backward.reset(None);
	let rhymed = backward.get_word_with(|_, candidate| oracle.rhymes(last_word, candidate))?;

	let mut second_line = take(&mut *backward, words_per_line - 1);
	second_line.reverse();
	forward.reset(Some(rhymed.as_str()));
	second_line.push(rhymed);

	Some(Couplet { first_line, second_line })
}

/// Writes a couplet, retrying up to `input.nb_try` times.
///
/// Running out of attempts is not an error: `None` is returned and the
/// chains are left wherever the last attempt moved them.
pub fn compose_couplet<F, B, O>(
	input: &CoupletInput,
	forward: &mut MarkovChain<F>,
	backward: &mut MarkovChain<B>,
	oracle: &O,
) -> Option<Couplet>
where
	F: RandomSource,
	B: RandomSource,
	O: RhymeOracle + ?Sized,
{
	for attempt in 1..=input.nb_try {
		if let Some(couplet) = make_couplet(input.words_per_line, forward, backward, oracle) {
			debug!("couplet found after {attempt} attempt(s)");
			return Some(couplet);
		}
	}
	warn!("no couplet found after {} attempts", input.nb_try);
	None
}
