use std::path::Path;

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::markov_chain::{MarkovChain, WordTree};
use crate::error::ChainError;
use crate::io::{read_passage, tree_cache_path};
use crate::text::{Tokenizer, fix_passage_punctuation};

/// Parameters used to turn a source file into a `MarkovChain`.
///
/// # Responsibilities
/// - Track the pairing step (validated, never 0)
/// - Track the random seed, punctuation cleanup and binary cache options
/// - Run the file → tokens → word tree → chain pipeline
pub struct ChainInput {
	/// Pairing step; see `WordTree::build`.
	step: isize,

	/// Seed of the chain's random source. `None` seeds from the OS.
	pub seed: Option<u64>,

	/// Strip punctuation left on the end of words before building.
	pub fix_punctuation: bool,

	/// Reuse (and write) a `<stem>.step<step>.bin` word tree next to the source
	/// (`<stem>.step<step>.raw.bin` when `fix_punctuation` is off).
	pub use_cache: bool,
}

impl ChainInput {
	/// Creates an input for the given step with default options.
	///
	/// # Errors
	/// Returns `ChainError::InvalidArgument` if `step` is 0.
	pub fn new(step: isize) -> Result<Self, ChainError> {
		let mut input = Self { step: 1, seed: None, fix_punctuation: true, use_cache: false };
		input.set_step(step)?;
		Ok(input)
	}

	pub fn step(&self) -> isize {
		self.step
	}

	/// Sets the pairing step.
	///
	/// # Errors
	/// Returns an error if `step` is 0.
	pub fn set_step(&mut self, step: isize) -> Result<(), ChainError> {
		if step == 0 {
			return Err(ChainError::InvalidArgument("step must not be 0".to_owned()));
		}
		self.step = step;
		Ok(())
	}

	/// Tokenizes a passage and builds its word tree.
	pub fn build_tree<T: Tokenizer + ?Sized>(&self, passage: &str, tokenizer: &T) -> Result<WordTree, ChainError> {
		let mut tokens = tokenizer.tokenize(passage)?;
		if self.fix_punctuation {
			tokens = fix_passage_punctuation(&tokens);
		}
		WordTree::build(self.step, &tokens)
	}

	/// Loads the word tree of a source file.
	///
	/// # Behavior
	/// - With `use_cache`, an existing cache next to the source is loaded
	///   instead of reading the source. The cache name carries the step and
	///   the punctuation option, so trees built with other options are never
	///   reused.
	/// - Otherwise the source is read, tokenized and built; with `use_cache`
	///   the result is then written for the next run.
	pub fn load_tree<P, T>(&self, source: P, tokenizer: &T) -> Result<WordTree, ChainError>
	where
		P: AsRef<Path>,
		T: Tokenizer + ?Sized,
	{
		let cache_path = tree_cache_path(&source, self.step, !self.fix_punctuation)?;
		if self.use_cache && cache_path.exists() {
			let tree = WordTree::load(&cache_path)?;
			if tree.step() == self.step {
				return Ok(tree);
			}
			debug!("ignoring {}: built with step {}", cache_path.display(), tree.step());
		}

		let passage = read_passage(&source)?;
		let tree = self.build_tree(&passage, tokenizer)?;
		if self.use_cache {
			tree.save(&cache_path)?;
		}
		Ok(tree)
	}

	/// Wraps a word tree into a chain using this input's seed.
	pub fn make_chain(&self, tree: WordTree) -> MarkovChain<StdRng> {
		let rng = match self.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		};
		MarkovChain::from_tree(tree, rng)
	}

	/// Reads a source file and returns a ready-to-use chain.
	pub fn build_chain<P, T>(&self, source: P, tokenizer: &T) -> Result<MarkovChain<StdRng>, ChainError>
	where
		P: AsRef<Path>,
		T: Tokenizer + ?Sized,
	{
		Ok(self.make_chain(self.load_tree(source, tokenizer)?))
	}
}
