use std::collections::BTreeMap;
use std::path::Path;

use log::{debug, info, trace};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use super::random::RandomSource;
use super::successor_table::WordSuccessorTable;
use crate::error::ChainError;
use crate::text::is_punctuation;

/// Word-adjacency table of a Markov chain.
///
/// Maps every case-folded word to the words observed `|step|` tokens after
/// it (or before it, for a negative step).
///
/// # Invariants
/// - `step` is never 0
/// - Every key is a non-punctuation word that was paired with at least one
///   non-punctuation successor
/// - Keys iterate in sorted order, so uniform draws over them are
///   reproducible for a given random source
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WordTree {
	/// Signed pairing distance: magnitude is the number of tokens between
	/// a word and its successor, sign is the reading direction.
	step: isize,

	/// Mapping from a word to its successor statistics.
	tables: BTreeMap<String, WordSuccessorTable>,
}

impl WordTree {
	/// Builds the adjacency table from a token sequence.
	///
	/// - A negative `step` reads the tokens backwards (the slice itself is
	///   left untouched).
	/// - `tokens[i]` is paired with `tokens[i + |step|]`, both lowercased.
	/// - Pairs where either side is punctuation are skipped.
	///
	/// # Errors
	/// Returns `ChainError::InvalidArgument` if `step` is 0.
	pub fn build<S: AsRef<str>>(step: isize, tokens: &[S]) -> Result<Self, ChainError> {
		if step == 0 {
			return Err(ChainError::InvalidArgument("step must not be 0".to_owned()));
		}

		let mut words: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();
		if step < 0 {
			words.reverse();
		}

		let mut tables: BTreeMap<String, WordSuccessorTable> = BTreeMap::new();
		let distance = step.unsigned_abs();
		for (word, next) in words.iter().zip(words.iter().skip(distance)) {
			let word = word.to_lowercase();
			let next = next.to_lowercase();
			if is_punctuation(&word) || is_punctuation(&next) {
				continue;
			}
			tables
				.entry(word)
				.or_insert_with_key(|key| WordSuccessorTable::new(key))
				.add_observation(&next);
		}

		debug!("built word tree: {} words from {} tokens (step {})", tables.len(), words.len(), step);
		Ok(Self { step, tables })
	}

	/// Loads a word tree previously written by `save`.
	///
	/// # Errors
	/// - `ChainError::Serialization` if the file does not decode.
	/// - `ChainError::InvalidArgument` if it decodes into an inconsistent
	///   tree (0 step, misfiled table, counts out of sync).
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ChainError> {
		let bytes = std::fs::read(&path)?;
		let mut tree: Self = postcard::from_bytes(&bytes)?;
		if tree.step == 0 {
			return Err(ChainError::InvalidArgument(format!(
				"cached word tree {} has a 0 step",
				path.as_ref().display()
			)));
		}
		for (word, table) in &mut tree.tables {
			if table.anchor_word() != word {
				return Err(ChainError::InvalidArgument(format!(
					"cached word tree {} files {:?} under {word:?}",
					path.as_ref().display(),
					table.anchor_word()
				)));
			}
			table.reindex()?;
		}
		info!("loaded word tree from {}", path.as_ref().display());
		Ok(tree)
	}

	/// Serializes the word tree with `postcard` for fast reloading.
	pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ChainError> {
		let bytes = postcard::to_stdvec(self)?;
		std::fs::write(&path, bytes)?;
		info!("saved word tree to {}", path.as_ref().display());
		Ok(())
	}

	pub fn step(&self) -> isize {
		self.step
	}

	/// Successor table of `word`, if it was ever seen as a predecessor.
	pub fn get(&self, word: &str) -> Option<&WordSuccessorTable> {
		self.tables.get(word)
	}

	pub fn contains(&self, word: &str) -> bool {
		self.tables.contains_key(word)
	}

	/// Every known word, in sorted order.
	pub fn words(&self) -> impl Iterator<Item = &str> {
		self.tables.keys().map(String::as_str)
	}

	/// Every successor table, in the same order as `words`.
	pub fn tables(&self) -> impl Iterator<Item = &WordSuccessorTable> {
		self.tables.values()
	}

	pub fn len(&self) -> usize {
		self.tables.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tables.is_empty()
	}
}

/// A first-order Markov chain over words.
///
/// Holds an immutable `WordTree`, a cursor on the last produced word and the
/// random source used for every choice. The chain is also an infinite
/// `Iterator` over words; iterating shares the cursor with `get_word`.
///
/// # Example
/// ```
/// use marky_core::model::markov_chain::{take, MarkovChain};
///
/// let words = ["The", "Sun", "came", "up", "upon", "the", "left"];
/// let mut chain = MarkovChain::seeded(1, &words, 42)?;
/// chain.reset(Some("came"));
/// assert_eq!(chain.get_word().as_deref(), Some("up"));
/// assert_eq!(take(&mut chain, 3).len(), 3);
/// # Ok::<(), marky_core::error::ChainError>(())
/// ```
#[derive(Debug)]
pub struct MarkovChain<R = StdRng> {
	tree: WordTree,
	/// Last word returned by `get_word`.
	current_word: Option<String>,
	random_source: R,
}

impl MarkovChain<StdRng> {
	/// Builds a chain drawing from an OS-seeded `StdRng`.
	pub fn new<S: AsRef<str>>(step: isize, tokens: &[S]) -> Result<Self, ChainError> {
		Self::with_random_source(step, tokens, StdRng::from_os_rng())
	}

	/// Builds a chain whose output is fully determined by `seed`.
	pub fn seeded<S: AsRef<str>>(step: isize, tokens: &[S], seed: u64) -> Result<Self, ChainError> {
		Self::with_random_source(step, tokens, StdRng::seed_from_u64(seed))
	}
}

impl<R: RandomSource> MarkovChain<R> {
	/// Builds a chain drawing from the given random source.
	///
	/// # Errors
	/// Returns `ChainError::InvalidArgument` if `step` is 0.
	pub fn with_random_source<S: AsRef<str>>(
		step: isize,
		tokens: &[S],
		random_source: R,
	) -> Result<Self, ChainError> {
		Ok(Self::from_tree(WordTree::build(step, tokens)?, random_source))
	}

	/// Wraps an already built (or loaded) word tree.
	pub fn from_tree(tree: WordTree, random_source: R) -> Self {
		Self { tree, current_word: None, random_source }
	}

	pub fn tree(&self) -> &WordTree {
		&self.tree
	}

	pub fn step(&self) -> isize {
		self.tree.step()
	}

	/// Last word produced, or the word given to `reset`.
	pub fn current_word(&self) -> Option<&str> {
		self.current_word.as_deref()
	}

	/// Moves the cursor as if `start_at` had just been produced.
	///
	/// `None` restarts the chain: the next word is drawn uniformly. A word
	/// produced by another chain can be passed to continue from it.
	pub fn reset(&mut self, start_at: Option<&str>) {
		self.current_word = start_at.map(str::to_owned);
	}

	/// Produces the next word, accepting any candidate.
	pub fn get_word(&mut self) -> Option<String> {
		self.get_word_with(|_, _| true)
	}

	/// Produces the next word among the candidates accepted by `acceptable`.
	///
	/// # Behavior
	/// - If the cursor is a known word, a successor is sampled from its table.
	///   The predicate is called as `acceptable(Some(cursor), candidate)`.
	/// - If the cursor is unset or unknown, or no successor was accepted, a
	///   word is picked uniformly among every known word for which
	///   `acceptable(None, word)` holds.
	/// - If nothing is accepted the cursor is cleared and `None` is returned.
	///
	/// The returned word becomes the new cursor.
	pub fn get_word_with<F>(&mut self, acceptable: F) -> Option<String>
	where
		F: Fn(Option<&str>, &str) -> bool,
	{
		let sampled = self
			.current_word
			.as_deref()
			.and_then(|word| self.tree.tables.get(word))
			.and_then(|table| {
				table.sample_successor(&mut self.random_source, |previous, candidate| {
					acceptable(Some(previous), candidate)
				})
			})
			.map(str::to_owned);

		self.current_word = match sampled {
			Some(word) => Some(word),
			None => self.random_accepted_word(&acceptable),
		};
		self.current_word.clone()
	}

	/// Picks uniformly among the known words accepted with no previous word.
	fn random_accepted_word<F>(&mut self, acceptable: &F) -> Option<String>
	where
		F: Fn(Option<&str>, &str) -> bool,
	{
		let accepted: Vec<&str> = self.tree.words().filter(|word| acceptable(None, word)).collect();
		if accepted.is_empty() {
			trace!("no word accepted out of {}", self.tree.len());
			return None;
		}
		let word = accepted[self.random_source.draw(0, accepted.len())];
		trace!("fell back to {word:?} out of {} accepted words", accepted.len());
		Some(word.to_owned())
	}
}

impl<R: RandomSource> Iterator for MarkovChain<R> {
	type Item = String;

	/// Same as `get_word`. Ends only when the chain knows no word at all.
	fn next(&mut self) -> Option<String> {
		self.get_word()
	}
}

/// Takes at most `n` items from an iterator, in production order.
///
/// `take(&mut chain, 100)` generates 100 words and leaves the chain usable.
pub fn take<I: Iterator>(iterable: I, n: usize) -> Vec<I::Item> {
	iterable.take(n).collect()
}
