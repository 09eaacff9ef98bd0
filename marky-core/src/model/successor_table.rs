use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::random::RandomSource;
use crate::error::ChainError;

/// Successor statistics for a single word of a Markov chain.
///
/// A `WordSuccessorTable` corresponds to one case-folded word (`anchor_word`)
/// and stores every word observed right after it in the source passage,
/// together with how many times it was observed.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations.
///
/// ## Responsibilities:
/// - Accumulate successor occurrences while the chain is built
/// - Pick a successor using weighted random sampling, restricted by an
///   acceptance predicate
///
/// ## Invariants
/// - `total_count` is the sum of every successor count
/// - Each successor count is strictly positive
/// - Successors are kept in the order they were first observed
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WordSuccessorTable {
	/// Word this table is keyed under.
	anchor_word: String,
	/// Sum of all successor counts.
	total_count: usize,
	/// Successors in first-seen order, with their occurrence count.
	/// Example: [("up", 1), ("he", 1)]
	successors: Vec<(String, usize)>,
	/// Position of each successor in `successors`.
	/// Not serialized: rebuilt by `reindex` after decoding.
	#[serde(skip)]
	index: HashMap<String, usize>,
}

impl WordSuccessorTable {
	/// Creates a new empty table for the given word.
	pub fn new(anchor_word: &str) -> Self {
		Self {
			anchor_word: anchor_word.to_owned(),
			total_count: 0,
			successors: Vec::new(),
			index: HashMap::new(),
		}
	}

	/// Records one occurrence of `successor` following the anchor word.
	///
	/// - If the successor is already known, its count is increased.
	/// - Otherwise, it is appended with an initial count of 1.
	pub fn add_observation(&mut self, successor: &str) {
		match self.index.get(successor) {
			Some(&position) => self.successors[position].1 += 1,
			None => {
				self.index.insert(successor.to_owned(), self.successors.len());
				self.successors.push((successor.to_owned(), 1));
			}
		}
		self.total_count += 1;
	}

	/// Rebuilds the successor index of a decoded table and checks its
	/// invariants.
	///
	/// # Errors
	/// Returns `ChainError::InvalidArgument` if a successor is repeated, has a
	/// 0 count, or if `total_count` is not the sum of the counts.
	pub(crate) fn reindex(&mut self) -> Result<(), ChainError> {
		self.index.clear();
		let mut total: usize = 0;
		for (position, (word, count)) in self.successors.iter().enumerate() {
			if *count == 0 {
				return Err(self.corrupted(format!("successor {word:?} has a 0 count")));
			}
			if self.index.insert(word.clone(), position).is_some() {
				return Err(self.corrupted(format!("successor {word:?} is repeated")));
			}
			total = total
				.checked_add(*count)
				.ok_or_else(|| self.corrupted("successor counts overflow".to_owned()))?;
		}
		if total != self.total_count {
			return Err(self.corrupted(format!("total {} but counts sum to {total}", self.total_count)));
		}
		Ok(())
	}

	fn corrupted(&self, reason: String) -> ChainError {
		ChainError::InvalidArgument(format!("successor table of {:?}: {reason}", self.anchor_word))
	}

	/// Picks a successor using weighted random sampling.
	///
	/// Only successors for which `acceptable(anchor_word, successor)` holds
	/// are candidates; they are walked in first-seen order.
	///
	/// The draw spans the weight of *every* successor, not only the accepted
	/// ones. When the predicate rejects heavy successors the remaining weight
	/// falls through to the last accepted candidate, which is returned when
	/// the draw is never exhausted.
	///
	/// Returns `None` if no successor is accepted. No draw is made in that case.
	pub fn sample_successor<R, F>(&self, random_source: &mut R, acceptable: F) -> Option<&str>
	where
		R: RandomSource + ?Sized,
		F: Fn(&str, &str) -> bool,
	{
		let mut candidates = self
			.successors
			.iter()
			.filter(|(word, _)| acceptable(&self.anchor_word, word))
			.peekable();
		candidates.peek()?;

		let mut r = random_source.draw(0, self.total_count + 1);

		let mut chosen = None;
		for (word, count) in candidates {
			chosen = Some(word.as_str());
			if r <= *count {
				break;
			}
			r -= count;
		}
		chosen
	}

	/// Word this table is keyed under.
	pub fn anchor_word(&self) -> &str {
		&self.anchor_word
	}

	/// Sum of all successor counts.
	pub fn total_count(&self) -> usize {
		self.total_count
	}

	/// Number of times `successor` was observed after the anchor word.
	pub fn count(&self, successor: &str) -> usize {
		self.index
			.get(successor)
			.map_or(0, |&position| self.successors[position].1)
	}

	/// Successors with their counts, in first-seen order.
	pub fn successors(&self) -> impl Iterator<Item = (&str, usize)> {
		self.successors.iter().map(|(word, count)| (word.as_str(), *count))
	}

	/// Number of distinct successors.
	pub fn len(&self) -> usize {
		self.successors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.successors.is_empty()
	}
}
